//! Population maker - resolves cohorts to cached patterns and creates people

use rand::RngCore;

use crate::core::config::CohortConfig;
use crate::core::error::{CalliopeError, Result};
use crate::core::types::PersonId;
use crate::entity::{Person, Population};

use super::pattern::{DistributionOverrides, PatternBuilder, PatternKey, Stage};
use super::traits::TraitRegistry;
use super::populate;

/// Cache key for a tag list plus overrides
pub fn cache_key(tags: &[String], overrides: &DistributionOverrides) -> Result<String> {
    let mut key = tags.join(",");
    if !overrides.is_empty() {
        key.push('|');
        key.push_str(&serde_json::to_string(overrides)?);
    }
    Ok(key)
}

#[derive(Debug, Clone, Default)]
pub struct PopulationMaker {
    registry: TraitRegistry,
}

impl PopulationMaker {
    pub fn new(registry: TraitRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &TraitRegistry {
        &self.registry
    }

    /// Look up or assemble the pattern for a tag list
    ///
    /// Patterns are cached on the population so every cohort with the same
    /// tags and overrides shares one pattern.
    pub fn resolve_pattern(
        &self,
        population: &mut Population,
        tags: &[String],
        overrides: &DistributionOverrides,
    ) -> Result<PatternKey> {
        let key = cache_key(tags, overrides)?;
        if let Some(cached) = population.cached_pattern(&key) {
            return Ok(cached);
        }

        if let Some(unknown) = tags.iter().find(|tag| !self.registry.contains(tag)) {
            return Err(CalliopeError::InvalidConfig(format!(
                "unknown trait '{}'",
                unknown
            )));
        }

        let mut builder = PatternBuilder::new();
        for tag in tags {
            self.registry.apply(tag, &mut builder);
        }
        builder.apply_overrides(overrides);
        let pattern = builder.build()?;

        tracing::debug!("built pattern '{}'", pattern.label());
        Ok(population.insert_pattern(key, pattern))
    }

    /// Create `cohort.count` people and run the requested stages on each
    pub fn create(
        &self,
        population: &mut Population,
        cohort: &CohortConfig,
        stages: &[Stage],
        rng: &mut dyn RngCore,
    ) -> Result<Vec<PersonId>> {
        let key = self.resolve_pattern(population, &cohort.tags, &cohort.overrides)?;
        let ids: Vec<PersonId> = (0..cohort.count).map(|_| population.allocate_id()).collect();

        let pattern = population
            .pattern(key)
            .ok_or_else(|| CalliopeError::InvalidConfig(format!("pattern {:?} missing", key)))?;
        let people: Vec<Person> = ids
            .iter()
            .map(|&id| {
                let mut person = Person::new(id, key);
                populate(&mut person, pattern, stages, rng);
                person
            })
            .collect();

        for person in people {
            population.push(person);
        }

        tracing::info!(
            "Created {} people from pattern '{}'",
            ids.len(),
            cohort.tags.join("+")
        );
        Ok(ids)
    }

    /// Build a fresh population from a list of cohorts
    pub fn create_population(
        &self,
        cohorts: &[CohortConfig],
        stages: &[Stage],
        rng: &mut dyn RngCore,
    ) -> Result<Population> {
        let mut population = Population::new();
        for cohort in cohorts {
            self.create(&mut population, cohort, stages, rng)?;
        }
        Ok(population)
    }
}
