//! Patterns - the distributions and staged initializers for a kind of person
//!
//! A pattern is assembled from an ordered list of trait tags. Each trait
//! mutates a `PatternBuilder`, so later tags override earlier ones.

use std::fmt;

use rand::RngCore;
use serde::{Deserialize, Serialize};

use crate::core::error::{CalliopeError, Result};
use crate::distribution::Distribution;
use crate::entity::Person;

/// Index of a pattern inside its population
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PatternKey(pub usize);

/// Attribute groups, in generation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Identity,
    Body,
    Mind,
    Family,
    Social,
}

impl Stage {
    pub const ALL: [Stage; 5] = [
        Stage::Identity,
        Stage::Body,
        Stage::Mind,
        Stage::Family,
        Stage::Social,
    ];

    /// Group that must exist before this one can be generated
    pub fn prerequisite(self) -> Option<Stage> {
        match self {
            Stage::Identity | Stage::Body => None,
            Stage::Mind => Some(Stage::Body),
            Stage::Family => Some(Stage::Mind),
            Stage::Social => Some(Stage::Family),
        }
    }

    /// Whether generating this stage also generates `other`
    pub fn includes(self, other: Stage) -> bool {
        let mut current = Some(self);
        while let Some(stage) = current {
            if stage == other {
                return true;
            }
            current = stage.prerequisite();
        }
        false
    }

    pub fn name(self) -> &'static str {
        match self {
            Stage::Identity => "identity",
            Stage::Body => "body",
            Stage::Mind => "mind",
            Stage::Family => "family",
            Stage::Social => "social",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub type InitializerFn = fn(&mut Person, &Pattern, &mut dyn RngCore);

/// A named hook that fills in one attribute group
#[derive(Clone, Copy)]
pub struct Initializer {
    pub stage: Stage,
    pub name: &'static str,
    pub run: InitializerFn,
}

impl fmt::Debug for Initializer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Initializer")
            .field("stage", &self.stage)
            .field("name", &self.name)
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct Distributions {
    pub ages: Distribution,
    pub heights: Distribution,
    pub densities: Distribution,
    pub iqs: Distribution,
    pub skin_lums: Distribution,
    pub skin_hues: Distribution,
    pub brown_hair_lums: Distribution,
    pub grey_hair_sats: Distribution,
    pub red_hair_lums: Distribution,
    pub red_hair_sats: Distribution,
    pub red_hair_hues: Distribution,
    pub education_tiers: Distribution,
    pub family_class: Distribution,
}

/// Hair and aging parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Appearance {
    /// Skin lightness above which red hair becomes possible
    pub red_threshold: f64,
    pub red_chance: f64,
    /// Age at which hair may start to grey
    pub aging_start: f64,
    /// Age past which hair is always grey
    pub aging_end: f64,
    pub can_grey: bool,
}

impl Default for Appearance {
    fn default() -> Self {
        Self {
            red_threshold: 0.8,
            red_chance: 0.5,
            aging_start: 30.0,
            aging_end: 60.0,
            can_grey: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameBank {
    pub first: Vec<String>,
    pub last: Vec<String>,
}

impl NameBank {
    pub fn new(first: &[&str], last: &[&str]) -> Self {
        Self {
            first: first.iter().map(|s| s.to_string()).collect(),
            last: last.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.first.is_empty() || self.last.is_empty()
    }
}

/// Per-cohort replacements for the most commonly tuned distributions
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DistributionOverrides {
    pub ages: Option<Distribution>,
    pub heights: Option<Distribution>,
    pub densities: Option<Distribution>,
    pub iqs: Option<Distribution>,
    pub skin_lums: Option<Distribution>,
    pub family_class: Option<Distribution>,
}

impl DistributionOverrides {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Debug, Clone)]
pub struct Pattern {
    pub tags: Vec<String>,
    pub distributions: Distributions,
    pub appearance: Appearance,
    pub names: NameBank,
    initializers: Vec<Initializer>,
}

impl Pattern {
    pub fn initializers(&self) -> &[Initializer] {
        &self.initializers
    }

    pub fn initializers_for(&self, stage: Stage) -> impl Iterator<Item = &Initializer> {
        self.initializers.iter().filter(move |init| init.stage == stage)
    }

    pub fn has_stage(&self, stage: Stage) -> bool {
        self.initializers.iter().any(|init| init.stage == stage)
    }

    pub fn label(&self) -> String {
        self.tags.join("+")
    }
}

#[derive(Debug, Clone, Default)]
pub struct PatternBuilder {
    pub tags: Vec<String>,
    pub ages: Option<Distribution>,
    pub heights: Option<Distribution>,
    pub densities: Option<Distribution>,
    pub iqs: Option<Distribution>,
    pub skin_lums: Option<Distribution>,
    pub skin_hues: Option<Distribution>,
    pub brown_hair_lums: Option<Distribution>,
    pub grey_hair_sats: Option<Distribution>,
    pub red_hair_lums: Option<Distribution>,
    pub red_hair_sats: Option<Distribution>,
    pub red_hair_hues: Option<Distribution>,
    pub education_tiers: Option<Distribution>,
    pub family_class: Option<Distribution>,
    pub appearance: Appearance,
    pub names: NameBank,
    initializers: Vec<Initializer>,
}

impl PatternBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an initializer; a repeated stage and name pair is ignored
    pub fn add_initializer(&mut self, stage: Stage, name: &'static str, run: InitializerFn) {
        if self
            .initializers
            .iter()
            .any(|init| init.stage == stage && init.name == name)
        {
            return;
        }
        self.initializers.push(Initializer { stage, name, run });
    }

    pub fn apply_overrides(&mut self, overrides: &DistributionOverrides) {
        let slots = [
            (&overrides.ages, &mut self.ages),
            (&overrides.heights, &mut self.heights),
            (&overrides.densities, &mut self.densities),
            (&overrides.iqs, &mut self.iqs),
            (&overrides.skin_lums, &mut self.skin_lums),
            (&overrides.family_class, &mut self.family_class),
        ];
        for (replacement, slot) in slots {
            if let Some(dist) = replacement {
                *slot = Some(dist.clone());
            }
        }
    }

    pub fn build(self) -> Result<Pattern> {
        fn take(slot: Option<Distribution>, name: &'static str) -> Result<Distribution> {
            slot.ok_or(CalliopeError::MissingDistribution(name))
        }

        let distributions = Distributions {
            ages: take(self.ages, "ages")?,
            heights: take(self.heights, "heights")?,
            densities: take(self.densities, "densities")?,
            iqs: take(self.iqs, "iqs")?,
            skin_lums: take(self.skin_lums, "skin_lums")?,
            skin_hues: take(self.skin_hues, "skin_hues")?,
            brown_hair_lums: take(self.brown_hair_lums, "brown_hair_lums")?,
            grey_hair_sats: take(self.grey_hair_sats, "grey_hair_sats")?,
            red_hair_lums: take(self.red_hair_lums, "red_hair_lums")?,
            red_hair_sats: take(self.red_hair_sats, "red_hair_sats")?,
            red_hair_hues: take(self.red_hair_hues, "red_hair_hues")?,
            education_tiers: take(self.education_tiers, "education_tiers")?,
            family_class: take(self.family_class, "family_class")?,
        };

        Ok(Pattern {
            tags: self.tags,
            distributions,
            appearance: self.appearance,
            names: self.names,
            initializers: self.initializers,
        })
    }
}
