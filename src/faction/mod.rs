//! Political factions - density clusters in the political disk

pub mod dbscan;
pub mod summary;

pub use dbscan::Dbscan;
pub use summary::{summarize_factions, FactionReport, FactionSummary};

use serde::{Deserialize, Serialize};

use crate::core::types::ClusterLabel;
use crate::entity::Population;
use crate::social::distance::{political_distance, DistanceConfig};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FactionConfig {
    /// Neighborhood radius in scaled political distance
    pub epsilon: f64,
    /// Neighbors (self included) needed for a core point
    pub min_pts: usize,
    /// Population size at which neighborhoods are computed in parallel
    pub parallel_threshold: usize,
}

impl Default for FactionConfig {
    fn default() -> Self {
        Self {
            epsilon: 1.4,
            min_pts: 4,
            parallel_threshold: 1000,
        }
    }
}

impl FactionConfig {
    pub fn validate(&self) -> Result<(), String> {
        if !(self.epsilon > 0.0 && self.epsilon.is_finite()) {
            return Err(format!("epsilon ({}) must be positive", self.epsilon));
        }
        if self.min_pts == 0 {
            return Err("min_pts must be at least 1".into());
        }
        Ok(())
    }
}

/// Cluster the population by political distance and store each label on its person
pub fn cluster_factions(
    population: &mut Population,
    config: &FactionConfig,
    distance_config: &DistanceConfig,
) -> Vec<ClusterLabel> {
    let dbscan = Dbscan {
        epsilon: config.epsilon,
        min_pts: config.min_pts,
        parallel_threshold: config.parallel_threshold,
    };
    let people = population.people();
    let labels = dbscan.run(people.len(), |a, b| {
        political_distance(&people[a], &people[b], distance_config)
    });

    for (person, label) in population.iter_mut().zip(&labels) {
        person.faction = *label;
    }

    let factions = labels
        .iter()
        .filter_map(|l| l.cluster_id())
        .max()
        .unwrap_or(0);
    let outliers = labels.iter().filter(|l| **l == ClusterLabel::Outlier).count();
    tracing::info!(
        "Clustered {} people into {} factions ({} outliers)",
        labels.len(),
        factions,
        outliers
    );
    labels
}
