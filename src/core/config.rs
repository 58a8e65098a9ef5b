//! Simulation configuration
//!
//! Loaded from TOML; every section and field is optional and falls back to
//! the defaults below.
//!
//! ```toml
//! seed = 7
//! stages = ["identity", "body", "mind", "family", "social"]
//!
//! [[cohorts]]
//! count = 400
//! tags = ["human", "american"]
//!
//! [[cohorts]]
//! count = 100
//! tags = ["human", "student", "japanese"]
//!
//! [network]
//! iterations = 20
//! relax_at = 18
//!
//! [factions]
//! epsilon = 1.4
//! min_pts = 4
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::{CalliopeError, Result};
use crate::faction::FactionConfig;
use crate::generation::pattern::{DistributionOverrides, Stage};
use crate::social::distance::DistanceConfig;
use crate::social::network::FriendNetworkConfig;

/// A batch of people sharing one pattern
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CohortConfig {
    pub count: usize,
    /// Trait tags, applied in order
    pub tags: Vec<String>,
    /// Replacement distributions applied after the traits
    #[serde(default)]
    pub overrides: DistributionOverrides,
}

impl CohortConfig {
    pub fn new(count: usize, tags: &[&str]) -> Self {
        Self {
            count,
            tags: tags.iter().map(|t| t.to_string()).collect(),
            overrides: DistributionOverrides::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Seed for the single random source every stage draws from
    pub seed: u64,

    pub cohorts: Vec<CohortConfig>,

    /// Attribute groups to generate for every person
    ///
    /// Prerequisites are pulled in automatically, so `["mind"]` also
    /// generates bodies.
    pub stages: Vec<Stage>,

    pub distance: DistanceConfig,

    pub network: FriendNetworkConfig,

    pub factions: FactionConfig,

    /// Run the friend-network builder after generation
    pub build_network: bool,

    /// Run faction clustering after the network
    pub cluster_factions: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            cohorts: vec![
                CohortConfig::new(250, &["human", "student", "american"]),
                CohortConfig::new(250, &["human", "student", "japanese"]),
            ],
            stages: Stage::ALL.to_vec(),
            distance: DistanceConfig::default(),
            network: FriendNetworkConfig::default(),
            factions: FactionConfig::default(),
            build_network: true,
            cluster_factions: true,
        }
    }
}

impl SimulationConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate().map_err(CalliopeError::InvalidConfig)?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        tracing::info!("Loading configuration from {}", path.as_ref().display());
        Self::from_toml_str(&text)
    }

    pub fn population_size(&self) -> usize {
        self.cohorts.iter().map(|c| c.count).sum()
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.cohorts.is_empty() {
            return Err("at least one cohort is required".into());
        }
        for (i, cohort) in self.cohorts.iter().enumerate() {
            if cohort.tags.is_empty() {
                return Err(format!("cohort {} has no trait tags", i));
            }
        }

        // Factions cluster on political views, which live on the mind
        let has_mind = self.stages.iter().any(|stage| stage.includes(Stage::Mind));
        if self.cluster_factions && !has_mind {
            return Err("cluster_factions needs the mind stage".into());
        }

        self.distance.validate()?;
        self.network.validate()?;
        self.factions.validate()?;
        Ok(())
    }
}
