//! End-to-end run: generate, connect, cluster, report

use std::time::{Duration, Instant};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::core::config::SimulationConfig;
use crate::core::error::{CalliopeError, Result};
use crate::entity::{Person, Population};
use crate::faction::{cluster_factions, summarize_factions, FactionReport};
use crate::generation::PopulationMaker;
use crate::social::{
    build_friend_network, clustering_coefficient, degree_histogram, friend_group_sizes,
    label_friend_groups, mean_degree, NetworkReport,
};

/// Complete simulation output
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SimulationOutput {
    pub people: Vec<Person>,
    pub network: Option<NetworkReport>,
    pub factions: Option<FactionReport>,
    pub statistics: SimulationStats,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SimulationStats {
    pub seed: u64,
    pub population: usize,
    pub patterns: usize,
    pub mean_degree: f64,
    pub clustering_coefficient: f64,
    /// Connected friend-group sizes, largest first
    pub friend_groups: Vec<usize>,
    pub degree_histogram: Vec<usize>,
    pub generation_ms: u64,
    pub network_ms: u64,
    pub faction_ms: u64,
}

impl SimulationOutput {
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(&self).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn summary(&self) -> String {
        let stats = &self.statistics;
        let mut text = format!(
            "Generated {} people from {} patterns in {}ms (seed {})",
            stats.population, stats.patterns, stats.generation_ms, stats.seed
        );
        if let Some(network) = &self.network {
            text.push_str(&format!(
                "\nFriend network: {} edges, mean degree {:.2}, clustering {:.3}, {} groups (largest {}) in {}ms",
                network.edges,
                stats.mean_degree,
                stats.clustering_coefficient,
                stats.friend_groups.len(),
                stats.friend_groups.first().copied().unwrap_or(0),
                stats.network_ms,
            ));
        }
        if let Some(factions) = &self.factions {
            text.push_str(&format!(
                "\nFactions: {} clusters, {} outliers in {}ms",
                factions.faction_count(),
                factions.outliers.len(),
                stats.faction_ms,
            ));
            for faction in factions.factions.iter().take(5) {
                text.push_str(&format!(
                    "\n  #{:<3} {:>5} members, mostly {}",
                    faction.id,
                    faction.size(),
                    faction.dominant_category().acronym(),
                ));
            }
        }
        text
    }
}

/// Run the configured pipeline with a fresh seeded random source
pub fn simulate(config: &SimulationConfig) -> Result<SimulationOutput> {
    config.validate().map_err(CalliopeError::InvalidConfig)?;
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);

    tracing::info!(
        "Generating {} people in {} cohorts",
        config.population_size(),
        config.cohorts.len()
    );
    let start = Instant::now();
    let maker = PopulationMaker::default();
    let mut population = maker.create_population(&config.cohorts, &config.stages, &mut rng)?;
    let generation_time = start.elapsed();

    let start = Instant::now();
    let network = config.build_network.then(|| {
        let report = build_friend_network(&mut population, &config.network, &config.distance);
        label_friend_groups(&mut population);
        report
    });
    let network_time = start.elapsed();

    let start = Instant::now();
    let factions = config.cluster_factions.then(|| {
        cluster_factions(&mut population, &config.factions, &config.distance);
        summarize_factions(&population)
    });
    let faction_time = start.elapsed();

    let statistics = collect_stats(
        &population,
        config.seed,
        [generation_time, network_time, faction_time],
    );
    Ok(SimulationOutput {
        people: population.people().to_vec(),
        network,
        factions,
        statistics,
    })
}

fn collect_stats(population: &Population, seed: u64, timings: [Duration; 3]) -> SimulationStats {
    let [generation, network, faction] = timings.map(|t| t.as_millis() as u64);
    SimulationStats {
        seed,
        population: population.len(),
        patterns: population.patterns().len(),
        mean_degree: mean_degree(population),
        clustering_coefficient: clustering_coefficient(population),
        friend_groups: friend_group_sizes(population),
        degree_histogram: degree_histogram(population),
        generation_ms: generation,
        network_ms: network,
        faction_ms: faction,
    }
}
