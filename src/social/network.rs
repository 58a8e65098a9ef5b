//! Capacity-constrained friend network
//!
//! Runs a fixed number of matching passes over the population. In each pass
//! everyone below their friend cap scans all non-friends and befriends those
//! who are mutually acceptable, evicting their farthest friend to make room.
//! From `cluster_at` onward the metric rewards mutual friends, and from
//! `relax_at` onward people one short of their cap stop searching.

use serde::{Deserialize, Serialize};

use crate::entity::{Person, Population};

use super::distance::{distance, DistanceConfig, DistanceMode};
use super::friends::{add_friend_at, remove_friend_at};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FriendNetworkConfig {
    /// Number of matching passes
    pub iterations: usize,
    /// First pass that uses the shared-friend bonus; everyone searches in it
    pub cluster_at: usize,
    /// First pass in which the search threshold drops by one
    pub relax_at: usize,
    /// Global ceiling on any person's friend cap
    pub max_friends: usize,
    /// Friends everyone wants regardless of personality
    pub min_friends: usize,
}

impl Default for FriendNetworkConfig {
    fn default() -> Self {
        Self {
            iterations: 20,
            cluster_at: 0,
            relax_at: 18,
            max_friends: 1000,
            min_friends: 3,
        }
    }
}

impl FriendNetworkConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.cluster_at > self.iterations {
            return Err(format!(
                "cluster_at ({}) is past the last pass ({})",
                self.cluster_at, self.iterations
            ));
        }
        if self.relax_at > self.iterations {
            return Err(format!(
                "relax_at ({}) is past the last pass ({})",
                self.relax_at, self.iterations
            ));
        }
        if self.min_friends > self.max_friends {
            return Err(format!(
                "min_friends ({}) exceeds max_friends ({})",
                self.min_friends, self.max_friends
            ));
        }
        Ok(())
    }
}

/// Per-pass counters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassStats {
    pub pass: usize,
    /// People who searched this pass
    pub searching: usize,
    pub matches: usize,
    pub evictions: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkReport {
    pub passes: Vec<PassStats>,
    pub total_matches: usize,
    pub total_evictions: usize,
    pub edges: usize,
}

/// Friend cap: `min_friends + round(sqrt(n) * friend_mult)`, limited by `max_friends`
pub fn friend_cap(person: &Person, population_size: usize, config: &FriendNetworkConfig) -> usize {
    let wanted = (population_size as f64).sqrt() * person.friend_mult();
    let cap = config.min_friends + wanted.round().max(0.0) as usize;
    cap.min(config.max_friends)
}

pub fn build_friend_network(
    population: &mut Population,
    config: &FriendNetworkConfig,
    distance_config: &DistanceConfig,
) -> NetworkReport {
    let n = population.len();
    let caps: Vec<usize> = population
        .iter()
        .map(|p| friend_cap(p, n, config))
        .collect();

    let mut report = NetworkReport::default();
    for pass in 0..config.iterations {
        let forced = pass == config.cluster_at;
        let mode = if pass >= config.cluster_at {
            DistanceMode::Clustered
        } else {
            DistanceMode::Social
        };
        let relax = usize::from(pass >= config.relax_at);

        let mut stats = PassStats {
            pass,
            ..Default::default()
        };
        for me in 0..n {
            let threshold = caps[me].saturating_sub(relax);
            if forced || population.by_index(me).friends.len() < threshold {
                stats.searching += 1;
                match_person(population, me, &caps, mode, distance_config, &mut stats);
            }
        }

        tracing::debug!(
            "pass {}: {} searching, {} matches, {} evictions",
            pass,
            stats.searching,
            stats.matches,
            stats.evictions
        );
        report.total_matches += stats.matches;
        report.total_evictions += stats.evictions;
        report.passes.push(stats);
    }

    report.edges = population.iter().map(|p| p.friends.len()).sum::<usize>() / 2;
    tracing::info!(
        "Friend network: {} edges among {} people after {} passes",
        report.edges,
        n,
        config.iterations
    );
    report
}

/// Scan every non-friend of `me` and link with each mutually acceptable one
fn match_person(
    population: &mut Population,
    me: usize,
    caps: &[usize],
    mode: DistanceMode,
    distance_config: &DistanceConfig,
    stats: &mut PassStats,
) {
    for other in 0..population.len() {
        if other == me {
            continue;
        }
        let (person, candidate) = (population.by_index(me), population.by_index(other));
        if person.friends.contains(candidate.id) {
            continue;
        }

        let d = distance(person, candidate, mode, distance_config);
        if !accepts(person, caps[me], d) || !accepts(candidate, caps[other], d) {
            continue;
        }

        stats.evictions += make_room(population, me, caps[me]);
        stats.evictions += make_room(population, other, caps[other]);
        if add_friend_at(population, me, other, d) {
            stats.matches += 1;
        }
    }
}

/// Open slot, or closer than the current farthest friend
fn accepts(person: &Person, cap: usize, d: f64) -> bool {
    person.friends.len() < cap || d < person.friends.farthest_distance()
}

/// Drop farthest friends until one more edge fits under `cap`
fn make_room(population: &mut Population, idx: usize, cap: usize) -> usize {
    let mut evicted = 0;
    while population.by_index(idx).friends.len() >= cap {
        let Some((far_id, _)) = population.by_index(idx).friends.farthest() else {
            break;
        };
        let Some(far_idx) = population.index_of(far_id) else {
            break;
        };
        if remove_friend_at(population, idx, far_idx).is_none() {
            break;
        }
        evicted += 1;
    }
    evicted
}
