//! Symmetric friendship edits
//!
//! Every edge is written to both endpoints with the same distance. Invalid
//! edits (self-loops, duplicates, unknown people, missing edges) are logged
//! and leave the graph unchanged.

use ordered_float::OrderedFloat;

use crate::core::error::{CalliopeError, Result};
use crate::core::types::PersonId;
use crate::entity::Population;

use super::distance::{distance, DistanceConfig, DistanceMode};

/// Add an edge between two people. Returns false if nothing changed
pub fn add_friend(population: &mut Population, a: PersonId, b: PersonId, distance: f64) -> bool {
    match (population.index_of(a), population.index_of(b)) {
        (Some(ia), Some(ib)) => add_friend_at(population, ia, ib, distance),
        _ => {
            tracing::warn!("cannot befriend {} and {}: unknown person", a, b);
            false
        }
    }
}

/// Remove the edge between two people, returning its distance
pub fn remove_friend(population: &mut Population, a: PersonId, b: PersonId) -> Option<f64> {
    match (population.index_of(a), population.index_of(b)) {
        (Some(ia), Some(ib)) => remove_friend_at(population, ia, ib),
        _ => {
            tracing::warn!("cannot unfriend {} and {}: unknown person", a, b);
            None
        }
    }
}

pub(crate) fn add_friend_at(population: &mut Population, a: usize, b: usize, distance: f64) -> bool {
    if a == b {
        tracing::warn!("{} cannot befriend themselves", population.by_index(a).id);
        return false;
    }
    let (pa, pb) = population.pair_mut(a, b);
    if pa.friends.contains(pb.id) || pb.friends.contains(pa.id) {
        tracing::warn!("{} and {} are already friends", pa.id, pb.id);
        return false;
    }
    pa.friends.insert(pb.id, distance);
    pb.friends.insert(pa.id, distance);
    true
}

pub(crate) fn remove_friend_at(population: &mut Population, a: usize, b: usize) -> Option<f64> {
    if a == b {
        return None;
    }
    let (pa, pb) = population.pair_mut(a, b);
    if !pa.friends.contains(pb.id) {
        tracing::warn!("{} and {} are not friends", pa.id, pb.id);
        return None;
    }
    let removed = pa.friends.remove(pb.id);
    pb.friends.remove(pa.id);
    removed
}

/// Most similar other person under the shared-friend metric
///
/// A population of one returns the person themselves at distance zero.
pub fn closest(
    population: &Population,
    id: PersonId,
    config: &DistanceConfig,
) -> Result<(PersonId, f64)> {
    let me = population.require(id)?;
    let best = population
        .iter()
        .filter(|other| other.id != id)
        .map(|other| (other.id, distance(me, other, DistanceMode::Clustered, config)))
        .min_by_key(|(_, d)| OrderedFloat(*d));
    Ok(best.unwrap_or((id, 0.0)))
}

/// Farthest current friend, if any
pub fn farthest_friend(population: &Population, id: PersonId) -> Result<Option<(PersonId, f64)>> {
    population
        .get(id)
        .map(|p| p.friends.farthest())
        .ok_or(CalliopeError::PersonNotFound(id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::Person;
    use crate::generation::PatternKey;

    fn population(n: u32) -> Population {
        let mut pop = Population::new();
        for id in 0..n {
            pop.push(Person::new(PersonId(id), PatternKey(0)));
        }
        pop
    }

    #[test]
    fn test_edges_are_symmetric() {
        let mut pop = population(3);
        assert!(add_friend(&mut pop, PersonId(0), PersonId(2), 0.7));
        assert_eq!(pop.by_index(0).friends.distance_to(PersonId(2)), Some(0.7));
        assert_eq!(pop.by_index(2).friends.distance_to(PersonId(0)), Some(0.7));

        assert_eq!(remove_friend(&mut pop, PersonId(2), PersonId(0)), Some(0.7));
        assert!(pop.by_index(0).friends.is_empty());
        assert!(pop.by_index(2).friends.is_empty());
    }

    #[test]
    fn test_invalid_edits_are_no_ops() {
        let mut pop = population(2);
        assert!(!add_friend(&mut pop, PersonId(0), PersonId(0), 0.1));
        assert!(!add_friend(&mut pop, PersonId(0), PersonId(9), 0.1));
        assert!(add_friend(&mut pop, PersonId(0), PersonId(1), 0.1));
        assert!(!add_friend(&mut pop, PersonId(1), PersonId(0), 0.5));
        assert_eq!(pop.by_index(0).friends.distance_to(PersonId(1)), Some(0.1));

        assert_eq!(remove_friend(&mut pop, PersonId(0), PersonId(1)), Some(0.1));
        assert_eq!(remove_friend(&mut pop, PersonId(0), PersonId(1)), None);
    }

    #[test]
    fn test_farthest_updates_on_removal() {
        let mut pop = population(4);
        add_friend(&mut pop, PersonId(0), PersonId(1), 0.2);
        add_friend(&mut pop, PersonId(0), PersonId(2), 0.9);
        add_friend(&mut pop, PersonId(0), PersonId(3), 0.5);
        assert_eq!(
            farthest_friend(&pop, PersonId(0)).unwrap(),
            Some((PersonId(2), 0.9))
        );
        remove_friend(&mut pop, PersonId(0), PersonId(2));
        assert_eq!(
            farthest_friend(&pop, PersonId(0)).unwrap(),
            Some((PersonId(3), 0.5))
        );
    }

    #[test]
    fn test_closest_of_one_is_self() {
        let pop = population(1);
        let (id, d) = closest(&pop, PersonId(0), &DistanceConfig::default()).unwrap();
        assert_eq!((id, d), (PersonId(0), 0.0));
        assert!(closest(&pop, PersonId(5), &DistanceConfig::default()).is_err());
    }
}
