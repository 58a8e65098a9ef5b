//! One person's side of the friendship graph
//!
//! Edges are stored on both endpoints with the same distance. Only the
//! symmetric operations in `social::friends` should mutate them.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::core::types::PersonId;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Friends {
    /// Friend id to social distance at the time the edge was made
    edges: BTreeMap<PersonId, f64>,
    /// Cached most-distant friend
    farthest: Option<(PersonId, f64)>,
}

impl Friends {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn contains(&self, id: PersonId) -> bool {
        self.edges.contains_key(&id)
    }

    pub fn distance_to(&self, id: PersonId) -> Option<f64> {
        self.edges.get(&id).copied()
    }

    pub fn ids(&self) -> impl Iterator<Item = PersonId> + '_ {
        self.edges.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (PersonId, f64)> + '_ {
        self.edges.iter().map(|(id, d)| (*id, *d))
    }

    pub fn farthest(&self) -> Option<(PersonId, f64)> {
        self.farthest
    }

    /// Distance to the farthest friend, 0 with no friends
    pub fn farthest_distance(&self) -> f64 {
        self.farthest.map_or(0.0, |(_, d)| d)
    }

    /// Number of friends both sides have in common
    pub fn shared_with(&self, other: &Friends) -> usize {
        let (small, large) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        small.edges.keys().filter(|id| large.contains(**id)).count()
    }

    /// Insert one side of an edge. Returns false if it already exists
    pub(crate) fn insert(&mut self, id: PersonId, distance: f64) -> bool {
        if self.edges.contains_key(&id) {
            return false;
        }
        self.edges.insert(id, distance);
        if distance > self.farthest_distance() || self.farthest.is_none() {
            self.farthest = Some((id, distance));
        }
        true
    }

    /// Remove one side of an edge, returning its distance
    pub(crate) fn remove(&mut self, id: PersonId) -> Option<f64> {
        let distance = self.edges.remove(&id)?;
        if self.farthest.map(|(far, _)| far) == Some(id) {
            self.rescan_farthest();
        }
        Some(distance)
    }

    fn rescan_farthest(&mut self) {
        self.farthest = self
            .edges
            .iter()
            .map(|(id, d)| (*id, *d))
            .fold(None, |best: Option<(PersonId, f64)>, (id, d)| match best {
                Some((_, best_d)) if best_d >= d => best,
                _ => Some((id, d)),
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_farthest_tracks_inserts_and_removals() {
        let mut friends = Friends::new();
        assert_eq!(friends.farthest_distance(), 0.0);

        friends.insert(PersonId(1), 0.4);
        friends.insert(PersonId(2), 0.9);
        friends.insert(PersonId(3), 0.2);
        assert_eq!(friends.farthest(), Some((PersonId(2), 0.9)));

        assert_eq!(friends.remove(PersonId(2)), Some(0.9));
        assert_eq!(friends.farthest(), Some((PersonId(1), 0.4)));

        friends.remove(PersonId(1));
        friends.remove(PersonId(3));
        assert_eq!(friends.farthest(), None);
    }

    #[test]
    fn test_duplicate_insert_is_rejected() {
        let mut friends = Friends::new();
        assert!(friends.insert(PersonId(5), 0.3));
        assert!(!friends.insert(PersonId(5), 0.1));
        assert_eq!(friends.distance_to(PersonId(5)), Some(0.3));
        assert_eq!(friends.remove(PersonId(9)), None);
    }

    #[test]
    fn test_tied_farthest_survives_removal_of_twin() {
        let mut friends = Friends::new();
        friends.insert(PersonId(1), 0.5);
        friends.insert(PersonId(2), 0.5);
        friends.remove(PersonId(1));
        assert_eq!(friends.farthest(), Some((PersonId(2), 0.5)));
    }

    #[test]
    fn test_removing_tied_non_farthest_keeps_cache() {
        let mut friends = Friends::new();
        friends.insert(PersonId(5), 0.5);
        friends.insert(PersonId(1), 0.5);
        friends.insert(PersonId(7), 0.5);
        assert_eq!(friends.farthest(), Some((PersonId(5), 0.5)));

        friends.remove(PersonId(7));
        assert_eq!(friends.farthest(), Some((PersonId(5), 0.5)));
        friends.remove(PersonId(1));
        assert_eq!(friends.farthest(), Some((PersonId(5), 0.5)));
    }

    #[test]
    fn test_removing_farthest_picks_next_largest() {
        let mut friends = Friends::new();
        friends.insert(PersonId(3), 0.7);
        friends.insert(PersonId(4), 0.2);
        friends.insert(PersonId(9), 0.6);
        friends.remove(PersonId(4));
        assert_eq!(friends.farthest(), Some((PersonId(3), 0.7)));
        friends.remove(PersonId(3));
        assert_eq!(friends.farthest(), Some((PersonId(9), 0.6)));
    }

    #[test]
    fn test_shared_friends() {
        let mut a = Friends::new();
        let mut b = Friends::new();
        for id in [1, 2, 3] {
            a.insert(PersonId(id), 0.1);
        }
        for id in [2, 3, 4, 5] {
            b.insert(PersonId(id), 0.1);
        }
        assert_eq!(a.shared_with(&b), 2);
        assert_eq!(b.shared_with(&a), 2);
    }
}
