//! Population - arena of people plus the patterns they were drawn from
//!
//! People are addressed by `PersonId` through an index map so lookups stay
//! O(1) while iteration keeps creation order.

use ahash::AHashMap;

use crate::core::error::{CalliopeError, Result};
use crate::core::types::PersonId;
use crate::generation::pattern::{Pattern, PatternKey};

use super::person::Person;

#[derive(Debug, Default)]
pub struct Population {
    people: Vec<Person>,
    index: AHashMap<PersonId, usize>,
    patterns: Vec<Pattern>,
    /// Pattern lookup by tag list and overrides
    pattern_cache: AHashMap<String, PatternKey>,
    next_id: u32,
}

impl Population {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    pub fn people(&self) -> &[Person] {
        &self.people
    }

    pub fn iter(&self) -> impl Iterator<Item = &Person> {
        self.people.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Person> {
        self.people.iter_mut()
    }

    pub fn ids(&self) -> impl Iterator<Item = PersonId> + '_ {
        self.people.iter().map(|p| p.id)
    }

    pub fn index_of(&self, id: PersonId) -> Option<usize> {
        self.index.get(&id).copied()
    }

    pub fn get(&self, id: PersonId) -> Option<&Person> {
        self.index_of(id).map(|idx| &self.people[idx])
    }

    pub fn get_mut(&mut self, id: PersonId) -> Option<&mut Person> {
        let idx = self.index_of(id)?;
        Some(&mut self.people[idx])
    }

    pub fn require(&self, id: PersonId) -> Result<&Person> {
        self.get(id).ok_or(CalliopeError::PersonNotFound(id))
    }

    pub fn by_index(&self, idx: usize) -> &Person {
        &self.people[idx]
    }

    pub fn by_index_mut(&mut self, idx: usize) -> &mut Person {
        &mut self.people[idx]
    }

    /// Two distinct people by index, mutably
    pub fn pair_mut(&mut self, a: usize, b: usize) -> (&mut Person, &mut Person) {
        assert_ne!(a, b, "pair_mut needs two distinct people");
        if a < b {
            let (left, right) = self.people.split_at_mut(b);
            (&mut left[a], &mut right[0])
        } else {
            let (left, right) = self.people.split_at_mut(a);
            (&mut right[0], &mut left[b])
        }
    }

    /// Reserve the next sequential id
    pub fn allocate_id(&mut self) -> PersonId {
        let id = PersonId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Add a person. Returns false and leaves the population unchanged on a duplicate id
    pub fn push(&mut self, person: Person) -> bool {
        if self.index.contains_key(&person.id) {
            tracing::warn!("person {} already in population, ignoring", person.id);
            return false;
        }
        match person.id.0.checked_add(1) {
            Some(next) => self.next_id = self.next_id.max(next),
            None => {
                tracing::warn!("person {} exhausts the id space", person.id);
                self.next_id = u32::MAX;
            }
        }
        self.index.insert(person.id, self.people.len());
        self.people.push(person);
        true
    }

    pub fn pattern(&self, key: PatternKey) -> Option<&Pattern> {
        self.patterns.get(key.0)
    }

    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    pub fn cached_pattern(&self, cache_key: &str) -> Option<PatternKey> {
        self.pattern_cache.get(cache_key).copied()
    }

    pub fn insert_pattern(&mut self, cache_key: String, pattern: Pattern) -> PatternKey {
        let key = PatternKey(self.patterns.len());
        self.patterns.push(pattern);
        self.pattern_cache.insert(cache_key, key);
        key
    }
}
