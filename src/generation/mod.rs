//! Attribute generation
//!
//! A person's attribute groups are filled by running the initializers their
//! pattern registered for each stage. Stages are idempotent and pull in their
//! prerequisite group first, so callers can ask for any subset in any order.

pub mod attributes;
pub mod maker;
pub mod pattern;
pub mod traits;

pub use maker::{cache_key, PopulationMaker};
pub use pattern::{
    Appearance, DistributionOverrides, Distributions, Initializer, NameBank, Pattern,
    PatternBuilder, PatternKey, Stage,
};
pub use traits::TraitRegistry;

use rand::RngCore;

use crate::entity::Person;

/// Whether the group a stage produces is already present
pub fn is_populated(person: &Person, stage: Stage) -> bool {
    match stage {
        Stage::Identity => person.name.is_some(),
        Stage::Body => person.body.is_some(),
        Stage::Mind => person.mind.is_some(),
        Stage::Family => person.family.is_some(),
        Stage::Social => person.social.is_some(),
    }
}

/// Run one stage (and its prerequisite chain) unless already populated
pub fn run_stage(person: &mut Person, pattern: &Pattern, stage: Stage, rng: &mut dyn RngCore) {
    if is_populated(person, stage) {
        return;
    }
    if let Some(prerequisite) = stage.prerequisite() {
        run_stage(person, pattern, prerequisite, rng);
    }
    for initializer in pattern.initializers_for(stage) {
        (initializer.run)(person, pattern, rng);
    }
}

pub fn populate(person: &mut Person, pattern: &Pattern, stages: &[Stage], rng: &mut dyn RngCore) {
    for &stage in stages {
        run_stage(person, pattern, stage, rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::PersonId;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn human_pattern() -> Pattern {
        let registry = TraitRegistry::standard();
        let mut builder = PatternBuilder::new();
        registry.apply("human", &mut builder);
        registry.apply("american", &mut builder);
        builder.build().unwrap()
    }

    #[test]
    fn test_mind_pulls_in_body() {
        let pattern = human_pattern();
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut person = Person::new(PersonId(0), PatternKey(0));

        run_stage(&mut person, &pattern, Stage::Mind, &mut rng);
        assert!(person.body.is_some());
        assert!(person.mind.is_some());
        assert!(person.family.is_none());
    }

    #[test]
    fn test_social_pulls_in_whole_chain() {
        let pattern = human_pattern();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut person = Person::new(PersonId(0), PatternKey(0));

        run_stage(&mut person, &pattern, Stage::Social, &mut rng);
        assert!(person.body.is_some() && person.mind.is_some());
        assert!(person.family.is_some());
        assert!(person.social.is_some());
    }

    #[test]
    fn test_stages_are_idempotent() {
        let pattern = human_pattern();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut person = Person::new(PersonId(0), PatternKey(0));

        populate(&mut person, &pattern, &Stage::ALL, &mut rng);
        let body = person.body.clone();
        let name = person.name.clone();
        populate(&mut person, &pattern, &Stage::ALL, &mut rng);
        assert_eq!(person.body, body);
        assert_eq!(person.name, name);
    }

    #[test]
    fn test_generated_attributes_in_range() {
        let pattern = human_pattern();
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        for i in 0..500 {
            let mut person = Person::new(PersonId(i), PatternKey(0));
            populate(&mut person, &pattern, &Stage::ALL, &mut rng);

            let body = person.body.as_ref().unwrap();
            assert!((18.0..=107.0).contains(&body.age));
            assert!((54..=272).contains(&body.height));
            assert!((0.0..=1.0).contains(&body.fitness));

            let mind = person.mind.as_ref().unwrap();
            assert!((50..=150).contains(&mind.iq));
            assert!((0.0..=1.0).contains(&mind.confidence));
            assert!(mind.political.radius() <= 1.0 + 1e-9);
            assert!([8, 12, 14, 18, 20, 25].contains(&mind.education));

            let social = person.social.unwrap();
            assert!((0.0..=1.0).contains(&social.class));
            assert!(person.name.is_some());
        }
    }

    #[test]
    fn test_same_seed_same_person() {
        let pattern = human_pattern();
        let make = || {
            let mut rng = ChaCha8Rng::seed_from_u64(99);
            let mut person = Person::new(PersonId(0), PatternKey(0));
            populate(&mut person, &pattern, &Stage::ALL, &mut rng);
            person
        };
        let (a, b) = (make(), make());
        assert_eq!(a.body, b.body);
        assert_eq!(a.mind, b.mind);
        assert_eq!(a.name, b.name);
    }
}
