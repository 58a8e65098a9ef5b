//! Population generation integration tests

use calliope::core::types::PersonId;
use calliope::distribution::{Distribution, Gaussian, Uniform};
use calliope::entity::PoliticalCategory;
use calliope::generation::{PopulationMaker, Stage};
use calliope::CohortConfig;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn median(mut values: Vec<f64>) -> f64 {
    values.sort_by(|a, b| a.partial_cmp(b).unwrap());
    values[values.len() / 2]
}

#[test]
fn test_mixed_cohorts() {
    let maker = PopulationMaker::default();
    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    let population = maker
        .create_population(
            &[
                CohortConfig::new(300, &["human", "american"]),
                CohortConfig::new(200, &["human", "student", "japanese"]),
            ],
            &Stage::ALL,
            &mut rng,
        )
        .unwrap();

    assert_eq!(population.len(), 500);
    assert_eq!(population.patterns().len(), 2);

    let students: Vec<f64> = population
        .iter()
        .skip(300)
        .map(|p| p.body.as_ref().unwrap().age)
        .collect();
    assert!(students.iter().all(|age| (18.0..=50.0).contains(age)));
    let student_median = median(students);
    assert!((student_median - 22.0).abs() < 2.0, "median {}", student_median);

    let japanese_heights: Vec<f64> = population
        .iter()
        .skip(300)
        .map(|p| p.body.as_ref().unwrap().height as f64)
        .collect();
    assert!((median(japanese_heights) - 150.0).abs() < 3.0);

    // Names come from the cohort's own bank
    let american = population.get(PersonId(0)).unwrap();
    let japanese = population.get(PersonId(450)).unwrap();
    assert!(american.name.is_some() && japanese.name.is_some());
    assert_ne!(american.pattern, japanese.pattern);
}

#[test]
fn test_same_seed_reproduces_population() {
    let make = |seed| {
        let maker = PopulationMaker::default();
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        maker
            .create_population(
                &[CohortConfig::new(50, &["human", "american"])],
                &Stage::ALL,
                &mut rng,
            )
            .unwrap()
    };
    let (a, b, c) = (make(1), make(1), make(2));
    for (pa, pb) in a.iter().zip(b.iter()) {
        assert_eq!(pa.body, pb.body);
        assert_eq!(pa.mind, pb.mind);
        assert_eq!(pa.social, pb.social);
    }
    assert!(a.iter().zip(c.iter()).any(|(pa, pc)| pa.body != pc.body));
}

#[test]
fn test_requested_stages_only() {
    let maker = PopulationMaker::default();
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let population = maker
        .create_population(
            &[CohortConfig::new(20, &["human", "american"])],
            &[Stage::Mind],
            &mut rng,
        )
        .unwrap();
    for person in population.iter() {
        assert!(person.body.is_some());
        assert!(person.mind.is_some());
        assert!(person.family.is_none());
        assert!(person.social.is_none());
        assert!(person.name.is_none());
    }
}

#[test]
fn test_political_views_cover_the_disk() {
    let maker = PopulationMaker::default();
    let mut rng = ChaCha8Rng::seed_from_u64(77);
    let population = maker
        .create_population(&[CohortConfig::new(1000, &["human"])], &[Stage::Mind], &mut rng)
        .unwrap();

    let mut counts = [0usize; PoliticalCategory::COUNT];
    for person in population.iter() {
        let view = person.mind.as_ref().unwrap().political;
        assert!(view.radius() <= 1.0 + 1e-9);
        counts[view.category.index()] += 1;
    }
    assert!(counts.iter().all(|&c| c > 0), "{:?}", counts);
}

#[test]
fn test_distribution_medians_converge() {
    let dists: Vec<(Distribution, f64)> = vec![
        (Gaussian::with_median(18.0, 30.0, 107.0, 15.0).into(), 30.0),
        (Gaussian::with_median(50.0, 100.0, 150.0, 15.0).into(), 100.0),
        (Uniform::with_median(0.05, 0.45, 0.85).into(), 0.45),
    ];
    let mut rng = ChaCha8Rng::seed_from_u64(8);
    for (dist, expected) in dists {
        let samples: Vec<f64> = (0..20_000).map(|_| dist.sample(&mut rng)).collect();
        assert!(samples.iter().all(|x| dist.bounds().contains(*x)));
        let m = median(samples);
        assert!(
            (m - expected).abs() < dist.range() * 0.02,
            "median {} vs {}",
            m,
            expected
        );
    }
}
