use calliope::entity::Population;
use calliope::faction::{cluster_factions, FactionConfig};
use calliope::generation::{PopulationMaker, Stage};
use calliope::social::{build_friend_network, DistanceConfig, FriendNetworkConfig};
use calliope::CohortConfig;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn population(count: usize) -> Population {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    PopulationMaker::default()
        .create_population(
            &[CohortConfig::new(count, &["human", "american"])],
            &Stage::ALL,
            &mut rng,
        )
        .unwrap()
}

fn bench_generation(c: &mut Criterion) {
    c.bench_function("generate_1000", |b| b.iter(|| population(black_box(1000))));
}

fn bench_network(c: &mut Criterion) {
    let mut group = c.benchmark_group("friend_network");
    group.sample_size(10);
    for count in [100, 250, 500] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, _| {
            b.iter_batched(
                || population(count),
                |mut pop| {
                    build_friend_network(
                        &mut pop,
                        &FriendNetworkConfig::default(),
                        &DistanceConfig::default(),
                    )
                },
                criterion::BatchSize::LargeInput,
            )
        });
    }
    group.finish();
}

fn bench_factions(c: &mut Criterion) {
    let mut pop = population(2000);
    c.bench_function("factions_2000", |b| {
        b.iter(|| cluster_factions(&mut pop, &FactionConfig::default(), &DistanceConfig::default()))
    });
}

criterion_group!(benches, bench_generation, bench_network, bench_factions);
criterion_main!(benches);
