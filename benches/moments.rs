use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use kstats::discrete::Poisson;
use kstats::moments::{MomentEngine, Summation};

fn bench_truncated_variance(c: &mut Criterion) {
    let mut group = c.benchmark_group("truncated_variance");
    let dist = Poisson::new(25.0).unwrap();

    for high in [50_i64, 100, 500] {
        for summation in [Summation::Naive, Summation::Compensated] {
            let engine = MomentEngine::builder()
                .support(0, high)
                .summation(summation)
                .build()
                .unwrap();
            group.bench_with_input(
                BenchmarkId::new(format!("{summation:?}"), high),
                &engine,
                |b, engine| {
                    b.iter(|| engine.variance_of(&dist));
                },
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_truncated_variance);
criterion_main!(benches);
