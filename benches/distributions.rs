use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use kstats::combinatorics::{combinations, ln_combinations};
use kstats::continuous::Exponential;
use kstats::discrete::{Binomial, Hypergeometric, Poisson};
use kstats::distribution::{Cumulative, Distribution};

fn bench_combinations(c: &mut Criterion) {
    let mut group = c.benchmark_group("combinations");
    for n in [10_u64, 30, 60] {
        group.bench_with_input(BenchmarkId::new("exact", n), &n, |b, &n| {
            b.iter(|| combinations(n, n / 2));
        });
        group.bench_with_input(BenchmarkId::new("log", n), &n, |b, &n| {
            b.iter(|| ln_combinations(n, n / 2));
        });
    }
    group.finish();
}

fn bench_discrete_pmf(c: &mut Criterion) {
    let mut group = c.benchmark_group("discrete_pmf");

    // 60 stays exact, 200 falls back to the log domain.
    for n in [20_u64, 60, 200] {
        let dist = Binomial::new(n, 0.4).unwrap();
        let k = i64::try_from(n / 2).unwrap();
        group.bench_with_input(BenchmarkId::new("binomial", n), &dist, |b, dist| {
            b.iter(|| dist.probability(k));
        });
    }

    for k in [5_i64, 50, 500] {
        let dist = Poisson::new(40.0).unwrap();
        group.bench_with_input(BenchmarkId::new("poisson", k), &k, |b, &k| {
            b.iter(|| dist.probability(k));
        });
    }

    let dist = Hypergeometric::new(100, 30, 20).unwrap();
    group.bench_function("hypergeometric", |b| b.iter(|| dist.probability(6)));
    group.finish();
}

fn bench_cdf(c: &mut Criterion) {
    let mut group = c.benchmark_group("cdf");
    let poisson = Poisson::new(40.0).unwrap();
    group.bench_function("poisson", |b| b.iter(|| poisson.cdf(60)));
    let exponential = Exponential::new(0.5).unwrap();
    group.bench_function("exponential", |b| b.iter(|| exponential.cdf(3.0)));
    group.finish();
}

criterion_group!(benches, bench_combinations, bench_discrete_pmf, bench_cdf);
criterion_main!(benches);
