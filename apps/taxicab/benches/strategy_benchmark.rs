use criterion::{Criterion, criterion_group, criterion_main};
use taxicab::{MatchPolicy, Strategy};

fn run_all_benchmarks(c: &mut Criterion) {
    let mut group_20 = c.benchmark_group("taxicab_n_20");
    for strategy in Strategy::ALL {
        group_20.bench_function(strategy.name(), |b| {
            b.iter(|| strategy.run(20, MatchPolicy::Distinct))
        });
    }
    group_20.finish();

    let mut group_60 = c.benchmark_group("taxicab_n_60");
    group_60.sample_size(10);
    for strategy in Strategy::ALL {
        group_60.bench_function(strategy.name(), |b| {
            b.iter(|| strategy.run(60, MatchPolicy::Distinct))
        });
    }
    group_60.finish();

    // brute force is O(n^4), only the index is measured past this point
    let mut group_2000 = c.benchmark_group("taxicab_n_2000");
    group_2000.sample_size(10);
    group_2000.bench_function("indexed", |b| {
        b.iter(|| Strategy::Indexed.run(2000, MatchPolicy::Distinct))
    });
    group_2000.finish();
}

criterion_group!(benches, run_all_benchmarks);
criterion_main!(benches);
