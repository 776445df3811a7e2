use criterion::{Criterion, criterion_group, criterion_main};
use cubes::SumIndex;

fn run_all_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("sum_index_build");
    for n in [100u32, 500, 1000] {
        group.bench_function(format!("n_{}", n), |b| b.iter(|| SumIndex::build(n)));
    }
    group.finish();

    let mut group = c.benchmark_group("taxicab_sums");
    let index = SumIndex::build(1000);
    group.bench_function("n_1000", |b| b.iter(|| index.taxicab_sums(2)));
    group.finish();
}

criterion_group!(benches, run_all_benchmarks);
criterion_main!(benches);
