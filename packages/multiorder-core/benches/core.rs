use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use multiorder_core::{OrderKind, OrderedBag};

const SIZES: &[u64] = &[10, 1_000, 10_000];

/// Deterministic pseudo-random fill so the sorted orders have real work to do.
fn sample_bag(count: u64) -> OrderedBag<u64> {
    let mut state: u64 = 0x9e37_79b9_7f4a_7c15;
    (0..count)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            state % 1_000
        })
        .collect()
}

fn bench_materialize(c: &mut Criterion) {
    let mut group = c.benchmark_group("materialize");
    for &count in SIZES {
        let bag = sample_bag(count);
        for kind in OrderKind::ALL {
            group.bench_with_input(BenchmarkId::new(kind.name(), count), &bag, |b, bag| {
                b.iter(|| black_box(bag.bounds(kind)))
            });
        }
    }
    group.finish();
}

fn bench_walk(c: &mut Criterion) {
    let mut group = c.benchmark_group("walk");
    for &count in SIZES {
        let bag = sample_bag(count);
        group.bench_with_input(BenchmarkId::new("side-cross", count), &bag, |b, bag| {
            b.iter(|| {
                let mut sum = 0u64;
                for value in bag.traverse(OrderKind::SideCross) {
                    sum = sum.wrapping_add(value.unwrap());
                }
                black_box(sum)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_materialize, bench_walk);
criterion_main!(benches);
