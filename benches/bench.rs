use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use sets::{AvlSet, BstSet, HashSet};

fn identity(n: &u32) -> u64 {
    *n as u64
}

#[derive(Clone)]
enum AnySet {
    Bst(BstSet<u32>),
    Avl(AvlSet<u32>),
    Hash(HashSet<u32, fn(&u32) -> u64>),
}

impl AnySet {
    fn insert(&mut self, item: u32) -> bool {
        match self {
            Self::Bst(set) => set.insert(item),
            Self::Avl(set) => set.insert(item),
            Self::Hash(set) => set.insert(item),
        }
    }

    fn contains(&self, item: &u32) -> bool {
        match self {
            Self::Bst(set) => set.contains(item),
            Self::Avl(set) => set.contains(item),
            Self::Hash(set) => set.contains(item),
        }
    }
}

/// Builds one instance of every implementation holding `0..n`.
///
/// The items arrive in ascending order, which degrades the plain binary
/// search tree to a list; the gap between it and the other two is the
/// point of the comparison.
fn populated(n: u32) -> Vec<(&'static str, AnySet)> {
    let variants = vec![
        ("bst", AnySet::Bst(BstSet::new())),
        ("avl", AnySet::Avl(AvlSet::new())),
        ("hash", AnySet::Hash(HashSet::with_hasher(identity as fn(&u32) -> u64))),
    ];

    variants
        .into_iter()
        .map(|(name, mut set)| {
            for item in 0..n {
                set.insert(item);
            }
            (name, set)
        })
        .collect()
}

fn bench_helper(c: &mut Criterion, name: &str, f: impl Fn(&mut AnySet, u32)) {
    let mut group = c.benchmark_group(name);

    for n in [100u32, 2_000] {
        for (variant, set) in populated(n) {
            let id = BenchmarkId::new(variant, n);

            group.bench_function(id, |b| {
                b.iter_custom(|iters| {
                    let mut time = std::time::Duration::ZERO;
                    for _ in 0..iters {
                        let mut set = black_box(set.clone());
                        let instant = std::time::Instant::now();
                        f(&mut set, black_box(n));
                        time += instant.elapsed();
                    }
                    time
                })
            });
        }
    }

    group.finish();
}

pub fn criterion_benchmark(c: &mut Criterion) {
    bench_helper(c, "insert", |set, n| {
        set.insert(n + 1);
    });

    bench_helper(c, "contains", |set, n| {
        let _hit = black_box(set.contains(&(n / 2)));
    });

    bench_helper(c, "contains-miss", |set, n| {
        let _miss = black_box(set.contains(&(n + 1)));
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
