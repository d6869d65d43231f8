use bucket_lfu::config::LfuCacheConfig;
use bucket_lfu::LfuCache;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn make_lfu<K: std::hash::Hash + Eq + Clone, V>(cap: usize) -> LfuCache<K, V> {
    LfuCache::init(LfuCacheConfig { capacity: cap }, None)
}

pub fn criterion_benchmark(c: &mut Criterion) {
    const CACHE_SIZE: usize = 1000;
    let mut group = c.benchmark_group("LFU Operations");

    {
        let mut cache = make_lfu(CACHE_SIZE);
        for i in 0..CACHE_SIZE {
            cache.put(i, i);
        }

        group.bench_function("get hit", |b| {
            b.iter(|| {
                for i in 0..100 {
                    let _ = black_box(cache.get(&(i % CACHE_SIZE)));
                }
            });
        });

        group.bench_function("get miss", |b| {
            b.iter(|| {
                for i in 0..100 {
                    let _ = black_box(cache.get(&(i + CACHE_SIZE)));
                }
            });
        });

        group.bench_function("key_frequency", |b| {
            b.iter(|| {
                for i in 0..100 {
                    let _ = black_box(cache.key_frequency(&(i % CACHE_SIZE)));
                }
            });
        });

        group.bench_function("all full traversal", |b| {
            b.iter(|| black_box(cache.all().count()));
        });
    }

    {
        let mut cache = make_lfu(CACHE_SIZE);
        let mut next = 0usize;
        group.bench_function("put with eviction", |b| {
            b.iter(|| {
                for _ in 0..100 {
                    cache.put(black_box(next), next);
                    next += 1;
                }
            });
        });
    }

    {
        // Skewed access: a small hot set keeps climbing frequencies while
        // cold keys churn through the frequency-1 bucket.
        let mut cache = make_lfu(CACHE_SIZE);
        let mut cold = CACHE_SIZE;
        group.bench_function("mixed hot/cold", |b| {
            b.iter(|| {
                for i in 0..100 {
                    if i % 4 == 0 {
                        cache.put(cold, cold);
                        cold += 1;
                    } else {
                        cache.put(i % 32, i);
                        let _ = black_box(cache.get(&(i % 32)));
                    }
                }
            });
        });
    }

    group.finish();

    let mut scaling = c.benchmark_group("LFU Scaling");
    for size in [10usize, 100, 1_000, 10_000] {
        scaling.bench_with_input(BenchmarkId::new("put+get", size), &size, |b, &size| {
            let mut cache = make_lfu(size);
            let mut i = 0usize;
            b.iter(|| {
                cache.put(i, i);
                let _ = black_box(cache.get(&(i / 2)));
                i += 1;
            });
        });
    }
    scaling.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
