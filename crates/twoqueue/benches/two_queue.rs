use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use twoqueue::{LruStore, TwoQueue};

/// Deterministic xorshift trace so runs are comparable
fn trace(len: usize, modulo: u64, mut seed: u64) -> Vec<u64> {
    (0..len)
        .map(|_| {
            seed ^= seed << 13;
            seed ^= seed >> 7;
            seed ^= seed << 17;
            seed % modulo
        })
        .collect()
}

fn bench_random(c: &mut Criterion) {
    let mut group = c.benchmark_group("two_queue_random");
    group.sample_size(50);
    group.throughput(Throughput::Elements(1));

    group.bench_function("set_get_32k_keys", |b| {
        let cache = TwoQueue::with_capacities(2048, 4096, 6144);
        let keys = trace(1 << 16, 32768, 0x2545_f491_4f6c_dd1d);

        let mut counter = 0;
        b.iter(|| {
            let key = keys[counter % keys.len()];
            if counter % 2 == 0 {
                black_box(cache.set(key, key));
            } else {
                black_box(cache.get(&key));
            }
            counter += 1;
        });
    });

    group.finish();
}

fn bench_skewed(c: &mut Criterion) {
    let mut group = c.benchmark_group("two_queue_skewed");
    group.sample_size(50);
    group.throughput(Throughput::Elements(1));

    group.bench_function("get_hot_half", |b| {
        let cache = TwoQueue::with_capacities(2048, 4096, 6144);
        let writes = trace(1 << 16, 16384, 0x9e37_79b9_7f4a_7c15);
        let reads = trace(1 << 16, 32768, 0xdead_beef_cafe_f00d);

        // Warm: hot keys recur and reach frequent
        for key in &writes {
            cache.set(*key, *key);
        }

        let mut counter = 0;
        b.iter(|| {
            black_box(cache.get(&reads[counter % reads.len()]));
            counter += 1;
        });
    });

    group.finish();
}

fn bench_store(c: &mut Criterion) {
    let mut group = c.benchmark_group("lru_store");
    group.sample_size(50);
    group.throughput(Throughput::Elements(1));

    group.bench_function("set_with_eviction", |b| {
        let mut store = LruStore::new(4096);
        let keys = trace(1 << 16, 65536, 0x1234_5678_9abc_def1);

        let mut counter = 0;
        b.iter(|| {
            let key = keys[counter % keys.len()];
            black_box(store.set(key, key));
            counter += 1;
        });
    });

    group.finish();
}

criterion_group!(benches, bench_random, bench_skewed, bench_store);
criterion_main!(benches);
