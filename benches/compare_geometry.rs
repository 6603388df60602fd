use criterion::criterion_group;
use criterion::criterion_main;
use criterion::BenchmarkId;
use criterion::Criterion;
use rand::Rng;
use rand_chacha::rand_core::SeedableRng;
use rand_chacha::ChaCha8Rng;

use paged_heap::heap::heapsort;
use paged_heap::heap::make_heap;
use paged_heap::heap::pop_heap;
use paged_heap::heap::push_heap;

fn random_values(n: usize, seed: u64) -> Vec<u64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n).map(|_| rng.gen()).collect()
}

fn heapsort_geometry<const F: usize, const P: usize>(values: &[u64]) -> u64 {
    let mut a = values.to_vec();
    heapsort::<F, P, _>(&mut a);
    a[a.len() / 2]
}

fn std_binary_heap_drain(values: &[u64]) -> u64 {
    let mut heap: std::collections::BinaryHeap<u64> = values.iter().copied().collect();
    let mut last = 0;
    while let Some(v) = heap.pop() {
        last = v;
    }
    last
}

fn push_then_drain<const F: usize, const P: usize>(values: &[u64]) -> u64 {
    let mut a: Vec<u64> = Vec::with_capacity(values.len());
    for &v in values {
        a.push(v);
        push_heap::<F, P, _>(&mut a);
    }
    for i in (2..=a.len()).rev() {
        pop_heap::<F, P, _>(&mut a[..i]);
    }
    a[0]
}

fn compare_heapsort(c: &mut Criterion) {
    let mut group = c.benchmark_group("Heapsort");

    for n in [1_000usize, 100_000] {
        let values = random_values(n, n as u64);

        group.bench_with_input(BenchmarkId::new("F=2 P=1", n), &values, |b, v| {
            b.iter(|| heapsort_geometry::<2, 1>(v))
        });
        group.bench_with_input(BenchmarkId::new("F=4 P=1", n), &values, |b, v| {
            b.iter(|| heapsort_geometry::<4, 1>(v))
        });
        group.bench_with_input(BenchmarkId::new("F=8 P=1", n), &values, |b, v| {
            b.iter(|| heapsort_geometry::<8, 1>(v))
        });
        group.bench_with_input(BenchmarkId::new("F=2 P=512", n), &values, |b, v| {
            b.iter(|| heapsort_geometry::<2, 512>(v))
        });
        group.bench_with_input(BenchmarkId::new("std BinaryHeap", n), &values, |b, v| {
            b.iter(|| std_binary_heap_drain(v))
        });
    }
    group.finish();
}

fn compare_push_pop(c: &mut Criterion) {
    let mut group = c.benchmark_group("Push+Pop");

    for n in [1_000usize, 50_000] {
        let values = random_values(n, n as u64 + 7);

        group.bench_with_input(BenchmarkId::new("F=2 P=1", n), &values, |b, v| {
            b.iter(|| push_then_drain::<2, 1>(v))
        });
        group.bench_with_input(BenchmarkId::new("F=4 P=1", n), &values, |b, v| {
            b.iter(|| push_then_drain::<4, 1>(v))
        });
        group.bench_with_input(BenchmarkId::new("F=2 P=128", n), &values, |b, v| {
            b.iter(|| push_then_drain::<2, 128>(v))
        });
        group.bench_with_input(BenchmarkId::new("std BinaryHeap", n), &values, |b, v| {
            b.iter(|| std_binary_heap_drain(v))
        });
    }
    group.finish();
}

fn compare_make_heap(c: &mut Criterion) {
    let mut group = c.benchmark_group("Heapify");

    let n = 100_000usize;
    let values = random_values(n, 42);

    group.bench_with_input(BenchmarkId::new("F=2 P=1", n), &values, |b, v| {
        b.iter(|| {
            let mut a = v.to_vec();
            make_heap::<2, 1, _>(&mut a);
            a[0]
        })
    });
    group.bench_with_input(BenchmarkId::new("F=4 P=1", n), &values, |b, v| {
        b.iter(|| {
            let mut a = v.to_vec();
            make_heap::<4, 1, _>(&mut a);
            a[0]
        })
    });
    group.bench_with_input(BenchmarkId::new("F=2 P=512", n), &values, |b, v| {
        b.iter(|| {
            let mut a = v.to_vec();
            make_heap::<2, 512, _>(&mut a);
            a[0]
        })
    });
    group.finish();
}

criterion_group!(benches, compare_heapsort, compare_push_pop, compare_make_heap);
criterion_main!(benches);
