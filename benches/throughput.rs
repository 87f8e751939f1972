use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use salted_entropy::{digest, process_generator};

fn bench_generators(c: &mut Criterion) {
    let generator = process_generator();
    let mut group = c.benchmark_group("generate");

    for size in [32usize, 1024, 65536] {
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("secure", size), &size, |b, &n| {
            b.iter(|| generator.secure_bytes(black_box(n)).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("system", size), &size, |b, &n| {
            b.iter(|| generator.system_bytes(black_box(n)).unwrap())
        });
    }

    group.finish();
}

fn bench_digest(c: &mut Criterion) {
    let data = vec![0xA5u8; 4096];
    let mut group = c.benchmark_group("digest");
    group.throughput(Throughput::Bytes(data.len() as u64));
    group.bench_function("sha256_4k", |b| b.iter(|| digest(black_box(&data))));
    group.finish();
}

criterion_group!(benches, bench_generators, bench_digest);
criterion_main!(benches);
