//! Encoding throughput benchmarks

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use fwbt::{generate_with, GenerateConfig, ZeroSource};

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode_file");

    for entry_count in [100u32, 10_000, 1_000_000] {
        let config = GenerateConfig::new(16, 64, entry_count);
        let total = config.total_size().expect("dimensions fit in u64");

        group.throughput(Throughput::Bytes(total));
        group.bench_with_input(
            BenchmarkId::from_parameter(entry_count),
            &config,
            |b, &config| b.iter(|| generate_with(config, &mut ZeroSource)),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_encode);
criterion_main!(benches);
