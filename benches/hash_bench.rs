//! Benchmarks for hashrs.
//!
//! Run with:
//!     cargo bench

use std::io::Cursor;

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use hashrs::{Crc, CrcStandard, Fnv1a, FnvConfig, HashFunction, JenkinsOneAtATime};

fn bench_crc_widths(c: &mut Criterion) {
    let mut group = c.benchmark_group("crc");
    let size = 1024 * 1024; // 1 MB
    let data: Vec<u8> = (0..size).map(|i| (i * 7 + 13) as u8).collect();
    group.throughput(Throughput::Bytes(size as u64));

    // Bitwise (narrow) vs bytewise, reflected vs not
    for standard in [
        CrcStandard::Crc5Usb,
        CrcStandard::Crc16Ibm3740,
        CrcStandard::Crc32IsoHdlc,
        CrcStandard::Crc32Bzip2,
        CrcStandard::Crc64Xz,
    ] {
        let crc = Crc::standard(standard);
        group.bench_with_input(BenchmarkId::from_parameter(standard.name()), &data, |b, data| {
            b.iter(|| black_box(crc.compute_hash(black_box(data)).unwrap()));
        });
    }

    group.finish();
}

fn bench_algorithms(c: &mut Criterion) {
    let mut group = c.benchmark_group("algorithms");
    let size = 1024 * 1024; // 1 MB
    let data: Vec<u8> = (0..size).map(|i| (i * 7 + 13) as u8).collect();
    group.throughput(Throughput::Bytes(size as u64));

    let mut functions: Vec<(&str, Box<dyn HashFunction>)> = vec![
        ("jenkins-oaat", Box::new(JenkinsOneAtATime::new())),
        ("fnv1a-64", Box::new(Fnv1a::new(FnvConfig::new(64).unwrap()).unwrap())),
    ];
    #[cfg(feature = "hash-blake3")]
    functions.push(("blake3", Box::new(hashrs::Blake3::default())));

    for (name, function) in &functions {
        group.bench_with_input(BenchmarkId::from_parameter(name), &data, |b, data| {
            b.iter(|| black_box(function.compute_hash(black_box(data)).unwrap()));
        });
    }

    group.finish();
}

fn bench_sources(c: &mut Criterion) {
    let mut group = c.benchmark_group("sources");
    let size = 4 * 1024 * 1024; // 4 MB
    let data: Vec<u8> = (0..size).map(|i| (i * 7 + 13) as u8).collect();
    group.throughput(Throughput::Bytes(size as u64));

    let crc = Crc::default();

    group.bench_function("buffer", |b| {
        b.iter(|| black_box(crc.compute_hash(black_box(&data)).unwrap()));
    });

    group.bench_function("reader", |b| {
        b.iter(|| black_box(crc.compute_hash_reader(Cursor::new(black_box(&data))).unwrap()));
    });

    // Small fragments stress the per-call overhead
    group.bench_function("chunks_64b", |b| {
        b.iter(|| black_box(crc.compute_hash_chunks(black_box(&data).chunks(64)).unwrap()));
    });

    group.finish();
}

criterion_group!(benches, bench_crc_widths, bench_algorithms, bench_sources);
criterion_main!(benches);
