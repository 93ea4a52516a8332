use criterion::{criterion_group, criterion_main, Criterion};
use miff_pvr::decode::{decode_linear, decode_twiddled, decode_vq, CODEBOOK_SIZE};
use miff_pvr::pixel::{Argb4444, Rgb565};
use std::hint::black_box;

#[cfg(not(target_os = "windows"))]
use pprof::criterion::{Output, PProfProfiler};

const WIDTH: u32 = 1024;
const HEIGHT: u32 = 1024;

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Texture Decode");

    // Simple repeating pattern; real textures have more variety but the decoders
    // are not data dependent.
    let texel_bytes = (WIDTH * HEIGHT * 2) as usize;
    let direct: Vec<u8> = (0..texel_bytes).map(|i| (i % 251) as u8).collect();

    let index_bytes = (WIDTH * HEIGHT / 4) as usize;
    let vq: Vec<u8> = (0..CODEBOOK_SIZE + 1 + index_bytes)
        .map(|i| (i % 253) as u8)
        .collect();

    group.throughput(criterion::Throughput::Elements((WIDTH * HEIGHT) as u64));

    group.bench_function("twiddled_rgb565", |b| {
        b.iter(|| decode_twiddled::<Rgb565>(black_box(&direct), WIDTH, HEIGHT).unwrap())
    });

    group.bench_function("linear_rgb565", |b| {
        b.iter(|| decode_linear::<Rgb565>(black_box(&direct), WIDTH, HEIGHT).unwrap())
    });

    group.bench_function("vq_argb4444", |b| {
        b.iter(|| decode_vq::<Argb4444>(black_box(&vq), WIDTH, HEIGHT).unwrap())
    });

    group.finish();
}

#[cfg(not(target_os = "windows"))]
criterion_group! {
    name = benches;
    config = Criterion::default().with_profiler(PProfProfiler::new(100, Output::Flamegraph(None)));
    targets = criterion_benchmark
}

#[cfg(target_os = "windows")]
criterion_group! {
    name = benches;
    config = Criterion::default();
    targets = criterion_benchmark
}

criterion_main!(benches);
