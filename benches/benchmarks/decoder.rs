use criterion::{black_box, criterion_group, Criterion};

use huffpack::{compress, decompress};

use crate::benchmarks::get_text;

fn decoding_speed(c: &mut Criterion) {
    let text = get_text(0);
    let artifact = compress(&text).unwrap();

    c.bench_function("decompress 1M symbols", |b| {
        b.iter(|| decompress(black_box(artifact.clone())).unwrap())
    });
}

criterion_group!(decoder_benches, decoding_speed);
