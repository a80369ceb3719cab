use criterion::{black_box, criterion_group, Criterion};

use huffpack::compress;

use crate::benchmarks::get_text;

fn encoding_speed(c: &mut Criterion) {
    let text = get_text(0);

    c.bench_function("compress 1M symbols", |b| {
        b.iter(|| compress(black_box(&text)).unwrap())
    });
}

criterion_group!(encoder_benches, encoding_speed);
