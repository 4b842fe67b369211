//! Criterion micro-benchmarks for the series hot paths: tail append,
//! head removal via bias, and the general removal shift.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use skald_series::Series;

fn bench_append(c: &mut Criterion) {
    let chunk = [0x55u8; 64];
    c.bench_function("append_64_bytes", |b| {
        let mut s: Series<u8> = Series::with_capacity(1 << 16);
        b.iter(|| {
            if s.len() + chunk.len() >= s.capacity() {
                s.reset();
            }
            s.append(black_box(&chunk));
        });
    });
}

fn bench_head_removal(c: &mut Criterion) {
    c.bench_function("head_remove_biased", |b| {
        let mut s: Series<u8> = Series::with_capacity(1 << 16);
        s.append(&[1u8; 1 << 15]);
        b.iter(|| {
            if s.len() < 8 {
                s.reset();
                s.append(&[1u8; 1 << 15]);
            }
            s.remove(black_box(0), 8).unwrap();
        });
    });
}

fn bench_mid_removal(c: &mut Criterion) {
    c.bench_function("mid_remove_shift", |b| {
        let mut s: Series<u8> = Series::with_capacity(1 << 16);
        s.append(&[1u8; 1 << 15]);
        b.iter(|| {
            if s.len() < 16 {
                s.reset();
                s.append(&[1u8; 1 << 15]);
            }
            s.remove(black_box(4), 8).unwrap();
        });
    });
}

criterion_group!(benches, bench_append, bench_head_removal, bench_mid_removal);
criterion_main!(benches);
