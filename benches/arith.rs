use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mlkem512_algebra::encode;
use mlkem512_algebra::params::N;
use mlkem512_algebra::Poly;

fn sample_poly(seed: i16) -> Poly {
    let mut p = Poly::ZERO;
    for (i, c) in p.0.iter_mut().enumerate() {
        *c = ((i as i16).wrapping_mul(seed).wrapping_add(1)) % 3329;
    }
    p.reduce();
    p
}

fn bench_ntt(c: &mut Criterion) {
    let base = sample_poly(7);
    c.bench_function("ntt_forward", |b| {
        b.iter(|| {
            let mut p = base;
            p.to_montgomery();
            p.ntt();
            black_box(p)
        })
    });
}

fn bench_ntt_inverse(c: &mut Criterion) {
    let mut base = sample_poly(7);
    base.to_montgomery();
    base.ntt();
    c.bench_function("ntt_inverse", |b| {
        b.iter(|| {
            let mut p = base;
            p.ntt_inverse();
            black_box(p)
        })
    });
}

fn bench_poly_mul(c: &mut Criterion) {
    let a = sample_poly(11);
    let b = sample_poly(23);
    c.bench_function("poly_mul", |bencher| {
        bencher.iter(|| black_box(a.mul(&b)))
    });
}

fn bench_compress(c: &mut Criterion) {
    let a = sample_poly(17);
    c.bench_function("poly_compress_d10", |b| {
        b.iter(|| {
            let mut p = a;
            p.compress(10);
            black_box(p)
        })
    });
}

fn bench_byte_encode(c: &mut Criterion) {
    let a = sample_poly(19);
    let mut out = [0u8; 32 * 12];
    c.bench_function("byte_encode_d12", |b| {
        b.iter(|| {
            encode::byte_encode(&a.0, 12, &mut out);
            black_box(&out[..N])
        })
    });
}

criterion_group!(
    benches,
    bench_ntt,
    bench_ntt_inverse,
    bench_poly_mul,
    bench_compress,
    bench_byte_encode
);
criterion_main!(benches);
