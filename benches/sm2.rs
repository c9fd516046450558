// Benchmarks for the SM2 arithmetic core and the two public-key schemes

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gmcrypt::ec::{self, Curve};
use gmcrypt::{pke, sign};
use rand::rngs::OsRng;

fn bench_scalar_mult(c: &mut Criterion) {
    let curve = Curve::sm2();
    let mut group = c.benchmark_group("sm2-scalar-mult");

    group.bench_function("base-point", |b| {
        let k = curve.random_scalar(&mut OsRng);
        b.iter(|| black_box(ec::scalar_mult_base(&curve, &k)))
    });

    group.bench_function("arbitrary-point", |b| {
        let k = curve.random_scalar(&mut OsRng);
        let p = ec::scalar_mult_base(&curve, &curve.random_scalar(&mut OsRng));
        b.iter(|| black_box(ec::scalar_mult(&curve, &k, &p)))
    });

    group.finish();
}

fn bench_pke(c: &mut Criterion) {
    let curve = Curve::sm2();
    let keypair = ec::generate_keypair(&curve, &mut OsRng);
    let message = vec![0xA5u8; 64];
    let mut group = c.benchmark_group("sm2-pke");

    group.bench_function("encrypt-64B", |b| {
        b.iter(|| {
            black_box(pke::encrypt(&curve, &message, keypair.public_key(), &mut OsRng).unwrap())
        })
    });

    let ct = pke::encrypt(&curve, &message, keypair.public_key(), &mut OsRng)
        .unwrap()
        .to_bytes(&curve);
    group.bench_function("decrypt-64B", |b| {
        b.iter(|| black_box(pke::decrypt(&curve, &ct, keypair.private_key()).unwrap()))
    });

    group.finish();
}

fn bench_sign(c: &mut Criterion) {
    let curve = Curve::sm2();
    let keypair = ec::generate_keypair(&curve, &mut OsRng);
    let message = b"benchmark payload";
    let mut group = c.benchmark_group("sm2-sign");

    group.bench_function("sign", |b| {
        b.iter(|| black_box(sign::sign(&curve, message, keypair.private_key(), &mut OsRng).unwrap()))
    });

    let sig = sign::sign(&curve, message, keypair.private_key(), &mut OsRng).unwrap();
    group.bench_function("verify", |b| {
        b.iter(|| black_box(sign::verify(&curve, message, &sig, keypair.public_key())))
    });

    group.finish();
}

criterion_group!(benches, bench_scalar_mult, bench_pke, bench_sign);
criterion_main!(benches);
