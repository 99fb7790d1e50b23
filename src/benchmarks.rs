use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use decmul::{karatsuba_mul, schoolbook_mul, BigInt};
use rand::{Rng, SeedableRng};

fn random_bigint(rng: &mut rand_chacha::ChaCha8Rng, size: usize) -> BigInt {
    let digits: String = (0..size)
        .map(|i| {
            // Keep the leading digit nonzero so the operand really has `size` digits.
            let low = if i == 0 { 1 } else { 0 };
            char::from(b'0' + rng.gen_range(low..10u8))
        })
        .collect();
    digits.parse().unwrap()
}

fn bench_multiplication(c: &mut Criterion) {
    let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(0);
    let mut group = c.benchmark_group("mul");
    for &size in [100usize, 1000, 10000].iter() {
        let a = random_bigint(&mut rng, size);
        let b = random_bigint(&mut rng, size);
        group.bench_with_input(BenchmarkId::new("schoolbook", size), &size, |bench, _| {
            bench.iter(|| schoolbook_mul(black_box(&a), black_box(&b)))
        });
        group.bench_with_input(BenchmarkId::new("karatsuba", size), &size, |bench, _| {
            bench.iter(|| karatsuba_mul(black_box(&a), black_box(&b)))
        });
    }
    group.finish();
}
fn bench_add_assign(c: &mut Criterion) {
    let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(0);
    let a = random_bigint(&mut rng, 1000);
    let b = random_bigint(&mut rng, 1000);
    c.bench_function("add_assign", |bench| {
        bench.iter(|| {
            let mut sum = a.clone();
            sum += &b;
            sum
        })
    });
}
fn bench_scalar_mul(c: &mut Criterion) {
    let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(0);
    let a = random_bigint(&mut rng, 1000);
    c.bench_function("scalar_mul_1k", |bench| {
        bench.iter(|| &a * black_box(7919u32))
    });
}

fn profiled() -> Criterion {
    Criterion::default().sample_size(10)
}
criterion_group!(
    name = benches;
    config = profiled();
    targets =
        bench_multiplication,
        bench_add_assign,
        bench_scalar_mul,
);
criterion_main!(benches);
