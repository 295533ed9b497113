use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use quadra_core::{Monomial, Polynomial, Var};
use quadra_reduce::reduce;

fn quartic_fixture(n: u64, stride: u64) -> Polynomial {
    let mut terms = Vec::new();
    for a in 0..n {
        for b in a + 1..n {
            for c in b + 1..n {
                for d in c + 1..n {
                    if (a * 7 + b * 5 + c * 3 + d) % stride == 0 {
                        let vars = [a, b, c, d].map(Var::from_raw);
                        if let Ok(monomial) = Monomial::from_vars(vars) {
                            terms.push((monomial, 4.3));
                        }
                    }
                }
            }
        }
    }
    Polynomial::from_monomials(terms)
}

fn reduce_bench(c: &mut Criterion) {
    let poly = quartic_fixture(24, 5);
    let mut group = c.benchmark_group("reduce_quartic_24");
    for quantile in [0.0, 0.5, 1.0] {
        group.bench_with_input(BenchmarkId::from_parameter(quantile), &quantile, |b, q| {
            b.iter(|| {
                let reduction = reduce(black_box(&poly), 2, *q).unwrap();
                black_box(reduction);
            });
        });
    }
    group.finish();
}

criterion_group!(benches, reduce_bench);
criterion_main!(benches);
