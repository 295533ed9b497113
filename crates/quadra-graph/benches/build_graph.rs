use criterion::{black_box, criterion_group, criterion_main, Criterion};
use quadra_core::{Monomial, Polynomial, Var};
use quadra_graph::build_graph;

fn quartic_fixture(n: u64) -> Polynomial {
    let mut terms = Vec::new();
    for a in 0..n {
        for b in a + 1..n {
            for c in b + 1..n {
                for d in c + 1..n {
                    if (a + b + c + d) % 3 == 0 {
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

fn build_graph_bench(c: &mut Criterion) {
    let poly = quartic_fixture(30);
    c.bench_function("build_graph_quartic_30", |b| {
        b.iter(|| {
            let built = build_graph(black_box(&poly));
            black_box(built);
        });
    });
}

criterion_group!(benches, build_graph_bench);
criterion_main!(benches);
