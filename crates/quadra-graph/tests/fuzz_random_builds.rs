use proptest::prelude::*;
use quadra_core::Polynomial;
use quadra_graph::{build_graph, monomial_pairs};

fn polynomial_strategy() -> impl Strategy<Value = Polynomial> {
    proptest::collection::vec(
        (proptest::collection::btree_set(0i64..10, 1..6), -4i32..5),
        0..12,
    )
    .prop_map(|terms| {
        Polynomial::from_terms(
            terms
                .into_iter()
                .map(|(vars, c)| (vars.into_iter().collect(), f64::from(c))),
        )
        .unwrap()
    })
}

proptest! {
    #[test]
    fn multiplicity_counts_monomials_sharing_a_pair(poly in polynomial_strategy()) {
        let (index, graph) = build_graph(&poly);
        prop_assert_eq!(index.len(), poly.len());
        prop_assert_eq!(index.max_degree(), poly.degree());
        prop_assert_eq!(graph.node_count(), poly.variables().len());

        let mut total = 0;
        for (pair, multiplicity) in graph.pairs() {
            let expected = poly
                .monomials()
                .filter(|m| m.contains(pair.lo()) && m.contains(pair.hi()))
                .count();
            prop_assert_eq!(multiplicity, expected);
            total += multiplicity;
        }
        prop_assert_eq!(total, graph.edge_count());

        let expected_edges: usize = poly.monomials().map(|m| monomial_pairs(m.vars()).len()).sum();
        prop_assert_eq!(graph.edge_count(), expected_edges);
    }
}
