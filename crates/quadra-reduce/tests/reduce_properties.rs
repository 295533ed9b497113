use std::collections::BTreeSet;

use proptest::prelude::*;
use quadra_core::{Polynomial, Var};
use quadra_reduce::{reduce, reduce_with, ReduceOpts};

fn polynomial_strategy() -> impl Strategy<Value = Polynomial> {
    proptest::collection::vec(
        (proptest::collection::btree_set(0i64..9, 1..6), -6i32..7),
        1..14,
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

fn sorted_coefficients(poly: &Polynomial) -> Vec<f64> {
    let mut coefficients: Vec<f64> = poly.iter().map(|(_, c)| *c).collect();
    coefficients.sort_by(|a, b| a.total_cmp(b));
    coefficients
}

proptest! {
    #[test]
    fn reduction_postconditions_hold(
        poly in polynomial_strategy(),
        max_degree in 1usize..4,
        quantile in 0.0f64..=1.0,
    ) {
        let reduction = reduce(&poly, max_degree, quantile).unwrap();

        // degree bound
        prop_assert!(reduction.reduced.degree() <= max_degree);

        // coefficients are relabelled, never altered or dropped
        prop_assert_eq!(sorted_coefficients(&poly), sorted_coefficients(&reduction.reduced));

        // fresh variables are new and never reused
        let max_input = poly.max_variable().map(|v| v.as_raw());
        let mut seen = BTreeSet::new();
        for substitution in &reduction.report.substitutions {
            if let Some(max_input) = max_input {
                prop_assert!(substitution.fresh.as_raw() > max_input);
            }
            prop_assert!(seen.insert(substitution.fresh));
        }
        let introduced: BTreeSet<Var> = reduction
            .reduced
            .variables()
            .union(&reduction.penalty.variables())
            .copied()
            .filter(|var| !poly.variables().contains(var))
            .collect();
        prop_assert!(introduced.is_subset(&seen));

        // penalty shape
        for (monomial, _) in reduction.penalty.iter() {
            prop_assert!(matches!(monomial.degree(), 1 | 2));
        }
        prop_assert_eq!(
            reduction.penalty.len(),
            4 * reduction.report.substitutions.len() - reduction.report.penalty_collisions
        );
    }

    #[test]
    fn consistent_auxiliaries_preserve_the_objective(
        poly in polynomial_strategy(),
        quantile in 0.0f64..=1.0,
        mask in any::<u16>(),
    ) {
        let reduction = reduce(&poly, 2, quantile).unwrap();
        let ones: BTreeSet<Var> = poly
            .variables()
            .into_iter()
            .filter(|var| mask & (1u16 << var.as_raw()) != 0)
            .collect();
        let extended = reduction.auxiliary_assignment(&ones);
        prop_assert_eq!(reduction.reduced.evaluate(&extended), poly.evaluate(&ones));
        prop_assert_eq!(reduction.penalty.evaluate(&extended), 0.0);
    }

    #[test]
    fn penalty_is_never_negative(
        poly in polynomial_strategy(),
        limit in proptest::option::of(0usize..3),
        mask in any::<u64>(),
    ) {
        let opts = ReduceOpts { fusion_limit: limit, ..ReduceOpts::default() };
        let reduction = reduce_with(&poly, &opts).unwrap();
        let ones: BTreeSet<Var> = reduction
            .penalty
            .variables()
            .into_iter()
            .filter(|var| mask & (1u64 << (var.as_raw() % 64)) != 0)
            .collect();
        prop_assert!(reduction.penalty.evaluate(&ones) >= 0.0);
    }

    #[test]
    fn reductions_are_deterministic(poly in polynomial_strategy(), quantile in 0.0f64..=1.0) {
        let a = reduce(&poly, 2, quantile).unwrap();
        let b = reduce(&poly, 2, quantile).unwrap();
        prop_assert_eq!(&a.report.report_hash, &b.report.report_hash);
        prop_assert_eq!(a, b);
    }
}
