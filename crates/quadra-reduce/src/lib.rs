#![deny(missing_docs)]
#![doc = "Graph-based quadratisation of pseudo-Boolean polynomials with a chained pairwise fallback."]

mod engine;
/// Pairwise chained folding of single monomials.
pub mod fallback;
/// Penalty term accumulation.
pub mod penalty;
/// Reduction options.
pub mod params;
/// Multiplicity-ranked selection of fusion pairs.
pub mod ranking;
/// Reduction outputs and summary reports.
pub mod report;
/// Serde helpers for JSON artefacts.
#[path = "serde.rs"]
pub mod serde_io;
/// Single-pair rewrite and penalty helpers.
pub mod substitute;

use quadra_core::{canonical_hash, hash_json, Polynomial, QuadError, Var};
use tracing::info;

use engine::Engine;

pub use fallback::fold_chain;
pub use params::{PenaltyMerge, ReduceOpts};
pub use penalty::PenaltyAccumulator;
pub use ranking::RankingIndex;
pub use report::{
    PhaseExit, Reduction, ReductionReport, Substitution, SubstitutionOrigin, REPORT_SCHEMA,
};
pub use substitute::{penalty_terms, substitute};

/// Reduces `poly` so that no monomial is longer than `max_degree`.
///
/// `selection_quantile` chooses which multiplicity bucket feeds each fusion:
/// `0.0` the sparsest, `1.0` the densest. Returns the reduced polynomial, the
/// penalty terms the caller must add to the objective, and a report.
pub fn reduce(
    poly: &Polynomial,
    max_degree: usize,
    selection_quantile: f64,
) -> Result<Reduction, QuadError> {
    reduce_with(poly, &ReduceOpts::new(max_degree, selection_quantile))
}

/// Reduces `poly` under the full set of options.
///
/// Options are validated before any state is built, so an error never comes
/// with a partial result.
pub fn reduce_with(poly: &Polynomial, opts: &ReduceOpts) -> Result<Reduction, QuadError> {
    opts.validate()?;
    let first_fresh = match poly.max_variable() {
        Some(var) => var.checked_next().ok_or_else(|| {
            QuadError::input(
                "variable-space-exhausted",
                "input already uses the largest variable id",
            )
            .with_context("variable", var)
        })?,
        None => Var::from_raw(0),
    };

    if poly.degree() <= opts.max_degree {
        return build_reduction(
            poly,
            opts,
            PhaseExit::AlreadyReduced,
            first_fresh,
            engine::EngineOutput {
                reduced: poly.clone(),
                penalty: Polynomial::new(),
                penalty_collisions: 0,
                next_var: first_fresh,
                substitutions: Vec::new(),
                graph_fusions: 0,
                fallback_folds: 0,
            },
        );
    }

    let mut engine = Engine::new(poly, first_fresh, opts);
    let exit = engine.run_graph_phase()?;
    if engine.max_degree() > opts.max_degree {
        engine.run_fallback()?;
    }
    build_reduction(poly, opts, exit, first_fresh, engine.finish())
}

fn build_reduction(
    input: &Polynomial,
    opts: &ReduceOpts,
    phase_exit: PhaseExit,
    first_fresh_variable: Var,
    output: engine::EngineOutput,
) -> Result<Reduction, QuadError> {
    let mut report = ReductionReport {
        schema_version: REPORT_SCHEMA,
        input_hash: canonical_hash(input),
        reduced_hash: canonical_hash(&output.reduced),
        penalty_hash: canonical_hash(&output.penalty),
        max_degree: opts.max_degree,
        selection_quantile: opts.selection_quantile,
        phase_exit,
        graph_fusions: output.graph_fusions,
        fallback_folds: output.fallback_folds,
        first_fresh_variable,
        next_variable: output.next_var,
        penalty_collisions: output.penalty_collisions,
        substitutions: output.substitutions,
        report_hash: String::new(),
    };
    report.report_hash = hash_json(&report)?;
    info!(
        terms = input.len(),
        input_degree = input.degree(),
        reduced_degree = output.reduced.degree(),
        exit = ?phase_exit,
        fusions = report.graph_fusions,
        folds = report.fallback_folds,
        penalty_terms = output.penalty.len(),
        "reduction complete"
    );
    Ok(Reduction {
        reduced: output.reduced,
        penalty: output.penalty,
        report,
    })
}
