use std::collections::BTreeSet;

use quadra_core::{Polynomial, SchemaVersion, Var};
use serde::{Deserialize, Serialize};

/// Schema version of serialized reduction reports.
pub const REPORT_SCHEMA: SchemaVersion = SchemaVersion::new(1, 0, 0);

/// Why the graph phase stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PhaseExit {
    /// The input already satisfied the degree bound; nothing was built.
    AlreadyReduced,
    /// Every live monomial fits the degree bound.
    DegreeSatisfied,
    /// No pair is shared by two or more monomials any more.
    IndexExhausted,
    /// The configured fusion limit was reached.
    FusionLimit,
}

/// Phase that introduced a fresh variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SubstitutionOrigin {
    /// Fusion selected through the ranking index.
    Graph,
    /// Pairwise fold of a single over-degree monomial.
    Fallback,
}

/// One introduced variable `fresh = left AND right`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Substitution {
    /// First replaced variable.
    pub left: Var,
    /// Second replaced variable.
    pub right: Var,
    /// Variable standing for their product.
    pub fresh: Var,
    /// Phase that performed the substitution.
    pub origin: SubstitutionOrigin,
}

/// Structured summary of a reduction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReductionReport {
    /// Schema version for the report payload.
    pub schema_version: SchemaVersion,
    /// Canonical hash of the input polynomial.
    pub input_hash: String,
    /// Canonical hash of the reduced polynomial.
    pub reduced_hash: String,
    /// Canonical hash of the penalty polynomial.
    pub penalty_hash: String,
    /// Degree bound requested by the caller.
    pub max_degree: usize,
    /// Selection quantile used for the graph phase.
    pub selection_quantile: f64,
    /// Reason the graph phase ended.
    pub phase_exit: PhaseExit,
    /// Number of fusions performed by the graph phase.
    pub graph_fusions: usize,
    /// Number of pairwise folds performed by the fallback.
    pub fallback_folds: usize,
    /// First id available for fresh variables.
    pub first_fresh_variable: Var,
    /// First id left unused after the reduction.
    pub next_variable: Var,
    /// Number of penalty keys written more than once.
    pub penalty_collisions: usize,
    /// Every substitution in the order it was made.
    pub substitutions: Vec<Substitution>,
    /// Hash of this report with the field itself left empty.
    pub report_hash: String,
}

/// Output of a reduction: the rewritten polynomial and its penalty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reduction {
    /// Polynomial with every monomial within the degree bound.
    pub reduced: Polynomial,
    /// Penalty terms to add (optionally scaled) to the objective.
    pub penalty: Polynomial,
    /// Summary of how the reduction went.
    pub report: ReductionReport,
}

impl Reduction {
    /// The objective handed to a solver: `reduced + penalty_scale * penalty`.
    pub fn objective(&self, penalty_scale: f64) -> Polynomial {
        self.reduced.add_scaled(&self.penalty, penalty_scale)
    }

    /// Extends an assignment of the original variables with consistent fresh
    /// variables, each set exactly when both of its replaced variables are.
    pub fn auxiliary_assignment(&self, ones: &BTreeSet<Var>) -> BTreeSet<Var> {
        let mut extended = ones.clone();
        for substitution in &self.report.substitutions {
            if extended.contains(&substitution.left) && extended.contains(&substitution.right) {
                extended.insert(substitution.fresh);
            }
        }
        extended
    }

    /// Splits the reduction into `(reduced, penalty)`.
    pub fn into_parts(self) -> (Polynomial, Polynomial) {
        (self.reduced, self.penalty)
    }
}
