use quadra_core::errors::{ErrorInfo, QuadError};
use serde::{Deserialize, Serialize};

/// How the penalty accumulator resolves two fusions writing the same key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PenaltyMerge {
    /// Add the new coefficient to the existing one.
    #[default]
    Sum,
    /// Replace the existing coefficient with the new one.
    Overwrite,
}

/// Options controlling a single reduction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReduceOpts {
    /// Upper bound on monomial length in the reduced polynomial.
    #[serde(default = "default_max_degree")]
    pub max_degree: usize,
    /// Relative rank of the multiplicity bucket supplying each fusion pair.
    /// `0.0` picks the sparsest bucket, `1.0` the densest.
    #[serde(default = "default_quantile")]
    pub selection_quantile: f64,
    /// Optional cap on the number of graph fusions before the fallback takes over.
    #[serde(default)]
    pub fusion_limit: Option<usize>,
    /// Resolution of colliding penalty keys.
    #[serde(default)]
    pub penalty_merge: PenaltyMerge,
}

fn default_max_degree() -> usize {
    2
}

fn default_quantile() -> f64 {
    1.0
}

impl Default for ReduceOpts {
    fn default() -> Self {
        Self {
            max_degree: default_max_degree(),
            selection_quantile: default_quantile(),
            fusion_limit: None,
            penalty_merge: PenaltyMerge::default(),
        }
    }
}

impl ReduceOpts {
    /// Options targeting `max_degree` with the given selection quantile.
    pub fn new(max_degree: usize, selection_quantile: f64) -> Self {
        Self {
            max_degree,
            selection_quantile,
            ..Self::default()
        }
    }

    /// Rejects a degree bound below one and quantiles outside `[0, 1]`.
    pub fn validate(&self) -> Result<(), QuadError> {
        if self.max_degree < 1 {
            return Err(QuadError::Input(
                ErrorInfo::new("invalid-max-degree", "max degree must be at least one")
                    .with_context("max_degree", self.max_degree)
                    .with_hint("use 2 to target quadratic solvers"),
            ));
        }
        if !(0.0..=1.0).contains(&self.selection_quantile) {
            return Err(QuadError::Input(
                ErrorInfo::new(
                    "invalid-quantile",
                    "selection quantile must lie within [0, 1]",
                )
                .with_context("selection_quantile", self.selection_quantile),
            ));
        }
        Ok(())
    }

    /// Length the fallback folds over-degree monomials down to.
    pub(crate) fn fold_target(&self) -> usize {
        self.max_degree.min(2)
    }
}
