use quadra_core::{Polynomial, QuadError, Var};
use tracing::warn;

use crate::params::PenaltyMerge;
use crate::substitute::penalty_terms;

/// Collects the penalty contributed by every fusion into one polynomial.
#[derive(Debug, Clone, Default)]
pub struct PenaltyAccumulator {
    terms: Polynomial,
    merge: PenaltyMerge,
    collisions: usize,
}

impl PenaltyAccumulator {
    /// Creates an empty accumulator using `merge` for repeated keys.
    pub fn new(merge: PenaltyMerge) -> Self {
        Self {
            terms: Polynomial::new(),
            merge,
            collisions: 0,
        }
    }

    /// Emits the four canonical terms for fusing `left` and `right` into `fresh`.
    pub fn emit(&mut self, left: Var, right: Var, fresh: Var) -> Result<(), QuadError> {
        for (monomial, coefficient) in penalty_terms(left, right, fresh)?.iter() {
            let merged = match self.terms.get(monomial) {
                Some(existing) => {
                    self.collisions += 1;
                    warn!(
                        key = %monomial,
                        existing,
                        incoming = *coefficient,
                        merge = ?self.merge,
                        "penalty key written by more than one fusion"
                    );
                    match self.merge {
                        PenaltyMerge::Sum => existing + coefficient,
                        PenaltyMerge::Overwrite => *coefficient,
                    }
                }
                None => *coefficient,
            };
            self.terms.insert(monomial.clone(), merged);
        }
        Ok(())
    }

    /// Number of keys that were written more than once.
    pub fn collisions(&self) -> usize {
        self.collisions
    }

    /// Accumulated penalty so far.
    pub fn terms(&self) -> &Polynomial {
        &self.terms
    }

    /// Consumes the accumulator, returning the penalty polynomial.
    pub fn into_polynomial(self) -> Polynomial {
        self.terms
    }
}
