use std::fmt;

use quadra_core::{Monomial, QuadError, Var};
use serde::{Deserialize, Serialize};

/// Stable surrogate key assigned to each input monomial for one reduction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MonomialId(u64);

impl MonomialId {
    /// Creates a new identifier from its raw integer representation.
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw integer representation of the identifier.
    pub fn as_raw(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for MonomialId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "m{}", self.0)
    }
}

/// Converts a [`MonomialId`] into its slot within the index storage.
pub(crate) fn monomial_index(id: MonomialId) -> usize {
    id.as_raw() as usize
}

/// Creates a [`MonomialId`] from a storage slot.
pub(crate) fn make_monomial(index: usize) -> MonomialId {
    MonomialId::from_raw(index as u64)
}

/// Unordered pair of distinct variables, stored with the smaller id first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VarPair {
    lo: Var,
    hi: Var,
}

impl VarPair {
    /// Creates the canonical pair for `a` and `b`.
    ///
    /// The endpoints must differ; pairs are only ever formed from distinct
    /// variables of one monomial.
    pub fn new(a: Var, b: Var) -> Self {
        debug_assert_ne!(a, b, "variable pairs require distinct endpoints");
        if a <= b {
            Self { lo: a, hi: b }
        } else {
            Self { lo: b, hi: a }
        }
    }

    /// Smaller endpoint.
    pub fn lo(&self) -> Var {
        self.lo
    }

    /// Larger endpoint.
    pub fn hi(&self) -> Var {
        self.hi
    }

    /// Returns whether `var` is one of the endpoints.
    pub fn contains(&self, var: Var) -> bool {
        self.lo == var || self.hi == var
    }

    /// Quadratic monomial over both endpoints.
    pub fn to_monomial(&self) -> Result<Monomial, QuadError> {
        Monomial::pair(self.lo, self.hi)
    }
}

impl fmt::Display for VarPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.lo, self.hi)
    }
}

/// Every unordered pair of variables within `vars`, in lexicographic order of positions.
pub fn monomial_pairs(vars: &[Var]) -> Vec<VarPair> {
    let mut pairs = Vec::with_capacity(vars.len() * vars.len().saturating_sub(1) / 2);
    for (i, a) in vars.iter().enumerate() {
        for b in &vars[i + 1..] {
            pairs.push(VarPair::new(*a, *b));
        }
    }
    pairs
}
