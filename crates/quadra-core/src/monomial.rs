//! Normalised products of distinct binary variables.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{ErrorInfo, QuadError};
use crate::Var;

/// Product of distinct binary variables stored in ascending order.
///
/// The ordering is a canonical form only: two monomials over the same set of
/// variables compare equal and hash identically. The empty monomial is the
/// constant term.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<u64>", into = "Vec<u64>")]
pub struct Monomial(Vec<Var>);

impl Monomial {
    /// Validates raw integer variable names and builds a normalised monomial.
    ///
    /// Negative names are rejected with `negative-variable`, repeated names with
    /// `duplicate-variable`.
    pub fn new(raw: &[i64]) -> Result<Self, QuadError> {
        let mut vars = Vec::with_capacity(raw.len());
        for (position, value) in raw.iter().enumerate() {
            let id = u64::try_from(*value).map_err(|_| {
                QuadError::Input(
                    ErrorInfo::new("negative-variable", "variable ids must be non-negative")
                        .with_context("variable", value)
                        .with_context("position", position)
                        .with_hint("rename variables to consecutive non-negative integers"),
                )
            })?;
            vars.push(Var::from_raw(id));
        }
        Self::from_vars(vars)
    }

    /// Builds a normalised monomial from typed variables, rejecting duplicates.
    pub fn from_vars(vars: impl IntoIterator<Item = Var>) -> Result<Self, QuadError> {
        let mut sorted: Vec<Var> = vars.into_iter().collect();
        sorted.sort_unstable();
        if let Some(window) = sorted.windows(2).find(|window| window[0] == window[1]) {
            return Err(QuadError::Input(
                ErrorInfo::new(
                    "duplicate-variable",
                    "a monomial may contain each variable at most once",
                )
                .with_context("variable", window[0]),
            ));
        }
        Ok(Self(sorted))
    }

    /// The empty (constant) monomial.
    pub fn unit() -> Self {
        Self(Vec::new())
    }

    /// Single variable monomial.
    pub fn single(var: Var) -> Self {
        Self(vec![var])
    }

    /// Quadratic monomial over two variables.
    pub fn pair(a: Var, b: Var) -> Result<Self, QuadError> {
        Self::from_vars([a, b])
    }

    /// Variables in ascending order.
    pub fn vars(&self) -> &[Var] {
        &self.0
    }

    /// Number of variables in the product.
    pub fn degree(&self) -> usize {
        self.0.len()
    }

    /// Returns whether this is the constant monomial.
    pub fn is_unit(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns whether `var` occurs in the product.
    pub fn contains(&self, var: Var) -> bool {
        self.0.binary_search(&var).is_ok()
    }

    /// Largest variable occurring in the product.
    pub fn max_var(&self) -> Option<Var> {
        self.0.last().copied()
    }

    /// Evaluates the product under a binary assignment.
    ///
    /// Variables missing from `ones` are treated as zero.
    pub fn evaluate(&self, ones: &BTreeSet<Var>) -> bool {
        self.0.iter().all(|var| ones.contains(var))
    }
}

impl fmt::Display for Monomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (idx, var) in self.0.iter().enumerate() {
            if idx > 0 {
                write!(f, ",")?;
            }
            write!(f, "{var}")?;
        }
        if self.0.len() == 1 {
            write!(f, ",")?;
        }
        write!(f, ")")
    }
}

impl TryFrom<Vec<u64>> for Monomial {
    type Error = QuadError;

    fn try_from(value: Vec<u64>) -> Result<Self, Self::Error> {
        Self::from_vars(value.into_iter().map(Var::from_raw))
    }
}

impl From<Monomial> for Vec<u64> {
    fn from(value: Monomial) -> Self {
        value.0.into_iter().map(|var| var.as_raw()).collect()
    }
}
