//! Pseudo-Boolean polynomials keyed by normalised monomials.

use std::collections::{btree_map, BTreeMap, BTreeSet};
use std::ops::Add;

use serde::{Deserialize, Serialize};

use crate::errors::QuadError;
use crate::monomial::Monomial;
use crate::Var;

/// Mapping from monomial to real coefficient.
///
/// Keys are unique by construction. Serialized as an ordered list of
/// `[[vars...], coefficient]` terms.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "Vec<(Monomial, f64)>", into = "Vec<(Monomial, f64)>")]
pub struct Polynomial {
    terms: BTreeMap<Monomial, f64>,
}

impl Polynomial {
    /// Creates an empty polynomial.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a polynomial from raw integer variable names.
    ///
    /// Every monomial is validated before anything is inserted. Terms whose
    /// monomials normalise to the same key are combined by addition.
    pub fn from_terms(terms: impl IntoIterator<Item = (Vec<i64>, f64)>) -> Result<Self, QuadError> {
        let validated = terms
            .into_iter()
            .map(|(vars, coefficient)| Monomial::new(&vars).map(|m| (m, coefficient)))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::from_monomials(validated))
    }

    /// Builds a polynomial from already validated monomials, adding coefficients of
    /// repeated keys.
    pub fn from_monomials(terms: impl IntoIterator<Item = (Monomial, f64)>) -> Self {
        let mut poly = Self::new();
        for (monomial, coefficient) in terms {
            *poly.terms.entry(monomial).or_insert(0.0) += coefficient;
        }
        poly
    }

    /// Sets the coefficient of `monomial`, returning the previous one.
    pub fn insert(&mut self, monomial: Monomial, coefficient: f64) -> Option<f64> {
        self.terms.insert(monomial, coefficient)
    }

    /// Removes `monomial`, returning its coefficient.
    pub fn remove(&mut self, monomial: &Monomial) -> Option<f64> {
        self.terms.remove(monomial)
    }

    /// Returns the coefficient of `monomial`.
    pub fn get(&self, monomial: &Monomial) -> Option<f64> {
        self.terms.get(monomial).copied()
    }

    /// Returns whether `monomial` is a key.
    pub fn contains(&self, monomial: &Monomial) -> bool {
        self.terms.contains_key(monomial)
    }

    /// Iterates over terms in canonical order.
    pub fn iter(&self) -> btree_map::Iter<'_, Monomial, f64> {
        self.terms.iter()
    }

    /// Iterates over monomials in canonical order.
    pub fn monomials(&self) -> btree_map::Keys<'_, Monomial, f64> {
        self.terms.keys()
    }

    /// Number of terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns whether the polynomial has no terms.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Largest monomial length, `0` for the empty polynomial.
    pub fn degree(&self) -> usize {
        self.terms.keys().map(Monomial::degree).max().unwrap_or(0)
    }

    /// All variables occurring in any monomial.
    pub fn variables(&self) -> BTreeSet<Var> {
        self.terms
            .keys()
            .flat_map(|monomial| monomial.vars().iter().copied())
            .collect()
    }

    /// Largest variable occurring in any monomial.
    pub fn max_variable(&self) -> Option<Var> {
        self.terms.keys().filter_map(Monomial::max_var).max()
    }

    /// Returns `self + scale * other`.
    pub fn add_scaled(&self, other: &Polynomial, scale: f64) -> Polynomial {
        let mut sum = self.clone();
        for (monomial, coefficient) in other.iter() {
            *sum.terms.entry(monomial.clone()).or_insert(0.0) += scale * coefficient;
        }
        sum
    }

    /// Evaluates the polynomial where exactly the variables in `ones` are set.
    pub fn evaluate(&self, ones: &BTreeSet<Var>) -> f64 {
        self.terms
            .iter()
            .filter(|(monomial, _)| monomial.evaluate(ones))
            .map(|(_, coefficient)| coefficient)
            .sum()
    }
}

impl Add<&Polynomial> for &Polynomial {
    type Output = Polynomial;

    fn add(self, rhs: &Polynomial) -> Polynomial {
        self.add_scaled(rhs, 1.0)
    }
}

impl From<Vec<(Monomial, f64)>> for Polynomial {
    fn from(value: Vec<(Monomial, f64)>) -> Self {
        Self::from_monomials(value)
    }
}

impl From<Polynomial> for Vec<(Monomial, f64)> {
    fn from(value: Polynomial) -> Self {
        value.terms.into_iter().collect()
    }
}

impl FromIterator<(Monomial, f64)> for Polynomial {
    fn from_iter<T: IntoIterator<Item = (Monomial, f64)>>(iter: T) -> Self {
        Self::from_monomials(iter)
    }
}

impl<'a> IntoIterator for &'a Polynomial {
    type Item = (&'a Monomial, &'a f64);
    type IntoIter = btree_map::Iter<'a, Monomial, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.iter()
    }
}
