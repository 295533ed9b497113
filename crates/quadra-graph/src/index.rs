use std::collections::BTreeMap;

use quadra_core::errors::{ErrorInfo, QuadError};
use quadra_core::{Monomial, Polynomial};

use crate::ids::{make_monomial, monomial_index, MonomialId};

/// Bidirectional mapping between stable monomial ids and their current variables.
///
/// Ids are assigned once, in canonical polynomial order, and never change;
/// the monomial behind an id is rewritten as fusions proceed. A histogram of
/// monomial lengths is kept alongside so the live maximum degree is available
/// without a scan.
#[derive(Debug, Clone, Default)]
pub struct MonomialIndex {
    entries: Vec<Monomial>,
    degree_histogram: BTreeMap<usize, usize>,
}

impl MonomialIndex {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Assigns an id to every monomial of `poly`.
    pub fn from_polynomial(poly: &Polynomial) -> Self {
        let mut index = Self::new();
        for monomial in poly.monomials() {
            index.push(monomial.clone());
        }
        index
    }

    /// Registers a new monomial and returns its id.
    pub fn push(&mut self, monomial: Monomial) -> MonomialId {
        let id = make_monomial(self.entries.len());
        *self.degree_histogram.entry(monomial.degree()).or_insert(0) += 1;
        self.entries.push(monomial);
        id
    }

    /// Returns the current monomial behind `id`.
    pub fn get(&self, id: MonomialId) -> Result<&Monomial, QuadError> {
        self.entries
            .get(monomial_index(id))
            .ok_or_else(|| unknown_monomial(id))
    }

    /// Rewrites the monomial behind `id`, returning the previous one.
    pub fn replace(&mut self, id: MonomialId, monomial: Monomial) -> Result<Monomial, QuadError> {
        let slot = self
            .entries
            .get_mut(monomial_index(id))
            .ok_or_else(|| unknown_monomial(id))?;
        let previous = std::mem::replace(slot, monomial);
        let new_degree = slot.degree();
        decrement(&mut self.degree_histogram, previous.degree());
        *self.degree_histogram.entry(new_degree).or_insert(0) += 1;
        Ok(previous)
    }

    /// Iterates over `(id, monomial)` pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (MonomialId, &Monomial)> + '_ {
        self.entries
            .iter()
            .enumerate()
            .map(|(idx, monomial)| (make_monomial(idx), monomial))
    }

    /// Ids whose monomial is longer than `limit`.
    pub fn over_degree(&self, limit: usize) -> Vec<MonomialId> {
        self.iter()
            .filter(|(_, monomial)| monomial.degree() > limit)
            .map(|(id, _)| id)
            .collect()
    }

    /// Length of the longest live monomial, `0` when empty.
    pub fn max_degree(&self) -> usize {
        self.degree_histogram.keys().next_back().copied().unwrap_or(0)
    }

    /// Number of registered monomials.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether no monomial is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn decrement(histogram: &mut BTreeMap<usize, usize>, degree: usize) {
    if let Some(count) = histogram.get_mut(&degree) {
        *count -= 1;
        if *count == 0 {
            histogram.remove(&degree);
        }
    }
}

fn unknown_monomial(id: MonomialId) -> QuadError {
    QuadError::Graph(
        ErrorInfo::new("unknown-monomial", "monomial id does not exist")
            .with_context("monomial", id),
    )
}
