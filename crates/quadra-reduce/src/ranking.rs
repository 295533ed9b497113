use std::collections::BTreeMap;

use indexmap::IndexSet;
use quadra_core::errors::{ErrorInfo, QuadError};
use quadra_graph::{CooccurrenceGraph, VarPair};

/// Order statistic over variable pairs keyed by their edge multiplicity.
///
/// Only pairs shared by at least two monomials are tracked. Each pair sits in
/// exactly one bucket, the one matching its current multiplicity, and empty
/// buckets are dropped eagerly. Within a bucket pairs keep insertion order so
/// that selection is reproducible.
#[derive(Debug, Clone, Default)]
pub struct RankingIndex {
    buckets: BTreeMap<usize, IndexSet<VarPair>>,
    placement: BTreeMap<VarPair, usize>,
}

impl RankingIndex {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ranks every pair of `graph`, visiting pairs in canonical order.
    pub fn from_graph(graph: &CooccurrenceGraph) -> Self {
        let mut index = Self::new();
        for (pair, multiplicity) in graph.pairs() {
            index.upsert(pair, multiplicity);
        }
        index
    }

    /// Moves `pair` to the bucket for `multiplicity`, or drops it below two.
    pub fn upsert(&mut self, pair: VarPair, multiplicity: usize) {
        if let Some(previous) = self.placement.remove(&pair) {
            if let Some(bucket) = self.buckets.get_mut(&previous) {
                // shift_remove keeps the insertion order of the remaining pairs
                bucket.shift_remove(&pair);
                if bucket.is_empty() {
                    self.buckets.remove(&previous);
                }
            }
        }
        if multiplicity >= 2 {
            self.buckets.entry(multiplicity).or_default().insert(pair);
            self.placement.insert(pair, multiplicity);
        }
    }

    /// Picks the first-inserted pair of the bucket at relative rank `quantile`.
    ///
    /// Buckets are ranked by ascending multiplicity and the bucket at position
    /// `floor((buckets - 1) * quantile)` is chosen, so the dial interpolates by
    /// rank rather than by multiplicity value. Fails with `empty-index` when
    /// no pair is shared by two or more monomials.
    pub fn select(&self, quantile: f64) -> Result<VarPair, QuadError> {
        let last = self.buckets.len().checked_sub(1).ok_or_else(|| {
            QuadError::Index(ErrorInfo::new(
                "empty-index",
                "no variable pair is shared by two or more monomials",
            ))
        })?;
        let rank = ((last as f64) * quantile).floor() as usize;
        self.buckets
            .values()
            .nth(rank.min(last))
            .and_then(|bucket| bucket.first())
            .copied()
            .ok_or_else(|| {
                QuadError::Index(
                    ErrorInfo::new("empty-bucket", "ranked bucket holds no pairs")
                        .with_context("rank", rank),
                )
            })
    }

    /// Multiplicity recorded for `pair`, if it is tracked.
    pub fn multiplicity(&self, pair: VarPair) -> Option<usize> {
        self.placement.get(&pair).copied()
    }

    /// Iterates over `(multiplicity, pairs)` in ascending multiplicity.
    pub fn buckets(&self) -> impl Iterator<Item = (usize, Vec<VarPair>)> + '_ {
        self.buckets
            .iter()
            .map(|(multiplicity, pairs)| (*multiplicity, pairs.iter().copied().collect()))
    }

    /// Number of non-empty buckets.
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Number of tracked pairs.
    pub fn len(&self) -> usize {
        self.placement.len()
    }

    /// Returns whether no pair is tracked.
    pub fn is_empty(&self) -> bool {
        self.placement.is_empty()
    }
}
