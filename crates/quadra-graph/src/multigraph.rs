use std::collections::{BTreeMap, BTreeSet};

use quadra_core::errors::{ErrorInfo, QuadError};
use quadra_core::{Polynomial, Var};
use tracing::debug;

use crate::ids::{monomial_pairs, MonomialId, VarPair};
use crate::index::MonomialIndex;

/// Undirected multigraph over variables with one edge per (pair, monomial) incidence.
///
/// Parallel edges between two variables are stored as the set of monomial ids
/// tagging them, so the multiplicity of a pair is the size of that set. Pairs
/// whose last edge is removed disappear from the edge map.
#[derive(Debug, Clone, Default)]
pub struct CooccurrenceGraph {
    nodes: BTreeSet<Var>,
    edges: BTreeMap<VarPair, BTreeSet<MonomialId>>,
    edge_count: usize,
}

impl CooccurrenceGraph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a variable node. Returns `false` if it already existed.
    pub fn add_node(&mut self, var: Var) -> bool {
        self.nodes.insert(var)
    }

    /// Adds the edge `pair` tagged with `monomial`, creating missing endpoints.
    ///
    /// Returns `false` if that exact edge was already present.
    pub fn add_edge(&mut self, pair: VarPair, monomial: MonomialId) -> bool {
        self.nodes.insert(pair.lo());
        self.nodes.insert(pair.hi());
        let inserted = self.edges.entry(pair).or_default().insert(monomial);
        if inserted {
            self.edge_count += 1;
        }
        inserted
    }

    /// Removes the edge `pair` tagged with `monomial`.
    pub fn remove_edge(&mut self, pair: VarPair, monomial: MonomialId) -> Result<(), QuadError> {
        let tags = self.edges.get_mut(&pair).ok_or_else(|| unknown_edge(pair, monomial))?;
        if !tags.remove(&monomial) {
            return Err(unknown_edge(pair, monomial));
        }
        if tags.is_empty() {
            self.edges.remove(&pair);
        }
        self.edge_count -= 1;
        Ok(())
    }

    /// Number of parallel edges between the endpoints of `pair`.
    pub fn multiplicity(&self, pair: VarPair) -> usize {
        self.edges.get(&pair).map_or(0, BTreeSet::len)
    }

    /// Ids of the monomials currently containing both endpoints of `pair`.
    pub fn shared_monomials(&self, pair: VarPair) -> Vec<MonomialId> {
        self.edges
            .get(&pair)
            .map(|tags| tags.iter().copied().collect())
            .unwrap_or_default()
    }

    /// Iterates over `(pair, multiplicity)` for every connected pair in canonical order.
    pub fn pairs(&self) -> impl Iterator<Item = (VarPair, usize)> + '_ {
        self.edges.iter().map(|(pair, tags)| (*pair, tags.len()))
    }

    /// Variables adjacent to `var`.
    pub fn neighbours(&self, var: Var) -> BTreeSet<Var> {
        self.edges
            .keys()
            .filter(|pair| pair.contains(var))
            .map(|pair| if pair.lo() == var { pair.hi() } else { pair.lo() })
            .collect()
    }

    /// Returns whether `var` is a node.
    pub fn contains_node(&self, var: Var) -> bool {
        self.nodes.contains(&var)
    }

    /// Iterates over nodes in ascending order.
    pub fn nodes(&self) -> impl Iterator<Item = Var> + '_ {
        self.nodes.iter().copied()
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Total number of edges, parallel edges counted individually.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }
}

/// Builds the monomial index and co-occurrence multigraph for `poly`.
///
/// Every variable becomes a node; every unordered variable pair within a
/// monomial becomes one edge tagged with that monomial's id. The constant
/// monomial receives an id but contributes nothing to the graph.
pub fn build_graph(poly: &Polynomial) -> (MonomialIndex, CooccurrenceGraph) {
    let index = MonomialIndex::from_polynomial(poly);
    let mut graph = CooccurrenceGraph::new();
    for (id, monomial) in index.iter() {
        for var in monomial.vars() {
            graph.add_node(*var);
        }
        for pair in monomial_pairs(monomial.vars()) {
            graph.add_edge(pair, id);
        }
    }
    debug!(
        monomials = index.len(),
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "built co-occurrence multigraph"
    );
    (index, graph)
}

fn unknown_edge(pair: VarPair, monomial: MonomialId) -> QuadError {
    QuadError::Graph(
        ErrorInfo::new("unknown-edge", "edge does not exist")
            .with_context("pair", pair)
            .with_context("monomial", monomial),
    )
}
