use sha2::{Digest, Sha256};

use crate::multigraph::CooccurrenceGraph;

/// Computes the canonical structural hash of a co-occurrence multigraph.
///
/// Covers the node set and every (pair, monomial id) edge, so two graphs built
/// from the same polynomial hash identically.
pub fn canonical_hash(graph: &CooccurrenceGraph) -> String {
    let mut hasher = Sha256::new();
    hasher.update((graph.node_count() as u64).to_le_bytes());
    for node in graph.nodes() {
        hasher.update(node.as_raw().to_le_bytes());
    }
    hasher.update((graph.edge_count() as u64).to_le_bytes());
    for (pair, _) in graph.pairs() {
        hasher.update(pair.lo().as_raw().to_le_bytes());
        hasher.update(pair.hi().as_raw().to_le_bytes());
        let tags = graph.shared_monomials(pair);
        hasher.update((tags.len() as u64).to_le_bytes());
        for tag in tags {
            hasher.update(tag.as_raw().to_le_bytes());
        }
    }
    format!("{:x}", hasher.finalize())
}
