#![deny(missing_docs)]

//! Monomial index and variable co-occurrence multigraph backing the quadra
//! reduction engine.
//!
//! Both structures are built together from one polynomial and then mutated in
//! lockstep by the engine: a monomial id in the index tags exactly the edges
//! that monomial contributes to the graph.

mod hash;
mod ids;
mod index;
mod multigraph;

pub use hash::canonical_hash;
pub use ids::{monomial_pairs, MonomialId, VarPair};
pub use index::MonomialIndex;
pub use multigraph::{build_graph, CooccurrenceGraph};
