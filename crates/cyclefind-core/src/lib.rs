#![deny(clippy::print_stdout, clippy::print_stderr)]

//! Enumeration of all simple cycles (elementary circuits) in a graph.
//!
//! A *simple cycle* is a closed walk whose vertices are pairwise distinct
//! except for the coincident first and last vertex. A self-loop counts as a
//! cycle of length one. This crate implements four enumeration algorithms
//! for directed graphs and one (in two variants) for undirected graphs,
//! together with the strongly-connected-component primitive two of them
//! depend on.
//!
//! # Algorithms
//!
//! Worst-case time bounds, with `V` vertices, `E` edges and `C` simple
//! cycles in the graph:
//!
//! | Finder | Bound |
//! |---|---|
//! | [`TiernanSimpleCycles`] | O(V·const^V) |
//! | [`TarjanSimpleCycles`] | O(V·E·C) |
//! | [`JohnsonSimpleCycles`] | O((V+E)·(C+1)) |
//! | [`SzwarcfiterLauerSimpleCycles`] | O(V + E·C) |
//! | [`PatonSimpleCycles`] / [`PatonCycleBase`] | O(V + E) per cycle |
//!
//! Worst-case behaviour is reached only on graphs with special structure,
//! so on practical workloads an algorithm with a higher bound may well
//! outperform one with a lower bound: the tighter the bound, the higher
//! the administrative cost per visited edge. Memory cost is O(V + E) for
//! all of them. On workloads of a few thousand vertices and up to tens of
//! thousands of cycles, Szwarcfiter–Lauer and Tarjan tend to lead, with
//! Tiernan often an order of magnitude behind the rest.
//!
//! The Paton variants do **not** enumerate every simple cycle of an
//! undirected graph; they produce a set of fundamental cycles relative to
//! a spanning forest (|E| − |V| + #components cycles, plus one per
//! self-loop). See [`PatonSimpleCycles`] for details.
//!
//! # Determinism
//!
//! Every finder is deterministic: the order of emitted cycles depends only
//! on the order in which vertices and edges were inserted into the graph.
//! Two calls on identical graphs produce identical output.
//!
//! # Literature
//!
//! 1. J. C. Tiernan, *An efficient search algorithm to find the elementary
//!    circuits of a graph*, Comm. ACM 13 (1970), 722–726.
//! 2. R. Tarjan, *Depth-first search and linear graph algorithms*,
//!    SIAM J. Comput. 1 (1972), 146–160.
//! 3. R. Tarjan, *Enumeration of the elementary circuits of a directed
//!    graph*, SIAM J. Comput. 2 (1973), 211–216.
//! 4. D. B. Johnson, *Finding all the elementary circuits of a directed
//!    graph*, SIAM J. Comput. 4 (1975), 77–84.
//! 5. J. L. Szwarcfiter and P. E. Lauer, *Finding the elementary cycles of
//!    a directed graph in O(n + m) per cycle*, Tech. Rep. 60, Univ. of
//!    Newcastle upon Tyne, 1974.
//! 6. K. Paton, *An algorithm for finding a fundamental set of cycles for
//!    an undirected linear graph*, Comm. ACM 12 (1969), 514–518.

pub mod cycles;
pub mod error;
pub mod graph;
pub mod scc;

pub use cycles::{
    JohnsonSimpleCycles, PatonCycleBase, PatonSimpleCycles, SimpleCycles,
    SzwarcfiterLauerSimpleCycles, TarjanSimpleCycles, TiernanSimpleCycles,
};
pub use error::CycleError;
pub use graph::{DiGraph, UnGraph};
pub use scc::{count_all_sccs, count_sccs, find_all_sccs, find_sccs};

/// Returns the current version of the cyclefind-core library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
