//! Simple-cycle finders.
//!
//! Directed: [`TiernanSimpleCycles`], [`TarjanSimpleCycles`],
//! [`JohnsonSimpleCycles`], [`SzwarcfiterLauerSimpleCycles`]. Undirected:
//! [`PatonSimpleCycles`] and [`PatonCycleBase`].
//!
//! All finders share the same surface: construct unbound with `new` or
//! bound with `with_graph`, rebind with `set_graph`, then call
//! `find_simple_cycles` (a vector of cycles, each an ordered vertex
//! sequence) or `count_simple_cycles` (the same number without
//! materializing the cycles). Scratch state lives only for the duration
//! of one call; finders can be reused and are cheap to construct.

pub mod johnson;
pub mod paton;
pub mod szwarcfiter_lauer;
pub mod tarjan;
pub mod tiernan;

pub use johnson::JohnsonSimpleCycles;
pub use paton::{PatonCycleBase, PatonSimpleCycles};
pub use szwarcfiter_lauer::SzwarcfiterLauerSimpleCycles;
pub use tarjan::TarjanSimpleCycles;
pub use tiernan::TiernanSimpleCycles;

use std::hash::Hash;

use crate::error::CycleError;
use crate::graph::DiGraph;

/// Common surface of the simple-cycle finders.
///
/// Lets callers drive any finder through one interface; a cycle is an
/// ordered vertex sequence in which each consecutive pair, and the pair
/// (last, first), is an edge. A self-loop appears as a one-element cycle.
pub trait SimpleCycles<V> {
    /// Finds all simple cycles of the bound graph.
    ///
    /// # Errors
    ///
    /// [`CycleError::MissingGraph`] when no graph is bound.
    fn find_simple_cycles(&self) -> Result<Vec<Vec<V>>, CycleError>;

    /// Counts the simple cycles of the bound graph without materializing
    /// them.
    ///
    /// # Errors
    ///
    /// [`CycleError::MissingGraph`] when no graph is bound.
    fn count_simple_cycles(&self) -> Result<usize, CycleError>;
}

/// A directed graph renamed into a compact index space.
///
/// Vertices are numbered `0..n` in depth-first pre-order (roots in vertex
/// insertion order, successors in edge insertion order); all index
/// comparisons inside the directed algorithms — "greater than the start",
/// "less than the start" — are comparisons of these numbers. `order` maps
/// a number back to the underlying insertion slot so emitted cycles can
/// be translated into vertex values.
pub(crate) struct Numbered {
    /// Out-neighbor lists in number space, each in edge insertion order.
    pub(crate) succ: Vec<Vec<usize>>,
    /// Number → insertion slot.
    pub(crate) order: Vec<usize>,
}

impl Numbered {
    pub(crate) fn new<V>(graph: &DiGraph<V>) -> Self
    where
        V: Eq + Hash + Clone,
    {
        let raw = graph.succ_lists();
        let n = raw.len();
        let mut order = Vec::with_capacity(n);
        let mut rank = vec![usize::MAX; n];
        let mut frames: Vec<(usize, usize)> = Vec::new();

        for root in 0..n {
            if rank[root] != usize::MAX {
                continue;
            }
            rank[root] = order.len();
            order.push(root);
            frames.push((root, 0));
            while let Some((v, child)) = frames.last_mut() {
                let v = *v;
                if *child < raw[v].len() {
                    let w = raw[v][*child];
                    *child += 1;
                    if rank[w] == usize::MAX {
                        rank[w] = order.len();
                        order.push(w);
                        frames.push((w, 0));
                    }
                } else {
                    frames.pop();
                }
            }
        }

        let mut succ = vec![Vec::new(); n];
        for (number, &slot) in order.iter().enumerate() {
            succ[number] = raw[slot].iter().map(|&t| rank[t]).collect();
        }
        Numbered { succ, order }
    }

    pub(crate) fn len(&self) -> usize {
        self.succ.len()
    }

    /// Translates a cycle in number space back into vertex values.
    pub(crate) fn to_vertices<V>(&self, graph: &DiGraph<V>, cycle: &[usize]) -> Vec<V>
    where
        V: Eq + Hash + Clone,
    {
        cycle
            .iter()
            .map(|&number| graph.vertex_at(self.order[number]).clone())
            .collect()
    }
}
