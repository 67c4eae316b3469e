//! Depth-first and breadth-first traversal over a [`DiGraph`].
//!
//! The walks deliver a stream of events to a callback instead of going
//! through a visitor object: the callback's [`ControlFlow`] return value
//! replaces the classic `is_done` flag, and the explicit stack/queue keeps
//! traversal depth off the call stack.
//!
//! Both walks cover every vertex of the graph, taking roots in vertex
//! insertion order and successors in edge insertion order — the same
//! orders the cycle finders observe.

use std::hash::Hash;
use std::ops::ControlFlow;

use crate::graph::DiGraph;

/// One step of a depth-first walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DfsEvent<'a, V> {
    /// The vertex is seen for the first time (pre-order).
    Discover(&'a V),
    /// All successors of the vertex have been finished (post-order).
    Finish(&'a V),
}

/// One step of a breadth-first walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BfsEvent<'a, V> {
    /// The vertex is seen for the first time.
    Discover(&'a V),
    /// All direct successors of the vertex have been discovered.
    Finish(&'a V),
}

/// Walks the whole graph depth-first, delivering [`DfsEvent`]s.
///
/// Every vertex is discovered exactly once and finished exactly once,
/// after all of its tree descendants. Returning `ControlFlow::Break(b)`
/// from the callback aborts the walk immediately; the break value is
/// returned as `Some(b)`.
pub fn dfs<V, B, F>(graph: &DiGraph<V>, mut visit: F) -> Option<B>
where
    V: Eq + Hash + Clone,
    F: FnMut(DfsEvent<'_, V>) -> ControlFlow<B>,
{
    let succ = graph.succ_lists();
    let n = succ.len();
    let mut discovered = vec![false; n];
    // Frame: (vertex slot, position in its successor list).
    let mut frames: Vec<(usize, usize)> = Vec::new();

    for root in 0..n {
        if discovered[root] {
            continue;
        }
        discovered[root] = true;
        if let ControlFlow::Break(b) = visit(DfsEvent::Discover(graph.vertex_at(root))) {
            return Some(b);
        }
        frames.push((root, 0));

        while let Some((v, child)) = frames.last_mut() {
            let v = *v;
            if *child < succ[v].len() {
                let w = succ[v][*child];
                *child += 1;
                if !discovered[w] {
                    discovered[w] = true;
                    if let ControlFlow::Break(b) = visit(DfsEvent::Discover(graph.vertex_at(w))) {
                        return Some(b);
                    }
                    frames.push((w, 0));
                }
            } else {
                frames.pop();
                if let ControlFlow::Break(b) = visit(DfsEvent::Finish(graph.vertex_at(v))) {
                    return Some(b);
                }
            }
        }
    }
    None
}

/// Walks the whole graph breadth-first, delivering [`BfsEvent`]s.
///
/// A vertex is finished as soon as all of its direct successors have been
/// discovered. Returning `ControlFlow::Break(b)` aborts the walk.
pub fn bfs<V, B, F>(graph: &DiGraph<V>, mut visit: F) -> Option<B>
where
    V: Eq + Hash + Clone,
    F: FnMut(BfsEvent<'_, V>) -> ControlFlow<B>,
{
    let succ = graph.succ_lists();
    let n = succ.len();
    let mut discovered = vec![false; n];
    let mut queue = std::collections::VecDeque::new();

    for root in 0..n {
        if discovered[root] {
            continue;
        }
        discovered[root] = true;
        if let ControlFlow::Break(b) = visit(BfsEvent::Discover(graph.vertex_at(root))) {
            return Some(b);
        }
        queue.push_back(root);

        while let Some(v) = queue.pop_front() {
            for &w in &succ[v] {
                if !discovered[w] {
                    discovered[w] = true;
                    if let ControlFlow::Break(b) = visit(BfsEvent::Discover(graph.vertex_at(w))) {
                        return Some(b);
                    }
                    queue.push_back(w);
                }
            }
            if let ControlFlow::Break(b) = visit(BfsEvent::Finish(graph.vertex_at(v))) {
                return Some(b);
            }
        }
    }
    None
}
