//! Strongly connected components (Tarjan 1972).
//!
//! The classical index/lowlink depth-first search, run with an explicit
//! frame stack so component computation works on graphs far deeper than
//! the call stack allows.
//!
//! Two notions of "component" are exposed. A component is *trivial* when
//! it consists of a single vertex with no self-loop — such a vertex
//! participates in no cycle. [`find_sccs`]/[`count_sccs`] skip trivial
//! components; [`find_all_sccs`]/[`count_all_sccs`] keep them. A
//! singleton **with** a self-loop is non-trivial under both notions.
//!
//! Components are emitted in completion order (the order in which their
//! roots finish), vertices within a component in stack pop order.

use std::hash::Hash;

use crate::graph::DiGraph;

/// Finds all non-trivial strongly connected components of `graph`.
///
/// A component is returned as a vector of vertex values; the result may
/// be empty but never contains trivial single-vertex components.
pub fn find_sccs<V>(graph: &DiGraph<V>) -> Vec<Vec<V>>
where
    V: Eq + Hash + Clone,
{
    let succ = graph.succ_lists();
    let mut sccs = Vec::new();
    strong_components(&succ, 0, false, |component| {
        sccs.push(component.iter().map(|&v| graph.vertex_at(v).clone()).collect());
    });
    sccs
}

/// Counts the non-trivial strongly connected components of `graph`.
pub fn count_sccs<V>(graph: &DiGraph<V>) -> usize
where
    V: Eq + Hash + Clone,
{
    let succ = graph.succ_lists();
    let mut count = 0;
    strong_components(&succ, 0, false, |_| count += 1);
    count
}

/// Finds all strongly connected components of `graph`, including trivial
/// single-vertex components that participate in no cycle.
pub fn find_all_sccs<V>(graph: &DiGraph<V>) -> Vec<Vec<V>>
where
    V: Eq + Hash + Clone,
{
    let succ = graph.succ_lists();
    let mut sccs = Vec::new();
    strong_components(&succ, 0, true, |component| {
        sccs.push(component.iter().map(|&v| graph.vertex_at(v).clone()).collect());
    });
    sccs
}

/// Counts all strongly connected components of `graph`, trivial ones
/// included.
pub fn count_all_sccs<V>(graph: &DiGraph<V>) -> usize
where
    V: Eq + Hash + Clone,
{
    let succ = graph.succ_lists();
    let mut count = 0;
    strong_components(&succ, 0, true, |_| count += 1);
    count
}

const UNVISITED: usize = usize::MAX;

/// Runs Tarjan's algorithm over adjacency lists in slot space, feeding
/// each completed component to `emit` as a slice in stack pop order.
///
/// Vertices with slot `< min_slot` (and edges to them) are ignored, which
/// restricts the scan to the subgraph induced on `min_slot..`. Johnson's
/// cycle search leans on this to process induced subgraphs without
/// rebuilding them.
///
/// With `include_trivial == false`, a singleton component is emitted only
/// when it carries a self-loop.
pub(crate) fn strong_components<F>(
    succ: &[Vec<usize>],
    min_slot: usize,
    include_trivial: bool,
    mut emit: F,
) where
    F: FnMut(&[usize]),
{
    let n = succ.len();
    let mut index = vec![UNVISITED; n];
    let mut lowlink = vec![0usize; n];
    let mut on_stack = vec![false; n];
    let mut stack: Vec<usize> = Vec::new();
    let mut next_index = 0usize;
    // Frame: (vertex, position in its successor list).
    let mut frames: Vec<(usize, usize)> = Vec::new();
    let mut component: Vec<usize> = Vec::new();

    for root in min_slot..n {
        if index[root] != UNVISITED {
            continue;
        }
        index[root] = next_index;
        lowlink[root] = next_index;
        next_index += 1;
        stack.push(root);
        on_stack[root] = true;
        frames.push((root, 0));

        while let Some((v, child)) = frames.last_mut() {
            let v = *v;
            if *child < succ[v].len() {
                let w = succ[v][*child];
                *child += 1;
                if w < min_slot {
                    continue;
                }
                if index[w] == UNVISITED {
                    index[w] = next_index;
                    lowlink[w] = next_index;
                    next_index += 1;
                    stack.push(w);
                    on_stack[w] = true;
                    frames.push((w, 0));
                } else if on_stack[w] {
                    lowlink[v] = lowlink[v].min(index[w]);
                }
            } else {
                frames.pop();
                if lowlink[v] == index[v] {
                    component.clear();
                    while let Some(w) = stack.pop() {
                        on_stack[w] = false;
                        component.push(w);
                        if w == v {
                            break;
                        }
                    }
                    let trivial = component.len() == 1 && !succ[v].contains(&v);
                    if include_trivial || !trivial {
                        emit(&component);
                    }
                }
                if let Some(&mut (parent, _)) = frames.last_mut() {
                    lowlink[parent] = lowlink[parent].min(lowlink[v]);
                }
            }
        }
    }
}
