//! The Szwarcfiter–Lauer simple-cycle algorithm (1974).
//!
//! One depth-first search per strongly connected component, started at
//! the component's vertex of maximum in-degree. Each vertex tracks its
//! 1-based position on the search stack while active; `q` carries the
//! position of the deepest not-previously-finalized vertex on the current
//! path, and a marked vertex closes a cycle only when its position lies
//! at or below `q` — that cut-off is what prevents re-emitting cycles
//! found from earlier parts of the search. Fruitless edges go into the
//! `removed` sets and are resurrected by the b-set chains when an
//! endpoint participates in a cycle after all. Runs in O(V + E·C).

use std::collections::HashSet;
use std::hash::Hash;

use crate::cycles::{Numbered, SimpleCycles};
use crate::error::CycleError;
use crate::graph::DiGraph;
use crate::scc::strong_components;

/// Finds all simple cycles of a directed graph with the Szwarcfiter–Lauer
/// algorithm.
///
/// See J. L. Szwarcfiter and P. E. Lauer, *Finding the elementary cycles
/// of a directed graph in O(n + m) per cycle*, Tech. Rep. 60, Univ. of
/// Newcastle upon Tyne, 1974.
#[derive(Debug, Default)]
pub struct SzwarcfiterLauerSimpleCycles<'a, V> {
    graph: Option<&'a DiGraph<V>>,
}

impl<'a, V> SzwarcfiterLauerSimpleCycles<'a, V>
where
    V: Eq + Hash + Clone,
{
    /// Creates a finder with no graph bound.
    pub fn new() -> Self {
        Self { graph: None }
    }

    /// Creates a finder bound to `graph`.
    pub fn with_graph(graph: &'a DiGraph<V>) -> Self {
        Self { graph: Some(graph) }
    }

    /// Binds `graph` as the target of subsequent cycle operations.
    pub fn set_graph(&mut self, graph: &'a DiGraph<V>) {
        self.graph = Some(graph);
    }

    /// Returns the bound graph, if any.
    pub fn graph(&self) -> Option<&'a DiGraph<V>> {
        self.graph
    }

    /// Finds all simple cycles.
    ///
    /// # Errors
    ///
    /// [`CycleError::MissingGraph`] when no graph is bound.
    pub fn find_simple_cycles(&self) -> Result<Vec<Vec<V>>, CycleError> {
        let graph = self.graph.ok_or(CycleError::MissingGraph)?;
        let view = Numbered::new(graph);
        let mut cycles = Vec::new();
        scan(&view, |cycle| cycles.push(view.to_vertices(graph, cycle)));
        Ok(cycles)
    }

    /// Counts the simple cycles without materializing them.
    ///
    /// # Errors
    ///
    /// [`CycleError::MissingGraph`] when no graph is bound.
    pub fn count_simple_cycles(&self) -> Result<usize, CycleError> {
        let graph = self.graph.ok_or(CycleError::MissingGraph)?;
        let view = Numbered::new(graph);
        let mut count = 0;
        scan(&view, |_| count += 1);
        Ok(count)
    }
}

impl<V> SimpleCycles<V> for SzwarcfiterLauerSimpleCycles<'_, V>
where
    V: Eq + Hash + Clone,
{
    fn find_simple_cycles(&self) -> Result<Vec<Vec<V>>, CycleError> {
        SzwarcfiterLauerSimpleCycles::find_simple_cycles(self)
    }

    fn count_simple_cycles(&self) -> Result<usize, CycleError> {
        SzwarcfiterLauerSimpleCycles::count_simple_cycles(self)
    }
}

struct Search<'v, F> {
    view: &'v Numbered,
    marked: Vec<bool>,
    stack: Vec<usize>,
    /// 1-based stack position while a vertex is on the path; `n` once it
    /// has been finalized.
    position: Vec<usize>,
    /// Whether the vertex has been finalized at least once.
    reach: Vec<bool>,
    removed: Vec<HashSet<usize>>,
    b_sets: Vec<HashSet<usize>>,
    emit: F,
}

fn scan<F>(view: &Numbered, emit: F)
where
    F: FnMut(&[usize]),
{
    let n = view.len();

    let mut in_degree = vec![0usize; n];
    for succs in &view.succ {
        for &w in succs {
            in_degree[w] += 1;
        }
    }

    // One start vertex per non-trivial component: the vertex of maximum
    // in-degree, first in pop order on a tie.
    let mut starts = Vec::new();
    strong_components(&view.succ, 0, false, |component| {
        let mut best: Option<usize> = None;
        let mut best_degree = 0;
        for &v in component {
            if best.is_none() || in_degree[v] > best_degree {
                best = Some(v);
                best_degree = in_degree[v];
            }
        }
        if let Some(v) = best {
            starts.push(v);
        }
    });

    let mut search = Search {
        view,
        marked: vec![false; n],
        stack: Vec::new(),
        position: vec![0; n],
        reach: vec![false; n],
        removed: vec![HashSet::new(); n],
        b_sets: vec![HashSet::new(); n],
        emit,
    };
    for &start in &starts {
        search.cycle(start, 0);
    }
}

impl<F> Search<'_, F>
where
    F: FnMut(&[usize]),
{
    fn cycle(&mut self, vertex: usize, mut q: usize) -> bool {
        let view = self.view;
        let mut found_cycle = false;

        self.marked[vertex] = true;
        self.stack.push(vertex);
        let t = self.stack.len();
        self.position[vertex] = t;
        if !self.reach[vertex] {
            q = t;
        }

        for &w in &view.succ[vertex] {
            if self.removed[vertex].contains(&w) {
                continue;
            }
            if !self.marked[w] {
                if self.cycle(w, q) {
                    found_cycle = true;
                } else {
                    self.no_cycle(vertex, w);
                }
            } else if self.position[w] <= q {
                found_cycle = true;
                // Ascending slice of the path, from w's position up to the
                // current vertex on top of the stack.
                let lo = self.position[w] - 1;
                let hi = self.position[vertex];
                (self.emit)(&self.stack[lo..hi]);
            } else {
                self.no_cycle(vertex, w);
            }
        }

        self.stack.pop();
        if found_cycle {
            self.unmark(vertex);
        }
        self.reach[vertex] = true;
        self.position[vertex] = view.len();
        found_cycle
    }

    fn no_cycle(&mut self, x: usize, y: usize) {
        self.b_sets[y].insert(x);
        self.removed[x].insert(y);
    }

    fn unmark(&mut self, x: usize) {
        self.marked[x] = false;
        let b_set = std::mem::take(&mut self.b_sets[x]);
        for &y in &b_set {
            debug_assert!(
                self.view.succ[y].contains(&x),
                "b-set entry without a matching edge"
            );
            self.removed[y].remove(&x);
            if self.marked[y] {
                self.unmark(y);
            }
        }
    }
}
