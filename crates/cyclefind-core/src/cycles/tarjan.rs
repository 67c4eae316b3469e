//! Tarjan's simple-cycle algorithm (1973).
//!
//! A depth-first backtracking search from each start vertex in turn,
//! restricted to vertices numbered at or above the start. The point stack
//! holds the current path; the marked stack undoes markings only on the
//! branches that produced a cycle. The per-vertex `removed` sets persist
//! across start vertices within one call — successors proven unable to
//! yield a new cycle stay pruned, which is what gives the O(V·E·C) bound.

use std::cmp::Ordering;
use std::collections::HashSet;
use std::hash::Hash;

use crate::cycles::{Numbered, SimpleCycles};
use crate::error::CycleError;
use crate::graph::DiGraph;

/// Finds all simple cycles of a directed graph with Tarjan's 1973
/// backtracking algorithm.
///
/// See R. Tarjan, *Enumeration of the elementary circuits of a directed
/// graph*, SIAM J. Comput. 2 (1973), 211–216.
#[derive(Debug, Default)]
pub struct TarjanSimpleCycles<'a, V> {
    graph: Option<&'a DiGraph<V>>,
}

impl<'a, V> TarjanSimpleCycles<'a, V>
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

impl<V> SimpleCycles<V> for TarjanSimpleCycles<'_, V>
where
    V: Eq + Hash + Clone,
{
    fn find_simple_cycles(&self) -> Result<Vec<Vec<V>>, CycleError> {
        TarjanSimpleCycles::find_simple_cycles(self)
    }

    fn count_simple_cycles(&self) -> Result<usize, CycleError> {
        TarjanSimpleCycles::count_simple_cycles(self)
    }
}

struct Search<'v, F> {
    view: &'v Numbered,
    marked: Vec<bool>,
    marked_stack: Vec<usize>,
    point_stack: Vec<usize>,
    removed: Vec<HashSet<usize>>,
    emit: F,
}

fn scan<F>(view: &Numbered, emit: F)
where
    F: FnMut(&[usize]),
{
    let n = view.len();
    let mut search = Search {
        view,
        marked: vec![false; n],
        marked_stack: Vec::new(),
        point_stack: Vec::new(),
        removed: vec![HashSet::new(); n],
        emit,
    };
    for start in 0..n {
        search.backtrack(start, start);
        while let Some(v) = search.marked_stack.pop() {
            search.marked[v] = false;
        }
    }
}

impl<F> Search<'_, F>
where
    F: FnMut(&[usize]),
{
    fn backtrack(&mut self, start: usize, vertex: usize) -> bool {
        let mut found_cycle = false;
        self.point_stack.push(vertex);
        self.marked[vertex] = true;
        self.marked_stack.push(vertex);

        let view = self.view;
        for &current in &view.succ[vertex] {
            if self.removed[vertex].contains(&current) {
                continue;
            }
            match current.cmp(&start) {
                Ordering::Less => {
                    // Below the start: dead for this and all later starts.
                    self.removed[vertex].insert(current);
                }
                Ordering::Equal => {
                    found_cycle = true;
                    // The start sits at the bottom of the point stack, so
                    // the whole stack is the cycle (a single vertex for a
                    // self-loop on the start).
                    (self.emit)(&self.point_stack);
                }
                Ordering::Greater => {
                    if !self.marked[current] {
                        found_cycle |= self.backtrack(start, current);
                    }
                }
            }
        }

        if found_cycle {
            while let Some(&top) = self.marked_stack.last() {
                if top == vertex {
                    break;
                }
                self.marked_stack.pop();
                self.marked[top] = false;
            }
            if let Some(top) = self.marked_stack.pop() {
                self.marked[top] = false;
            }
        }

        self.point_stack.pop();
        found_cycle
    }
}
