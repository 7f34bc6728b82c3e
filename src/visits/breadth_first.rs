/*
 * SPDX-FileCopyrightText: 2025 The graph-distances authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Breadth-first visits.

use crate::traits::UndirectedGraph;
use nonmax::NonMaxUsize;
use std::collections::VecDeque;
use std::ops::ControlFlow::{self, Continue};
use sux::prelude::BitVec;

/// A node discovered by a [`Seq`] visit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Reached {
    /// The node.
    pub node: usize,
    /// The distance of the node from the root of the visit.
    pub distance: usize,
}

/// A sequential breadth-first visit.
///
/// Nodes are passed to the callback when they are discovered, together with
/// their distance from the root. Distances are not stored: the queue contains
/// a `None` separator between consecutive levels, and since nodes are
/// represented by [`NonMaxUsize`] the separator takes no additional space.
///
/// Reached nodes are remembered across calls to [`visit`](Seq::visit), so
/// visiting in turn from every node enumerates the connected components of
/// the graph; [`reset`](Seq::reset) forgets them.
///
/// The callback returns a [`ControlFlow`]: a [`Break`](ControlFlow::Break)
/// stops the visit, and its value is returned. For callbacks that never stop,
/// the [`no-break`](https://crates.io/crates/no-break) crate provides
/// [`continue_value_no_break`](no_break::NoBreak::continue_value_no_break),
/// which extracts the number of reached nodes and lets type inference run
/// smoothly.
///
/// # Examples
///
/// ```
/// use graph_distances::graphs::vec_graph::VecGraph;
/// use graph_distances::visits::breadth_first::{Reached, Seq};
/// use no_break::NoBreak;
/// use std::ops::ControlFlow::Continue;
///
/// let graph = VecGraph::from_edges_with_nodes(5, [(0, 1), (1, 2), (2, 0), (2, 3)]);
/// let mut visit = Seq::new(&graph);
/// let mut dist = [usize::MAX; 5];
/// let reached = visit
///     .visit(0, |Reached { node, distance }| {
///         dist[node] = distance;
///         Continue(())
///     })
///     .continue_value_no_break();
/// assert_eq!(reached, 4);
/// assert_eq!(dist, [0, 1, 1, 2, usize::MAX]);
///
/// // Node 3 has already been reached; node 4 is isolated
/// assert_eq!(visit.visit(3, |_| Continue(())).continue_value_no_break(), 0);
/// assert_eq!(visit.visit(4, |_| Continue(())).continue_value_no_break(), 1);
/// ```
pub struct Seq<'a, G: UndirectedGraph> {
    graph: &'a G,
    visited: BitVec,
    queue: VecDeque<Option<NonMaxUsize>>,
}

impl<'a, G: UndirectedGraph> Seq<'a, G> {
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            visited: BitVec::new(graph.num_nodes()),
            queue: VecDeque::new(),
        }
    }

    /// Returns whether a node has been reached since the last reset.
    pub fn is_visited(&self, node: usize) -> bool {
        self.visited[node]
    }

    /// Visits the nodes reachable from `root` that have not been reached
    /// since the last reset, returning their number.
    ///
    /// If `root` has already been reached the visit is empty, and the
    /// callback is never called. After a break, the nodes reached so far
    /// remain marked.
    ///
    /// # Panics
    ///
    /// If `root` is not a node of the graph.
    pub fn visit<E>(
        &mut self,
        root: usize,
        mut callback: impl FnMut(Reached) -> ControlFlow<E, ()>,
    ) -> ControlFlow<E, usize> {
        if self.visited[root] {
            return Continue(0);
        }
        self.queue.clear();

        self.visited.set(root, true);
        callback(Reached {
            node: root,
            distance: 0,
        })?;
        self.queue.push_back(Some(non_max(root)));
        self.queue.push_back(None);
        let mut reached = 1;
        let mut distance = 1;

        while let Some(entry) = self.queue.pop_front() {
            let Some(node) = entry else {
                // End of a level
                if !self.queue.is_empty() {
                    distance += 1;
                    self.queue.push_back(None);
                }
                continue;
            };
            for succ in self.graph.neighbors(node.get()) {
                if !self.visited[succ] {
                    self.visited.set(succ, true);
                    reached += 1;
                    callback(Reached {
                        node: succ,
                        distance,
                    })?;
                    self.queue.push_back(Some(non_max(succ)));
                }
            }
        }

        Continue(reached)
    }

    /// Forgets the nodes reached so far.
    pub fn reset(&mut self) {
        self.queue.clear();
        self.visited = BitVec::new(self.graph.num_nodes());
    }
}

/// Nodes are smaller than the number of nodes, so they are never
/// `usize::MAX`.
#[inline(always)]
fn non_max(node: usize) -> NonMaxUsize {
    NonMaxUsize::new(node).expect("node index should never be usize::MAX")
}
