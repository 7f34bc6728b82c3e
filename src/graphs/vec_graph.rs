/*
 * SPDX-FileCopyrightText: 2025 The graph-distances authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::traits::UndirectedGraph;

/// A mutable [`UndirectedGraph`] implementation based on a vector of
/// vectors.
///
/// Neighbor lists are kept sorted and without duplicates, so adding an edge
/// twice has no effect. A self loop is stored once, in the neighbor list of
/// its node.
///
/// By setting the feature `serde`, this struct can be serialized using
/// [serde](https://crates.io/crates/serde).
///
/// # Examples
///
/// ```
/// use graph_distances::prelude::*;
///
/// let graph = VecGraph::from_edges([(0, 1), (1, 2), (2, 0), (1, 3)]);
/// assert_eq!(graph.num_nodes(), 4);
/// assert_eq!(graph.num_edges(), 4);
/// assert_eq!(graph.neighbors(1).collect::<Vec<_>>(), vec![0, 2, 3]);
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VecGraph {
    /// The number of undirected edges in the graph.
    num_edges: usize,
    /// For each node, its sorted list of neighbors.
    neighbors: Vec<Vec<usize>>,
}

impl VecGraph {
    /// Creates a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new graph with `n` isolated nodes.
    pub fn empty(n: usize) -> Self {
        Self {
            num_edges: 0,
            neighbors: Vec::from_iter((0..n).map(|_| Vec::new())),
        }
    }

    /// Adds an isolated node to the graph (and all nodes with a smaller
    /// index) and returns true if it is a new node.
    pub fn add_node(&mut self, node: usize) -> bool {
        let len = self.neighbors.len();
        self.neighbors.extend((len..=node).map(|_| Vec::new()));
        len <= node
    }

    /// Adds an undirected edge to the graph and returns true if the edge is
    /// new.
    ///
    /// # Panics
    ///
    /// This method will panic if one of the given nodes is greater or equal
    /// than the number of nodes in the graph.
    pub fn add_edge(&mut self, u: usize, v: usize) -> bool {
        let max = u.max(v);
        if max >= self.neighbors.len() {
            panic!(
                "Node {} does not exist (the graph has {} nodes)",
                max,
                self.neighbors.len(),
            );
        }
        if !insert_sorted(&mut self.neighbors[u], v) {
            return false;
        }
        if u != v {
            insert_sorted(&mut self.neighbors[v], u);
        }
        self.num_edges += 1;
        true
    }

    /// Adds edges from an [`IntoIterator`], adding new nodes as needed.
    pub fn add_edges(&mut self, edges: impl IntoIterator<Item = (usize, usize)>) {
        for (u, v) in edges {
            self.add_node(u.max(v));
            self.add_edge(u, v);
        }
    }

    /// Creates a new graph from an [`IntoIterator`] of edges.
    ///
    /// The number of nodes is one plus the largest endpoint.
    pub fn from_edges(edges: impl IntoIterator<Item = (usize, usize)>) -> Self {
        let mut g = Self::new();
        g.add_edges(edges);
        g
    }

    /// Creates a new graph with `n` nodes from an [`IntoIterator`] of edges.
    ///
    /// Nodes not touched by any edge are isolated; endpoints larger than
    /// `n - 1` add further nodes.
    pub fn from_edges_with_nodes(n: usize, edges: impl IntoIterator<Item = (usize, usize)>) -> Self {
        let mut g = Self::empty(n);
        g.add_edges(edges);
        g
    }
}

fn insert_sorted(list: &mut Vec<usize>, node: usize) -> bool {
    match list.binary_search(&node) {
        Ok(_) => false,
        Err(pos) => {
            list.insert(pos, node);
            true
        }
    }
}

impl UndirectedGraph for VecGraph {
    type Neighbors<'a> = std::iter::Copied<std::slice::Iter<'a, usize>>;

    #[inline(always)]
    fn num_nodes(&self) -> usize {
        self.neighbors.len()
    }

    #[inline(always)]
    fn num_edges(&self) -> usize {
        self.num_edges
    }

    #[inline(always)]
    fn neighbors(&self, node: usize) -> Self::Neighbors<'_> {
        self.neighbors[node].iter().copied()
    }

    #[inline(always)]
    fn degree(&self, node: usize) -> usize {
        self.neighbors[node].len()
    }

    fn has_edge(&self, u: usize, v: usize) -> bool {
        self.neighbors[u].binary_search(&v).is_ok()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_add_edge_is_symmetric() {
        let mut g = VecGraph::empty(3);
        assert!(g.add_edge(0, 2));
        assert!(!g.add_edge(2, 0));
        assert!(g.has_edge(0, 2));
        assert!(g.has_edge(2, 0));
        assert!(!g.has_edge(0, 1));
        assert_eq!(g.num_edges(), 1);
    }

    #[test]
    fn test_self_loop_stored_once() {
        let g = VecGraph::from_edges([(0, 0), (0, 1)]);
        assert_eq!(g.neighbors(0).collect::<Vec<_>>(), vec![0, 1]);
        assert_eq!(g.neighbors(1).collect::<Vec<_>>(), vec![0]);
        assert_eq!(g.num_edges(), 2);
    }

    #[test]
    fn test_isolated_nodes() {
        let g = VecGraph::from_edges_with_nodes(5, [(0, 1)]);
        assert_eq!(g.num_nodes(), 5);
        assert_eq!(g.degree(4), 0);
    }

    #[test]
    #[should_panic]
    fn test_add_edge_missing_node() {
        let mut g = VecGraph::empty(2);
        g.add_edge(0, 2);
    }
}
