/*
 * SPDX-FileCopyrightText: 2025 The graph-distances authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::error::{check_node, DistanceError, Result};
use crate::traits::UndirectedGraph;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// Point-to-point distances by bidirectional breadth-first visits.
///
/// A query grows a ball around the source and a ball around the target,
/// expanding at each round the side with the smaller frontier by one level
/// (the forward side on ties). As soon as a node examined on one side is
/// already known to the other side, the sum of its two distances is returned,
/// even if the current level has not been completely expanded.
///
/// Distances are stored in hash maps, so the memory used by a query is
/// proportional to the size of the explored balls rather than to the number
/// of nodes of the graph: this makes the structure suitable for sampling
/// random pairs of very large graphs. Maps and frontiers are kept between
/// queries to avoid reallocations.
///
/// # Examples
///
/// ```
/// use graph_distances::distances::BidirectionalBfs;
/// use graph_distances::graphs::vec_graph::VecGraph;
///
/// // A cycle of length 6 plus a pendant node
/// let graph = VecGraph::from_edges([(0, 1), (1, 2), (2, 3), (3, 4), (4, 5), (5, 0), (3, 6)]);
/// let mut bfs = BidirectionalBfs::new(&graph);
/// assert_eq!(bfs.distance(0, 3)?, 3);
/// assert_eq!(bfs.distance(1, 6)?, 3);
/// assert_eq!(bfs.distance(5, 5)?, 0);
/// # Ok::<(), graph_distances::DistanceError>(())
/// ```
#[derive(Debug, Clone)]
pub struct BidirectionalBfs<G: UndirectedGraph> {
    graph: G,
    forward: HashMap<usize, usize>,
    backward: HashMap<usize, usize>,
    forward_fringe: Vec<usize>,
    backward_fringe: Vec<usize>,
    next_fringe: Vec<usize>,
}

impl<G: UndirectedGraph> BidirectionalBfs<G> {
    pub fn new(graph: G) -> Self {
        Self {
            graph,
            forward: HashMap::new(),
            backward: HashMap::new(),
            forward_fringe: Vec::new(),
            backward_fringe: Vec::new(),
            next_fringe: Vec::new(),
        }
    }

    /// Returns the underlying graph.
    pub fn graph(&self) -> &G {
        &self.graph
    }

    /// Returns the distance between `src` and `dst`.
    ///
    /// # Errors
    ///
    /// [`InvalidInput`](DistanceError::InvalidInput) if one of the nodes
    /// does not exist, [`Unreachable`](DistanceError::Unreachable) if the
    /// nodes are in different connected components.
    pub fn distance(&mut self, src: usize, dst: usize) -> Result<usize> {
        let num_nodes = self.graph.num_nodes();
        check_node(src, num_nodes)?;
        check_node(dst, num_nodes)?;
        if src == dst {
            return Ok(0);
        }

        self.forward.clear();
        self.backward.clear();
        self.forward_fringe.clear();
        self.backward_fringe.clear();

        self.forward.insert(src, 0);
        self.backward.insert(dst, 0);
        self.forward_fringe.push(src);
        self.backward_fringe.push(dst);

        while !self.forward_fringe.is_empty() && !self.backward_fringe.is_empty() {
            let (fringe, known, other) = if self.forward_fringe.len() <= self.backward_fringe.len()
            {
                (&mut self.forward_fringe, &mut self.forward, &self.backward)
            } else {
                (&mut self.backward_fringe, &mut self.backward, &self.forward)
            };

            self.next_fringe.clear();
            for &node in fringe.iter() {
                let d = known[&node] + 1;
                for succ in self.graph.neighbors(node) {
                    if let Some(&other_d) = other.get(&succ) {
                        return Ok(d + other_d);
                    }
                    if let Entry::Vacant(e) = known.entry(succ) {
                        e.insert(d);
                        self.next_fringe.push(succ);
                    }
                }
            }
            std::mem::swap(fringe, &mut self.next_fringe);
        }

        Err(DistanceError::Unreachable { src, dst })
    }
}

/// Returns the distance between two nodes of a graph using a
/// [`BidirectionalBfs`].
///
/// For repeated queries on the same graph, build a [`BidirectionalBfs`]
/// once and call [`distance`](BidirectionalBfs::distance) on it.
pub fn point_to_point_distance(graph: impl UndirectedGraph, src: usize, dst: usize) -> Result<usize> {
    BidirectionalBfs::new(graph).distance(src, dst)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::graphs::vec_graph::VecGraph;

    #[test]
    fn test_path() -> anyhow::Result<()> {
        let graph = VecGraph::from_edges((0..9).map(|i| (i, i + 1)));
        let mut bfs = BidirectionalBfs::new(&graph);
        for src in 0..10 {
            for dst in 0..10 {
                assert_eq!(bfs.distance(src, dst)?, src.abs_diff(dst));
            }
        }
        Ok(())
    }

    #[test]
    fn test_unbalanced_frontiers() -> anyhow::Result<()> {
        // A star centered at 1, joined to 0 through 50
        let mut graph = VecGraph::from_edges((2..50).map(|i| (1, i)));
        graph.add_node(50);
        graph.add_edge(0, 50);
        graph.add_edge(50, 1);
        assert_eq!(point_to_point_distance(&graph, 0, 30)?, 3);
        assert_eq!(point_to_point_distance(&graph, 30, 0)?, 3);
        assert_eq!(point_to_point_distance(&graph, 30, 31)?, 2);
        Ok(())
    }

    #[test]
    fn test_unreachable() {
        let graph = VecGraph::from_edges([(0, 1), (2, 3)]);
        assert_eq!(
            point_to_point_distance(&graph, 0, 3),
            Err(DistanceError::Unreachable { src: 0, dst: 3 })
        );
    }
}
