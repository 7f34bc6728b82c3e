/*
 * SPDX-FileCopyrightText: 2025 The graph-distances authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::error::{DistanceError, Result};
use crate::graphs::compact_adjacency::CompactAdjacency;
use sux::prelude::BitVec;

/// Reusable buffers for [`ComponentBfs`].
///
/// A scratch is sized to a component and can be used for any number of
/// visits of components of the same size: each visit clears only the entries
/// touched by the previous one, so no memory is allocated after
/// construction.
///
/// A scratch belongs to one visit at a time; concurrent computations need
/// one scratch each.
#[derive(Debug)]
pub struct BfsScratch {
    visited: BitVec,
    dist: Vec<usize>,
    /// The visit queue; the nodes in `queue[..filled]` are those visited by
    /// the last visit.
    queue: Vec<usize>,
    filled: usize,
}

impl BfsScratch {
    /// Creates a scratch for components with `num_nodes` nodes.
    pub fn new(num_nodes: usize) -> Self {
        Self {
            visited: BitVec::new(num_nodes),
            dist: vec![0; num_nodes],
            queue: vec![0; num_nodes],
            filled: 0,
        }
    }

    /// Returns the number of nodes this scratch is sized for.
    pub fn len(&self) -> usize {
        self.dist.len()
    }

    /// Returns whether this scratch is sized for the empty component.
    pub fn is_empty(&self) -> bool {
        self.dist.is_empty()
    }

    /// Clears the visited flags set by the last visit.
    fn reset(&mut self) {
        for &node in &self.queue[..self.filled] {
            self.visited.set(node, false);
        }
        self.filled = 0;
    }
}

/// Single-source breadth-first visits of a connected component.
///
/// The visit runs over a [`CompactAdjacency`] and keeps its frontier in a
/// single array with a read pointer and a write pointer: nodes are appended
/// at the write pointer when discovered and expanded at the read pointer, so
/// there is no per-level allocation. All buffers live in a caller-owned
/// [`BfsScratch`].
///
/// # Examples
///
/// ```
/// use graph_distances::distances::{BfsScratch, ComponentBfs};
/// use graph_distances::graphs::compact_adjacency::CompactAdjacency;
///
/// // A path 0 - 1 - 2 - 3
/// let adj = CompactAdjacency::from_edges(4, [(0, 1), (1, 2), (2, 3)])?;
/// let bfs = ComponentBfs::new(&adj);
/// let mut scratch = BfsScratch::new(adj.num_nodes());
///
/// assert_eq!(bfs.distances(0, &mut scratch)?, &[0, 1, 2, 3]);
/// assert_eq!(bfs.distances(2, &mut scratch)?, &[2, 1, 0, 1]);
/// # Ok::<(), graph_distances::DistanceError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ComponentBfs<'a> {
    adjacency: &'a CompactAdjacency,
}

impl<'a> ComponentBfs<'a> {
    pub fn new(adjacency: &'a CompactAdjacency) -> Self {
        Self { adjacency }
    }

    /// Returns the number of nodes of the component.
    pub fn num_nodes(&self) -> usize {
        self.adjacency.num_nodes()
    }

    /// Computes the distances from `root` to all nodes of the component.
    ///
    /// The returned slice borrows from the scratch and is valid until the
    /// next visit using it.
    ///
    /// # Errors
    ///
    /// [`InvalidInput`](DistanceError::InvalidInput) if `root` is out of
    /// range or the scratch has the wrong size;
    /// [`Consistency`](DistanceError::Consistency) if some node is not
    /// reachable from `root`.
    pub fn distances<'s>(&self, root: usize, scratch: &'s mut BfsScratch) -> Result<&'s [usize]> {
        let num_nodes = self.adjacency.num_nodes();
        if scratch.len() != num_nodes {
            return Err(DistanceError::InvalidInput(format!(
                "The scratch has size {} but the component has {} nodes",
                scratch.len(),
                num_nodes
            )));
        }
        if root >= num_nodes {
            return Err(DistanceError::InvalidInput(format!(
                "Node {root} does not exist (the component has {num_nodes} nodes)"
            )));
        }
        scratch.reset();

        let BfsScratch {
            visited,
            dist,
            queue,
            filled,
        } = scratch;

        queue[0] = root;
        visited.set(root, true);
        dist[root] = 0;
        let mut read = 0;
        let mut write = 1;

        while read < write && write < num_nodes {
            let node = queue[read];
            read += 1;
            let d = dist[node] + 1;
            for succ in self.adjacency.neighbors(node) {
                if !visited[succ] {
                    visited.set(succ, true);
                    dist[succ] = d;
                    queue[write] = succ;
                    write += 1;
                }
            }
        }
        *filled = write;

        if write < num_nodes {
            return Err(DistanceError::Consistency {
                root,
                visited: write,
                expected: num_nodes,
            });
        }

        Ok(&scratch.dist)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_disconnected_component() -> anyhow::Result<()> {
        let adj = CompactAdjacency::from_edges(4, [(0, 1), (2, 3)])?;
        let bfs = ComponentBfs::new(&adj);
        let mut scratch = BfsScratch::new(4);
        assert_eq!(
            bfs.distances(0, &mut scratch),
            Err(DistanceError::Consistency {
                root: 0,
                visited: 2,
                expected: 4
            })
        );
        // The scratch is still usable after a failed visit
        let adj = CompactAdjacency::from_edges(4, [(0, 1), (1, 2), (2, 3)])?;
        let bfs = ComponentBfs::new(&adj);
        assert_eq!(bfs.distances(3, &mut scratch)?, &[3, 2, 1, 0]);
        Ok(())
    }

    #[test]
    fn test_wrong_scratch() -> anyhow::Result<()> {
        let adj = CompactAdjacency::from_edges(3, [(0, 1), (1, 2)])?;
        let bfs = ComponentBfs::new(&adj);
        assert!(matches!(
            bfs.distances(0, &mut BfsScratch::new(2)),
            Err(DistanceError::InvalidInput(_))
        ));
        assert!(matches!(
            bfs.distances(3, &mut BfsScratch::new(3)),
            Err(DistanceError::InvalidInput(_))
        ));
        Ok(())
    }

    #[test]
    fn test_single_node() -> anyhow::Result<()> {
        let adj = CompactAdjacency::from_edges(1, [])?;
        let mut scratch = BfsScratch::new(1);
        assert_eq!(ComponentBfs::new(&adj).distances(0, &mut scratch)?, &[0]);
        Ok(())
    }
}
