/*
 * SPDX-FileCopyrightText: 2025 The graph-distances authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::components::ComponentGroups;
use crate::error::{DistanceError, Result};
use crate::traits::UndirectedGraph;
use nonmax::NonMaxUsize;

/// The padding marker of a [`CompactAdjacency`] row: no further neighbor.
pub const SENTINEL: Option<NonMaxUsize> = None;

/// A fixed-width padded adjacency table for a connected component.
///
/// The table has one row per node, identified by its local index in
/// `0..num_nodes()`, and as many columns as the maximum degree of the
/// component. Each row lists the neighbors of the node followed by
/// [`SENTINEL`] cells up to the row width. Cells are
/// `Option<NonMaxUsize>`, so the sentinel costs no space with respect to a
/// plain `usize`.
///
/// Self loops and duplicate edges are discarded, so the cells before the
/// first sentinel are exactly the neighbor set of the node, and the width of
/// the table is the maximum number of distinct neighbors. Neighbors are
/// listed in increasing order.
///
/// The table is immutable: if the component changes, build a new one.
///
/// # Examples
///
/// ```
/// use graph_distances::graphs::compact_adjacency::CompactAdjacency;
///
/// let adj = CompactAdjacency::from_edges(4, [(0, 1), (0, 2), (0, 3), (1, 2)])?;
/// assert_eq!(adj.max_degree(), 3);
/// assert_eq!(adj.neighbors(0).collect::<Vec<_>>(), vec![1, 2, 3]);
/// assert_eq!(adj.neighbors(3).collect::<Vec<_>>(), vec![0]);
/// assert_eq!(adj.row(3).iter().filter(|c| c.is_none()).count(), 2);
/// # Ok::<(), graph_distances::DistanceError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompactAdjacency {
    num_nodes: usize,
    width: usize,
    table: Box<[Option<NonMaxUsize>]>,
}

impl CompactAdjacency {
    /// Builds the table of a component with `num_nodes` nodes from a list of
    /// edges with endpoints in `0..num_nodes`.
    ///
    /// # Errors
    ///
    /// [`InvalidInput`](DistanceError::InvalidInput) if `num_nodes` is zero
    /// or an endpoint is out of range.
    pub fn from_edges(num_nodes: usize, edges: impl IntoIterator<Item = (usize, usize)>) -> Result<Self> {
        check_not_empty(num_nodes)?;
        let mut rows = vec![Vec::new(); num_nodes];
        for (u, v) in edges {
            if u.max(v) >= num_nodes {
                return Err(DistanceError::InvalidInput(format!(
                    "Edge ({u}, {v}) has an endpoint outside of a component with {num_nodes} nodes"
                )));
            }
            if u != v {
                rows[u].push(v);
                rows[v].push(u);
            }
        }
        Ok(Self::from_rows(rows))
    }

    /// Builds the table of the given component of a graph.
    ///
    /// Nodes are identified by their [local
    /// index](ComponentGroups::local_index) in the component.
    ///
    /// # Errors
    ///
    /// [`InvalidInput`](DistanceError::InvalidInput) if the component is
    /// empty or does not exist, and
    /// [`OpenComponent`](DistanceError::OpenComponent) if a member has a
    /// neighbor outside of the component.
    pub fn from_component(
        graph: impl UndirectedGraph,
        groups: &ComponentGroups,
        component: usize,
    ) -> Result<Self> {
        if component >= groups.num_components() {
            return Err(DistanceError::InvalidInput(format!(
                "Component {component} does not exist (there are {} components)",
                groups.num_components()
            )));
        }
        let members = groups.members(component);
        check_not_empty(members.len())?;

        let mut rows = Vec::with_capacity(members.len());
        for &node in members {
            let mut row = Vec::with_capacity(graph.degree(node));
            for neighbor in graph.neighbors(node) {
                if groups.component_of(neighbor) != component {
                    return Err(DistanceError::OpenComponent {
                        component,
                        node,
                        neighbor,
                    });
                }
                if neighbor != node {
                    row.push(groups.local_index(neighbor));
                }
            }
            rows.push(row);
        }
        Ok(Self::from_rows(rows))
    }

    fn from_rows(mut rows: Vec<Vec<usize>>) -> Self {
        let mut width = 0;
        for row in rows.iter_mut() {
            row.sort_unstable();
            row.dedup();
            width = width.max(row.len());
        }

        let num_nodes = rows.len();
        let mut table = vec![SENTINEL; num_nodes * width].into_boxed_slice();
        for (node, row) in rows.into_iter().enumerate() {
            let cells = &mut table[node * width..node * width + row.len()];
            for (cell, neighbor) in cells.iter_mut().zip(row) {
                // Local indices are smaller than the number of rows
                *cell = NonMaxUsize::new(neighbor);
            }
        }

        Self {
            num_nodes,
            width,
            table,
        }
    }

    /// Returns the number of nodes (rows) of the table.
    #[inline(always)]
    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    /// Returns the width of the table, that is, the maximum degree of the
    /// component.
    #[inline(always)]
    pub fn max_degree(&self) -> usize {
        self.width
    }

    /// Returns the padded row of a node.
    #[inline(always)]
    pub fn row(&self, node: usize) -> &[Option<NonMaxUsize>] {
        &self.table[node * self.width..(node + 1) * self.width]
    }

    /// Returns the neighbors of a node, that is, the cells of its row before
    /// the first sentinel.
    #[inline(always)]
    pub fn neighbors(&self, node: usize) -> impl Iterator<Item = usize> + '_ {
        self.row(node)
            .iter()
            .map_while(|cell| cell.map(usize::from))
    }

    /// Returns the degree of a node.
    pub fn degree(&self, node: usize) -> usize {
        self.neighbors(node).count()
    }
}

fn check_not_empty(num_nodes: usize) -> Result<()> {
    if num_nodes == 0 {
        return Err(DistanceError::InvalidInput(
            "A compact adjacency table needs at least one node".into(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_single_node() -> Result<()> {
        let adj = CompactAdjacency::from_edges(1, [])?;
        assert_eq!(adj.num_nodes(), 1);
        assert_eq!(adj.max_degree(), 0);
        assert!(adj.row(0).is_empty());
        Ok(())
    }

    #[test]
    fn test_self_loops_and_duplicates() -> Result<()> {
        let adj = CompactAdjacency::from_edges(3, [(0, 0), (0, 1), (1, 0), (1, 2)])?;
        assert_eq!(adj.max_degree(), 2);
        assert_eq!(adj.neighbors(0).collect::<Vec<_>>(), vec![1]);
        assert_eq!(adj.row(0), &[NonMaxUsize::new(1), SENTINEL]);
        assert_eq!(adj.degree(1), 2);
        Ok(())
    }

    #[test]
    fn test_empty() {
        assert!(matches!(
            CompactAdjacency::from_edges(0, []),
            Err(DistanceError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_out_of_range() {
        assert!(matches!(
            CompactAdjacency::from_edges(2, [(0, 2)]),
            Err(DistanceError::InvalidInput(_))
        ));
    }
}
