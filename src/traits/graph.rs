/*
 * SPDX-FileCopyrightText: 2025 The graph-distances authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*!

Basic trait to access undirected graphs in random-access fashion.

Nodes are identified by the integers in `0..num_nodes()`. Each undirected
edge `{u, v}` is visible from both endpoints: `v` is among the neighbors of
`u` and `u` is among the neighbors of `v`. Implementations may store self
loops; distance computations never traverse them.

*/

/// An undirected graph providing random access to neighbor lists.
pub trait UndirectedGraph {
    /// The type of the iterator over the neighbors of a node.
    type Neighbors<'a>: IntoIterator<Item = usize>
    where
        Self: 'a;

    /// Returns the number of nodes of the graph.
    fn num_nodes(&self) -> usize;

    /// Returns the number of undirected edges of the graph, self loops
    /// included.
    fn num_edges(&self) -> usize;

    /// Returns the neighbors of a node.
    fn neighbors(&self, node: usize) -> Self::Neighbors<'_>;

    /// Returns the number of neighbors of a node.
    fn degree(&self, node: usize) -> usize;

    /// Returns whether there is an edge between `u` and `v`.
    ///
    /// Note that the default implementation performs a linear scan.
    fn has_edge(&self, u: usize, v: usize) -> bool {
        self.neighbors(u).into_iter().any(|w| w == v)
    }
}

impl<G: UndirectedGraph + ?Sized> UndirectedGraph for &G {
    type Neighbors<'a>
        = G::Neighbors<'a>
    where
        Self: 'a;

    #[inline(always)]
    fn num_nodes(&self) -> usize {
        (**self).num_nodes()
    }

    #[inline(always)]
    fn num_edges(&self) -> usize {
        (**self).num_edges()
    }

    #[inline(always)]
    fn neighbors(&self, node: usize) -> Self::Neighbors<'_> {
        (**self).neighbors(node)
    }

    #[inline(always)]
    fn degree(&self, node: usize) -> usize {
        (**self).degree(node)
    }

    fn has_edge(&self, u: usize, v: usize) -> bool {
        (**self).has_edge(u, v)
    }
}
