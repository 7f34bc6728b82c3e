/*
 * SPDX-FileCopyrightText: 2025 The graph-distances authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Graph implementations.
//!
//! [`VecGraph`](vec_graph::VecGraph) is a general-purpose mutable undirected
//! graph. [`CompactAdjacency`](compact_adjacency::CompactAdjacency) is a
//! read-only, fixed-width representation of a single connected component
//! used by exact distance computations.

pub mod compact_adjacency;
pub mod vec_graph;

pub mod prelude {
    pub use super::compact_adjacency::CompactAdjacency;
    pub use super::vec_graph::VecGraph;
}
