/*
 * SPDX-FileCopyrightText: 2025 The graph-distances authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Errors returned by distance computations.

use thiserror::Error;

/// Error types that can occur while computing distances.
///
/// None of these conditions is retried internally: they signal either a
/// malformed request or an integration bug upstream (e.g., a component that
/// is not actually connected).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DistanceError {
    /// The arguments do not satisfy the preconditions of the operation (an
    /// empty node set, a node out of range, a badly sized scratch buffer, an
    /// invalid sampler configuration).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A breadth-first visit of a component did not reach all of its nodes.
    #[error(
        "The visit from node {root} reached {visited} nodes out of {expected}: the component is not connected"
    )]
    Consistency {
        root: usize,
        visited: usize,
        expected: usize,
    },

    /// A node of a component has a neighbor outside of the component.
    #[error("Node {node} of component {component} has neighbor {neighbor} outside the component")]
    OpenComponent {
        component: usize,
        node: usize,
        neighbor: usize,
    },

    /// There is no path between the two nodes.
    #[error("Node {dst} is not reachable from node {src}")]
    Unreachable { src: usize, dst: usize },
}

/// Convenience alias for results with a [`DistanceError`].
pub type Result<T, E = DistanceError> = std::result::Result<T, E>;

/// Returns an [`InvalidInput`](DistanceError::InvalidInput) error if `node`
/// is not smaller than `num_nodes`.
pub(crate) fn check_node(node: usize, num_nodes: usize) -> Result<()> {
    if node >= num_nodes {
        return Err(DistanceError::InvalidInput(format!(
            "Node {node} does not exist (the graph has {num_nodes} nodes)"
        )));
    }
    Ok(())
}
