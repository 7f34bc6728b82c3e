/*
 * SPDX-FileCopyrightText: 2025 The graph-distances authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Connected components of undirected graphs.
//!
//! Components are computed by [sequential breadth-first
//! visits](crate::visits::breadth_first::Seq) started from each node that has
//! not been reached yet, in increasing order: thus, component 0 contains node
//! 0, and component indices increase with their smallest node.
//!
//! # Examples
//! ```
//! use dsi_progress_logger::no_logging;
//! use graph_distances::prelude::*;
//!
//! let graph = VecGraph::from_edges_with_nodes(6, [(0, 1), (1, 2), (4, 5)]);
//!
//! let mut components = connected_components(&graph, no_logging![]);
//! assert_eq!(components.num_components(), 3);
//! assert_eq!(components.components(), &[0, 0, 0, 1, 2, 2]);
//!
//! // Let's sort the components by size
//! let sizes = components.sort_by_size();
//! assert_eq!(sizes, vec![3, 2, 1].into_boxed_slice());
//! assert_eq!(components.components(), &[0, 0, 0, 2, 1, 1]);
//! ```

use crate::traits::UndirectedGraph;
use crate::visits::breadth_first::{self, Reached};
use dsi_progress_logger::ProgressLog;
use no_break::NoBreak;
use std::ops::ControlFlow::Continue;

/// Connected components.
///
/// An instance of this structure stores the [index of the
/// component](Components::components) of each node. Components are numbered
/// from 0 to [`num_components`](Components::num_components).
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Components {
    num_components: usize,
    components: Box<[usize]>,
}

impl Components {
    pub fn new(num_components: usize, components: Box<[usize]>) -> Self {
        debug_assert!(components.iter().all(|&c| c < num_components));
        Components {
            num_components,
            components,
        }
    }

    /// Returns the number of connected components.
    pub fn num_components(&self) -> usize {
        self.num_components
    }

    /// Returns a slice containing, for each node, the index of the component
    /// it belongs to.
    #[inline(always)]
    pub fn components(&self) -> &[usize] {
        &self.components
    }

    /// Returns the sizes of all components.
    pub fn compute_sizes(&self) -> Box<[usize]> {
        let mut sizes = vec![0; self.num_components()];
        for &node_component in self.components() {
            sizes[node_component] += 1;
        }
        sizes.into_boxed_slice()
    }

    /// Renumbers the components by decreasing size.
    ///
    /// After a call to this method, the sizes of the components will be
    /// decreasing in the component index. The method returns the sizes of the
    /// components after the renumbering. Ties keep their relative order.
    pub fn sort_by_size(&mut self) -> Box<[usize]> {
        let mut sizes = self.compute_sizes();
        let mut sort_perm = Vec::from_iter(0..sizes.len());
        sort_perm.sort_by(|&x, &y| sizes[y].cmp(&sizes[x]));
        let mut inv_perm = vec![0; sizes.len()];
        sort_perm
            .iter()
            .enumerate()
            .for_each(|(i, &x)| inv_perm[x] = i);

        self.components
            .iter_mut()
            .for_each(|node_component| *node_component = inv_perm[*node_component]);
        sizes.sort_by(|&x, &y| y.cmp(&x));
        sizes
    }

    /// Groups the nodes by component.
    ///
    /// Members of each component are listed in increasing order.
    pub fn group(&self) -> ComponentGroups {
        let sizes = self.compute_sizes();
        let mut offsets = Vec::with_capacity(sizes.len() + 1);
        offsets.push(0);
        for &size in sizes.iter() {
            offsets.push(offsets[offsets.len() - 1] + size);
        }

        let mut next = offsets[..sizes.len()].to_vec();
        let mut nodes = vec![0; self.components.len()];
        let mut local = vec![0; self.components.len()];
        for (node, &component) in self.components.iter().enumerate() {
            let pos = next[component];
            nodes[pos] = node;
            local[node] = pos - offsets[component];
            next[component] += 1;
        }

        ComponentGroups {
            offsets: offsets.into_boxed_slice(),
            nodes: nodes.into_boxed_slice(),
            local: local.into_boxed_slice(),
            components: self.components.clone(),
        }
    }
}

/// The nodes of a graph grouped by connected component.
///
/// Members are stored contiguously, component after component; each node
/// also knows its *local index*, that is, its position in the list of
/// members of its component. Local indices are the node identifiers used by
/// [`CompactAdjacency`](crate::graphs::compact_adjacency::CompactAdjacency).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentGroups {
    offsets: Box<[usize]>,
    nodes: Box<[usize]>,
    local: Box<[usize]>,
    components: Box<[usize]>,
}

impl ComponentGroups {
    /// Returns the number of components.
    pub fn num_components(&self) -> usize {
        self.offsets.len() - 1
    }

    /// Returns the number of nodes of the underlying graph.
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the members of a component.
    #[inline(always)]
    pub fn members(&self, component: usize) -> &[usize] {
        &self.nodes[self.offsets[component]..self.offsets[component + 1]]
    }

    /// Returns the size of a component.
    #[inline(always)]
    pub fn size(&self, component: usize) -> usize {
        self.offsets[component + 1] - self.offsets[component]
    }

    /// Returns the component a node belongs to.
    #[inline(always)]
    pub fn component_of(&self, node: usize) -> usize {
        self.components[node]
    }

    /// Returns the position of a node in the member list of its component.
    #[inline(always)]
    pub fn local_index(&self, node: usize) -> usize {
        self.local[node]
    }

    /// Returns an iterator over the sizes of the components.
    pub fn sizes(&self) -> impl Iterator<Item = usize> + '_ {
        self.offsets.windows(2).map(|w| w[1] - w[0])
    }
}

/// Connected components of an undirected graph by sequential visits.
pub fn connected_components(graph: impl UndirectedGraph, pl: &mut impl ProgressLog) -> Components {
    let num_nodes = graph.num_nodes();
    pl.item_name("node");
    pl.expected_updates(Some(num_nodes));
    pl.start("Computing connected components...");

    let mut visit = breadth_first::Seq::new(&graph);
    let mut component = vec![0; num_nodes];
    let mut number_of_components = 0;

    for root in 0..num_nodes {
        let reached = visit
            .visit(root, |Reached { node, .. }| {
                component[node] = number_of_components;
                Continue(())
            })
            .continue_value_no_break();
        if reached > 0 {
            pl.update_with_count(reached);
            number_of_components += 1;
        }
    }

    pl.done();
    log::debug!(
        "Found {} connected components in a graph with {} nodes",
        number_of_components,
        num_nodes
    );

    Components::new(number_of_components, component.into_boxed_slice())
}
