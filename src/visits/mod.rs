/*
 * SPDX-FileCopyrightText: 2025 The graph-distances authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Visits on undirected graphs.
//!
//! The visits in this module work on any [`UndirectedGraph`] and remember
//! the nodes they have reached across calls: they are used to discover
//! connected components. The hot loop of exact distance computations uses
//! instead the specialized [`ComponentBfs`](crate::distances::ComponentBfs),
//! which runs on a compacted component with caller-owned buffers.
//!
//! [`UndirectedGraph`]: crate::traits::UndirectedGraph

pub mod breadth_first;
