/*
 * SPDX-FileCopyrightText: 2025 The graph-distances authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Distance statistics of undirected graphs.
//!
//! Distances are considered only between nodes in the same connected
//! component, and the statistics of a graph are those of the multiset of
//! distances between all ordered pairs of nodes in the same component (self
//! pairs included).
//!
//! There are two ways of computing them:
//!
//! - [`compute_exact`] (and its parallel version [`par_compute_exact`])
//!   performs a breadth-first visit from every node of every component. Each
//!   component is first compacted into a
//!   [`CompactAdjacency`](crate::graphs::compact_adjacency::CompactAdjacency),
//!   and visits reuse the buffers of a [`BfsScratch`]. The result is either a
//!   [`DistanceDistribution`] or, when only the mean is needed, a
//!   [`RollingAccumulator`].
//!
//! - [`estimate_sampled`] samples pairs of nodes with a
//!   [`ComponentWeightedSampler`] and computes their distance with a
//!   [`BidirectionalBfs`], stopping when two independent sample sets have
//!   close enough means.
//!
//! Single distances can be computed with [`point_to_point_distance`].

mod bidirectional;
pub use bidirectional::*;

mod component_bfs;
pub use component_bfs::*;

mod distribution;
pub use distribution::*;

mod exact;
pub use exact::*;

mod sampler;
pub use sampler::*;
