/*
 * SPDX-FileCopyrightText: 2025 The graph-distances authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::component_bfs::{BfsScratch, ComponentBfs};
use super::distribution::{DistanceAccumulator, DistanceDistribution, RollingAccumulator};
use crate::components::{connected_components, ComponentGroups};
use crate::error::Result;
use crate::graphs::compact_adjacency::CompactAdjacency;
use crate::traits::UndirectedGraph;
use dsi_progress_logger::{ConcurrentProgressLog, ProgressLog};
use rayon::prelude::*;
use rayon::ThreadPool;

/// The kind of result of an exact computation.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// The full [`DistanceDistribution`].
    Distribution,
    /// Just the number of observations and their sum.
    #[default]
    RollingSum,
}

/// The result of an exact computation.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExactDistances {
    Distribution(DistanceDistribution),
    RollingSum(RollingAccumulator),
}

impl ExactDistances {
    /// Returns the number and sum of observations, whatever the mode.
    pub fn to_rolling(&self) -> RollingAccumulator {
        match self {
            ExactDistances::Distribution(dd) => dd.to_rolling(),
            ExactDistances::RollingSum(r) => *r,
        }
    }

    /// Returns the mean distance.
    ///
    /// The result is the same in both modes.
    pub fn mean(&self) -> Option<f64> {
        self.to_rolling().mean()
    }

    /// Returns the distribution, if the computation was performed in
    /// [`Mode::Distribution`].
    pub fn distribution(&self) -> Option<&DistanceDistribution> {
        match self {
            ExactDistances::Distribution(dd) => Some(dd),
            ExactDistances::RollingSum(_) => None,
        }
    }
}

/// Computes exactly the distances between all ordered pairs of nodes lying
/// in the same connected component.
///
/// Each connected component with two or more nodes is compacted into a
/// [`CompactAdjacency`] and visited from each of its nodes using a
/// [`ComponentBfs`], so a component of size *n*<sub>*c*</sub> contributes
/// *n*<sub>*c*</sub>² observations, self pairs included. A component made of
/// a single node contributes one observation of distance zero. Pairs of nodes
/// in different components are never counted.
///
/// By convention, the empty graph and the graph with one node have a single
/// observation of distance zero, so the result always contains at least one
/// observation.
///
/// The two [modes](Mode) compute the same observations; the
/// [means](ExactDistances::mean) they return are identical.
///
/// # Examples
///
/// ```
/// use dsi_progress_logger::no_logging;
/// use graph_distances::prelude::*;
///
/// // Two disjoint triangles
/// let graph = VecGraph::from_edges([(0, 1), (1, 2), (2, 0), (3, 4), (4, 5), (5, 3)]);
/// let exact = compute_exact(&graph, Mode::RollingSum, no_logging![])?;
/// assert_eq!(exact.to_rolling(), RollingAccumulator::new(18, 12));
///
/// let exact = compute_exact(&graph, Mode::Distribution, no_logging![])?;
/// let dd = exact.distribution().unwrap();
/// assert_eq!(dd.count(0), 6);
/// assert_eq!(dd.count(1), 12);
/// assert_eq!(dd.diameter(), Some(1));
/// # Ok::<(), graph_distances::DistanceError>(())
/// ```
///
/// # Errors
///
/// Errors can only result from inconsistent graph implementations (e.g., a
/// graph whose neighbor lists are not symmetric).
pub fn compute_exact(
    graph: impl UndirectedGraph,
    mode: Mode,
    pl: &mut impl ProgressLog,
) -> Result<ExactDistances> {
    Ok(match mode {
        Mode::Distribution => ExactDistances::Distribution(accumulate_exact(graph, pl)?),
        Mode::RollingSum => ExactDistances::RollingSum(accumulate_exact(graph, pl)?),
    })
}

/// Parallel version of [`compute_exact`].
///
/// Sources of each component are distributed over the threads of
/// `thread_pool`; each worker has its own [`BfsScratch`] and its own partial
/// accumulator, and partial results are merged by addition. The result is
/// identical to that of [`compute_exact`].
pub fn par_compute_exact(
    graph: impl UndirectedGraph + Sync,
    mode: Mode,
    thread_pool: &ThreadPool,
    pl: &mut impl ConcurrentProgressLog,
) -> Result<ExactDistances> {
    Ok(match mode {
        Mode::Distribution => {
            ExactDistances::Distribution(par_accumulate_exact(graph, thread_pool, pl)?)
        }
        Mode::RollingSum => {
            ExactDistances::RollingSum(par_accumulate_exact(graph, thread_pool, pl)?)
        }
    })
}

/// Feeds the exact distances of a graph to an accumulator of choice.
///
/// This is the generic function behind [`compute_exact`], and follows the
/// same conventions.
pub fn accumulate_exact<A: DistanceAccumulator>(
    graph: impl UndirectedGraph,
    pl: &mut impl ProgressLog,
) -> Result<A> {
    let mut acc = A::default();
    let num_nodes = graph.num_nodes();
    if num_nodes <= 1 {
        acc.add(0, 1);
        return Ok(acc);
    }

    let groups = connected_components(&graph, pl).group();

    pl.item_name("source");
    pl.expected_updates(Some(num_nodes));
    pl.start(format!(
        "Visiting {} components from every node...",
        groups.num_components()
    ));

    for component in 0..groups.num_components() {
        let Some(adjacency) = compact_component(&graph, &groups, component, &mut acc)? else {
            pl.light_update();
            continue;
        };
        let bfs = ComponentBfs::new(&adjacency);
        let mut scratch = BfsScratch::new(adjacency.num_nodes());
        for root in 0..adjacency.num_nodes() {
            acc.add_all(bfs.distances(root, &mut scratch)?);
            pl.light_update();
        }
    }

    pl.done();
    Ok(acc)
}

/// Feeds the exact distances of a graph to an accumulator of choice using a
/// thread pool.
///
/// This is the generic function behind [`par_compute_exact`].
pub fn par_accumulate_exact<A: DistanceAccumulator + Send>(
    graph: impl UndirectedGraph + Sync,
    thread_pool: &ThreadPool,
    pl: &mut impl ConcurrentProgressLog,
) -> Result<A> {
    let mut acc = A::default();
    let num_nodes = graph.num_nodes();
    if num_nodes <= 1 {
        acc.add(0, 1);
        return Ok(acc);
    }

    let groups = connected_components(&graph, pl).group();

    pl.item_name("source");
    pl.expected_updates(Some(num_nodes));
    pl.start(format!(
        "Visiting {} components from every node using {} threads...",
        groups.num_components(),
        thread_pool.current_num_threads()
    ));

    for component in 0..groups.num_components() {
        let Some(adjacency) = compact_component(&graph, &groups, component, &mut acc)? else {
            pl.light_update();
            continue;
        };
        let bfs = ComponentBfs::new(&adjacency);
        let size = adjacency.num_nodes();
        let shared_pl = &*pl;

        let partial = thread_pool.install(|| {
            (0..size)
                .into_par_iter()
                .try_fold(
                    || Worker {
                        scratch: BfsScratch::new(size),
                        acc: A::default(),
                        pl: shared_pl.clone(),
                    },
                    |mut worker, root| -> Result<Worker<A, _>> {
                        worker
                            .acc
                            .add_all(bfs.distances(root, &mut worker.scratch)?);
                        worker.pl.light_update();
                        Ok(worker)
                    },
                )
                .map(|worker| worker.map(|worker| worker.acc))
                .try_reduce(A::default, |mut a, b| {
                    a.merge(b);
                    Ok(a)
                })
        })?;
        acc.merge(partial);
    }

    pl.done();
    Ok(acc)
}

/// The state of a thread of [`par_accumulate_exact`].
struct Worker<A, P> {
    scratch: BfsScratch,
    acc: A,
    pl: P,
}

/// Returns the compact representation of a component, or records its only
/// observation and returns `None` if the component is a single node.
fn compact_component<A: DistanceAccumulator>(
    graph: impl UndirectedGraph,
    groups: &ComponentGroups,
    component: usize,
    acc: &mut A,
) -> Result<Option<CompactAdjacency>> {
    if groups.size(component) == 1 {
        acc.add(0, 1);
        return Ok(None);
    }
    CompactAdjacency::from_component(graph, groups, component).map(Some)
}
