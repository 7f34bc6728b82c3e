/*
 * SPDX-FileCopyrightText: 2025 The graph-distances authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::bidirectional::BidirectionalBfs;
use super::distribution::{DistanceAccumulator, DistanceDistribution, RollingAccumulator};
use crate::components::{connected_components, ComponentGroups};
use crate::error::{DistanceError, Result};
use crate::traits::UndirectedGraph;
use dsi_progress_logger::ProgressLog;
use rand::distr::weighted::WeightedIndex;
use rand::distr::Distribution;
use rand::Rng;

/// Parameters of [`estimate_sampled`].
///
/// Values are set with builder-style setters starting from the
/// [default](SamplerConfig::default), which uses a threshold of 0.1 and
/// batches of 1000 samples:
///
/// ```
/// use graph_distances::distances::SamplerConfig;
///
/// let config = SamplerConfig::default().threshold(0.01).max_rounds(100);
/// assert_eq!(config.batch_size, 1000);
/// assert!(config.validate().is_ok());
/// assert!(config.batch_size(999).validate().is_err());
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplerConfig {
    /// Sampling stops when the means of the two sample sets differ by less
    /// than this value.
    pub threshold: f64,
    /// The number of samples drawn at each round, half for each set. Must be
    /// even and positive.
    pub batch_size: usize,
    /// The maximum number of rounds.
    pub max_rounds: usize,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            batch_size: 1000,
            max_rounds: 10_000,
        }
    }
}

impl SamplerConfig {
    /// Sets the convergence threshold.
    pub fn threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Sets the number of samples per round.
    pub fn batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    /// Sets the maximum number of rounds.
    pub fn max_rounds(mut self, max_rounds: usize) -> Self {
        self.max_rounds = max_rounds;
        self
    }

    /// Checks that the batch size is even and positive, that the threshold
    /// is finite and nonnegative, and that at least one round is allowed.
    pub fn validate(&self) -> Result<()> {
        if self.batch_size == 0 || self.batch_size % 2 != 0 {
            return Err(DistanceError::InvalidInput(format!(
                "The batch size must be even and positive (got {})",
                self.batch_size
            )));
        }
        if !self.threshold.is_finite() || self.threshold < 0.0 {
            return Err(DistanceError::InvalidInput(format!(
                "The threshold must be finite and nonnegative (got {})",
                self.threshold
            )));
        }
        if self.max_rounds == 0 {
            return Err(DistanceError::InvalidInput(
                "The maximum number of rounds must be positive".into(),
            ));
        }
        Ok(())
    }
}

/// The result of [`estimate_sampled`].
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Samples {
    /// The sampled distances: the first sample set followed by the second
    /// one.
    pub distances: Vec<usize>,
    /// The number of rounds performed.
    pub rounds: usize,
    /// Whether sampling stopped because the threshold was met, rather than
    /// because the maximum number of rounds was reached.
    pub converged: bool,
}

impl Samples {
    /// Returns the number of samples.
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    /// Returns whether there are no samples.
    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    /// Returns the mean of the sampled distances, or `None` if there are no
    /// samples.
    pub fn mean(&self) -> Option<f64> {
        let mut acc = RollingAccumulator::default();
        acc.add_all(&self.distances);
        acc.mean()
    }

    /// Returns the distribution of the sampled distances.
    pub fn to_distribution(&self) -> DistanceDistribution {
        self.distances.iter().copied().collect()
    }
}

/// Samples distances between pairs of nodes in the same connected component.
///
/// A pair is sampled by choosing a component with probability proportional
/// to the square of its size, and then two of its members independently and
/// uniformly (so a node can be paired with itself). The probability of each
/// ordered pair of nodes in the same component is thus the same, and the
/// mean of the sampled distances is an unbiased estimator of the mean
/// computed by [`compute_exact`](super::compute_exact).
///
/// Distances are computed by a [`BidirectionalBfs`] on the original graph.
#[derive(Debug, Clone)]
pub struct ComponentWeightedSampler<G: UndirectedGraph> {
    bfs: BidirectionalBfs<G>,
    groups: ComponentGroups,
    weights: Box<[u64]>,
    /// `None` if the graph is empty.
    index: Option<WeightedIndex<u64>>,
}

impl<G: UndirectedGraph> ComponentWeightedSampler<G> {
    /// Creates a sampler, computing the connected components of `graph`.
    ///
    /// # Errors
    ///
    /// [`InvalidInput`](DistanceError::InvalidInput) if the squared sizes of
    /// the components do not fit a `u64`.
    pub fn new(graph: G, pl: &mut impl ProgressLog) -> Result<Self> {
        let groups = connected_components(&graph, pl).group();
        let weights = groups
            .sizes()
            .map(|size| {
                (size as u64).checked_mul(size as u64).ok_or_else(|| {
                    DistanceError::InvalidInput(format!(
                        "The squared size of a component with {size} nodes overflows"
                    ))
                })
            })
            .collect::<Result<Box<[u64]>>>()?;

        let index = if weights.is_empty() {
            None
        } else {
            Some(WeightedIndex::new(weights.iter().copied()).map_err(|e| {
                DistanceError::InvalidInput(format!("Cannot weight the components: {e}"))
            })?)
        };

        Ok(Self {
            bfs: BidirectionalBfs::new(graph),
            groups,
            weights,
            index,
        })
    }

    /// Returns the number of nodes of the graph.
    pub fn num_nodes(&self) -> usize {
        self.groups.num_nodes()
    }

    /// Returns the connected components of the graph.
    pub fn components(&self) -> &ComponentGroups {
        &self.groups
    }

    /// Returns the (unnormalized) weight of each component, that is, the
    /// square of its size.
    pub fn weights(&self) -> &[u64] {
        &self.weights
    }

    /// Samples an ordered pair of nodes in the same component.
    ///
    /// # Errors
    ///
    /// [`InvalidInput`](DistanceError::InvalidInput) if the graph is empty.
    pub fn sample_pair<R: Rng>(&self, rng: &mut R) -> Result<(usize, usize)> {
        let Some(index) = &self.index else {
            return Err(DistanceError::InvalidInput(
                "Cannot sample pairs of nodes of an empty graph".into(),
            ));
        };
        let members = self.groups.members(index.sample(rng));
        let u = members[rng.random_range(0..members.len())];
        let v = members[rng.random_range(0..members.len())];
        Ok((u, v))
    }

    /// Samples a pair and returns the distance between its nodes.
    pub fn sample_distance<R: Rng>(&mut self, rng: &mut R) -> Result<usize> {
        let (u, v) = self.sample_pair(rng)?;
        self.bfs.distance(u, v)
    }

    /// Samples `count` distances.
    pub fn draw<R: Rng>(&mut self, count: usize, rng: &mut R) -> Result<Vec<usize>> {
        let mut distances = Vec::with_capacity(count);
        for _ in 0..count {
            distances.push(self.sample_distance(rng)?);
        }
        Ok(distances)
    }

    /// Samples distances until the two sample sets agree.
    ///
    /// Each round adds half a batch to each of two sample sets; sampling
    /// stops as soon as the means of the two sets differ by less than the
    /// threshold, or when the maximum number of rounds has been performed.
    /// In the latter case the samples are returned anyway, with
    /// [`converged`](Samples::converged) set to false.
    ///
    /// Graphs with fewer than two nodes yield no samples and are considered
    /// converged.
    ///
    /// Note that the stopping rule is a stability heuristic: it does not
    /// provide a confidence interval for the mean.
    pub fn run<R: Rng>(
        &mut self,
        config: &SamplerConfig,
        rng: &mut R,
        pl: &mut impl ProgressLog,
    ) -> Result<Samples> {
        config.validate()?;
        self.run_unchecked(config, rng, pl)
    }

    /// Runs the sampling loop with a configuration that has already been
    /// validated.
    fn run_unchecked<R: Rng>(
        &mut self,
        config: &SamplerConfig,
        rng: &mut R,
        pl: &mut impl ProgressLog,
    ) -> Result<Samples> {
        if self.num_nodes() <= 1 {
            return Ok(Samples {
                distances: Vec::new(),
                rounds: 0,
                converged: true,
            });
        }

        let half_batch = config.batch_size / 2;
        let mut first = SampleSet::default();
        let mut second = SampleSet::default();
        let mut rounds = 0;
        let mut converged = false;

        pl.item_name("round");
        pl.expected_updates(Some(config.max_rounds));
        pl.start(format!(
            "Sampling distances in batches of {} with threshold {}...",
            config.batch_size, config.threshold
        ));

        while rounds < config.max_rounds {
            for _ in 0..half_batch {
                first.push(self.sample_distance(rng)?);
            }
            for _ in 0..half_batch {
                second.push(self.sample_distance(rng)?);
            }
            rounds += 1;
            pl.light_update();

            if (first.mean() - second.mean()).abs() < config.threshold {
                converged = true;
                break;
            }
        }

        pl.done();

        if converged {
            log::debug!(
                "Sampling converged after {} rounds ({} samples)",
                rounds,
                rounds * config.batch_size
            );
        } else {
            log::warn!(
                "Sampling did not converge within {} rounds: the means of the two sample sets are {} and {}",
                rounds,
                first.mean(),
                second.mean()
            );
        }

        let mut distances = first.distances;
        distances.extend(second.distances);
        Ok(Samples {
            distances,
            rounds,
            converged,
        })
    }
}

/// A set of samples with its running sum.
#[derive(Debug, Default)]
struct SampleSet {
    distances: Vec<usize>,
    sum: u64,
}

impl SampleSet {
    fn push(&mut self, distance: usize) {
        self.sum += distance as u64;
        self.distances.push(distance);
    }

    /// Only called on nonempty sets.
    fn mean(&self) -> f64 {
        self.sum as f64 / self.distances.len() as f64
    }
}

/// Estimates the distance distribution of a graph by sampling.
///
/// This is a convenience wrapper around [`ComponentWeightedSampler::run`].
/// The mean of the result estimates the mean computed by
/// [`compute_exact`](super::compute_exact) without visiting the whole graph.
///
/// # Examples
///
/// ```
/// use dsi_progress_logger::no_logging;
/// use graph_distances::prelude::*;
/// use rand::rngs::SmallRng;
/// use rand::SeedableRng;
///
/// // A complete graph on 10 nodes
/// let mut graph = VecGraph::empty(10);
/// for u in 0..10 {
///     for v in u + 1..10 {
///         graph.add_edge(u, v);
///     }
/// }
/// let mut rng = SmallRng::seed_from_u64(0);
/// let samples = estimate_sampled(&graph, &SamplerConfig::default(), &mut rng, no_logging![])?;
/// assert!(samples.converged);
/// assert!(samples.distances.iter().all(|&d| d <= 1));
/// assert_eq!(samples.len(), samples.rounds * 1000);
/// # Ok::<(), graph_distances::DistanceError>(())
/// ```
pub fn estimate_sampled<R: Rng>(
    graph: impl UndirectedGraph,
    config: &SamplerConfig,
    rng: &mut R,
    pl: &mut impl ProgressLog,
) -> Result<Samples> {
    // Fail before computing components
    config.validate()?;
    ComponentWeightedSampler::new(graph, pl)?.run_unchecked(config, rng, pl)
}
