/*
 * SPDX-FileCopyrightText: 2025 The graph-distances authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use std::collections::BTreeMap;

/// A sink for distance observations.
///
/// Exact computations are generic over this trait, so that the same code
/// produces either a full [`DistanceDistribution`] or just a
/// [`RollingAccumulator`]. Partial accumulators computed independently (e.g.,
/// by different threads) are combined by [`merge`](Self::merge).
pub trait DistanceAccumulator: Default {
    /// Records `count` observations of the given distance.
    fn add(&mut self, distance: usize, count: u64);

    /// Records each distance in the slice once.
    fn add_all(&mut self, distances: &[usize]) {
        for &d in distances {
            self.add(d, 1);
        }
    }

    /// Adds all observations of another accumulator.
    fn merge(&mut self, other: Self);
}

/// Number and sum of distance observations.
///
/// This is all that is needed to compute a mean distance, and it avoids
/// materializing the distribution. Both fields are integers, so merging
/// partial accumulators is exact and independent of the order.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct RollingAccumulator {
    /// The number of observations.
    pub count: u64,
    /// The sum of the observed distances.
    pub sum: u64,
}

impl RollingAccumulator {
    pub fn new(count: u64, sum: u64) -> Self {
        Self { count, sum }
    }

    /// Returns the mean distance, or `None` if there are no observations.
    pub fn mean(&self) -> Option<f64> {
        mean(self.count, self.sum)
    }
}

impl DistanceAccumulator for RollingAccumulator {
    #[inline(always)]
    fn add(&mut self, distance: usize, count: u64) {
        self.count += count;
        self.sum += distance as u64 * count;
    }

    fn add_all(&mut self, distances: &[usize]) {
        self.count += distances.len() as u64;
        self.sum += distances.iter().map(|&d| d as u64).sum::<u64>();
    }

    fn merge(&mut self, other: Self) {
        self.count += other.count;
        self.sum += other.sum;
    }
}

/// A histogram of distances: for each observed distance, the number of times
/// it was observed.
///
/// Only distances that have actually been observed are keys, and counts are
/// always positive.
///
/// # Examples
///
/// ```
/// use graph_distances::distances::{DistanceAccumulator, DistanceDistribution};
///
/// let mut dd = DistanceDistribution::new();
/// dd.add_all(&[0, 1, 1, 2, 0, 1]);
/// assert_eq!(dd.total(), 6);
/// assert_eq!(dd.sum(), 5);
/// assert_eq!(dd.count(1), 3);
/// assert_eq!(dd.diameter(), Some(2));
/// assert_eq!(dd.median(), Some(1.0));
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DistanceDistribution {
    counts: BTreeMap<usize, u64>,
}

impl DistanceDistribution {
    /// Creates an empty distribution.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of observations of a distance.
    pub fn count(&self, distance: usize) -> u64 {
        self.counts.get(&distance).copied().unwrap_or(0)
    }

    /// Returns an iterator over the pairs (distance, count) in increasing
    /// distance order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, u64)> + '_ {
        self.counts.iter().map(|(&d, &c)| (d, c))
    }

    /// Returns the number of distinct distances.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Returns whether there are no observations.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Returns the total number of observations.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Returns the sum of all observed distances.
    pub fn sum(&self) -> u64 {
        self.iter().map(|(d, c)| d as u64 * c).sum()
    }

    /// Returns the equivalent [`RollingAccumulator`].
    pub fn to_rolling(&self) -> RollingAccumulator {
        RollingAccumulator::new(self.total(), self.sum())
    }

    /// Returns the mean distance, or `None` if there are no observations.
    ///
    /// The result is identical to the mean of [`to_rolling`](Self::to_rolling).
    pub fn mean(&self) -> Option<f64> {
        mean(self.total(), self.sum())
    }

    /// Returns the median distance, or `None` if there are no observations.
    ///
    /// If the number of observations is even, the median is the average of
    /// the two middle observations.
    pub fn median(&self) -> Option<f64> {
        let total = self.total();
        if total == 0 {
            return None;
        }
        // 1-based ranks of the middle observations
        let upper = total / 2 + 1;
        let lower = if total % 2 == 0 { upper - 1 } else { upper };
        let lo = self.at_rank(lower)?;
        let hi = self.at_rank(upper)?;
        Some((lo + hi) as f64 / 2.0)
    }

    /// Returns the largest observed distance, or `None` if there are no
    /// observations.
    ///
    /// On the distribution of a whole graph, this is the largest
    /// eccentricity of a node, that is, the diameter of the graph (of its
    /// components, if the graph is disconnected).
    pub fn diameter(&self) -> Option<usize> {
        self.counts.keys().next_back().copied()
    }

    /// Returns the distance of the observation of given 1-based rank in
    /// increasing order.
    fn at_rank(&self, rank: u64) -> Option<usize> {
        let mut seen = 0;
        for (d, c) in self.iter() {
            seen += c;
            if seen >= rank {
                return Some(d);
            }
        }
        None
    }
}

impl DistanceAccumulator for DistanceDistribution {
    #[inline(always)]
    fn add(&mut self, distance: usize, count: u64) {
        if count > 0 {
            *self.counts.entry(distance).or_insert(0) += count;
        }
    }

    fn add_all(&mut self, distances: &[usize]) {
        // Existing keys are updated in place
        for &d in distances {
            *self.counts.entry(d).or_insert(0) += 1;
        }
    }

    fn merge(&mut self, other: Self) {
        for (d, c) in other.counts {
            self.add(d, c);
        }
    }
}

impl FromIterator<usize> for DistanceDistribution {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let mut dd = Self::new();
        for d in iter {
            dd.add(d, 1);
        }
        dd
    }
}

impl FromIterator<(usize, u64)> for DistanceDistribution {
    fn from_iter<I: IntoIterator<Item = (usize, u64)>>(iter: I) -> Self {
        let mut dd = Self::new();
        for (d, c) in iter {
            dd.add(d, c);
        }
        dd
    }
}

fn mean(count: u64, sum: u64) -> Option<f64> {
    if count == 0 {
        None
    } else {
        Some(sum as f64 / count as f64)
    }
}
