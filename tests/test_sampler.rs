/*
 * SPDX-FileCopyrightText: 2025 The graph-distances authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

mod common;

use anyhow::Result;
use dsi_progress_logger::no_logging;
use graph_distances::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn test_karate_converges_to_exact_mean() -> Result<()> {
    let graph = common::karate_club();
    let exact = compute_exact(&graph, Mode::RollingSum, no_logging![])?
        .mean()
        .unwrap();
    let config = SamplerConfig::default().threshold(0.05);

    let mut total = 0.0;
    for seed in 0..10 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let samples = estimate_sampled(&graph, &config, &mut rng, no_logging![])?;
        assert!(samples.converged);
        assert_eq!(samples.len(), samples.rounds * config.batch_size);
        assert!(samples.distances.iter().all(|&d| d <= 5));
        total += samples.mean().unwrap();
    }
    // Each estimate has a standard error of about 0.03
    assert!((total / 10.0 - exact).abs() < 0.05);
    Ok(())
}

#[test]
fn test_disconnected_mean() -> Result<()> {
    // A path with 30 nodes and 10 isolated nodes
    let graph = VecGraph::from_edges_with_nodes(40, (0..29).map(|i| (i, i + 1)));
    let exact = compute_exact(&graph, Mode::RollingSum, no_logging![])?
        .mean()
        .unwrap();
    let config = SamplerConfig::default().threshold(0.05).batch_size(20_000);
    let mut rng = SmallRng::seed_from_u64(0);
    let samples = estimate_sampled(&graph, &config, &mut rng, no_logging![])?;
    assert!((samples.mean().unwrap() - exact).abs() < 0.3);
    Ok(())
}

#[test]
fn test_isolated_nodes() -> Result<()> {
    let graph = VecGraph::empty(10);
    let mut rng = SmallRng::seed_from_u64(0);
    let samples = estimate_sampled(&graph, &SamplerConfig::default(), &mut rng, no_logging![])?;
    assert!(samples.converged);
    assert_eq!(samples.rounds, 1);
    assert_eq!(samples.len(), 1000);
    assert!(samples.distances.iter().all(|&d| d == 0));
    Ok(())
}

#[test]
fn test_degenerate() -> Result<()> {
    let mut rng = SmallRng::seed_from_u64(0);
    for graph in [VecGraph::new(), VecGraph::empty(1)] {
        let samples = estimate_sampled(&graph, &SamplerConfig::default(), &mut rng, no_logging![])?;
        assert!(samples.is_empty());
        assert_eq!(samples.rounds, 0);
        assert!(samples.converged);
    }
    Ok(())
}

#[test]
fn test_round_budget() -> Result<()> {
    let graph = common::karate_club();
    // A zero threshold is never met
    let config = SamplerConfig::default()
        .threshold(0.0)
        .batch_size(10)
        .max_rounds(3);
    let mut rng = SmallRng::seed_from_u64(0);
    let samples = estimate_sampled(&graph, &config, &mut rng, no_logging![])?;
    assert!(!samples.converged);
    assert_eq!(samples.rounds, 3);
    assert_eq!(samples.len(), 30);
    Ok(())
}

#[test]
fn test_reproducible() -> Result<()> {
    let graph = common::random_graph(200, 250, 0);
    let config = SamplerConfig::default().batch_size(100);
    let first = estimate_sampled(&graph, &config, &mut SmallRng::seed_from_u64(42), no_logging![])?;
    let second = estimate_sampled(&graph, &config, &mut SmallRng::seed_from_u64(42), no_logging![])?;
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn test_invalid_config() -> Result<()> {
    let graph = common::karate_club();
    let mut rng = SmallRng::seed_from_u64(0);
    for config in [
        SamplerConfig::default().batch_size(0),
        SamplerConfig::default().batch_size(7),
        SamplerConfig::default().threshold(-1.0),
        SamplerConfig::default().threshold(f64::NAN),
        SamplerConfig::default().threshold(f64::INFINITY),
        SamplerConfig::default().max_rounds(0),
    ] {
        assert!(matches!(
            estimate_sampled(&graph, &config, &mut rng, no_logging![]),
            Err(DistanceError::InvalidInput(_))
        ));
    }
    // Invalid configurations are rejected even on trivial graphs
    assert!(estimate_sampled(
        VecGraph::new(),
        &SamplerConfig::default().batch_size(3),
        &mut rng,
        no_logging![]
    )
    .is_err());
    Ok(())
}

#[test]
fn test_draw() -> Result<()> {
    let graph = common::karate_club();
    let mut sampler = ComponentWeightedSampler::new(&graph, no_logging![])?;
    assert_eq!(sampler.weights(), &[34 * 34]);
    let mut rng = SmallRng::seed_from_u64(1);
    let distances = sampler.draw(500, &mut rng)?;
    assert_eq!(distances.len(), 500);
    assert!(distances.iter().all(|&d| d <= 5));
    Ok(())
}

#[cfg(feature = "serde")]
#[test]
fn test_serde() -> Result<()> {
    let config = SamplerConfig::default().threshold(0.2);
    let json = serde_json::to_string(&config)?;
    assert_eq!(serde_json::from_str::<SamplerConfig>(&json)?, config);
    Ok(())
}
