/*
 * SPDX-FileCopyrightText: 2025 The graph-distances authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::edge_list::EdgeListArgs;
use super::GlobalArgs;
use crate::distances::{estimate_sampled, SamplerConfig};
use anyhow::Result;
use clap::Parser;
use dsi_progress_logger::{progress_logger, ProgressLog};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::io::Write;

#[derive(Parser, Debug)]
#[command(about = "Estimates the mean distance by sampling pairs of nodes in the same component (the estimate is printed on stdout).", long_about = None)]
pub struct CliArgs {
    #[clap(flatten)]
    pub input: EdgeListArgs,

    #[arg(short, long, default_value_t = SamplerConfig::default().threshold)]
    /// Stop when the means of the two sample sets differ by less than this
    /// value.
    pub threshold: f64,

    #[arg(short, long, default_value_t = SamplerConfig::default().batch_size)]
    /// The number of samples per round (must be even).
    pub batch_size: usize,

    #[arg(long, default_value_t = SamplerConfig::default().max_rounds)]
    /// The maximum number of rounds.
    pub max_rounds: usize,

    #[arg(short, long)]
    /// The seed of the pseudorandom number generator (random if omitted).
    pub seed: Option<u64>,

    #[arg(long)]
    /// Prints the results in JSON format.
    pub json: bool,

    #[arg(long, requires = "json")]
    /// Includes the sampled distances in the JSON output.
    pub samples: bool,
}

#[derive(Debug, serde::Serialize)]
struct Report<'a> {
    seed: u64,
    rounds: usize,
    converged: bool,
    num_samples: usize,
    mean: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    samples: Option<&'a [usize]>,
}

pub fn run(global_args: GlobalArgs, args: CliArgs, out: &mut impl Write) -> Result<()> {
    let config = SamplerConfig::default()
        .threshold(args.threshold)
        .batch_size(args.batch_size)
        .max_rounds(args.max_rounds);
    config.validate()?;

    let graph = args.input.load()?;

    let seed = args.seed.unwrap_or_else(rand::random);
    log::info!("Using seed {}", seed);
    let mut rng = SmallRng::seed_from_u64(seed);

    let mut pl = progress_logger![];
    if let Some(log_interval) = global_args.log_interval {
        pl.log_interval(log_interval);
    }

    let samples = estimate_sampled(&graph, &config, &mut rng, &mut pl)?;

    let report = Report {
        seed,
        rounds: samples.rounds,
        converged: samples.converged,
        num_samples: samples.len(),
        mean: samples.mean(),
        samples: args.samples.then_some(samples.distances.as_slice()),
    };

    if args.json {
        serde_json::to_writer(&mut *out, &report)?;
        writeln!(out)?;
    } else {
        writeln!(out, "Samples: {}", report.num_samples)?;
        writeln!(out, "Rounds: {}", report.rounds)?;
        writeln!(out, "Converged: {}", report.converged)?;
        if let Some(mean) = report.mean {
            writeln!(out, "Mean distance: {:.6}", mean)?;
        }
    }
    Ok(())
}
