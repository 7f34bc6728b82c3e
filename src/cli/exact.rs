/*
 * SPDX-FileCopyrightText: 2025 The graph-distances authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::edge_list::EdgeListArgs;
use super::{GlobalArgs, NumThreadsArg};
use crate::distances::{par_compute_exact, DistanceDistribution, ExactDistances, Mode};
use crate::thread_pool;
use crate::traits::UndirectedGraph;
use anyhow::Result;
use clap::Parser;
use dsi_progress_logger::{concurrent_progress_logger, ProgressLog};
use std::io::Write;

#[derive(Parser, Debug)]
#[command(about = "Computes exactly the distances between all pairs of nodes in the same component (the mean distance is printed on stdout).", long_about = None)]
pub struct CliArgs {
    #[clap(flatten)]
    pub input: EdgeListArgs,

    #[arg(long)]
    /// Computes the whole distance distribution, rather than just the mean.
    pub histogram: bool,

    #[arg(long)]
    /// Prints the results in JSON format.
    pub json: bool,

    #[clap(flatten)]
    pub num_threads: NumThreadsArg,
}

/// The results printed by the command.
#[derive(Debug, serde::Serialize)]
struct Report<'a> {
    num_nodes: usize,
    num_edges: usize,
    count: u64,
    sum: u64,
    mean: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    median: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    diameter: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    distribution: Option<&'a DistanceDistribution>,
}

pub fn run(global_args: GlobalArgs, args: CliArgs, out: &mut impl Write) -> Result<()> {
    let graph = args.input.load()?;

    let thread_pool = thread_pool![args.num_threads.num_threads];
    log::info!("Using {} threads", thread_pool.current_num_threads());
    let mut pl = concurrent_progress_logger![];
    if let Some(log_interval) = global_args.log_interval {
        pl.log_interval(log_interval);
    }

    let mode = if args.histogram {
        Mode::Distribution
    } else {
        Mode::RollingSum
    };
    let exact = par_compute_exact(&graph, mode, &thread_pool, &mut pl)?;

    let rolling = exact.to_rolling();
    let distribution = exact.distribution();
    let report = Report {
        num_nodes: graph.num_nodes(),
        num_edges: graph.num_edges(),
        count: rolling.count,
        sum: rolling.sum,
        mean: rolling.mean(),
        median: distribution.and_then(DistanceDistribution::median),
        diameter: distribution.and_then(DistanceDistribution::diameter),
        distribution,
    };

    if args.json {
        serde_json::to_writer(&mut *out, &report)?;
        writeln!(out)?;
    } else {
        write_report(out, &report, &exact)?;
    }
    Ok(())
}

fn write_report(out: &mut impl Write, report: &Report, exact: &ExactDistances) -> Result<()> {
    writeln!(out, "Pairs: {}", report.count)?;
    writeln!(out, "Sum of distances: {}", report.sum)?;
    if let Some(mean) = report.mean {
        writeln!(out, "Mean distance: {:.6}", mean)?;
    }
    if let ExactDistances::Distribution(dd) = exact {
        if let Some(median) = report.median {
            writeln!(out, "Median distance: {}", median)?;
        }
        if let Some(diameter) = report.diameter {
            writeln!(out, "Diameter: {}", diameter)?;
        }
        for (distance, count) in dd.iter() {
            writeln!(out, "{}\t{}", distance, count)?;
        }
    }
    Ok(())
}
