/*
 * SPDX-FileCopyrightText: 2025 The graph-distances authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::edge_list::EdgeListArgs;
use super::GlobalArgs;
use crate::distances::point_to_point_distance;
use anyhow::{Context, Result};
use clap::Parser;
use std::io::Write;

#[derive(Parser, Debug)]
#[command(about = "Computes the distance between two nodes by a bidirectional breadth-first visit.", long_about = None)]
pub struct CliArgs {
    #[clap(flatten)]
    pub input: EdgeListArgs,

    /// The source node.
    pub src: usize,

    /// The destination node.
    pub dst: usize,

    #[arg(long)]
    /// Prints the result in JSON format.
    pub json: bool,
}

pub fn run(_global_args: GlobalArgs, args: CliArgs, out: &mut impl Write) -> Result<()> {
    let graph = args.input.load()?;
    let src = args.input.node(args.src)?;
    let dst = args.input.node(args.dst)?;

    let distance = point_to_point_distance(&graph, src, dst).with_context(|| {
        format!(
            "Could not compute the distance between {} and {}",
            args.src, args.dst
        )
    })?;

    if args.json {
        writeln!(
            out,
            "{}",
            serde_json::json!({ "src": args.src, "dst": args.dst, "distance": distance })
        )?;
    } else {
        writeln!(out, "{}", distance)?;
    }
    Ok(())
}
