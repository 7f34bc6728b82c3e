/*
 * SPDX-FileCopyrightText: 2025 The graph-distances authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Reading of graphs in edge-list format.
//!
//! The first meaningful line contains the number of nodes, or `-1` if the
//! number of nodes must be inferred from the largest endpoint. Each following
//! line contains an edge given by two whitespace-separated node identifiers;
//! further columns are ignored. Empty lines and lines starting with `#` are
//! skipped everywhere.
//!
//! Self loops and duplicate edges (in either direction) are discarded.

use crate::graphs::vec_graph::VecGraph;
use crate::traits::UndirectedGraph;
use anyhow::{bail, ensure, Context, Result};
use clap::Args;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Shared CLI arguments for reading edge lists.
#[derive(Args, Debug)]
pub struct EdgeListArgs {
    /// The edge-list file.
    pub path: PathBuf,

    #[arg(long)]
    /// Node identifiers start from 1 rather than from 0.
    pub one_indexed: bool,
}

impl EdgeListArgs {
    /// Loads the graph.
    pub fn load(&self) -> Result<VecGraph> {
        load_edge_list(&self.path, self.one_indexed)
    }

    /// Converts a node identifier given on the command line to a node of
    /// the loaded graph.
    pub fn node(&self, id: usize) -> Result<usize> {
        if self.one_indexed {
            id.checked_sub(1)
                .context("Node identifiers start from 1 with --one-indexed")
        } else {
            Ok(id)
        }
    }
}

/// Loads a graph from an edge-list file.
pub fn load_edge_list(path: impl AsRef<Path>, one_indexed: bool) -> Result<VecGraph> {
    let path = path.as_ref();
    log::info!("Loading the graph from {}", path.display());
    let file = File::open(path).with_context(|| format!("Could not open {}", path.display()))?;
    let graph = read_edge_list(BufReader::new(file), one_indexed)
        .with_context(|| format!("Could not parse {}", path.display()))?;
    log::info!(
        "Loaded a graph with {} nodes and {} edges",
        graph.num_nodes(),
        graph.num_edges()
    );
    Ok(graph)
}

/// Reads a graph in edge-list format.
pub fn read_edge_list(reader: impl BufRead, one_indexed: bool) -> Result<VecGraph> {
    // None until the header has been read; then the number of nodes, if given
    let mut header: Option<Option<usize>> = None;
    let mut graph = VecGraph::new();
    let mut self_loops = 0_usize;
    let mut duplicates = 0_usize;

    for (line_num, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("Could not read line {}", line_num + 1))?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let mut tokens = line.split_whitespace();

        let Some(num_nodes) = header else {
            let n = tokens
                .next()
                .unwrap_or_default()
                .parse::<i64>()
                .with_context(|| format!("Invalid number of nodes at line {}", line_num + 1))?;
            header = Some(match n {
                -1 => None,
                n if n >= 0 => {
                    graph = VecGraph::empty(n as usize);
                    Some(n as usize)
                }
                n => bail!("Invalid number of nodes {n} at line {}", line_num + 1),
            });
            continue;
        };

        let (Some(u), Some(v)) = (tokens.next(), tokens.next()) else {
            bail!("Expected two nodes at line {}", line_num + 1);
        };
        let u = parse_node(u, one_indexed, line_num)?;
        let v = parse_node(v, one_indexed, line_num)?;
        if let Some(n) = num_nodes {
            ensure!(
                u < n && v < n,
                "Edge ({u}, {v}) at line {} has an endpoint outside of a graph with {n} nodes",
                line_num + 1
            );
        }

        if u == v {
            self_loops += 1;
            continue;
        }
        graph.add_node(u.max(v));
        if !graph.add_edge(u, v) {
            duplicates += 1;
        }
    }

    if header.is_none() {
        bail!("Missing number of nodes");
    }
    if self_loops + duplicates > 0 {
        log::info!(
            "Discarded {} self loops and {} duplicate edges",
            self_loops,
            duplicates
        );
    }
    Ok(graph)
}

fn parse_node(token: &str, one_indexed: bool, line_num: usize) -> Result<usize> {
    let id = token
        .parse::<usize>()
        .with_context(|| format!("Invalid node {token:?} at line {}", line_num + 1))?;
    if one_indexed {
        id.checked_sub(1).with_context(|| {
            format!(
                "Node 0 at line {} is invalid for one-indexed input",
                line_num + 1
            )
        })
    } else {
        Ok(id)
    }
}
