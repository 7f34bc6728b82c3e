/*
 * SPDX-FileCopyrightText: 2025 The graph-distances authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

#![allow(dead_code)]

use graph_distances::graphs::vec_graph::VecGraph;
use graph_distances::traits::UndirectedGraph;
use graph_distances::visits::breadth_first::{Reached, Seq};
use no_break::NoBreak;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::ops::ControlFlow::Continue;

/// Zachary's karate club network (0-based).
pub fn karate_club() -> VecGraph {
    const ADJ: &[(usize, &[usize])] = &[
        (0, &[1, 2, 3, 4, 5, 6, 7, 8, 10, 11, 12, 13, 17, 19, 21, 31]),
        (1, &[2, 3, 7, 13, 17, 19, 21, 30]),
        (2, &[3, 7, 8, 9, 13, 27, 28, 32]),
        (3, &[7, 12, 13]),
        (4, &[6, 10]),
        (5, &[6, 10, 16]),
        (6, &[16]),
        (8, &[30, 32, 33]),
        (9, &[33]),
        (13, &[33]),
        (14, &[32, 33]),
        (15, &[32, 33]),
        (18, &[32, 33]),
        (19, &[33]),
        (20, &[32, 33]),
        (22, &[32, 33]),
        (23, &[25, 27, 29, 32, 33]),
        (24, &[25, 27, 31]),
        (25, &[31]),
        (26, &[29, 33]),
        (27, &[33]),
        (28, &[31, 33]),
        (29, &[32, 33]),
        (30, &[32, 33]),
        (31, &[32, 33]),
        (32, &[33]),
    ];
    VecGraph::from_edges(
        ADJ.iter()
            .flat_map(|&(u, succ)| succ.iter().map(move |&v| (u, v))),
    )
}

/// Distances from `root` computed by the general-purpose sequential visit,
/// with `None` for unreachable nodes.
pub fn reference_distances(graph: &VecGraph, root: usize) -> Vec<Option<usize>> {
    let mut dist = vec![None; graph.num_nodes()];
    Seq::new(graph)
        .visit(root, |Reached { node, distance }| {
            dist[node] = Some(distance);
            Continue(())
        })
        .continue_value_no_break();
    dist
}

/// A random graph with `n` nodes and about `m` edges, usually disconnected.
pub fn random_graph(n: usize, m: usize, seed: u64) -> VecGraph {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut graph = VecGraph::empty(n);
    for _ in 0..m {
        let u = rng.random_range(0..n);
        let v = rng.random_range(0..n);
        graph.add_edge(u, v);
    }
    graph
}
