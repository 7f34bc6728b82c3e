/*
 * SPDX-FileCopyrightText: 2025 The graph-distances authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

mod common;

use anyhow::Result;
use graph_distances::prelude::*;

#[test]
fn test_karate_all_pairs() -> Result<()> {
    let graph = common::karate_club();
    let mut bfs = BidirectionalBfs::new(&graph);
    for src in 0..graph.num_nodes() {
        let reference = common::reference_distances(&graph, src);
        for dst in 0..graph.num_nodes() {
            assert_eq!(Some(bfs.distance(src, dst)?), reference[dst]);
        }
    }
    Ok(())
}

#[test]
fn test_random_graphs() -> Result<()> {
    for seed in 0..3 {
        let graph = common::random_graph(150, 170, seed);
        let mut bfs = BidirectionalBfs::new(&graph);
        for src in (0..graph.num_nodes()).step_by(7) {
            let reference = common::reference_distances(&graph, src);
            for dst in 0..graph.num_nodes() {
                match reference[dst] {
                    Some(d) => assert_eq!(bfs.distance(src, dst)?, d),
                    None => assert_eq!(
                        bfs.distance(src, dst),
                        Err(DistanceError::Unreachable { src, dst })
                    ),
                }
            }
        }
    }
    Ok(())
}

#[test]
fn test_same_node() -> Result<()> {
    // Self loops are never used as path steps
    let graph = VecGraph::from_edges_with_nodes(3, [(0, 0), (0, 1)]);
    assert_eq!(point_to_point_distance(&graph, 0, 0)?, 0);
    assert_eq!(point_to_point_distance(&graph, 2, 2)?, 0);
    assert_eq!(point_to_point_distance(&graph, 0, 1)?, 1);
    Ok(())
}

#[test]
fn test_isolated_target() {
    let graph = VecGraph::from_edges_with_nodes(3, [(0, 1)]);
    assert_eq!(
        point_to_point_distance(&graph, 0, 2),
        Err(DistanceError::Unreachable { src: 0, dst: 2 })
    );
    assert_eq!(
        point_to_point_distance(&graph, 2, 1),
        Err(DistanceError::Unreachable { src: 2, dst: 1 })
    );
}

#[test]
fn test_out_of_range() {
    let graph = VecGraph::from_edges([(0, 1)]);
    assert!(matches!(
        point_to_point_distance(&graph, 0, 2),
        Err(DistanceError::InvalidInput(_))
    ));
    assert!(matches!(
        point_to_point_distance(&graph, 5, 5),
        Err(DistanceError::InvalidInput(_))
    ));
}
