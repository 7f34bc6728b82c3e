/*
 * SPDX-FileCopyrightText: 2025 The graph-distances authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

mod common;

use anyhow::Result;
use dsi_progress_logger::no_logging;
use graph_distances::graphs::compact_adjacency::{CompactAdjacency, SENTINEL};
use graph_distances::prelude::*;

#[test]
fn test_row_invariants() -> Result<()> {
    let graph = common::karate_club();
    let groups = connected_components(&graph, no_logging![]).group();
    assert_eq!(groups.num_components(), 1);
    let adj = CompactAdjacency::from_component(&graph, &groups, 0)?;

    assert_eq!(adj.num_nodes(), 34);
    assert_eq!(adj.max_degree(), 17);
    for node in 0..adj.num_nodes() {
        let row = adj.row(node);
        assert_eq!(row.len(), adj.max_degree());
        let degree = adj.degree(node);
        assert_eq!(degree, graph.degree(node));
        // Neighbors first, then only sentinels
        assert!(row[..degree].iter().all(Option::is_some));
        assert!(row[degree..].iter().all(|cell| *cell == SENTINEL));
        assert_eq!(
            adj.neighbors(node).collect::<Vec<_>>(),
            graph.neighbors(node).collect::<Vec<_>>()
        );
    }
    Ok(())
}

#[test]
fn test_local_indices() -> Result<()> {
    // Component 1 is {1, 3, 5}, a path 5 - 1 - 3
    let graph = VecGraph::from_edges_with_nodes(6, [(0, 2), (2, 4), (5, 1), (1, 3)]);
    let groups = connected_components(&graph, no_logging![]).group();
    assert_eq!(groups.members(1), &[1, 3, 5]);

    let adj = CompactAdjacency::from_component(&graph, &groups, 1)?;
    assert_eq!(adj.max_degree(), 2);
    assert_eq!(adj.neighbors(0).collect::<Vec<_>>(), vec![1, 2]);
    assert_eq!(adj.neighbors(1).collect::<Vec<_>>(), vec![0]);
    assert_eq!(adj.neighbors(2).collect::<Vec<_>>(), vec![0]);
    Ok(())
}

#[test]
fn test_rebuild() -> Result<()> {
    let graph = common::random_graph(100, 120, 0);
    let groups = connected_components(&graph, no_logging![]).group();
    for component in 0..groups.num_components() {
        let first = CompactAdjacency::from_component(&graph, &groups, component)?;
        let second = CompactAdjacency::from_component(&graph, &groups, component)?;
        assert_eq!(first, second);
    }
    Ok(())
}

#[test]
fn test_from_edges_matches_from_component() -> Result<()> {
    let graph = common::karate_club();
    let groups = connected_components(&graph, no_logging![]).group();
    let from_component = CompactAdjacency::from_component(&graph, &groups, 0)?;
    let edges = (0..graph.num_nodes()).flat_map(|u| graph.neighbors(u).map(move |v| (u, v)));
    let from_edges = CompactAdjacency::from_edges(graph.num_nodes(), edges)?;
    assert_eq!(from_component, from_edges);
    Ok(())
}

#[test]
fn test_open_component() -> Result<()> {
    let graph = VecGraph::from_edges([(0, 1), (1, 2)]);
    // Pretend that 2 is a component by itself
    let groups = Components::new(2, vec![0, 0, 1].into_boxed_slice()).group();
    assert_eq!(
        CompactAdjacency::from_component(&graph, &groups, 0),
        Err(DistanceError::OpenComponent {
            component: 0,
            node: 1,
            neighbor: 2
        })
    );
    assert!(matches!(
        CompactAdjacency::from_component(&graph, &groups, 2),
        Err(DistanceError::InvalidInput(_))
    ));
    Ok(())
}
