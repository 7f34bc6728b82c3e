/*
 * SPDX-FileCopyrightText: 2025 The graph-distances authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

mod common;

use anyhow::Result;
use dsi_progress_logger::no_logging;
use graph_distances::graphs::compact_adjacency::CompactAdjacency;
use graph_distances::prelude::*;

#[test]
fn test_karate_against_reference() -> Result<()> {
    let graph = common::karate_club();
    let groups = connected_components(&graph, no_logging![]).group();
    let adj = CompactAdjacency::from_component(&graph, &groups, 0)?;
    let bfs = ComponentBfs::new(&adj);
    let mut scratch = BfsScratch::new(adj.num_nodes());

    for root in 0..graph.num_nodes() {
        let expected = common::reference_distances(&graph, root)
            .into_iter()
            .map(Option::unwrap)
            .collect::<Vec<_>>();
        assert_eq!(bfs.distances(root, &mut scratch)?, expected.as_slice());
    }
    Ok(())
}

#[test]
fn test_random_components() -> Result<()> {
    let graph = common::random_graph(300, 280, 1);
    let groups = connected_components(&graph, no_logging![]).group();

    for component in 0..groups.num_components() {
        let members = groups.members(component);
        if members.len() < 2 {
            continue;
        }
        let adj = CompactAdjacency::from_component(&graph, &groups, component)?;
        let bfs = ComponentBfs::new(&adj);
        let mut scratch = BfsScratch::new(members.len());
        for (local, &root) in members.iter().enumerate() {
            let reference = common::reference_distances(&graph, root);
            let dist = bfs.distances(local, &mut scratch)?;
            for (i, &node) in members.iter().enumerate() {
                assert_eq!(Some(dist[i]), reference[node]);
            }
        }
    }
    Ok(())
}

#[test]
fn test_scratch_reuse_across_components() -> Result<()> {
    // Two paths of the same length
    let first = CompactAdjacency::from_edges(4, [(0, 1), (1, 2), (2, 3)])?;
    let second = CompactAdjacency::from_edges(4, [(3, 1), (1, 0), (0, 2)])?;
    let mut scratch = BfsScratch::new(4);
    assert_eq!(
        ComponentBfs::new(&first).distances(0, &mut scratch)?,
        &[0, 1, 2, 3]
    );
    assert_eq!(
        ComponentBfs::new(&second).distances(3, &mut scratch)?,
        &[2, 1, 3, 0]
    );
    Ok(())
}
