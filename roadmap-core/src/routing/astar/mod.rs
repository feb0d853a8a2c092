//! A* shortest path search over the road graph

mod config;
mod heuristic;
mod state;

use std::collections::BinaryHeap;

use log::{debug, trace};

pub use config::SearchConfig;
pub use heuristic::{Heuristic, StraightLine, Zero};
use state::{FrontierEntry, SearchState};

use crate::model::{Neighbor, RoadGraph};
use crate::routing::path::RoutePath;
use crate::{Error, NodeIndex};

/// Shortest path between two nodes using the straight-line heuristic and
/// ignoring one-way restrictions.
///
/// # Errors
///
/// [`Error::InvalidNode`] if either node is not in the graph,
/// [`Error::NoPathFound`] if `goal` cannot be reached from `start`
pub fn shortest_path(
    graph: &RoadGraph,
    start: NodeIndex,
    goal: NodeIndex,
) -> Result<RoutePath, Error> {
    shortest_path_with(graph, start, goal, &SearchConfig::default(), &StraightLine)
}

/// A* search with lazy deletion.
///
/// A node may sit in the frontier several times; stale entries are skipped
/// when popped. Equal priorities are served in insertion order, so the
/// result is deterministic for a given graph.
///
/// # Errors
///
/// [`Error::InvalidNode`] if either node is not in the graph,
/// [`Error::NoPathFound`] if the frontier runs dry before `goal` is visited
pub fn shortest_path_with<H: Heuristic>(
    graph: &RoadGraph,
    start: NodeIndex,
    goal: NodeIndex,
    config: &SearchConfig,
    heuristic: &H,
) -> Result<RoutePath, Error> {
    graph.validate_node(start)?;
    graph.validate_node(goal)?;

    let goal_location = graph.location(goal);
    let mut state = SearchState::new(graph.node_count());
    let mut frontier = BinaryHeap::new();
    let mut sequence = 0;

    frontier.push(FrontierEntry {
        node: start,
        via: None,
        cost: 0.0,
        priority: heuristic.estimate(&graph.location(start), &goal_location),
        sequence,
    });

    while let Some(entry) = frontier.pop() {
        if state.is_visited(entry.node) {
            continue;
        }
        state.settle(entry.node, entry.via, entry.cost);

        if entry.node == goal {
            break;
        }

        for Neighbor { segment, node } in graph.neighbors_directed(entry.node, config.traversal)
        {
            if state.is_visited(node) {
                continue;
            }

            let cost = entry.cost + graph.graph[segment].length;
            sequence += 1;
            frontier.push(FrontierEntry {
                node,
                via: Some((entry.node, segment)),
                cost,
                priority: cost + heuristic.estimate(&graph.location(node), &goal_location),
                sequence,
            });
        }
    }

    if !state.is_visited(goal) {
        debug!(
            "No path from {start:?} to {goal:?}, {} nodes settled",
            state.settled()
        );
        return Err(Error::NoPathFound { start, goal });
    }

    let segments = state.backtrack(goal);
    trace!(
        "Path from {start:?} to {goal:?}: {} segments, {} nodes settled",
        segments.len(),
        state.settled()
    );

    Ok(RoutePath::new(start, goal, segments, state.cost(goal)))
}
