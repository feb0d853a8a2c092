//! Articulation points (cut vertices) of a road network component.
//!
//! Tarjan's low-link method run as an iterative depth-first search. Each
//! discovered node gets a `Frame` on an explicit stack instead of a call
//! stack frame, so the depth of the traversal is bounded only by memory.
//! Road networks easily produce search trees hundreds of thousands of nodes
//! deep.
//!
//! Neighbors are enumerated without one-way restrictions: connectivity is
//! treated as undirected.

use std::collections::BTreeSet;

use log::debug;

use crate::model::{Neighbor, RoadGraph};
use crate::{Error, NodeIndex, SegmentIndex};

const UNDISCOVERED: u32 = u32::MAX;

/// Suspended state of one node in the depth-first search
#[derive(Debug)]
struct Frame {
    node: NodeIndex,
    depth: u32,
    /// Stack slot of the parent frame, `None` for children of the root
    parent: Option<usize>,
    /// Segment used to reach this node, never followed back
    arrived_by: SegmentIndex,
    /// Minimum depth reachable from this subtree through back edges
    reach_back: u32,
    /// Neighbors still to examine, built on first visit
    pending: Option<Vec<Neighbor>>,
}

impl Frame {
    fn new(neighbor: Neighbor, depth: u32, parent: Option<usize>) -> Self {
        Self {
            node: neighbor.node,
            depth,
            parent,
            arrived_by: neighbor.segment,
            reach_back: depth,
            pending: None,
        }
    }
}

/// Articulation points of the component containing `root`.
///
/// An isolated root yields an empty set.
///
/// # Errors
///
/// [`Error::InvalidNode`] if `root` is not in the graph
pub fn articulation_points(
    graph: &RoadGraph,
    root: NodeIndex,
) -> Result<BTreeSet<NodeIndex>, Error> {
    graph.validate_node(root)?;

    let mut depths = vec![UNDISCOVERED; graph.node_count()];
    let mut points = BTreeSet::new();
    let mut subtrees = 0;

    depths[root.index()] = 0;
    for neighbor in graph.neighbors(root) {
        if depths[neighbor.node.index()] == UNDISCOVERED {
            explore_subtree(graph, neighbor, &mut depths, &mut points);
            subtrees += 1;
        }
    }

    // The root separates its subtrees, since none of them could reach another
    if subtrees > 1 {
        points.insert(root);
    }

    debug!(
        "Found {} articulation points from {root:?} across {subtrees} subtrees",
        points.len()
    );

    Ok(points)
}

/// Depth-first search of the subtree hanging off the root through `first`
fn explore_subtree(
    graph: &RoadGraph,
    first: Neighbor,
    depths: &mut [u32],
    points: &mut BTreeSet<NodeIndex>,
) {
    let mut stack = vec![Frame::new(first, 1, None)];

    while let Some(top) = stack.len().checked_sub(1) {
        let frame = &mut stack[top];

        if frame.pending.is_none() {
            depths[frame.node.index()] = frame.depth;
            let arrived_by = frame.arrived_by;
            frame.pending = Some(
                graph
                    .neighbors(frame.node)
                    .filter(|neighbor| neighbor.segment != arrived_by)
                    .collect(),
            );
            continue;
        }

        if let Some(neighbor) = frame.pending.as_mut().and_then(Vec::pop) {
            let neighbor_depth = depths[neighbor.node.index()];
            if neighbor_depth == UNDISCOVERED {
                let depth = frame.depth + 1;
                stack.push(Frame::new(neighbor, depth, Some(top)));
            } else {
                frame.reach_back = frame.reach_back.min(neighbor_depth);
            }
            continue;
        }

        let Some(finished) = stack.pop() else {
            break;
        };
        if let Some(parent_slot) = finished.parent {
            let parent = &mut stack[parent_slot];
            parent.reach_back = parent.reach_back.min(finished.reach_back);
            if finished.reach_back >= parent.depth {
                points.insert(parent.node);
            }
        }
    }
}
