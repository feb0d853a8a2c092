//! Road network graph with A* shortest paths and articulation point detection.
//!
//! Build a [`RoadGraph`] once with [`RoadGraphBuilder`], then run any number
//! of independent queries against it. Queries only borrow the graph; all
//! search state is local to a single call.

pub mod algo;
pub mod error;
pub mod geometry;
pub mod model;
pub mod prelude;
pub mod routing;

#[cfg(test)]
pub(crate) mod test_utils;

pub use error::Error;
pub use geometry::Location;
pub use model::{RoadGraph, RoadGraphBuilder};

/// External identifier of a node
pub type NodeId = u32;
/// External identifier of a road
pub type RoadId = u32;

/// Position of a node in the graph
pub type NodeIndex = petgraph::graph::NodeIndex;
/// Position of a segment in the graph
pub type SegmentIndex = petgraph::graph::EdgeIndex;
/// Position of a road in the graph's road list
pub type RoadIndex = usize;
