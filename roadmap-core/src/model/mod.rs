//! Data model for the road network
//!
//! Contains nodes, segments and roads, and the graph tying them together.

pub mod roads;

pub use roads::{
    Neighbor, NodeDescription, Road, RoadGraph, RoadGraphBuilder, RoadNode, RoadSegment,
    Traversal,
};
