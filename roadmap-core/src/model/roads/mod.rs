//! Road network model

pub mod builder;
pub mod components;
pub mod network;

pub use builder::RoadGraphBuilder;
pub use components::{Road, RoadNode, RoadSegment};
pub use network::{IndexedPoint, Neighbor, NodeDescription, RoadGraph, Traversal};
