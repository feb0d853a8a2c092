// Re-export key components
pub use crate::algo::articulation_points;
pub use crate::model::{
    Neighbor, NodeDescription, Road, RoadGraph, RoadGraphBuilder, RoadNode, RoadSegment,
    Traversal,
};
pub use crate::routing::{
    Heuristic, RoadLeg, RoutePath, SearchConfig, StraightLine, Zero, shortest_path,
    shortest_path_with,
};
pub use crate::{Error, Location};

// Identifiers
pub use crate::{NodeId, NodeIndex, RoadId, RoadIndex, SegmentIndex};
