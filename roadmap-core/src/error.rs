use thiserror::Error;

use crate::{NodeId, NodeIndex, RoadId};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Invalid node index {0:?}")]
    InvalidNode(NodeIndex),
    #[error("Unknown node id {0}")]
    UnknownNodeId(NodeId),
    #[error("Unknown road id {0}")]
    UnknownRoadId(RoadId),
    #[error("No path found from {start:?} to {goal:?}")]
    NoPathFound { start: NodeIndex, goal: NodeIndex },
    #[error("Invalid data: {0}")]
    InvalidData(String),
    #[error("GeoJSON error: {0}")]
    GeoJsonError(String),
}
