//! Road network viewer core.
//!
//! Wraps a [`RoadGraph`] built by a loader in a [`RoadMap`] that answers the
//! viewer's queries: shortest routes, critical intersections and node
//! selection.

mod map;

pub use map::RoadMap;
pub use roadmap_core::prelude;
pub use roadmap_core::{Error, Location, NodeId, RoadGraph, RoadGraphBuilder};
