use std::fmt;

use geo::Point;
use log::debug;
use roadmap_core::prelude::*;

/// RoadMap
///
/// A loaded road network together with the search options used for routing.
/// Collaborators address nodes by their external ids; this type resolves them
/// to graph positions and turns query results back into ids and text.
///
/// Core operations:
///
/// - Shortest routes between two intersections, with a per-road report
/// - Articulation points (critical intersections) of a node's component
/// - Selecting the intersection nearest to a point
#[derive(Debug)]
pub struct RoadMap {
    graph: RoadGraph,
    config: SearchConfig,
}

impl RoadMap {
    pub fn new(graph: RoadGraph) -> Self {
        Self::with_config(graph, SearchConfig::default())
    }

    pub fn with_config(graph: RoadGraph, config: SearchConfig) -> Self {
        Self { graph, config }
    }

    pub fn graph(&self) -> &RoadGraph {
        &self.graph
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    fn resolve(&self, id: NodeId) -> Result<NodeIndex, Error> {
        self.graph.node_index(id).ok_or(Error::UnknownNodeId(id))
    }

    /// Shortest route between two intersections
    ///
    /// # Errors
    ///
    /// [`Error::UnknownNodeId`] for an unknown id, [`Error::NoPathFound`] if
    /// the intersections are not connected
    pub fn find_route(&self, start: NodeId, goal: NodeId) -> Result<RoutePath, Error> {
        let start_index = self.resolve(start)?;
        let goal_index = self.resolve(goal)?;
        debug!("Routing from node {start} to node {goal}");

        shortest_path_with(
            &self.graph,
            start_index,
            goal_index,
            &self.config,
            &StraightLine,
        )
    }

    /// Per-road distance report of the shortest route
    ///
    /// # Errors
    ///
    /// Same as [`Self::find_route`]
    pub fn route_report(&self, start: NodeId, goal: NodeId) -> Result<String, Error> {
        Ok(self.find_route(start, goal)?.report(&self.graph))
    }

    /// Ids of the articulation points in the component of `root`, ascending
    ///
    /// # Errors
    ///
    /// [`Error::UnknownNodeId`] if `root` is unknown
    pub fn articulation_points(&self, root: NodeId) -> Result<Vec<NodeId>, Error> {
        let root = self.resolve(root)?;
        let mut ids: Vec<NodeId> = articulation_points(&self.graph, root)?
            .into_iter()
            .filter_map(|node| self.graph.node_id(node))
            .collect();
        ids.sort_unstable();
        Ok(ids)
    }

    /// Id of the intersection closest to `point`, `None` on an empty map
    pub fn nearest_node(&self, point: Point<f64>) -> Option<NodeId> {
        self.graph
            .nearest_node(&Location::from(point))
            .and_then(|(node, _)| self.graph.node_id(node))
    }

    /// Text shown when an intersection is selected
    ///
    /// # Errors
    ///
    /// [`Error::UnknownNodeId`] if `id` is unknown
    pub fn describe_node(&self, id: NodeId) -> Result<String, Error> {
        let node = self.resolve(id)?;
        Ok(self.graph.describe_node(node)?.to_string())
    }
}

impl fmt::Display for RoadMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RoadMap with {} nodes, {} segments and {} roads",
            self.graph.node_count(),
            self.graph.segment_count(),
            self.graph.road_count()
        )
    }
}
