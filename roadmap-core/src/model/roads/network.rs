//! Road graph and neighbor enumeration

use std::fmt;

use geo::Point;
use hashbrown::HashMap;
use petgraph::{graph::UnGraph, visit::EdgeRef};
use rstar::{RTree, primitives::GeomWithData};
use serde::{Deserialize, Serialize};

use super::components::{Road, RoadNode, RoadSegment};
use crate::{Error, Location, NodeId, NodeIndex, RoadId, RoadIndex, SegmentIndex};

/// Node position stored in the spatial index
pub type IndexedPoint = GeomWithData<Point<f64>, NodeIndex>;

/// How one-way roads constrain neighbor enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Traversal {
    /// Every segment can be used in both directions, one-way flags are ignored
    #[default]
    Undirected,
    /// Segments of one-way roads may only be left from their start node
    RespectOneWay,
}

/// A neighbor of a node together with the segment that reaches it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighbor {
    pub segment: SegmentIndex,
    pub node: NodeIndex,
}

/// Immutable road network.
///
/// Built once through [`RoadGraphBuilder`](super::RoadGraphBuilder); adjacency
/// comes from the segments stored as undirected graph edges.
pub struct RoadGraph {
    pub(crate) graph: UnGraph<RoadNode, RoadSegment>,
    pub(crate) roads: Vec<Road>,
    pub(crate) node_lookup: HashMap<NodeId, NodeIndex>,
    pub(crate) road_lookup: HashMap<RoadId, RoadIndex>,
    pub(crate) rtree: RTree<IndexedPoint>,
}

impl RoadGraph {
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn segment_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn road_count(&self) -> usize {
        self.roads.len()
    }

    pub fn node(&self, node: NodeIndex) -> Option<&RoadNode> {
        self.graph.node_weight(node)
    }

    pub fn segment(&self, segment: SegmentIndex) -> Option<&RoadSegment> {
        self.graph.edge_weight(segment)
    }

    pub fn road(&self, road: RoadIndex) -> Option<&Road> {
        self.roads.get(road)
    }

    pub fn node_index(&self, id: NodeId) -> Option<NodeIndex> {
        self.node_lookup.get(&id).copied()
    }

    /// External id of the node at `node`
    pub fn node_id(&self, node: NodeIndex) -> Option<NodeId> {
        self.node(node).map(|weight| weight.id)
    }

    pub fn road_index(&self, id: RoadId) -> Option<RoadIndex> {
        self.road_lookup.get(&id).copied()
    }

    pub fn nodes(&self) -> impl Iterator<Item = (NodeIndex, &RoadNode)> + '_ {
        self.graph
            .node_indices()
            .map(move |index| (index, &self.graph[index]))
    }

    pub fn segments(&self) -> impl Iterator<Item = (SegmentIndex, &RoadSegment)> + '_ {
        self.graph
            .edge_indices()
            .map(move |index| (index, &self.graph[index]))
    }

    pub fn roads(&self) -> &[Road] {
        &self.roads
    }

    pub fn contains_node(&self, node: NodeIndex) -> bool {
        node.index() < self.graph.node_count()
    }

    /// Fails with [`Error::InvalidNode`] if `node` is not part of this graph
    pub fn validate_node(&self, node: NodeIndex) -> Result<(), Error> {
        if self.contains_node(node) {
            Ok(())
        } else {
            Err(Error::InvalidNode(node))
        }
    }

    /// Location of a node known to be valid
    pub(crate) fn location(&self, node: NodeIndex) -> Location {
        self.graph[node].location
    }

    /// Segments touching `node`, each listed once
    pub fn incident_segments(
        &self,
        node: NodeIndex,
    ) -> impl Iterator<Item = SegmentIndex> + '_ {
        self.graph.edges(node).map(|edge| edge.id())
    }

    /// Neighbors of `node` ignoring one-way restrictions
    pub fn neighbors(&self, node: NodeIndex) -> impl Iterator<Item = Neighbor> + '_ {
        self.neighbors_directed(node, Traversal::Undirected)
    }

    /// Neighbors of `node`: for each incident segment, the opposite endpoint
    pub fn neighbors_directed(
        &self,
        node: NodeIndex,
        traversal: Traversal,
    ) -> impl Iterator<Item = Neighbor> + '_ {
        self.graph.edges(node).filter_map(move |edge| {
            let segment = edge.weight();
            if traversal == Traversal::RespectOneWay
                && self.roads[segment.road].one_way
                && segment.start != node
            {
                return None;
            }

            Some(Neighbor {
                segment: edge.id(),
                node: segment.other_endpoint(node)?,
            })
        })
    }

    /// Nearest node to `location` and the straight-line distance to it
    pub fn nearest_node(&self, location: &Location) -> Option<(NodeIndex, f64)> {
        let nearest = self.rtree.nearest_neighbor(&location.point())?;
        let node = nearest.data;
        Some((node, self.location(node).distance(location)))
    }

    /// Names of the roads meeting at `node`, sorted and without duplicates
    pub fn road_names_at(&self, node: NodeIndex) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .graph
            .edges(node)
            .map(|edge| self.roads[edge.weight().road].name.as_str())
            .collect();
        names.sort_unstable();
        names.dedup();
        names
    }

    /// Short human readable description of a node
    pub fn describe_node(&self, node: NodeIndex) -> Result<NodeDescription<'_>, Error> {
        let weight = self.node(node).ok_or(Error::InvalidNode(node))?;

        Ok(NodeDescription {
            id: weight.id,
            location: weight.location,
            roads: self.road_names_at(node),
        })
    }
}

impl fmt::Debug for RoadGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RoadGraph")
            .field("nodes", &self.node_count())
            .field("segments", &self.segment_count())
            .field("roads", &self.road_count())
            .finish_non_exhaustive()
    }
}

/// Node summary shown when a node is selected
#[derive(Debug, Clone, PartialEq)]
pub struct NodeDescription<'a> {
    pub id: NodeId,
    pub location: Location,
    pub roads: Vec<&'a str>,
}

impl fmt::Display for NodeDescription<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ID: {}  loc: {}", self.id, self.location)?;
        if !self.roads.is_empty() {
            write!(f, "\nroads: {}", self.roads.join(", "))?;
        }
        Ok(())
    }
}
