use geo::LineString;
use hashbrown::{HashMap, hash_map::Entry};
use log::{info, warn};
use petgraph::graph::UnGraph;
use rstar::RTree;

use super::components::{Road, RoadNode, RoadSegment};
use super::network::{IndexedPoint, RoadGraph};
use crate::{Error, Location, NodeId, NodeIndex, RoadId, RoadIndex, SegmentIndex};

/// Incrementally assembles a [`RoadGraph`] from nodes, roads and segments
/// handed over by a loader.
#[derive(Debug, Default)]
pub struct RoadGraphBuilder {
    graph: UnGraph<RoadNode, RoadSegment>,
    roads: Vec<Road>,
    node_lookup: HashMap<NodeId, NodeIndex>,
    road_lookup: HashMap<RoadId, RoadIndex>,
}

impl RoadGraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(nodes: usize, segments: usize) -> Self {
        Self {
            graph: UnGraph::with_capacity(nodes, segments),
            node_lookup: HashMap::with_capacity(nodes),
            ..Self::default()
        }
    }

    /// Adds an intersection
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidData`] if a node with the same id already exists
    /// or if a coordinate of `location` is not finite
    pub fn add_node(&mut self, id: NodeId, location: Location) -> Result<NodeIndex, Error> {
        if !location.is_finite() {
            return Err(Error::InvalidData(format!(
                "Node {id} has a non-finite location {location}"
            )));
        }

        match self.node_lookup.entry(id) {
            Entry::Occupied(_) => Err(Error::InvalidData(format!("Duplicate node id {id}"))),
            Entry::Vacant(entry) => {
                let index = self.graph.add_node(RoadNode { id, location });
                entry.insert(index);
                Ok(index)
            }
        }
    }

    /// Adds a road without segments; segments are attached by [`Self::add_segment`]
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidData`] if a road with the same id already exists
    pub fn add_road(&mut self, road: Road) -> Result<RoadIndex, Error> {
        match self.road_lookup.entry(road.id) {
            Entry::Occupied(_) => Err(Error::InvalidData(format!(
                "Duplicate road id {}",
                road.id
            ))),
            Entry::Vacant(entry) => {
                let index = self.roads.len();
                entry.insert(index);
                self.roads.push(road);
                Ok(index)
            }
        }
    }

    /// Adds a segment of `road` between two existing nodes.
    ///
    /// The segment becomes a single edge of the graph whatever the direction of
    /// the road, and is appended to the road's segment list. An empty
    /// `geometry` is replaced by the straight line between the endpoints.
    ///
    /// # Errors
    ///
    /// Returns an error if the road or either node is unknown, or if `length`
    /// is not a positive finite number
    pub fn add_segment(
        &mut self,
        road: RoadId,
        start: NodeId,
        end: NodeId,
        length: f64,
        geometry: LineString<f64>,
    ) -> Result<SegmentIndex, Error> {
        let road_index = *self
            .road_lookup
            .get(&road)
            .ok_or(Error::UnknownRoadId(road))?;
        let start_index = *self
            .node_lookup
            .get(&start)
            .ok_or(Error::UnknownNodeId(start))?;
        let end_index = *self
            .node_lookup
            .get(&end)
            .ok_or(Error::UnknownNodeId(end))?;

        if !length.is_finite() || length <= 0.0 {
            return Err(Error::InvalidData(format!(
                "Segment {start} -> {end} of road {road} has invalid length {length}"
            )));
        }

        let geometry = if geometry.0.is_empty() {
            LineString::new(vec![
                self.graph[start_index].location.into(),
                self.graph[end_index].location.into(),
            ])
        } else {
            geometry
        };

        let segment = self.graph.add_edge(
            start_index,
            end_index,
            RoadSegment {
                road: road_index,
                start: start_index,
                end: end_index,
                length,
                geometry,
            },
        );
        self.roads[road_index].add_segment(segment);

        Ok(segment)
    }

    /// Finalizes the graph and builds the spatial index over its nodes
    pub fn build(self) -> RoadGraph {
        let points: Vec<IndexedPoint> = self
            .graph
            .node_indices()
            .map(|index| IndexedPoint::new(self.graph[index].location.point(), index))
            .collect();
        let rtree = RTree::bulk_load(points);

        let graph = RoadGraph {
            graph: self.graph,
            roads: self.roads,
            node_lookup: self.node_lookup,
            road_lookup: self.road_lookup,
            rtree,
        };

        info!(
            "Road graph built: {} nodes, {} segments, {} roads",
            graph.node_count(),
            graph.segment_count(),
            graph.road_count()
        );
        warn_on_short_segments(&graph);

        graph
    }
}

/// Segments shorter than the straight line between their endpoints make the
/// straight-line heuristic overestimate, so A* may return suboptimal paths.
fn warn_on_short_segments(graph: &RoadGraph) {
    const TOLERANCE: f64 = 1e-9;

    let short = graph
        .segments()
        .filter(|(_, segment)| {
            let direct = graph
                .location(segment.start)
                .distance(&graph.location(segment.end));
            segment.length + TOLERANCE < direct
        })
        .count();

    if short > 0 {
        warn!(
            "{short} of {} segments are shorter than the straight-line distance between \
        their endpoints. Shortest paths through them may not be optimal.",
            graph.segment_count()
        );
    }
}
