//! Paths returned by the search and their presentation

mod to_geojson;

use itertools::Itertools;

use crate::model::RoadGraph;
use crate::{NodeIndex, RoadIndex, SegmentIndex};

/// Ordered segments leading from `start` to `goal`
#[derive(Debug, Clone, PartialEq)]
pub struct RoutePath {
    start: NodeIndex,
    goal: NodeIndex,
    segments: Vec<SegmentIndex>,
    total_length: f64,
}

/// Consecutive segments of a path lying on the same road
#[derive(Debug, Clone, PartialEq)]
pub struct RoadLeg {
    pub road: RoadIndex,
    pub name: String,
    pub length: f64,
    pub segment_count: usize,
}

impl RoutePath {
    pub(crate) fn new(
        start: NodeIndex,
        goal: NodeIndex,
        segments: Vec<SegmentIndex>,
        total_length: f64,
    ) -> Self {
        Self {
            start,
            goal,
            segments,
            total_length,
        }
    }

    pub fn start(&self) -> NodeIndex {
        self.start
    }

    pub fn goal(&self) -> NodeIndex {
        self.goal
    }

    pub fn segments(&self) -> &[SegmentIndex] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Sum of segment lengths
    pub fn total_length(&self) -> f64 {
        self.total_length
    }

    /// Nodes visited in order, from start to goal inclusive
    pub fn nodes(&self, graph: &RoadGraph) -> Vec<NodeIndex> {
        let mut nodes = Vec::with_capacity(self.segments.len() + 1);
        let mut current = self.start;
        nodes.push(current);

        for &segment in &self.segments {
            if let Some(next) = graph.graph[segment].other_endpoint(current) {
                current = next;
                nodes.push(current);
            }
        }

        nodes
    }

    /// Per-road breakdown of the path, merging consecutive segments of one road
    pub fn road_legs(&self, graph: &RoadGraph) -> Vec<RoadLeg> {
        let chunks = self
            .segments
            .iter()
            .map(|&segment| &graph.graph[segment])
            .chunk_by(|segment| segment.road);

        chunks
            .into_iter()
            .map(|(road, group)| {
                let (length, segment_count) =
                    group.fold((0.0, 0), |(length, count), segment| {
                        (length + segment.length, count + 1)
                    });
                RoadLeg {
                    road,
                    name: graph.roads[road].label(),
                    length,
                    segment_count,
                }
            })
            .collect()
    }

    /// Text summary: one line per road leg, then the total distance.
    ///
    /// Consecutive segments on the same road are merged into a single line
    /// carrying their summed length, see [`Self::road_legs`].
    pub fn report(&self, graph: &RoadGraph) -> String {
        let legs: String = self
            .road_legs(graph)
            .iter()
            .map(|leg| format!("{}: distance {:.3} km\n", leg.name, leg.length))
            .collect();
        format!(
            "{legs}\nTotal distance of the path {:.3}km",
            self.total_length
        )
    }
}
