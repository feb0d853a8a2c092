//! Road network components - nodes, segments and roads

use geo::LineString;

use crate::{Location, NodeId, NodeIndex, RoadId, RoadIndex, SegmentIndex};

/// Road graph node (an intersection)
#[derive(Debug, Clone)]
pub struct RoadNode {
    /// External identifier of the node
    pub id: NodeId,
    /// Node coordinates
    pub location: Location,
}

/// Road graph edge, a piece of one road between two nodes
#[derive(Debug, Clone)]
pub struct RoadSegment {
    /// Road this segment belongs to
    pub road: RoadIndex,
    pub start: NodeIndex,
    pub end: NodeIndex,
    /// Length in kilometres, always positive
    pub length: f64,
    /// Polyline for visualization
    pub geometry: LineString<f64>,
}

impl RoadSegment {
    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn touches(&self, node: NodeIndex) -> bool {
        self.start == node || self.end == node
    }

    /// Endpoint opposite to `node`, or `None` if the segment does not touch it
    pub fn other_endpoint(&self, node: NodeIndex) -> Option<NodeIndex> {
        if self.start == node {
            Some(self.end)
        } else if self.end == node {
            Some(self.start)
        } else {
            None
        }
    }
}

/// A named road made of an ordered list of segments
#[derive(Debug, Clone)]
pub struct Road {
    pub id: RoadId,
    pub name: String,
    pub city: Option<String>,
    pub one_way: bool,
    segments: Vec<SegmentIndex>,
}

impl Road {
    pub fn new(id: RoadId, name: impl Into<String>, one_way: bool) -> Self {
        Self {
            id,
            name: name.into(),
            city: None,
            one_way,
            segments: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn segments(&self) -> &[SegmentIndex] {
        &self.segments
    }

    /// Road name with the city appended when known, as shown to the user
    pub fn label(&self) -> String {
        match &self.city {
            Some(city) if !city.is_empty() => format!("{}, {city}", self.name),
            _ => self.name.clone(),
        }
    }

    /// Appends `segment` unless the road already owns it.
    /// Returns `true` if the segment was added.
    pub(crate) fn add_segment(&mut self, segment: SegmentIndex) -> bool {
        if self.segments.contains(&segment) {
            return false;
        }
        self.segments.push(segment);
        true
    }
}
