use geo::LineString;

use crate::model::Road;
use crate::{Location, NodeId, NodeIndex, RoadGraph, RoadGraphBuilder};

/// Graph with the given `(id, x, y)` nodes and `(from, to, length)` segments,
/// all on one two-way road
pub(crate) fn build_test_graph(
    nodes: &[(NodeId, f64, f64)],
    edges: &[(NodeId, NodeId, f64)],
) -> RoadGraph {
    let mut builder = RoadGraphBuilder::with_capacity(nodes.len(), edges.len());
    for &(id, x, y) in nodes {
        builder.add_node(id, Location::new(x, y)).unwrap();
    }
    builder.add_road(Road::new(0, "Test Road", false)).unwrap();
    for &(from, to, length) in edges {
        builder
            .add_segment(0, from, to, length, LineString::new(vec![]))
            .unwrap();
    }
    builder.build()
}

pub(crate) fn node(graph: &RoadGraph, id: NodeId) -> NodeIndex {
    graph.node_index(id).unwrap()
}
