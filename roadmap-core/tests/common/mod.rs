#![allow(dead_code)]

use geo::LineString;
use roadmap_core::prelude::*;

pub const TWO_WAY: RoadId = 1;
pub const ONE_WAY: RoadId = 2;

/// Builder with a two-way and a one-way road already registered
pub fn builder() -> RoadGraphBuilder {
    let mut builder = RoadGraphBuilder::new();
    builder
        .add_road(Road::new(TWO_WAY, "Great North Road", false))
        .unwrap();
    builder
        .add_road(Road::new(ONE_WAY, "Karangahape Road", true))
        .unwrap();
    builder
}

pub fn segment(
    builder: &mut RoadGraphBuilder,
    road: RoadId,
    from: NodeId,
    to: NodeId,
    length: f64,
) {
    builder
        .add_segment(road, from, to, length, LineString::new(vec![]))
        .unwrap();
}

/// Nodes `0..count` spaced one kilometre apart on a straight two-way road
pub fn chain(count: u32) -> RoadGraph {
    let mut builder = builder();
    for id in 0..count {
        builder
            .add_node(id, Location::new(f64::from(id), 0.0))
            .unwrap();
    }
    for id in 1..count {
        segment(&mut builder, TWO_WAY, id - 1, id, 1.0);
    }
    builder.build()
}

/// `width` x `height` grid with unit spacing, ids assigned row by row
pub fn grid(width: u32, height: u32) -> RoadGraph {
    let mut builder = builder();
    for y in 0..height {
        for x in 0..width {
            builder
                .add_node(y * width + x, Location::new(f64::from(x), f64::from(y)))
                .unwrap();
        }
    }
    for y in 0..height {
        for x in 0..width {
            let id = y * width + x;
            if x + 1 < width {
                segment(&mut builder, TWO_WAY, id, id + 1, 1.0);
            }
            if y + 1 < height {
                segment(&mut builder, TWO_WAY, id, id + width, 1.0);
            }
        }
    }
    builder.build()
}

/// Random connected network description: node positions and
/// `(from, to, stretch)` segments whose length is the straight-line distance
/// times `stretch`, so the straight-line heuristic stays admissible
#[derive(Debug, Clone)]
pub struct Network {
    pub positions: Vec<(f64, f64)>,
    pub segments: Vec<(usize, usize, f64)>,
}

impl Network {
    pub fn build(&self) -> RoadGraph {
        let mut builder = builder();
        for (id, &(x, y)) in self.positions.iter().enumerate() {
            builder.add_node(id as NodeId, Location::new(x, y)).unwrap();
        }
        for &(from, to, stretch) in &self.segments {
            let (ax, ay) = self.positions[from];
            let (bx, by) = self.positions[to];
            let length = (ax - bx).hypot(ay - by) * stretch + 0.01;
            segment(&mut builder, TWO_WAY, from as NodeId, to as NodeId, length);
        }
        builder.build()
    }
}

pub fn index(graph: &RoadGraph, id: NodeId) -> NodeIndex {
    graph.node_index(id).unwrap()
}

/// Consecutive segments share a node, the first touches `start`, the last `goal`
pub fn assert_contiguous(graph: &RoadGraph, path: &RoutePath) {
    let mut current = path.start();
    for &segment in path.segments() {
        let segment = graph.segment(segment).unwrap();
        current = segment
            .other_endpoint(current)
            .expect("segment does not continue the path");
    }
    assert_eq!(current, path.goal());

    let sum: f64 = path
        .segments()
        .iter()
        .map(|&s| graph.segment(s).unwrap().length)
        .sum();
    assert!((sum - path.total_length()).abs() < 1e-9);
}
