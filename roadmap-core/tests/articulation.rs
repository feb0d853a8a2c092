mod common;

use std::collections::BTreeSet;

use common::{Network, TWO_WAY, builder, chain, grid, index, segment};
use petgraph::graph::UnGraph;
use proptest::prelude::*;
use proptest::sample::Index;
use roadmap_core::prelude::*;

#[test]
fn long_chain_does_not_overflow_the_stack() {
    const COUNT: u32 = 100_000;
    let graph = chain(COUNT);

    let points = articulation_points(&graph, index(&graph, 0)).unwrap();
    assert_eq!(points.len(), COUNT as usize - 2);
    assert!(!points.contains(&index(&graph, 0)));
    assert!(!points.contains(&index(&graph, COUNT - 1)));

    let middle = articulation_points(&graph, index(&graph, COUNT / 2)).unwrap();
    assert_eq!(middle, points);
}

#[test]
fn long_chain_route_end_to_end() {
    let graph = chain(100_000);
    let path = shortest_path(&graph, index(&graph, 0), index(&graph, 99_999)).unwrap();
    assert_eq!(path.len(), 99_999);
}

#[test]
fn grid_has_no_cut_vertices() {
    let graph = grid(6, 4);
    for (node, _) in graph.nodes() {
        assert!(articulation_points(&graph, node).unwrap().is_empty());
    }
}

#[test]
fn cycles_of_any_size_have_no_cut_vertices() {
    for count in 3..12 {
        let mut builder = builder();
        for id in 0..count {
            let angle = f64::from(id) / f64::from(count) * std::f64::consts::TAU;
            builder
                .add_node(id, Location::new(angle.cos(), angle.sin()))
                .unwrap();
        }
        for id in 0..count {
            segment(&mut builder, TWO_WAY, id, (id + 1) % count, 1.0);
        }
        let graph = builder.build();

        for id in 0..count {
            let points = articulation_points(&graph, index(&graph, id)).unwrap();
            assert!(points.is_empty(), "cycle of {count} from {id}: {points:?}");
        }
    }
}

#[test]
fn queries_alternate_without_interference() {
    let graph = chain(50);
    let root = index(&graph, 10);
    let points = articulation_points(&graph, root).unwrap();
    let path = shortest_path(&graph, index(&graph, 0), index(&graph, 49)).unwrap();

    assert_eq!(articulation_points(&graph, root).unwrap(), points);
    assert_eq!(
        shortest_path(&graph, index(&graph, 0), index(&graph, 49)).unwrap(),
        path
    );
}

fn simple_network() -> impl Strategy<Value = Network> {
    (2usize..30).prop_flat_map(|count| {
        (
            prop::collection::vec((0.0..10.0f64, 0.0..10.0f64), count),
            prop::collection::vec(any::<Index>(), count - 1),
            prop::collection::vec((0..count, 0..count), 0..count),
        )
            .prop_map(|(positions, tree, extra)| {
                let mut seen = BTreeSet::new();
                let mut segments = Vec::new();
                let tree = tree
                    .into_iter()
                    .enumerate()
                    .map(|(offset, parent)| (offset + 1, parent.index(offset + 1)));
                for (from, to) in tree.chain(extra) {
                    if from != to && seen.insert((from.min(to), from.max(to))) {
                        segments.push((from, to, 1.5));
                    }
                }
                Network {
                    positions,
                    segments,
                }
            })
    })
}

/// Cut vertices of the whole (connected) network computed by rustworkx
fn reference_points(network: &Network) -> BTreeSet<usize> {
    let mut graph = UnGraph::<(), ()>::with_capacity(network.positions.len(), 0);
    let nodes: Vec<_> = network.positions.iter().map(|_| graph.add_node(())).collect();
    for &(from, to, _) in &network.segments {
        graph.add_edge(nodes[from], nodes[to], ());
    }

    rustworkx_core::connectivity::articulation_points(&graph, None)
        .into_iter()
        .map(|node| node.index())
        .collect()
}

proptest! {
    #[test]
    fn matches_reference_implementation(network in simple_network(), root in any::<Index>()) {
        let graph = network.build();
        let root = NodeIndex::new(root.index(graph.node_count()));

        let points: BTreeSet<usize> = articulation_points(&graph, root)
            .unwrap()
            .into_iter()
            .map(|node| node.index())
            .collect();

        prop_assert_eq!(points, reference_points(&network));
    }

    #[test]
    fn result_does_not_depend_on_root(network in simple_network(), a in any::<Index>(), b in any::<Index>()) {
        let graph = network.build();
        let count = graph.node_count();
        let first = articulation_points(&graph, NodeIndex::new(a.index(count))).unwrap();
        let second = articulation_points(&graph, NodeIndex::new(b.index(count))).unwrap();
        prop_assert_eq!(first, second);
    }
}
