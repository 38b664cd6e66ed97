//! Shared fixtures for unit tests

use std::f64::consts::TAU;

use crate::model::{RoadEdge, RoadNetwork, RoadNode};
use crate::NodeId;

pub(crate) fn edge(weight: f64) -> RoadEdge {
    RoadEdge {
        weight,
        distance_m: weight,
        degraded: false,
    }
}

pub(crate) fn build(
    nodes: Vec<(NodeId, f64, f64)>,
    edges: Vec<(NodeId, NodeId, f64)>,
    origin: NodeId,
    destinations: Vec<NodeId>,
) -> RoadNetwork {
    let nodes = nodes
        .into_iter()
        .map(|(id, x, y)| RoadNode::new(id, x, y))
        .collect();
    let edges = edges
        .into_iter()
        .map(|(from, to, w)| (from, to, edge(w)))
        .collect();
    RoadNetwork::new(nodes, edges, origin, destinations).unwrap()
}

/// Four nodes, two routes from 1 to 4: 1-3-4 (170) and 1-2-4 (200).
pub(crate) fn diamond_network() -> RoadNetwork {
    build(
        vec![
            (1, 0.0, 0.0),
            (2, 100.0, 0.0),
            (3, 0.0, 100.0),
            (4, 100.0, 100.0),
        ],
        vec![(1, 2, 100.0), (2, 4, 100.0), (1, 3, 120.0), (3, 4, 50.0)],
        1,
        vec![4],
    )
}

/// Ten nodes on a ring with a shortcut chord and a back edge, so the graph
/// is cyclic. Ring edges cost 10; the 3->8 chord costs `chord`.
///
/// With `chord = 12` the optimal 1->10 route is 1-2-3-8-9-10 at cost 52.
/// With `chord = 10` every edge costs 10 and the fewest-hop route (5 edges,
/// cost 50) is also the cheapest.
pub(crate) fn cyclic_network(chord: f64) -> RoadNetwork {
    let nodes = (1..=10u32)
        .map(|id| {
            let angle = TAU * f64::from(id) / 10.0;
            (id, 50.0 * angle.cos(), 50.0 * angle.sin())
        })
        .collect();
    let mut edges: Vec<(NodeId, NodeId, f64)> =
        (1..10u32).map(|id| (id, id + 1, 10.0)).collect();
    edges.push((10, 1, 10.0));
    edges.push((3, 8, chord));
    edges.push((8, 3, chord));
    edges.push((1, 5, 100.0));
    build(nodes, edges, 1, vec![10])
}

/// Five nodes in a line; exactly one route from 1 to 5.
pub(crate) fn line_network() -> RoadNetwork {
    build(
        vec![
            (1, 0.0, 0.0),
            (2, 10.0, 0.0),
            (3, 20.0, 0.0),
            (4, 30.0, 0.0),
            (5, 40.0, 0.0),
        ],
        vec![(1, 2, 10.0), (2, 3, 10.0), (3, 4, 10.0), (4, 5, 10.0)],
        1,
        vec![5],
    )
}

/// Origin and destination in separate components.
pub(crate) fn disconnected_network() -> RoadNetwork {
    build(
        vec![
            (1, 0.0, 0.0),
            (2, 10.0, 0.0),
            (3, 100.0, 100.0),
            (4, 110.0, 100.0),
        ],
        vec![(1, 2, 10.0), (3, 4, 10.0)],
        1,
        vec![4],
    )
}

/// Reference single-pair shortest cost by exhaustive relaxation.
pub(crate) fn reference_shortest(network: &RoadNetwork, from: NodeId, to: NodeId) -> Option<f64> {
    let source = network.node_index(from).unwrap();
    let target = network.node_index(to).unwrap();
    let n = network.node_count();
    let mut dist = vec![f64::INFINITY; n];
    dist[source.index()] = 0.0;
    for _ in 0..n {
        let mut changed = false;
        for index in 0..n {
            let here = dist[index];
            if !here.is_finite() {
                continue;
            }
            for (next, weight) in network.neighbors(petgraph::graph::NodeIndex::new(index)) {
                if here + weight < dist[next.index()] {
                    dist[next.index()] = here + weight;
                    changed = true;
                }
            }
        }
        if !changed {
            break;
        }
    }
    let best = dist[target.index()];
    best.is_finite().then_some(best)
}
