use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};

use flowroute_core::model::{RoadEdge, RoadNetwork, RoadNode};
use flowroute_core::routing::{KspLimits, Strategy, top_k};

/// Square grid with bidirectional edges; weights vary a little so routes
/// are not all ties.
fn grid_network(side: u32) -> RoadNetwork {
    let id = |row: u32, col: u32| row * side + col + 1;
    let mut nodes = Vec::new();
    let mut edges = Vec::new();
    for row in 0..side {
        for col in 0..side {
            nodes.push(RoadNode::new(id(row, col), f64::from(col) * 100.0, f64::from(row) * 100.0));
            let weight = 100.0 + f64::from((row * 7 + col * 3) % 11);
            if col + 1 < side {
                edges.push((id(row, col), id(row, col + 1), RoadEdge::from_distance(weight)));
                edges.push((id(row, col + 1), id(row, col), RoadEdge::from_distance(weight)));
            }
            if row + 1 < side {
                edges.push((id(row, col), id(row + 1, col), RoadEdge::from_distance(weight)));
                edges.push((id(row + 1, col), id(row, col), RoadEdge::from_distance(weight)));
            }
        }
    }
    let goal = id(side - 1, side - 1);
    RoadNetwork::new(nodes, edges, 1, vec![goal]).unwrap()
}

fn bench_search(c: &mut Criterion) {
    let network = grid_network(20);
    c.bench_function("astar_grid_20x20", |b| {
        b.iter(|| Strategy::AStar.search(black_box(&network)).unwrap())
    });
    c.bench_function("uniform_cost_grid_20x20", |b| {
        b.iter(|| Strategy::Cus1.search(black_box(&network)).unwrap())
    });
}

fn bench_top_k(c: &mut Criterion) {
    let network = grid_network(12);
    let goal = network.destinations()[0];
    c.bench_function("top_k_3_grid_12x12", |b| {
        b.iter(|| {
            top_k(
                black_box(&network),
                1,
                goal,
                3,
                Strategy::AStar,
                &KspLimits::default(),
            )
            .unwrap()
        })
    });
}

criterion_group!(benches, bench_search, bench_top_k);
criterion_main!(benches);
