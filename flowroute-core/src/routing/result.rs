use hashbrown::HashMap;
use petgraph::graph::NodeIndex;
use serde::Serialize;

use super::Strategy;
use crate::NodeId;
use crate::model::RoadNetwork;

/// A route from the origin to a reached destination
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathResult {
    /// Node ids from origin to destination, inclusive
    pub nodes: Vec<NodeId>,
    /// Total cost of the route (travel seconds on weighted graphs)
    pub cost: f64,
    /// Nodes expanded while searching, for diagnostics
    pub expanded: usize,
    /// Strategy that produced the route
    pub strategy: Strategy,
}

impl PathResult {
    /// Trivial route for an origin that is already a destination
    pub(crate) fn single(node: NodeId, strategy: Strategy) -> Self {
        PathResult {
            nodes: vec![node],
            cost: 0.0,
            expanded: 0,
            strategy,
        }
    }
}

/// Outcome of one search. The absence of a route is a normal result,
/// not an error.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum SearchOutcome {
    Found(PathResult),
    NotFound { expanded: usize },
}

/// Walks the parent map back from the reached goal and returns the node-id
/// sequence with the accumulated edge cost.
pub(crate) fn trace_path(
    network: &RoadNetwork,
    parents: &HashMap<NodeIndex, (NodeIndex, f64)>,
    origin: NodeIndex,
    goal: NodeIndex,
) -> (Vec<NodeId>, f64) {
    let mut nodes = Vec::new();
    let mut cost = 0.0;
    let mut current = goal;
    while current != origin {
        nodes.push(network.node_id(current));
        match parents.get(&current) {
            Some(&(previous, weight)) => {
                cost += weight;
                current = previous;
            }
            None => break,
        }
    }
    nodes.push(network.node_id(origin));
    nodes.reverse();
    (nodes, cost)
}

impl SearchOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::Found(_))
    }

    pub fn expanded(&self) -> usize {
        match self {
            SearchOutcome::Found(path) => path.expanded,
            SearchOutcome::NotFound { expanded } => *expanded,
        }
    }

    pub fn into_found(self) -> Option<PathResult> {
        match self {
            SearchOutcome::Found(path) => Some(path),
            SearchOutcome::NotFound { .. } => None,
        }
    }
}
