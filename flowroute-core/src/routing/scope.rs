//! Goal sets and logical masks scoping a single search
//!
//! Masks let the k-shortest engine hide nodes and edges for one candidate
//! computation without touching the shared network, so concurrent searches
//! over the same graph cannot interfere.

use fixedbitset::FixedBitSet;
use hashbrown::HashSet;
use petgraph::graph::NodeIndex;

use crate::model::RoadNetwork;

/// The set of nodes that terminate a search. The first member reached
/// ends the search.
#[derive(Debug, Clone)]
pub(crate) struct GoalSet {
    members: FixedBitSet,
    nodes: Vec<NodeIndex>,
}

impl GoalSet {
    pub fn from_network(network: &RoadNetwork) -> Self {
        let mut members = FixedBitSet::with_capacity(network.node_count());
        let nodes = network.destination_nodes().to_vec();
        for node in &nodes {
            members.insert(node.index());
        }
        GoalSet { members, nodes }
    }

    pub fn single(network: &RoadNetwork, node: NodeIndex) -> Self {
        let mut members = FixedBitSet::with_capacity(network.node_count());
        members.insert(node.index());
        GoalSet {
            members,
            nodes: vec![node],
        }
    }

    pub fn contains(&self, node: NodeIndex) -> bool {
        self.members.contains(node.index())
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Minimum heuristic value over the goal set, in the same units as
    /// edge costs on weighted graphs
    pub fn estimate(&self, network: &RoadNetwork, from: NodeIndex) -> f64 {
        self.nodes
            .iter()
            .filter_map(|&goal| network.heuristic(from, Some(goal)).ok())
            .fold(f64::INFINITY, f64::min)
    }
}

/// Nodes and directed edges hidden from one search
#[derive(Debug, Clone)]
pub struct SearchMask {
    banned_nodes: FixedBitSet,
    banned_edges: HashSet<(NodeIndex, NodeIndex)>,
}

impl SearchMask {
    pub fn for_network(network: &RoadNetwork) -> Self {
        SearchMask {
            banned_nodes: FixedBitSet::with_capacity(network.node_count()),
            banned_edges: HashSet::new(),
        }
    }

    pub fn ban_node(&mut self, node: NodeIndex) {
        self.banned_nodes.insert(node.index());
    }

    pub fn ban_edge(&mut self, from: NodeIndex, to: NodeIndex) {
        self.banned_edges.insert((from, to));
    }

    fn allows(&self, from: NodeIndex, to: NodeIndex) -> bool {
        !self.banned_nodes.contains(to.index()) && !self.banned_edges.contains(&(from, to))
    }
}

/// Sorted outgoing neighbors that survive the mask
pub(crate) fn open_neighbors(
    network: &RoadNetwork,
    node: NodeIndex,
    mask: Option<&SearchMask>,
) -> Vec<(NodeIndex, f64)> {
    let mut neighbors = network.neighbors(node);
    if let Some(mask) = mask {
        neighbors.retain(|&(next, _)| mask.allows(node, next));
    }
    neighbors
}
