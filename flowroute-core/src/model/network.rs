//! Directed road network with spatial lookups
//!
//! Wraps a petgraph directed graph and owns the mapping between stable
//! external node ids and graph indices. Nodes are inserted in ascending id
//! order so indices are reproducible for identical inputs, and neighbor
//! enumeration is sorted by external id so every strategy expands in the
//! same order across runs and platforms.

use std::fmt;

use fixedbitset::FixedBitSet;
use geo::{Distance, Euclidean, Point};
use hashbrown::HashMap;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use rstar::RTree;
use rstar::primitives::GeomWithData;

use super::{RoadEdge, RoadNode};
use crate::{Error, NodeId};

/// Speed no edge ever reaches, in km/h. The congested speed model never
/// produces a speed above the free-flow limit, so dividing straight-line
/// distance by this bound yields an admissible and consistent lower bound
/// on remaining travel time.
pub const MAX_SPEED_KMH: f64 = 60.0;

/// Spatially indexed node for nearest-neighbor queries
pub type IndexedPoint = GeomWithData<[f64; 2], NodeId>;

#[derive(Clone)]
pub struct RoadNetwork {
    graph: DiGraph<RoadNode, RoadEdge>,
    index_of: HashMap<NodeId, NodeIndex>,
    origin: NodeId,
    destinations: Vec<NodeId>,
    destination_nodes: Vec<NodeIndex>,
    destination_set: FixedBitSet,
    rtree: RTree<IndexedPoint>,
}

impl fmt::Debug for RoadNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RoadNetwork")
            .field("nodes", &self.graph.node_count())
            .field("edges", &self.graph.edge_count())
            .field("origin", &self.origin)
            .field("destinations", &self.destinations)
            .finish()
    }
}

impl RoadNetwork {
    /// Builds a network from node and edge tables.
    ///
    /// Rejects duplicate node ids, duplicate directed edges, edges with
    /// unknown endpoints or negative costs, and an origin or destination
    /// absent from the node table. The destination set may be empty; the
    /// heuristic fails loudly in that case rather than degrading to zero.
    pub fn new(
        mut nodes: Vec<RoadNode>,
        edges: Vec<(NodeId, NodeId, RoadEdge)>,
        origin: NodeId,
        destinations: Vec<NodeId>,
    ) -> Result<Self, Error> {
        nodes.sort_by_key(|n| n.id);

        let mut graph = DiGraph::with_capacity(nodes.len(), edges.len());
        let mut index_of: HashMap<NodeId, NodeIndex> = HashMap::with_capacity(nodes.len());
        let mut points = Vec::with_capacity(nodes.len());

        for node in nodes {
            let id = node.id;
            let point = [node.geometry.x(), node.geometry.y()];
            let index = graph.add_node(node);
            if index_of.insert(id, index).is_some() {
                return Err(Error::InvalidData(format!("duplicate node id {id}")));
            }
            points.push(IndexedPoint::new(point, id));
        }

        for (from, to, edge) in edges {
            let source = *index_of.get(&from).ok_or(Error::UnknownNode(from))?;
            let target = *index_of.get(&to).ok_or(Error::UnknownNode(to))?;
            if edge.weight < 0.0 || edge.distance_m < 0.0 {
                return Err(Error::InvalidData(format!(
                    "negative cost on edge {from} -> {to}"
                )));
            }
            if graph.find_edge(source, target).is_some() {
                return Err(Error::DuplicateEdge(from, to));
            }
            graph.add_edge(source, target, edge);
        }

        if !index_of.contains_key(&origin) {
            return Err(Error::UnknownNode(origin));
        }

        let mut destinations = destinations;
        destinations.sort_unstable();
        destinations.dedup();
        let mut destination_nodes = Vec::with_capacity(destinations.len());
        let mut destination_set = FixedBitSet::with_capacity(graph.node_count());
        for &dest in &destinations {
            let index = *index_of.get(&dest).ok_or(Error::UnknownNode(dest))?;
            destination_set.insert(index.index());
            destination_nodes.push(index);
        }

        Ok(RoadNetwork {
            graph,
            index_of,
            origin,
            destinations,
            destination_nodes,
            destination_set,
            rtree: RTree::bulk_load(points),
        })
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn origin(&self) -> NodeId {
        self.origin
    }

    pub fn destinations(&self) -> &[NodeId] {
        &self.destinations
    }

    pub(crate) fn destination_nodes(&self) -> &[NodeIndex] {
        &self.destination_nodes
    }

    pub fn node_index(&self, id: NodeId) -> Result<NodeIndex, Error> {
        self.index_of.get(&id).copied().ok_or(Error::UnknownNode(id))
    }

    pub fn node_id(&self, index: NodeIndex) -> NodeId {
        self.graph[index].id
    }

    pub fn node(&self, id: NodeId) -> Result<&RoadNode, Error> {
        self.node_index(id).map(|index| &self.graph[index])
    }

    /// Outgoing neighbors with edge costs, sorted ascending by the
    /// neighbor's external id. This is the tie-breaking rule shared by all
    /// strategies.
    pub fn neighbors(&self, node: NodeIndex) -> Vec<(NodeIndex, f64)> {
        let mut neighbors: Vec<(NodeIndex, f64)> = self
            .graph
            .edges(node)
            .map(|edge| (edge.target(), edge.weight().weight))
            .collect();
        neighbors.sort_by_key(|&(target, _)| self.graph[target].id);
        neighbors
    }

    pub fn is_destination(&self, node: NodeIndex) -> bool {
        self.destination_set.contains(node.index())
    }

    pub fn coordinates(&self, id: NodeId) -> Result<Point<f64>, Error> {
        self.node(id).map(|node| node.geometry)
    }

    pub fn edge(&self, source: NodeIndex, target: NodeIndex) -> Option<&RoadEdge> {
        self.graph
            .find_edge(source, target)
            .and_then(|edge| self.graph.edge_weight(edge))
    }

    pub fn edge_weight(&self, source: NodeIndex, target: NodeIndex) -> Option<f64> {
        self.edge(source, target).map(|edge| edge.weight)
    }

    pub fn straight_line_m(&self, from: NodeIndex, to: NodeIndex) -> f64 {
        Euclidean::distance(self.graph[from].geometry, self.graph[to].geometry)
    }

    /// Lower bound on remaining travel time in seconds: straight-line
    /// distance at the never-exceeded speed bound. With no destination
    /// argument, the minimum over the destination set.
    ///
    /// # Errors
    ///
    /// `EmptyDestinations` when no destination is given and the set is
    /// empty. An unguided zero here would silently turn informed search
    /// into uniform-cost search.
    pub fn heuristic(&self, from: NodeIndex, destination: Option<NodeIndex>) -> Result<f64, Error> {
        let meters = match destination {
            Some(dest) => self.straight_line_m(from, dest),
            None => {
                if self.destination_nodes.is_empty() {
                    return Err(Error::EmptyDestinations);
                }
                self.destination_nodes
                    .iter()
                    .map(|&dest| self.straight_line_m(from, dest))
                    .fold(f64::INFINITY, f64::min)
            }
        };
        Ok(meters * 3.6 / MAX_SPEED_KMH)
    }

    /// Nearest node to a planar coordinate, if the network is non-empty
    pub fn nearest_node(&self, point: Point<f64>) -> Option<NodeId> {
        self.rtree
            .nearest_neighbor(&[point.x(), point.y()])
            .map(|indexed| indexed.data)
    }

    /// Produces a new network with every edge transformed by `f`, keeping
    /// nodes, origin and destinations. The receiver is left untouched, so a
    /// base graph can be re-weighted once per interval.
    pub fn map_edges<F>(&self, mut f: F) -> Result<RoadNetwork, Error>
    where
        F: FnMut(NodeId, NodeId, &RoadEdge) -> Result<RoadEdge, Error>,
    {
        let nodes: Vec<RoadNode> = self.graph.node_weights().cloned().collect();
        let mut edges = Vec::with_capacity(self.graph.edge_count());
        for edge in self.graph.edge_references() {
            let from = self.graph[edge.source()].id;
            let to = self.graph[edge.target()].id;
            edges.push((from, to, f(from, to, edge.weight())?));
        }
        RoadNetwork::new(nodes, edges, self.origin, self.destinations.clone())
    }

    /// Directed edges as (from, to, edge) triples, for reporting
    pub fn edge_triples(&self) -> impl Iterator<Item = (NodeId, NodeId, &RoadEdge)> {
        self.graph.edge_references().map(|edge| {
            (
                self.graph[edge.source()].id,
                self.graph[edge.target()].id,
                edge.weight(),
            )
        })
    }
}
