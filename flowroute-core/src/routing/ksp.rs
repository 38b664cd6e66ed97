//! K-shortest simple paths (Yen's-style deviation enumeration)
//!
//! Uses any strategy as the shortest-path oracle. Each deviation keeps a
//! root prefix of the previously accepted path, hides the root's interior
//! nodes and the next edges of accepted paths sharing that root behind a
//! logical mask, and re-runs the oracle from the spur node. The shared
//! network is never modified, so enumerations over the same graph can run
//! concurrently.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use hashbrown::HashSet;
use itertools::Itertools;

use super::result::PathResult;
use super::scope::{GoalSet, SearchMask};
use super::strategy::Strategy;
use crate::model::RoadNetwork;
use crate::{Error, NodeId};

/// Bounds on the enumeration, to cap worst-case blow-up on dense graphs
#[derive(Debug, Clone)]
pub struct KspLimits {
    /// Maximum number of oracle invocations across the whole enumeration
    pub max_spur_searches: usize,
}

impl Default for KspLimits {
    fn default() -> Self {
        KspLimits {
            max_spur_searches: 1000,
        }
    }
}

#[derive(Debug, Clone)]
struct Candidate {
    cost: f64,
    nodes: Vec<NodeId>,
    expanded: usize,
}

// Min-heap by cost, then by lexicographically smaller node sequence
impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.nodes.cmp(&self.nodes))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate {}

/// Enumerates up to `k` lowest-cost simple paths from `origin` to
/// `destination`, ordered by ascending cost with ties broken by the
/// lexicographically smaller node sequence.
///
/// Returning fewer than `k` paths (possibly none) is a normal outcome when
/// the graph cannot support that many distinct simple routes.
///
/// # Errors
///
/// `UnknownNode` for ids absent from the network, `InvalidData` for
/// `k == 0`, and `EmptyDestinations` never occurs here since the
/// destination is explicit.
pub fn top_k(
    network: &RoadNetwork,
    origin: NodeId,
    destination: NodeId,
    k: usize,
    strategy: Strategy,
    limits: &KspLimits,
) -> Result<Vec<PathResult>, Error> {
    if k == 0 {
        return Err(Error::InvalidData("k must be > 0".to_string()));
    }
    let origin_index = network.node_index(origin)?;
    let destination_index = network.node_index(destination)?;
    let goal = GoalSet::single(network, destination_index);

    let first = match strategy.run(network, origin_index, &goal, None)?.into_found() {
        Some(path) => path,
        None => return Ok(Vec::new()),
    };

    let mut seen: HashSet<Vec<NodeId>> = HashSet::new();
    seen.insert(first.nodes.clone());
    let mut accepted = vec![first];
    let mut candidates: BinaryHeap<Candidate> = BinaryHeap::new();
    let mut searches = 0;

    while accepted.len() < k {
        let previous = match accepted.last() {
            Some(path) => path.clone(),
            None => break,
        };

        for spur_pos in 0..previous.nodes.len().saturating_sub(1) {
            if searches == limits.max_spur_searches {
                break;
            }
            searches += 1;

            let root = &previous.nodes[..=spur_pos];
            let spur_index = network.node_index(root[spur_pos])?;

            let mut mask = SearchMask::for_network(network);
            for &id in &root[..spur_pos] {
                mask.ban_node(network.node_index(id)?);
            }
            // Deviations must not retrace an accepted path sharing this root
            for path in &accepted {
                if path.nodes.len() > spur_pos + 1 && path.nodes[..=spur_pos] == *root {
                    mask.ban_edge(
                        network.node_index(path.nodes[spur_pos])?,
                        network.node_index(path.nodes[spur_pos + 1])?,
                    );
                }
            }

            let spur = strategy.run(network, spur_index, &goal, Some(&mask))?;
            if let Some(spur_path) = spur.into_found() {
                let mut nodes = root[..spur_pos].to_vec();
                nodes.extend_from_slice(&spur_path.nodes);
                let cost = prefix_cost(network, root)? + spur_path.cost;
                if seen.insert(nodes.clone()) {
                    candidates.push(Candidate {
                        cost,
                        nodes,
                        expanded: spur_path.expanded,
                    });
                }
            }
        }

        match candidates.pop() {
            Some(candidate) => accepted.push(PathResult {
                nodes: candidate.nodes,
                cost: candidate.cost,
                expanded: candidate.expanded,
                strategy,
            }),
            None => break,
        }
    }

    accepted.sort_by(|a, b| a.cost.total_cmp(&b.cost).then_with(|| a.nodes.cmp(&b.nodes)));
    Ok(accepted)
}

/// Weight sum along consecutive edges of a node-id sequence
fn prefix_cost(network: &RoadNetwork, nodes: &[NodeId]) -> Result<f64, Error> {
    let mut cost = 0.0;
    for (from, to) in nodes.iter().tuple_windows() {
        let source = network.node_index(*from)?;
        let target = network.node_index(*to)?;
        cost += network.edge_weight(source, target).ok_or_else(|| {
            Error::InvalidData(format!("no edge {from} -> {to} along accepted path"))
        })?;
    }
    Ok(cost)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{
        cyclic_network, diamond_network, disconnected_network, line_network,
    };

    fn limits() -> KspLimits {
        KspLimits::default()
    }

    #[test]
    fn enumerates_alternatives_in_cost_order() {
        let network = diamond_network();
        let paths = top_k(&network, 1, 4, 2, Strategy::AStar, &limits()).unwrap();
        assert_eq!(paths.len(), 2);
        assert_eq!(paths[0].nodes, vec![1, 3, 4]);
        assert_eq!(paths[0].cost, 170.0);
        assert_eq!(paths[1].nodes, vec![1, 2, 4]);
        assert_eq!(paths[1].cost, 200.0);
    }

    #[test]
    fn k_of_one_equals_the_oracle_optimum() {
        let network = cyclic_network(12.0);
        let paths = top_k(&network, 1, 10, 1, Strategy::AStar, &limits()).unwrap();
        let direct = Strategy::AStar
            .search(&network)
            .unwrap()
            .into_found()
            .unwrap();
        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].cost, direct.cost);
        assert_eq!(paths[0].nodes, direct.nodes);
    }

    #[test]
    fn finds_all_three_simple_routes_on_the_ring() {
        let network = cyclic_network(12.0);
        let paths = top_k(&network, 1, 10, 5, Strategy::AStar, &limits()).unwrap();
        let costs: Vec<f64> = paths.iter().map(|p| p.cost).collect();
        assert_eq!(costs, vec![52.0, 90.0, 150.0]);
    }

    #[test]
    fn returned_paths_are_simple_distinct_and_sorted() {
        let network = cyclic_network(12.0);
        let paths = top_k(&network, 1, 10, 5, Strategy::AStar, &limits()).unwrap();
        for pair in paths.windows(2) {
            assert!(pair[0].cost <= pair[1].cost);
            assert_ne!(pair[0].nodes, pair[1].nodes);
        }
        for path in &paths {
            let mut nodes = path.nodes.clone();
            nodes.sort_unstable();
            nodes.dedup();
            assert_eq!(nodes.len(), path.nodes.len(), "path revisits a node");
            assert_eq!(path.nodes.first(), Some(&1));
            assert_eq!(path.nodes.last(), Some(&10));
        }
    }

    #[test]
    fn single_route_graph_yields_one_result() {
        let network = line_network();
        let paths = top_k(&network, 1, 5, 3, Strategy::AStar, &limits()).unwrap();
        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].nodes, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn disconnected_pair_yields_empty_not_error() {
        let network = disconnected_network();
        let paths = top_k(&network, 1, 4, 3, Strategy::AStar, &limits()).unwrap();
        assert!(paths.is_empty());
    }

    #[test]
    fn zero_k_is_rejected() {
        let network = line_network();
        assert!(matches!(
            top_k(&network, 1, 5, 0, Strategy::AStar, &limits()),
            Err(Error::InvalidData(_))
        ));
    }

    #[test]
    fn unknown_endpoint_is_an_error() {
        let network = line_network();
        assert!(matches!(
            top_k(&network, 1, 99, 2, Strategy::AStar, &limits()),
            Err(Error::UnknownNode(99))
        ));
    }

    #[test]
    fn origin_equal_to_destination_is_trivial() {
        let network = line_network();
        let paths = top_k(&network, 3, 3, 2, Strategy::AStar, &limits()).unwrap();
        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].nodes, vec![3]);
        assert_eq!(paths[0].cost, 0.0);
    }

    #[test]
    fn spur_search_cap_limits_enumeration() {
        let network = cyclic_network(12.0);
        let capped = KspLimits {
            max_spur_searches: 0,
        };
        let paths = top_k(&network, 1, 10, 5, Strategy::AStar, &capped).unwrap();
        assert_eq!(paths.len(), 1);
    }

    #[test]
    fn works_with_every_oracle() {
        let network = diamond_network();
        for strategy in Strategy::ALL {
            let paths = top_k(&network, 1, 4, 2, strategy, &limits()).unwrap();
            assert!(!paths.is_empty());
            for pair in paths.windows(2) {
                assert!(pair[0].cost <= pair[1].cost);
            }
        }
    }
}
