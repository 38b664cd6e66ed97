//! Informed strategies: greedy best-first and A*
//!
//! Both order their frontier with the straight-line travel-time lower
//! bound from the network. A* adds the accumulated cost and keeps a
//! best-known-cost table per node, re-opening a node whenever a strictly
//! cheaper route to it appears, so it is optimal under the admissible,
//! consistent heuristic. Greedy best-first ranks by the heuristic alone
//! and trades optimality for speed.

use fixedbitset::FixedBitSet;
use hashbrown::HashMap;
use hashbrown::hash_map::Entry;
use petgraph::graph::NodeIndex;

use super::frontier::Frontier;
use super::result::{PathResult, SearchOutcome, trace_path};
use super::{GoalSet, SearchMask, Strategy, open_neighbors};
use crate::model::RoadNetwork;

pub(crate) fn greedy_best_first(
    network: &RoadNetwork,
    origin: NodeIndex,
    goals: &GoalSet,
    mask: Option<&SearchMask>,
) -> SearchOutcome {
    if goals.contains(origin) {
        return SearchOutcome::Found(PathResult::single(network.node_id(origin), Strategy::Gbfs));
    }

    let mut visited = FixedBitSet::with_capacity(network.node_count());
    visited.insert(origin.index());
    let mut parents: HashMap<NodeIndex, (NodeIndex, f64)> = HashMap::new();
    let mut frontier = Frontier::new();
    frontier.push(goals.estimate(network, origin), 0.0, origin, 0.0);
    let mut expanded = 0;

    while let Some(entry) = frontier.pop() {
        expanded += 1;
        if goals.contains(entry.node) {
            let (nodes, cost) = trace_path(network, &parents, origin, entry.node);
            return SearchOutcome::Found(PathResult {
                nodes,
                cost,
                expanded,
                strategy: Strategy::Gbfs,
            });
        }
        for (next, weight) in open_neighbors(network, entry.node, mask) {
            if !visited.contains(next.index()) {
                visited.insert(next.index());
                parents.insert(next, (entry.node, weight));
                frontier.push(goals.estimate(network, next), 0.0, next, 0.0);
            }
        }
    }

    SearchOutcome::NotFound { expanded }
}

/// Priority shape of a best-first search over accumulated cost
pub(crate) struct PriorityRule {
    pub strategy: Strategy,
    /// Factor applied to the heuristic; 0 disables it entirely
    pub heuristic_weight: f64,
    /// Break equal priorities by the smaller remaining estimate before
    /// falling back to insertion order
    pub tie_on_estimate: bool,
}

/// Cost-ordered search shared by A* and the custom strategies
pub(crate) fn best_first(
    network: &RoadNetwork,
    origin: NodeIndex,
    goals: &GoalSet,
    mask: Option<&SearchMask>,
    rule: &PriorityRule,
) -> SearchOutcome {
    if goals.contains(origin) {
        return SearchOutcome::Found(PathResult::single(network.node_id(origin), rule.strategy));
    }

    let estimate = |node: NodeIndex| -> f64 {
        if rule.heuristic_weight > 0.0 {
            goals.estimate(network, node)
        } else {
            0.0
        }
    };

    let mut best_cost: HashMap<NodeIndex, f64> = HashMap::new();
    best_cost.insert(origin, 0.0);
    let mut parents: HashMap<NodeIndex, (NodeIndex, f64)> = HashMap::new();
    let mut frontier = Frontier::new();
    let origin_estimate = estimate(origin);
    frontier.push(
        rule.heuristic_weight * origin_estimate,
        if rule.tie_on_estimate { origin_estimate } else { 0.0 },
        origin,
        0.0,
    );
    let mut expanded = 0;

    while let Some(entry) = frontier.pop() {
        let node = entry.node;
        // A cheaper route to this node was found after the push
        if entry.cost > best_cost.get(&node).copied().unwrap_or(f64::INFINITY) {
            continue;
        }
        expanded += 1;
        if goals.contains(node) {
            let (nodes, _) = trace_path(network, &parents, origin, node);
            return SearchOutcome::Found(PathResult {
                nodes,
                cost: entry.cost,
                expanded,
                strategy: rule.strategy,
            });
        }
        for (next, weight) in open_neighbors(network, node, mask) {
            let tentative = entry.cost + weight;
            let improved = match best_cost.entry(next) {
                Entry::Vacant(slot) => {
                    slot.insert(tentative);
                    true
                }
                Entry::Occupied(mut slot) => {
                    if tentative < *slot.get() {
                        *slot.get_mut() = tentative;
                        true
                    } else {
                        false
                    }
                }
            };
            if improved {
                parents.insert(next, (node, weight));
                let next_estimate = estimate(next);
                frontier.push(
                    tentative + rule.heuristic_weight * next_estimate,
                    if rule.tie_on_estimate { next_estimate } else { 0.0 },
                    next,
                    tentative,
                );
            }
        }
    }

    SearchOutcome::NotFound { expanded }
}

pub(crate) fn a_star(
    network: &RoadNetwork,
    origin: NodeIndex,
    goals: &GoalSet,
    mask: Option<&SearchMask>,
) -> SearchOutcome {
    best_first(
        network,
        origin,
        goals,
        mask,
        &PriorityRule {
            strategy: Strategy::AStar,
            heuristic_weight: 1.0,
            tie_on_estimate: false,
        },
    )
}
