//! Uninformed strategies: breadth-first and depth-first search
//!
//! Both are hop-count searches. The reported cost is the weight sum along
//! the found route, but neither strategy minimizes it; breadth-first is
//! optimal only when every edge costs the same, and depth-first is a
//! diversity-generating fallback with no optimality claim.

use std::collections::VecDeque;

use fixedbitset::FixedBitSet;
use hashbrown::HashMap;
use petgraph::graph::NodeIndex;

use super::result::{PathResult, SearchOutcome, trace_path};
use super::{GoalSet, SearchMask, Strategy, open_neighbors};
use crate::model::RoadNetwork;

pub(crate) fn bfs(
    network: &RoadNetwork,
    origin: NodeIndex,
    goals: &GoalSet,
    mask: Option<&SearchMask>,
) -> SearchOutcome {
    if goals.contains(origin) {
        return SearchOutcome::Found(PathResult::single(network.node_id(origin), Strategy::Bfs));
    }

    let mut visited = FixedBitSet::with_capacity(network.node_count());
    visited.insert(origin.index());
    let mut parents: HashMap<NodeIndex, (NodeIndex, f64)> = HashMap::new();
    let mut queue = VecDeque::new();
    queue.push_back(origin);
    let mut expanded = 0;

    while let Some(node) = queue.pop_front() {
        expanded += 1;
        if goals.contains(node) {
            let (nodes, cost) = trace_path(network, &parents, origin, node);
            return SearchOutcome::Found(PathResult {
                nodes,
                cost,
                expanded,
                strategy: Strategy::Bfs,
            });
        }
        for (next, weight) in open_neighbors(network, node, mask) {
            if !visited.contains(next.index()) {
                visited.insert(next.index());
                parents.insert(next, (node, weight));
                queue.push_back(next);
            }
        }
    }

    SearchOutcome::NotFound { expanded }
}

pub(crate) fn dfs(
    network: &RoadNetwork,
    origin: NodeIndex,
    goals: &GoalSet,
    mask: Option<&SearchMask>,
) -> SearchOutcome {
    if goals.contains(origin) {
        return SearchOutcome::Found(PathResult::single(network.node_id(origin), Strategy::Dfs));
    }

    let mut visited = FixedBitSet::with_capacity(network.node_count());
    let mut parents: HashMap<NodeIndex, (NodeIndex, f64)> = HashMap::new();
    let mut stack = vec![origin];
    let mut expanded = 0;

    while let Some(node) = stack.pop() {
        if visited.contains(node.index()) {
            continue;
        }
        visited.insert(node.index());
        expanded += 1;
        if goals.contains(node) {
            let (nodes, cost) = trace_path(network, &parents, origin, node);
            return SearchOutcome::Found(PathResult {
                nodes,
                cost,
                expanded,
                strategy: Strategy::Dfs,
            });
        }
        // Pushed in reverse so the smallest neighbor id is expanded first
        for (next, weight) in open_neighbors(network, node, mask).into_iter().rev() {
            if !visited.contains(next.index()) {
                parents.insert(next, (node, weight));
                stack.push(next);
            }
        }
    }

    SearchOutcome::NotFound { expanded }
}
