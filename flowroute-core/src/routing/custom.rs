//! Custom strategies with alternate priority rules
//!
//! CUS1 is uniform-cost search: the cost-only special case of the shared
//! best-first loop, optimal for any non-negative weights without needing a
//! heuristic. CUS2 is weighted A*: the heuristic is inflated, which pulls
//! the search toward the goal at the price of bounded suboptimality, and
//! equal priorities prefer the node with the smaller remaining estimate.

use petgraph::graph::NodeIndex;

use super::informed::{PriorityRule, best_first};
use super::result::SearchOutcome;
use super::{GoalSet, SearchMask, Strategy};
use crate::model::RoadNetwork;

/// Heuristic inflation factor for CUS2
const INFLATION: f64 = 1.5;

pub(crate) fn uniform_cost(
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
            strategy: Strategy::Cus1,
            heuristic_weight: 0.0,
            tie_on_estimate: false,
        },
    )
}

pub(crate) fn weighted_a_star(
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
            strategy: Strategy::Cus2,
            heuristic_weight: INFLATION,
            tie_on_estimate: true,
        },
    )
}
