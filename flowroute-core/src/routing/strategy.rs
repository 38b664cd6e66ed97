//! The closed set of search strategies
//!
//! Strategies are selected by name at call time and are interchangeable
//! wherever a search is required, including as the oracle inside the
//! k-shortest-paths engine.

use std::fmt;
use std::str::FromStr;

use petgraph::graph::NodeIndex;
use serde::{Deserialize, Serialize};

use super::custom::{uniform_cost, weighted_a_star};
use super::informed::{a_star, greedy_best_first};
use super::result::SearchOutcome;
use super::scope::{GoalSet, SearchMask};
use super::uninformed::{bfs, dfs};
use crate::model::RoadNetwork;
use crate::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    Bfs,
    Dfs,
    Gbfs,
    AStar,
    Cus1,
    Cus2,
}

impl Strategy {
    pub const ALL: [Strategy; 6] = [
        Strategy::Bfs,
        Strategy::Dfs,
        Strategy::Gbfs,
        Strategy::AStar,
        Strategy::Cus1,
        Strategy::Cus2,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Strategy::Bfs => "bfs",
            Strategy::Dfs => "dfs",
            Strategy::Gbfs => "gbfs",
            Strategy::AStar => "astar",
            Strategy::Cus1 => "cus1",
            Strategy::Cus2 => "cus2",
        }
    }

    fn uses_heuristic(self) -> bool {
        matches!(self, Strategy::Gbfs | Strategy::AStar | Strategy::Cus2)
    }

    /// Searches from the network's origin toward its destination set.
    ///
    /// # Errors
    ///
    /// `EmptyDestinations` for heuristic strategies when the network has no
    /// destinations to estimate toward.
    pub fn search(self, network: &RoadNetwork) -> Result<SearchOutcome, Error> {
        let origin = network.node_index(network.origin())?;
        let goals = GoalSet::from_network(network);
        self.run(network, origin, &goals, None)
    }

    pub(crate) fn run(
        self,
        network: &RoadNetwork,
        origin: NodeIndex,
        goals: &GoalSet,
        mask: Option<&SearchMask>,
    ) -> Result<SearchOutcome, Error> {
        if goals.is_empty() && self.uses_heuristic() {
            return Err(Error::EmptyDestinations);
        }
        Ok(match self {
            Strategy::Bfs => bfs(network, origin, goals, mask),
            Strategy::Dfs => dfs(network, origin, goals, mask),
            Strategy::Gbfs => greedy_best_first(network, origin, goals, mask),
            Strategy::AStar => a_star(network, origin, goals, mask),
            Strategy::Cus1 => uniform_cost(network, origin, goals, mask),
            Strategy::Cus2 => weighted_a_star(network, origin, goals, mask),
        })
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bfs" => Ok(Strategy::Bfs),
            "dfs" => Ok(Strategy::Dfs),
            "gbfs" => Ok(Strategy::Gbfs),
            "astar" => Ok(Strategy::AStar),
            "cus1" => Ok(Strategy::Cus1),
            "cus2" => Ok(Strategy::Cus2),
            other => Err(Error::InvalidData(format!(
                "unknown strategy '{other}', expected one of bfs|dfs|gbfs|astar|cus1|cus2"
            ))),
        }
    }
}
