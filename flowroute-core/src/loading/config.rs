use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::flow::FlowParams;
use crate::weighting::WeightedGraphBuilder;

/// Configuration for assembling a routing model from CSV tables
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutingModelConfig {
    /// Node table: id, x, y and an optional label column
    pub nodes_path: PathBuf,
    /// Edge table: from, to, distance_m
    pub edges_path: PathBuf,
    /// Flow table: from, to, interval, volume
    pub flows_path: PathBuf,
    /// Volume assumed for edges without a sample, in vehicles per
    /// 15 minutes
    #[serde(default)]
    pub default_volume: f64,
    #[serde(default)]
    pub flow_params: FlowParams,
}

impl RoutingModelConfig {
    /// Weighted-graph builder matching this configuration
    pub fn weighting(&self) -> WeightedGraphBuilder {
        WeightedGraphBuilder::new(self.flow_params.clone(), self.default_volume)
    }
}
