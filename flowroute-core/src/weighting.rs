//! Weighted graph construction
//!
//! Applies one interval's predicted volumes to a base network and produces
//! a new network whose edge weights are travel seconds. The base keeps its
//! original weights so it can be re-weighted for any other interval.

use serde::Serialize;

use crate::flow::{FlowParams, FlowTable, SAMPLES_PER_HOUR, time_seconds};
use crate::model::{RoadEdge, RoadNetwork};
use crate::{Error, IntervalId, NodeId};

/// Edges the build could not weight from real data
#[derive(Debug, Clone, Default, Serialize)]
pub struct BuildReport {
    /// Edges with no sample for the interval; weighted with the default
    /// volume
    pub defaulted: Vec<(NodeId, NodeId)>,
    /// Edges whose congested speed was clamped to the crawl constant
    pub degraded: Vec<(NodeId, NodeId)>,
}

#[derive(Debug, Clone)]
pub struct WeightedBuild {
    pub network: RoadNetwork,
    pub report: BuildReport,
}

/// Turns a base network plus per-interval volumes into a travel-time
/// weighted network.
///
/// A missing sample falls back to the configured free-flow volume and is
/// recorded in the report. A negative volume in the table fails the whole
/// build: corrupt forecasts are surfaced, not repaired.
#[derive(Debug, Clone)]
pub struct WeightedGraphBuilder {
    params: FlowParams,
    /// Fallback volume in vehicles per 15 minutes
    default_volume: f64,
}

impl Default for WeightedGraphBuilder {
    fn default() -> Self {
        WeightedGraphBuilder::new(FlowParams::default(), 0.0)
    }
}

impl WeightedGraphBuilder {
    pub fn new(params: FlowParams, default_volume: f64) -> Self {
        WeightedGraphBuilder {
            params,
            default_volume,
        }
    }

    pub fn params(&self) -> &FlowParams {
        &self.params
    }

    pub fn build(
        &self,
        base: &RoadNetwork,
        flows: &FlowTable,
        interval: IntervalId,
    ) -> Result<WeightedBuild, Error> {
        let mut report = BuildReport::default();
        let network = base.map_edges(|from, to, edge| {
            let volume = match flows.volume(from, to, interval) {
                Some(volume) => volume,
                None => {
                    report.defaulted.push((from, to));
                    self.default_volume
                }
            };
            let time = time_seconds(volume * SAMPLES_PER_HOUR, edge.distance_m, &self.params)?;
            if time.degraded {
                report.degraded.push((from, to));
            }
            Ok(RoadEdge {
                weight: time.seconds,
                distance_m: edge.distance_m,
                degraded: time.degraded,
            })
        })?;
        Ok(WeightedBuild { network, report })
    }
}
