//! Request orchestration
//!
//! Validates a routing request, derives the interval's weighted network
//! from the base graph, runs the k-shortest enumeration and translates the
//! outcome for callers. This is the layer that logs; the algorithms below
//! it stay silent.

use log::{info, warn};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::flow::FlowTable;
use crate::model::RoadNetwork;
use crate::routing::{KspLimits, PathResult, Strategy, top_k};
use crate::weighting::{BuildReport, WeightedGraphBuilder};
use crate::{Error, IntervalId, NodeId};

fn default_k() -> usize {
    1
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteRequest {
    pub origin: NodeId,
    pub destination: NodeId,
    pub strategy: Strategy,
    /// Number of route alternatives to enumerate
    #[serde(default = "default_k")]
    pub k: usize,
    /// 15-minute interval the volume predictions apply to
    pub interval: IntervalId,
}

impl RouteRequest {
    pub fn new(
        origin: NodeId,
        destination: NodeId,
        strategy: Strategy,
        interval: IntervalId,
    ) -> Self {
        RouteRequest {
            origin,
            destination,
            strategy,
            k: default_k(),
            interval,
        }
    }

    pub fn with_k(mut self, k: usize) -> Self {
        self.k = k;
        self
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RouteResponse {
    /// Routes ordered by ascending total travel time; empty when the
    /// destination is unreachable
    pub routes: Vec<PathResult>,
    /// Edges the weighted build could not derive from real samples
    pub report: BuildReport,
}

/// Plans up to `request.k` routes on the network weighted for the
/// request's interval.
///
/// # Errors
///
/// `UnknownNode` for an origin or destination absent from the base
/// network, `InvalidData` for `k == 0`, and any weighted-build failure.
/// An unreachable destination is NOT an error: the response simply
/// carries no routes.
pub fn plan_routes(
    base: &RoadNetwork,
    flows: &FlowTable,
    builder: &WeightedGraphBuilder,
    request: &RouteRequest,
) -> Result<RouteResponse, Error> {
    base.node_index(request.origin)?;
    base.node_index(request.destination)?;

    let build = builder.build(base, flows, request.interval)?;
    if !build.report.defaulted.is_empty() {
        warn!(
            "{} of {} edges had no volume sample for interval {}; used the default volume",
            build.report.defaulted.len(),
            base.edge_count(),
            request.interval
        );
    }
    if !build.report.degraded.is_empty() {
        warn!(
            "{} edge(s) past the flow-speed relation peak; clamped to crawl speed",
            build.report.degraded.len()
        );
    }

    let routes = top_k(
        &build.network,
        request.origin,
        request.destination,
        request.k,
        request.strategy,
        &KspLimits::default(),
    )?;
    info!(
        "{} route(s) from {} to {} via {} for interval {}",
        routes.len(),
        request.origin,
        request.destination,
        request.strategy,
        request.interval
    );

    Ok(RouteResponse {
        routes,
        report: build.report,
    })
}

/// Evaluates independent requests in parallel. Requests share the base
/// network and flow table read-only, so no locking is involved.
pub fn plan_routes_bulk(
    base: &RoadNetwork,
    flows: &FlowTable,
    builder: &WeightedGraphBuilder,
    requests: &[RouteRequest],
) -> Vec<Result<RouteResponse, Error>> {
    requests
        .par_iter()
        .map(|request| plan_routes(base, flows, builder, request))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flow::FlowSample;
    use crate::testutil::{diamond_network, disconnected_network};

    fn flows() -> FlowTable {
        FlowTable::from_samples(vec![
            FlowSample {
                from: 1,
                to: 3,
                interval: 34,
                volume: 90.0,
            },
            FlowSample {
                from: 3,
                to: 4,
                interval: 34,
                volume: 90.0,
            },
        ])
    }

    #[test]
    fn end_to_end_returns_ordered_routes_and_report() {
        let base = diamond_network();
        let request = RouteRequest::new(1, 4, Strategy::AStar, 34).with_k(3);
        let response = plan_routes(&base, &flows(), &WeightedGraphBuilder::default(), &request)
            .unwrap();

        assert_eq!(response.routes.len(), 2);
        for pair in response.routes.windows(2) {
            assert!(pair[0].cost <= pair[1].cost);
        }
        // The two edges without samples were defaulted
        let mut defaulted = response.report.defaulted.clone();
        defaulted.sort_unstable();
        assert_eq!(defaulted, vec![(1, 2), (2, 4)]);
    }

    #[test]
    fn pipeline_costs_match_a_direct_weighted_build() {
        let base = diamond_network();
        let builder = WeightedGraphBuilder::default();
        let request = RouteRequest::new(1, 4, Strategy::AStar, 34);
        let response = plan_routes(&base, &flows(), &builder, &request).unwrap();

        let network = builder.build(&base, &flows(), 34).unwrap().network;
        let direct = Strategy::AStar
            .search(&network)
            .unwrap()
            .into_found()
            .unwrap();
        assert_eq!(response.routes[0].cost, direct.cost);
    }

    #[test]
    fn unknown_origin_is_rejected_before_building() {
        let base = diamond_network();
        let request = RouteRequest::new(77, 4, Strategy::AStar, 34);
        assert!(matches!(
            plan_routes(&base, &flows(), &WeightedGraphBuilder::default(), &request),
            Err(Error::UnknownNode(77))
        ));
    }

    #[test]
    fn unreachable_destination_is_an_empty_response() {
        let base = disconnected_network();
        let request = RouteRequest::new(1, 4, Strategy::Cus1, 0);
        let response = plan_routes(
            &base,
            &FlowTable::new(),
            &WeightedGraphBuilder::default(),
            &request,
        )
        .unwrap();
        assert!(response.routes.is_empty());
    }

    #[test]
    fn bulk_planning_matches_sequential_results() {
        let base = diamond_network();
        let builder = WeightedGraphBuilder::default();
        let requests: Vec<RouteRequest> = Strategy::ALL
            .into_iter()
            .map(|strategy| RouteRequest::new(1, 4, strategy, 34).with_k(2))
            .collect();

        let bulk = plan_routes_bulk(&base, &flows(), &builder, &requests);
        assert_eq!(bulk.len(), requests.len());
        for (request, result) in requests.iter().zip(bulk) {
            let sequential = plan_routes(&base, &flows(), &builder, request).unwrap();
            let parallel = result.unwrap();
            let bulk_costs: Vec<f64> = parallel.routes.iter().map(|r| r.cost).collect();
            let seq_costs: Vec<f64> = sequential.routes.iter().map(|r| r.cost).collect();
            assert_eq!(bulk_costs, seq_costs);
        }
    }
}
