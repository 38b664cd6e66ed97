// Re-export key components
pub use crate::export::{route_to_geojson, route_to_geojson_string};
pub use crate::flow::{EdgeTime, FlowParams, FlowSample, FlowTable, interval_of, time_seconds};
pub use crate::loading::{RoutingModelConfig, create_road_model};
pub use crate::model::{MAX_SPEED_KMH, RoadEdge, RoadNetwork, RoadNode};
pub use crate::pipeline::{RouteRequest, RouteResponse, plan_routes, plan_routes_bulk};
pub use crate::routing::{
    KspLimits, PathResult, SearchMask, SearchOutcome, Strategy, top_k,
};
pub use crate::weighting::{BuildReport, WeightedBuild, WeightedGraphBuilder};

// Core scalar types
pub use crate::Cost;
pub use crate::Error;
pub use crate::IntervalId;
pub use crate::NodeId;
