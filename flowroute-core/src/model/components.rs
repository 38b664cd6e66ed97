//! Road network components - nodes and directed segments

use geo::Point;

use crate::NodeId;

/// Road network node, a monitored intersection
#[derive(Debug, Clone)]
pub struct RoadNode {
    /// Stable external identifier (SCATS-style site number)
    pub id: NodeId,
    /// Node coordinates in planar meters, used for the heuristic only
    pub geometry: Point<f64>,
    /// Intersection description from the source data, if any
    pub label: Option<String>,
}

impl RoadNode {
    pub fn new(id: NodeId, x: f64, y: f64) -> Self {
        RoadNode {
            id,
            geometry: Point::new(x, y),
            label: None,
        }
    }
}

/// Directed road segment
#[derive(Debug, Clone)]
pub struct RoadEdge {
    /// Search cost. Travel time in seconds on weighted graphs,
    /// abstract units otherwise
    pub weight: f64,
    /// Segment length in meters, preserved across re-weighting
    pub distance_m: f64,
    /// Set when the congested speed model had no valid root and the
    /// speed was clamped
    pub degraded: bool,
}

impl RoadEdge {
    /// Edge with an abstract search cost equal to its length
    pub fn from_distance(distance_m: f64) -> Self {
        RoadEdge {
            weight: distance_m,
            distance_m,
            degraded: false,
        }
    }

    pub fn travel_time(&self) -> f64 {
        self.weight
    }
}
