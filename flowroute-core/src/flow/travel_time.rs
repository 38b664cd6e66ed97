//! Flow to travel-time conversion
//!
//! Converts an hourly traffic volume and a segment length into travel
//! seconds. Below the capacity threshold traffic moves at the free-flow
//! speed limit; above it the speed is the physically valid root of the
//! calibrated flow-speed relation `volume = b*s - a*s^2`. The relation
//! peaks at `b^2 / 4a` vehicles per hour; volumes beyond the peak have no
//! real root and the speed is clamped to a crawl instead of failing the
//! whole build, with the edge flagged as degraded.

use serde::{Deserialize, Serialize};

use crate::Error;

/// Calibrated parameters of the flow-speed relation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlowParams {
    /// Quadratic coefficient of the flow-speed relation
    pub quad_a: f64,
    /// Linear coefficient of the flow-speed relation
    pub quad_b: f64,
    /// Free-flow threshold in vehicles per hour
    pub capacity_veh_h: f64,
    /// Free-flow speed limit in km/h
    pub speed_limit_kmh: f64,
    /// Fixed per-segment delay in seconds (intersection control)
    pub fixed_delay_s: f64,
    /// Clamp speed in km/h when the relation has no real root
    pub crawl_speed_kmh: f64,
}

impl Default for FlowParams {
    fn default() -> Self {
        FlowParams {
            quad_a: 1.464_837_5,
            quad_b: 93.75,
            capacity_veh_h: 351.0,
            speed_limit_kmh: 60.0,
            fixed_delay_s: 30.0,
            crawl_speed_kmh: 5.0,
        }
    }
}

/// Travel time of a single segment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeTime {
    pub seconds: f64,
    /// The congested speed model had no valid root and the crawl clamp
    /// was applied
    pub degraded: bool,
}

/// Converts an hourly volume and a segment length into travel seconds.
///
/// Deterministic and side-effect-free. The congested branch takes the
/// larger quadratic root: it is the one that stays at or below the speed
/// limit and keeps travel time monotonic non-decreasing in volume.
///
/// # Errors
///
/// `InvalidVolume` for negative or non-finite volumes, `InvalidData` for a
/// negative distance.
pub fn time_seconds(
    volume_veh_h: f64,
    distance_m: f64,
    params: &FlowParams,
) -> Result<EdgeTime, Error> {
    if volume_veh_h < 0.0 || !volume_veh_h.is_finite() {
        return Err(Error::InvalidVolume {
            volume: volume_veh_h,
        });
    }
    if distance_m < 0.0 {
        return Err(Error::InvalidData(format!(
            "negative segment length {distance_m}"
        )));
    }

    let (speed_kmh, degraded) = speed_for_volume(volume_veh_h, params);
    let seconds = distance_m * 3.6 / speed_kmh + params.fixed_delay_s;
    Ok(EdgeTime { seconds, degraded })
}

fn speed_for_volume(volume_veh_h: f64, params: &FlowParams) -> (f64, bool) {
    if volume_veh_h <= params.capacity_veh_h {
        return (params.speed_limit_kmh, false);
    }
    let disc = params.quad_b * params.quad_b - 4.0 * params.quad_a * volume_veh_h;
    if disc < 0.0 {
        return (params.crawl_speed_kmh, true);
    }
    let root = (params.quad_b + disc.sqrt()) / (2.0 * params.quad_a);
    // Just above the capacity threshold the root still exceeds the limit
    (root.min(params.speed_limit_kmh), false)
}
