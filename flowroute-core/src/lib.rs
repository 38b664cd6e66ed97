//! Core routing engine for traffic-volume-aware route guidance.
//!
//! A road network is loaded once as a base graph whose edges carry physical
//! segment lengths. For each 15-minute interval, predicted traffic volumes
//! are converted into travel times and applied as edge weights on a fresh
//! copy of the graph. A family of search strategies and a k-shortest-paths
//! engine then operate read-only on the weighted graph, so independent
//! requests can run in parallel without locking.

pub mod error;
pub mod export;
pub mod flow;
pub mod loading;
pub mod model;
pub mod pipeline;
pub mod prelude;
pub mod routing;
pub mod weighting;

#[cfg(test)]
pub(crate) mod testutil;

pub use error::Error;
pub use model::{RoadEdge, RoadNetwork, RoadNode};

/// External identifier of a network node (a monitored intersection).
pub type NodeId = u32;

/// Index of a 15-minute interval within a day (00:00 maps to 0, 23:45 to 95).
pub type IntervalId = u32;

/// Edge cost. Travel time in seconds on weighted graphs, abstract units in
/// search-only contexts.
pub type Cost = f64;
