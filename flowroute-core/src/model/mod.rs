//! Data model for the road network
//!
//! Contains the node and edge components and the graph structure the
//! search strategies operate on.

pub mod components;
pub mod network;

pub use components::{RoadEdge, RoadNode};
pub use network::{IndexedPoint, MAX_SPEED_KMH, RoadNetwork};
