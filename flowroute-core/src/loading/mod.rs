//! This module is responsible for loading node, edge and flow tables and
//! assembling the in-memory routing model. File formats belong to the
//! ingestion layer; the core only needs the tables to deserialize.

mod builder;
mod config;
pub mod tables;

pub use builder::create_road_model;
pub use config::RoutingModelConfig;
