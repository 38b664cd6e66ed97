//! Result rendering for display layers

pub mod geojson;

pub use geojson::{route_to_geojson, route_to_geojson_string};
