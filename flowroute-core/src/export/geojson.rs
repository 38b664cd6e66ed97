use geo::{Coord, LineString};
use geojson::{FeatureCollection, Geometry, Value as GeoJsonValue};
use serde_json::json;

use crate::Error;
use crate::model::RoadNetwork;
use crate::routing::PathResult;

/// Converts a route into a `GeoJSON` `FeatureCollection` with a single
/// `LineString` through the route's node coordinates.
pub fn route_to_geojson(
    network: &RoadNetwork,
    route: &PathResult,
) -> Result<FeatureCollection, Error> {
    let mut coords: Vec<Coord<f64>> = Vec::with_capacity(route.nodes.len());
    for &id in &route.nodes {
        let point = network.coordinates(id)?;
        coords.push(Coord {
            x: point.x(),
            y: point.y(),
        });
    }

    let geometry = Geometry::new(GeoJsonValue::from(&LineString::new(coords)));
    let value = json!({
        "type": "Feature",
        "geometry": geometry,
        "properties": {
            "strategy": route.strategy.name(),
            "total_seconds": route.cost,
            "node_count": route.nodes.len(),
            "expanded": route.expanded,
        }
    });
    let feature = serde_json::from_value(value).map_err(|e| Error::GeoJson(e.to_string()))?;

    Ok(FeatureCollection {
        features: vec![feature],
        bbox: None,
        foreign_members: None,
    })
}

pub fn route_to_geojson_string(network: &RoadNetwork, route: &PathResult) -> Result<String, Error> {
    serde_json::to_string(&route_to_geojson(network, route)?)
        .map_err(|e| Error::GeoJson(e.to_string()))
}
