use geo::Point;
use hashbrown::HashSet;
use log::{info, warn};

use super::config::RoutingModelConfig;
use super::tables::{EdgeRow, NodeRow, read_rows_from_path};
use crate::flow::{FlowSample, FlowTable};
use crate::model::{RoadEdge, RoadNetwork, RoadNode};
use crate::{Error, NodeId};

/// Assembles the base network and flow table from the configured tables.
///
/// Destinations missing from the node table are dropped with a warning,
/// matching how upstream site lists routinely reference decommissioned
/// counters. An unknown origin is an error: there is nothing to search
/// from.
///
/// # Errors
///
/// Returns an error if a table is missing or malformed, or if the network
/// fails validation.
pub fn create_road_model(
    config: &RoutingModelConfig,
    origin: NodeId,
    destinations: &[NodeId],
) -> Result<(RoadNetwork, FlowTable), Error> {
    validate_config(config)?;

    info!(
        "Loading road network tables: {}",
        config.edges_path.display()
    );
    let node_rows: Vec<NodeRow> = read_rows_from_path(&config.nodes_path)?;
    let edge_rows: Vec<EdgeRow> = read_rows_from_path(&config.edges_path)?;
    let samples: Vec<FlowSample> = read_rows_from_path(&config.flows_path)?;

    let known: HashSet<NodeId> = node_rows.iter().map(|row| row.id).collect();
    let destinations: Vec<NodeId> = destinations
        .iter()
        .copied()
        .filter(|dest| {
            let found = known.contains(dest);
            if !found {
                warn!("Destination node {dest} not found in the node table; dropping it");
            }
            found
        })
        .collect();

    let nodes = node_rows
        .into_iter()
        .map(|row| RoadNode {
            id: row.id,
            geometry: Point::new(row.x, row.y),
            label: row.label.filter(|label| !label.is_empty()),
        })
        .collect();
    let edges = edge_rows
        .into_iter()
        .map(|row| (row.from, row.to, RoadEdge::from_distance(row.distance_m)))
        .collect();

    let network = RoadNetwork::new(nodes, edges, origin, destinations)?;
    let flows = FlowTable::from_samples(samples);

    info!(
        "Road model ready: {} nodes, {} edges, {} flow samples",
        network.node_count(),
        network.edge_count(),
        flows.len()
    );
    Ok((network, flows))
}

fn validate_config(config: &RoutingModelConfig) -> Result<(), Error> {
    for path in [&config.nodes_path, &config.edges_path, &config.flows_path] {
        if !path.exists() {
            return Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("table not found: {}", path.display()),
            )));
        }
    }
    Ok(())
}
