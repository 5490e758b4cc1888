use std::{collections::HashMap, fs};

use serde::Deserialize;
use tracing::debug;

use crate::{
    error::Result,
    ingestion::RawSnapshot,
    structures::{LatLng, OsmId, RawNode, RawWay, WayTags},
};

#[derive(Debug, Deserialize)]
struct OverpassResponse {
    #[serde(default)]
    elements: Vec<OverpassElement>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum OverpassElement {
    Node {
        id: OsmId,
        lat: f64,
        lon: f64,
    },
    Way {
        id: OsmId,
        #[serde(default)]
        nodes: Vec<OsmId>,
        #[serde(default)]
        tags: HashMap<String, String>,
    },
    #[serde(other)]
    Other,
}

/// Parses an Overpass `[out:json]` response.
pub fn parse_overpass_json(payload: &str) -> Result<RawSnapshot> {
    let response: OverpassResponse = serde_json::from_str(payload)?;
    let mut snapshot = RawSnapshot::new();
    let mut skipped = 0;

    for element in response.elements {
        match element {
            OverpassElement::Node { id, lat, lon } => snapshot.add_node(RawNode {
                id,
                lat_lng: LatLng::new(lat, lon),
            }),
            OverpassElement::Way { id, nodes, tags } => snapshot.add_way(RawWay {
                id,
                node_ids: nodes,
                tags: WayTags::from_pairs(tags.iter().map(|(k, v)| (k.as_str(), v.as_str()))),
            }),
            OverpassElement::Other => skipped += 1,
        }
    }

    debug!(
        nodes = snapshot.nodes.len(),
        ways = snapshot.ways.len(),
        skipped,
        "Parsed overpass payload"
    );
    Ok(snapshot)
}

pub fn load_overpass_file(path: &str) -> Result<RawSnapshot> {
    let payload = fs::read_to_string(path)?;
    parse_overpass_json(&payload)
}
