//! Raw map data ingestion and the street graph builder.

pub mod cache;
pub mod osm;
pub mod overpass;

use std::collections::HashMap;

use crate::{
    error::Result,
    structures::{Ingestor, LatLng, OsmId, RawNode, RawWay},
};

/// Static input to a graph build: node coordinates and ways, in source order.
#[derive(Debug, Clone, Default)]
pub struct RawSnapshot {
    pub nodes: HashMap<OsmId, LatLng>,
    pub ways: Vec<RawWay>,
}

impl RawSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_node(&mut self, node: RawNode) {
        self.nodes.insert(node.id, node.lat_lng);
    }

    pub fn add_way(&mut self, way: RawWay) {
        self.ways.push(way);
    }

    pub fn location(&self, id: OsmId) -> Option<LatLng> {
        self.nodes.get(&id).copied()
    }
}

impl FromIterator<RawNode> for RawSnapshot {
    fn from_iter<T: IntoIterator<Item = RawNode>>(iter: T) -> Self {
        let mut snapshot = RawSnapshot::new();
        for node in iter {
            snapshot.add_node(node);
        }
        snapshot
    }
}

/// Reads the snapshot an ingestor points at.
pub fn load(input: &Ingestor) -> Result<RawSnapshot> {
    let path = cache::resolve_path(input)?;
    match input {
        Ingestor::OverpassJson(_) => overpass::load_overpass_file(&path),
        Ingestor::OsmPbf(_) => osm::load_pbf_file(&path),
    }
}
