use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::structures::LatLng;

/// External node identifier, as issued by the map data source.
pub type OsmId = i64;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeData {
    pub eid: OsmId,
    pub lat_lng: LatLng,
    /// Sorted, deduplicated names of the streets meeting here.
    pub streets: Vec<String>,
    /// Whether at least one street meeting here has no name.
    pub unnamed_street: bool,
}

impl NodeData {
    pub fn loc(&self) -> LatLng {
        self.lat_lng
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeID(pub usize);

impl Display for NodeID {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
