use std::collections::HashSet;

use osmpbf::{Element, ElementReader};
use tracing::info;

use crate::{
    error::Result,
    ingestion::RawSnapshot,
    structures::{LatLng, OsmId, RawNode, RawWay, WayTags},
};

/// Reads the streets of a local `.osm.pbf` extract.
///
/// Two passes: the first collects ways carrying a `highway` tag, the second
/// the coordinates of the nodes they reference.
pub fn load_pbf_file(pbf_path: &str) -> Result<RawSnapshot> {
    let mut snapshot = RawSnapshot::new();
    let mut referenced = HashSet::<OsmId>::new();

    let reader = ElementReader::from_path(pbf_path)?;
    reader.for_each(|element| {
        if let Element::Way(w) = element {
            let tags = WayTags::from_pairs(w.tags());
            if !tags.is_street() {
                return;
            }

            let node_ids = w.refs().collect::<Vec<_>>();
            referenced.extend(node_ids.iter().copied());
            snapshot.add_way(RawWay {
                id: w.id(),
                node_ids,
                tags,
            });
        }
    })?;

    let reader = ElementReader::from_path(pbf_path)?;
    reader.for_each(|element| match element {
        Element::DenseNode(n) if referenced.contains(&n.id()) => snapshot.add_node(RawNode {
            id: n.id(),
            lat_lng: LatLng::new(n.lat(), n.lon()),
        }),
        Element::Node(n) if referenced.contains(&n.id()) => snapshot.add_node(RawNode {
            id: n.id(),
            lat_lng: LatLng::new(n.lat(), n.lon()),
        }),
        _ => {}
    })?;

    info!(
        ways = snapshot.ways.len(),
        nodes = snapshot.nodes.len(),
        referenced = referenced.len(),
        "Read {pbf_path}"
    );

    Ok(snapshot)
}
