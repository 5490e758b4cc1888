use std::fs;

use postcard::{from_bytes, to_allocvec};
use tracing::info;

use crate::{error::Result, structures::Graph};

pub fn save_graph(graph: &Graph, path: &str) -> Result<()> {
    let bytes = to_allocvec(graph)?;
    fs::write(path, &bytes)?;
    info!("Graph saved to {} ({} bytes)", path, bytes.len());
    Ok(())
}

pub fn load_graph(path: &str) -> Result<Graph> {
    let bytes = fs::read(path)?;
    let graph = from_bytes(&bytes)?;
    info!("Graph restored from {}", path);
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::Error,
        ingestion::{RawSnapshot, osm::build_street_graph},
        routing::{RouteQuery, route},
        structures::{GraphOptions, LatLng, RawNode, RawWay, WayTags},
    };

    fn sample() -> Graph {
        let mut snapshot = [(1, 0.0, 0.0), (2, 0.0, 0.001), (3, 0.001, 0.001)]
            .into_iter()
            .map(|(id, lat, lon)| RawNode {
                id,
                lat_lng: LatLng::new(lat, lon),
            })
            .collect::<RawSnapshot>();
        snapshot.add_way(RawWay {
            id: 5,
            node_ids: vec![1, 2, 3],
            tags: WayTags::from_pairs([("highway", "primary"), ("oneway", "yes")]),
        });
        let options = GraphOptions {
            include_way_endpoints_as_vertices: true,
            ..Default::default()
        };
        build_street_graph(&snapshot, &options).graph
    }

    #[test]
    fn restored_graph_routes_the_same() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("graph.bin");
        let path = path.to_str().unwrap();

        let graph = sample();
        save_graph(&graph, path).unwrap();
        let restored = load_graph(path).unwrap();

        assert_eq!(restored.node_count(), graph.node_count());
        assert_eq!(restored.edge_count(), graph.edge_count());
        assert!(restored.edges().eq(graph.edges()));
        for query in [RouteQuery { from: 1, to: 3 }, RouteQuery { from: 3, to: 1 }] {
            assert_eq!(route(&restored, &query), route(&graph, &query));
        }
    }

    #[test]
    fn garbage_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("graph.bin");
        fs::write(&path, [0xff; 3]).unwrap();

        assert!(matches!(
            load_graph(path.to_str().unwrap()),
            Err(Error::Persistence(_))
        ));
    }
}
