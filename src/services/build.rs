use std::time::SystemTime;

use tracing::info;

use crate::{
    error::Result,
    ingestion::{
        self,
        osm::{BuiltGraph, build_street_graph},
    },
    structures::BuildConfig,
};

/// Loads the configured input and builds a fresh street graph from it.
pub fn build_graph(config: &BuildConfig) -> Result<BuiltGraph> {
    let input = &config.input;
    info!("Loading '{}' from {}...", input.label(), input.url());
    let before = SystemTime::now();

    let snapshot = ingestion::load(input)?;
    if let Ok(elapsed) = before.elapsed() {
        info!(
            nodes = snapshot.nodes.len(),
            ways = snapshot.ways.len(),
            "Loaded '{}' in {}ms",
            input.label(),
            elapsed.as_millis()
        );
    }

    let before = SystemTime::now();
    let built = build_street_graph(&snapshot, &config.graph);
    if let Ok(elapsed) = before.elapsed() {
        info!("Graph built in {}ms", elapsed.as_millis());
    }

    Ok(built)
}
