use std::env;

use optirota::{
    routing::route,
    services::{build::build_graph, persistence::save_graph, report},
    structures::Config,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config_path = env::args()
        .nth(1)
        .unwrap_or_else(|| "config.yml".to_string());
    let config = match Config::load(&config_path) {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to load {config_path}: {e}");
            return;
        }
    };

    let built = match build_graph(&config.build) {
        Ok(b) => b,
        Err(e) => {
            error!("Failed to build graph: {e}");
            return;
        }
    };
    let graph = built.graph;

    if let Some(output) = &config.build.output {
        if let Err(e) = save_graph(&graph, output) {
            error!("{e}");
        }
    }

    println!("{}\n", report::summary(&graph));
    for crossing in report::crossings(&graph, config.report.limit) {
        println!("{crossing}");
    }

    for query in &config.queries {
        info!("{} -> {}: {}", query.from, query.to, route(&graph, query));
    }
}
