use std::fs;

use serde::Deserialize;

use crate::{error::Result, ingestion::cache::SourceLocation, routing::RouteQuery};

#[derive(Debug, Deserialize)]
pub struct Config {
    pub build: BuildConfig,
    #[serde(default)]
    pub queries: Vec<RouteQuery>,
    #[serde(default)]
    pub report: ReportConfig,
}

#[derive(Debug, Deserialize)]
pub struct BuildConfig {
    pub input: Ingestor,
    pub output: Option<String>,
    #[serde(default)]
    pub graph: GraphOptions,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "ingestor")]
pub enum Ingestor {
    #[serde(rename = "osm/json")]
    OverpassJson(SourceIngestor),
    #[serde(rename = "osm/pbf")]
    OsmPbf(SourceIngestor),
}

#[derive(Debug, Deserialize)]
pub struct SourceIngestor {
    pub url: String,
}

/// Vertex selection rules for the graph builder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GraphOptions {
    /// Also promote the first and last node of every street to a vertex.
    pub include_way_endpoints_as_vertices: bool,
    /// Ignore streets without a `name` tag.
    pub require_named_streets: bool,
}

#[derive(Debug, Default, Deserialize)]
pub struct ReportConfig {
    pub limit: Option<usize>,
}

impl Ingestor {
    pub fn label(&self) -> &str {
        match self {
            Ingestor::OverpassJson(_) => "osm/json",
            Ingestor::OsmPbf(_) => "osm/pbf",
        }
    }

    pub fn url(&self) -> &str {
        match self {
            Ingestor::OverpassJson(c) => &c.url,
            Ingestor::OsmPbf(c) => &c.url,
        }
    }

    pub fn location(&self) -> SourceLocation {
        let url = self.url();
        if let Some(path) = url.strip_prefix("path:") {
            SourceLocation::Local(path.to_string())
        } else if url.starts_with("http://") || url.starts_with("https://") {
            SourceLocation::Remote(url.to_string())
        } else {
            SourceLocation::Unknown(url.to_string())
        }
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(serde_yml::from_str(content)?)
    }
}
