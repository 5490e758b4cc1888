use std::{fmt::Display, time::SystemTime};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::structures::{Graph, OsmId, Path};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteQuery {
    pub from: OsmId,
    pub to: OsmId,
}

/// Result of a route query. Every variant but `Found` means "no path".
#[derive(Debug, Clone, PartialEq)]
pub enum RouteOutcome {
    Found(Path),
    UnknownStart(OsmId),
    UnknownEnd(OsmId),
    Unreachable,
}

impl RouteOutcome {
    pub fn path(&self) -> Option<&Path> {
        match self {
            RouteOutcome::Found(path) => Some(path),
            _ => None,
        }
    }

    pub fn path_ids(&self) -> Option<&[OsmId]> {
        self.path().map(|p| p.nodes.as_slice())
    }

    /// Total meters, or infinity when no path was found.
    pub fn distance(&self) -> f64 {
        self.path().map_or(f64::INFINITY, |p| p.distance)
    }

    pub fn is_found(&self) -> bool {
        matches!(self, RouteOutcome::Found(_))
    }
}

impl Display for RouteOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RouteOutcome::Found(path) => {
                let ids = path
                    .nodes
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(" -> ");
                write!(f, "{ids} ({:.1} m)", path.distance)
            }
            RouteOutcome::UnknownStart(id) => write!(f, "no path: unknown start node {id}"),
            RouteOutcome::UnknownEnd(id) => write!(f, "no path: unknown end node {id}"),
            RouteOutcome::Unreachable => write!(f, "no path found"),
        }
    }
}

/// Routes between two external node ids of `graph`.
pub fn route(graph: &Graph, query: &RouteQuery) -> RouteOutcome {
    let Some(from) = graph.get_id(query.from) else {
        debug!("Start node {} is not an intersection", query.from);
        return RouteOutcome::UnknownStart(query.from);
    };
    let Some(to) = graph.get_id(query.to) else {
        debug!("End node {} is not an intersection", query.to);
        return RouteOutcome::UnknownEnd(query.to);
    };

    let before = SystemTime::now();
    let outcome = match graph.dijkstra(from, to) {
        Some(path) => RouteOutcome::Found(path),
        None => RouteOutcome::Unreachable,
    };
    if let Ok(elapsed) = before.elapsed() {
        debug!("Routed {} -> {} in {}us", query.from, query.to, elapsed.as_micros());
    }

    outcome
}

/// Path of external ids and its length; `(None, inf)` when there is none.
pub fn shortest_path(graph: &Graph, from: OsmId, to: OsmId) -> (Option<Vec<OsmId>>, f64) {
    let outcome = route(graph, &RouteQuery { from, to });
    (outcome.path_ids().map(<[OsmId]>::to_vec), outcome.distance())
}
