//! Human-readable listing of intersections and their connections.

use std::fmt::Display;

use crate::structures::{EdgeData, Graph, LatLng, NodeID, OsmId, UNNAMED_STREET};

#[derive(Debug, Clone, PartialEq)]
pub struct Connection {
    pub peer: OsmId,
    pub street: Option<String>,
    pub length: f64,
}

impl Display for Connection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.street {
            Some(street) => write!(f, "{street}")?,
            None => write!(f, "{UNNAMED_STREET} (Node {})", self.peer)?,
        }
        write!(f, ", distance: {:.1} m", self.length)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Crossing {
    pub id: OsmId,
    pub location: LatLng,
    /// Names of the streets meeting here, sorted and joined with " / ".
    pub label: String,
    pub outgoing: Vec<Connection>,
    /// Only filled when it differs in size from `outgoing`.
    pub incoming: Vec<Connection>,
}

impl Display for Crossing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Node ID: {}", self.id)?;
        writeln!(
            f,
            "Crossing: {} ({}) connects to:",
            self.label, self.location
        )?;
        if self.outgoing.is_empty() {
            writeln!(f, " -> no outgoing streets")?;
        }
        for connection in &self.outgoing {
            writeln!(f, " -> {connection}")?;
        }
        if !self.incoming.is_empty() {
            writeln!(f, "   Incoming connections:")?;
            for connection in &self.incoming {
                writeln!(f, "   <- {connection}")?;
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub vertices: usize,
    pub edges: usize,
}

impl Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Intersections: {}", self.vertices)?;
        write!(f, "Edges: {}", self.edges)
    }
}

pub fn summary(graph: &Graph) -> Summary {
    Summary {
        vertices: graph.node_count(),
        edges: graph.edge_count(),
    }
}

/// Lists up to `limit` intersections, in vertex index order.
pub fn crossings(graph: &Graph, limit: Option<usize>) -> Vec<Crossing> {
    graph
        .nodes()
        .take(limit.unwrap_or(usize::MAX))
        .map(|(id, node)| {
            let mut names = node.streets.clone();
            if node.unnamed_street || names.is_empty() {
                names.push(format!("unnamed street (Node {})", node.eid));
            }
            names.sort();

            let outgoing = graph
                .out_edges(id)
                .iter()
                .map(|e| connection(graph, e, e.destination))
                .collect::<Vec<_>>();
            let mut incoming = graph
                .in_edges(id)
                .map(|e| connection(graph, e, e.origin))
                .collect::<Vec<_>>();
            if incoming.len() == outgoing.len() {
                incoming.clear();
            }

            Crossing {
                id: node.eid,
                location: node.loc(),
                label: names.join(" / "),
                outgoing,
                incoming,
            }
        })
        .collect()
}

fn connection(graph: &Graph, edge: &EdgeData, peer: NodeID) -> Connection {
    Connection {
        peer: graph.eid(peer),
        street: edge.street.clone(),
        length: edge.length,
    }
}
