use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::structures::{EdgeData, NodeData, NodeID, OsmId};

/// Directed street multigraph between intersections.
///
/// Vertices are stored densely; `NodeID(i)` is the position in `nodes`. The
/// external id mapping is a bijection for the lifetime of the graph. Once
/// built, a graph is only ever read: rebuilding produces a new value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Graph {
    nodes: Vec<NodeData>,
    edges: Vec<Vec<EdgeData>>,
    /// Per destination, `(origin, position in edges[origin])` of each arc.
    incoming: Vec<Vec<(NodeID, usize)>>,
    id_mapper: HashMap<OsmId, NodeID>,
}

impl Graph {
    pub fn new() -> Graph {
        Graph {
            nodes: Vec::new(),
            edges: Vec::new(),
            incoming: Vec::new(),
            id_mapper: HashMap::new(),
        }
    }

    /// Inserts a vertex, or returns the index already assigned to its id.
    pub(crate) fn add_node(&mut self, node: NodeData) -> NodeID {
        if let Some(&id) = self.id_mapper.get(&node.eid) {
            return id;
        }

        let id = NodeID(self.nodes.len());
        self.id_mapper.insert(node.eid, id);
        self.nodes.push(node);
        self.edges.push(Vec::new());
        self.incoming.push(Vec::new());
        id
    }

    pub(crate) fn add_edge(&mut self, edge: EdgeData) {
        let outgoing = &mut self.edges[edge.origin.0];
        self.incoming[edge.destination.0].push((edge.origin, outgoing.len()));
        outgoing.push(edge);
    }

    pub fn get_id(&self, eid: OsmId) -> Option<NodeID> {
        self.id_mapper.get(&eid).copied()
    }

    pub fn get_eid(&self, id: NodeID) -> Option<OsmId> {
        self.nodes.get(id.0).map(|n| n.eid)
    }

    /// External id of a vertex of this graph.
    pub(crate) fn eid(&self, id: NodeID) -> OsmId {
        self.nodes[id.0].eid
    }

    pub fn get_node(&self, id: NodeID) -> Option<&NodeData> {
        self.nodes.get(id.0)
    }

    pub fn contains(&self, eid: OsmId) -> bool {
        self.id_mapper.contains_key(&eid)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.iter().map(Vec::len).sum()
    }

    pub fn nodes(&self) -> impl Iterator<Item = (NodeID, &NodeData)> {
        self.nodes.iter().enumerate().map(|(i, n)| (NodeID(i), n))
    }

    pub fn edges(&self) -> impl Iterator<Item = &EdgeData> {
        self.edges.iter().flatten()
    }

    pub fn out_edges(&self, id: NodeID) -> &[EdgeData] {
        self.edges.get(id.0).map_or(&[][..], Vec::as_slice)
    }

    pub fn in_edges(&self, id: NodeID) -> impl Iterator<Item = &EdgeData> {
        self.incoming
            .get(id.0)
            .map_or(&[][..], Vec::as_slice)
            .iter()
            .map(|&(origin, i)| &self.edges[origin.0][i])
    }

    /// Edges from `from` to `to`, parallel ones included.
    pub fn edges_between(&self, from: NodeID, to: NodeID) -> impl Iterator<Item = &EdgeData> {
        self.out_edges(from)
            .iter()
            .filter(move |e| e.destination == to)
    }
}
