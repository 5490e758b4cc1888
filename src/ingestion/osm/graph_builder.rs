use std::collections::{BTreeSet, HashMap, HashSet};

use tracing::{debug, info, warn};

use crate::{
    ingestion::RawSnapshot,
    structures::{
        EdgeData, Graph, GraphOptions, LatLng, NodeData, NodeID, OneWay, OsmId, RawWay,
    },
};

/// Data quality counters collected while building a graph.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildDiagnostics {
    pub ways_seen: usize,
    pub ways_used: usize,
    pub ways_without_highway: usize,
    pub ways_without_name: usize,
    /// Distinct node ids referenced by a used way but absent from the node map.
    pub missing_nodes: usize,
    /// Segments starting at a non-vertex way end; they are dropped.
    pub dangling_segments: usize,
    pub vertices: usize,
    pub edges: usize,
}

#[derive(Debug, Clone)]
pub struct BuiltGraph {
    pub graph: Graph,
    pub diagnostics: BuildDiagnostics,
}

#[derive(Default)]
struct StreetLabels<'a> {
    names: BTreeSet<&'a str>,
    unnamed: bool,
}

/// Collapses street polylines into a directed graph between intersections.
///
/// A node becomes a vertex when qualifying ways reference it more than once
/// (counting every occurrence), or when it ends a way and
/// `include_way_endpoints_as_vertices` is set. Each way is then walked in
/// order and cut at every vertex; the haversine length of the polyline
/// between two consecutive vertices becomes the weight of the edge(s)
/// joining them, oriented by the way's `oneway` tag.
pub fn build_street_graph(snapshot: &RawSnapshot, options: &GraphOptions) -> BuiltGraph {
    let mut diagnostics = BuildDiagnostics {
        ways_seen: snapshot.ways.len(),
        ..Default::default()
    };

    let ways = snapshot
        .ways
        .iter()
        .filter(|way| qualifies(way, options, &mut diagnostics))
        .collect::<Vec<_>>();
    diagnostics.ways_used = ways.len();

    let mut usage = HashMap::<OsmId, usize>::new();
    for way in &ways {
        for &id in &way.node_ids {
            *usage.entry(id).or_default() += 1;
        }
    }

    let mut order = Vec::<OsmId>::new();
    let mut labels = HashMap::<OsmId, StreetLabels>::new();
    let mut missing = HashSet::<OsmId>::new();

    for way in &ways {
        let known = |id: &OsmId| snapshot.location(*id).is_some();
        let first = way.node_ids.iter().position(known);
        let last = way.node_ids.iter().rposition(known);

        for (i, &id) in way.node_ids.iter().enumerate() {
            if snapshot.location(id).is_none() {
                missing.insert(id);
                continue;
            }

            let endpoint = options.include_way_endpoints_as_vertices
                && (Some(i) == first || Some(i) == last);
            if usage[&id] < 2 && !endpoint {
                continue;
            }

            let label = labels.entry(id).or_insert_with(|| {
                order.push(id);
                StreetLabels::default()
            });
            match way.tags.name.as_deref() {
                Some(name) => {
                    label.names.insert(name);
                }
                None => label.unnamed = true,
            }
        }
    }
    diagnostics.missing_nodes = missing.len();

    let mut graph = Graph::new();
    for id in order {
        let (Some(lat_lng), Some(label)) = (snapshot.location(id), labels.remove(&id)) else {
            continue;
        };
        graph.add_node(NodeData {
            eid: id,
            lat_lng,
            streets: label.names.into_iter().map(str::to_string).collect(),
            unnamed_street: label.unnamed,
        });
    }

    for way in &ways {
        walk_way(snapshot, way, &mut graph, &mut diagnostics);
    }

    diagnostics.vertices = graph.node_count();
    diagnostics.edges = graph.edge_count();

    info!(
        ways = diagnostics.ways_used,
        vertices = diagnostics.vertices,
        edges = diagnostics.edges,
        "Built street graph"
    );
    if diagnostics.missing_nodes > 0 {
        warn!(
            "{} referenced nodes have no coordinates and were skipped",
            diagnostics.missing_nodes
        );
    }

    BuiltGraph { graph, diagnostics }
}

fn qualifies(way: &RawWay, options: &GraphOptions, diagnostics: &mut BuildDiagnostics) -> bool {
    if !way.tags.is_street() {
        diagnostics.ways_without_highway += 1;
        return false;
    }
    if options.require_named_streets && way.tags.name.is_none() {
        diagnostics.ways_without_name += 1;
        return false;
    }
    true
}

fn walk_way(
    snapshot: &RawSnapshot,
    way: &RawWay,
    graph: &mut Graph,
    diagnostics: &mut BuildDiagnostics,
) {
    let mut segment_start: Option<OsmId> = None;
    let mut previous: Option<LatLng> = None;
    let mut length = 0.0;
    let mut emitted = 0;

    for &id in &way.node_ids {
        let Some(loc) = snapshot.location(id) else {
            continue;
        };
        if let Some(prev) = previous {
            length += prev.dist(loc);
        }
        previous = Some(loc);

        let Some(start) = segment_start else {
            segment_start = Some(id);
            continue;
        };
        let Some(to) = graph.get_id(id) else {
            continue;
        };

        match graph.get_id(start) {
            Some(from) => emitted += add_segment(graph, way, from, to, length),
            None => diagnostics.dangling_segments += 1,
        }
        segment_start = Some(id);
        length = 0.0;
    }

    debug!(way = way.id, edges = emitted, "Walked way");
}

fn add_segment(
    graph: &mut Graph,
    way: &RawWay,
    first: NodeID,
    last: NodeID,
    length: f64,
) -> usize {
    let arcs = match way.tags.oneway {
        OneWay::Forward => vec![(first, last)],
        OneWay::Reverse => vec![(last, first)],
        OneWay::TwoWay => vec![(first, last), (last, first)],
    };

    let count = arcs.len();
    for (origin, destination) in arcs {
        graph.add_edge(EdgeData {
            origin,
            destination,
            length,
            street: way.tags.name.clone(),
        });
    }
    count
}
