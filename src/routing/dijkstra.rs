use std::{
    cmp::{Ordering, Reverse},
    collections::{HashMap, HashSet},
};

use priority_queue::PriorityQueue;
use tracing::debug;

use crate::structures::{Graph, NodeID, Path, PathLeg};

/// Tentative distance in meters, totally ordered so it can key the frontier.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Distance(f64);

impl Eq for Distance {}

impl Ord for Distance {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl PartialOrd for Distance {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Graph {
    /// Shortest path from `a` to `b` by edge length.
    ///
    /// Vertices are settled when popped from the frontier and the search
    /// stops as soon as `b` is settled. Parallel edges are relaxed one by
    /// one; the path keeps the edge actually taken.
    pub(crate) fn dijkstra(&self, a: NodeID, b: NodeID) -> Option<Path> {
        if self.get_node(a).is_none() || self.get_node(b).is_none() {
            return None;
        }

        let mut pq = PriorityQueue::<NodeID, Reverse<Distance>>::new();
        let mut origins = HashMap::<NodeID, (NodeID, usize)>::new();
        let mut visited = HashSet::<NodeID>::new();
        pq.push(a, Reverse(Distance(0.0)));

        while let Some((id, Reverse(Distance(dist)))) = pq.pop() {
            if id == b {
                debug!(
                    visited = visited.len(),
                    distance = dist,
                    "Found a path from {a} to {b}"
                );
                return Some(self.reconstruct_path(&origins, id, dist));
            }
            visited.insert(id);

            for (i, edge) in self.out_edges(id).iter().enumerate() {
                let next = edge.destination;
                if visited.contains(&next) {
                    continue;
                }
                let weight = dist + edge.length;

                match pq.get_priority(&next) {
                    Some(Reverse(Distance(current))) if *current <= weight => {}
                    Some(_) => {
                        pq.change_priority(&next, Reverse(Distance(weight)));
                        origins.insert(next, (id, i));
                    }
                    None => {
                        pq.push(next, Reverse(Distance(weight)));
                        origins.insert(next, (id, i));
                    }
                }
            }
        }

        debug!(visited = visited.len(), "No path from {a} to {b}");
        None
    }

    fn reconstruct_path(
        &self,
        origins: &HashMap<NodeID, (NodeID, usize)>,
        mut current: NodeID,
        distance: f64,
    ) -> Path {
        let mut nodes = vec![self.eid(current)];
        let mut legs = Vec::<PathLeg>::new();

        while let Some(&(previous, i)) = origins.get(&current) {
            let edge = &self.out_edges(previous)[i];
            legs.push(PathLeg {
                from: self.eid(previous),
                to: self.eid(current),
                length: edge.length,
                street: edge.street.clone(),
            });
            nodes.push(self.eid(previous));
            current = previous;
        }

        nodes.reverse();
        legs.reverse();
        Path {
            nodes,
            legs,
            distance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::{EdgeData, LatLng, NodeData, OsmId};

    fn graph(nodes: &[OsmId], edges: &[(OsmId, OsmId, f64)]) -> Graph {
        let mut g = Graph::new();
        for &eid in nodes {
            g.add_node(NodeData {
                eid,
                lat_lng: LatLng::new(0.0, 0.0),
                streets: Vec::new(),
                unnamed_street: false,
            });
        }
        for &(from, to, length) in edges {
            g.add_edge(EdgeData {
                origin: g.get_id(from).unwrap(),
                destination: g.get_id(to).unwrap(),
                length,
                street: Some(format!("{from}-{to}")),
            });
        }
        g
    }

    fn run(g: &Graph, from: OsmId, to: OsmId) -> Option<Path> {
        g.dijkstra(g.get_id(from).unwrap(), g.get_id(to).unwrap())
    }

    #[test]
    fn prefers_the_shorter_detour() {
        let g = graph(
            &[1, 2, 3, 4],
            &[(1, 4, 100.0), (1, 2, 20.0), (2, 3, 30.0), (3, 4, 40.0)],
        );
        let path = run(&g, 1, 4).unwrap();

        assert_eq!(path.nodes, vec![1, 2, 3, 4]);
        assert_eq!(path.distance, 90.0);
        assert_eq!(path.legs.len(), 3);
        assert_eq!(path.legs_length(), path.distance);
    }

    #[test]
    fn decreases_a_queued_distance() {
        // 3 is first queued through 1 -> 3 (50), then improved via 2 (15).
        let g = graph(
            &[1, 2, 3, 4],
            &[(1, 3, 50.0), (1, 2, 5.0), (2, 3, 10.0), (3, 4, 1.0)],
        );
        let path = run(&g, 1, 4).unwrap();

        assert_eq!(path.nodes, vec![1, 2, 3, 4]);
        assert_eq!(path.distance, 16.0);
    }

    #[test]
    fn uses_the_cheapest_parallel_edge() {
        let g = graph(&[1, 2], &[(1, 2, 80.0), (1, 2, 35.0), (1, 2, 60.0)]);
        let path = run(&g, 1, 2).unwrap();

        assert_eq!(path.distance, 35.0);
        assert_eq!(path.legs[0].length, 35.0);
    }

    #[test]
    fn respects_direction() {
        let g = graph(&[1, 2], &[(1, 2, 150.0)]);

        let path = run(&g, 1, 2).unwrap();
        assert_eq!(path.nodes, vec![1, 2]);
        assert_eq!(path.distance, 150.0);
        assert_eq!(path.legs[0].street.as_deref(), Some("1-2"));

        assert!(run(&g, 2, 1).is_none());
    }

    #[test]
    fn same_start_and_end() {
        let g = graph(&[7, 8], &[(7, 8, 3.0), (7, 7, 1.0)]);
        let path = run(&g, 7, 7).unwrap();

        assert_eq!(path.nodes, vec![7]);
        assert!(path.legs.is_empty());
        assert_eq!(path.distance, 0.0);
    }

    #[test]
    fn zero_length_edges() {
        let g = graph(&[1, 2, 3], &[(1, 2, 0.0), (2, 3, 0.0)]);
        let path = run(&g, 1, 3).unwrap();

        assert_eq!(path.nodes, vec![1, 2, 3]);
        assert_eq!(path.distance, 0.0);
    }

    #[test]
    fn unknown_index() {
        let g = graph(&[1], &[]);
        assert!(g.dijkstra(NodeID(0), NodeID(5)).is_none());
        assert!(g.dijkstra(NodeID(5), NodeID(0)).is_none());
    }
}
