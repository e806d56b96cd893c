//! One shortest-path query: fresh maps, one engine run, many path lookups

use crate::error::Result;
use crate::graph::dijkstra::{
    compute_shortest_distances_with_stats, Distances, Predecessors, SearchStats,
};
use crate::graph::path::get_shortest_path;
use crate::graph::store::Graph;
use crate::graph::types::{Distance, NodeId};
use serde::Serialize;

/// A reconstructed route and its total weight
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub nodes: Vec<NodeId>,
    pub distance: Distance,
}

impl Route {
    /// Node names joined with `separator`
    pub fn render(&self, graph: &Graph, separator: &str) -> String {
        self.nodes
            .iter()
            .map(|id| graph.name(*id))
            .collect::<Vec<_>>()
            .join(separator)
    }
}

#[derive(Debug, Clone)]
pub struct RouteQuery {
    source: NodeId,
    distances: Distances,
    predecessors: Predecessors,
    stats: SearchStats,
}

impl RouteQuery {
    /// Run the engine from `source` over every live node of `graph`
    pub fn run(graph: &Graph, source: NodeId) -> Self {
        let mut predecessors = Predecessors::for_graph(graph);
        let (distances, stats) =
            compute_shortest_distances_with_stats(graph, source, &mut predecessors);
        Self {
            source,
            distances,
            predecessors,
            stats,
        }
    }

    /// Run from a node given by name; unknown names are `NodeNotFound`
    pub fn from_name(graph: &Graph, source: &str) -> Result<Self> {
        Ok(Self::run(graph, graph.require_node(source)?))
    }

    pub fn source(&self) -> NodeId {
        self.source
    }

    pub fn distances(&self) -> &Distances {
        &self.distances
    }

    pub fn predecessors(&self) -> &Predecessors {
        &self.predecessors
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    pub fn distance_to(&self, target: NodeId) -> Option<Distance> {
        self.distances.get(target)
    }

    /// Shortest route to `target`.
    ///
    /// `None` when the target was never considered or is unreachable, so an
    /// isolated node is no longer confused with the source.
    pub fn path_to(&self, target: NodeId) -> Option<Route> {
        let distance = self.distances.get(target).filter(Distance::is_finite)?;
        if target == self.source {
            return Some(Route {
                nodes: vec![target],
                distance,
            });
        }
        let nodes = get_shortest_path(target, &self.predecessors);
        if nodes.first() != Some(&self.source) {
            return None;
        }
        Some(Route { nodes, distance })
    }

    /// Serializable view with node names, optionally including a route to `target`
    pub fn report(&self, graph: &Graph, target: Option<NodeId>) -> RouteReport {
        RouteReport {
            source: graph.name(self.source).to_string(),
            distances: self
                .distances
                .iter()
                .map(|(id, distance)| DistanceEntry {
                    node: graph.name(*id).to_string(),
                    distance: *distance,
                })
                .collect(),
            target: target.map(|t| graph.name(t).to_string()),
            path: target.map(|t| {
                self.path_to(t)
                    .map(|route| {
                        route
                            .nodes
                            .iter()
                            .map(|id| graph.name(*id).to_string())
                            .collect()
                    })
                    .unwrap_or_default()
            }),
            path_distance: target.and_then(|t| self.distance_to(t)),
            stats: self.stats,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DistanceEntry {
    pub node: String,
    pub distance: Distance,
}

#[derive(Debug, Clone, Serialize)]
pub struct RouteReport {
    pub source: String,
    pub distances: Vec<DistanceEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path_distance: Option<Distance>,
    pub stats: SearchStats,
}
