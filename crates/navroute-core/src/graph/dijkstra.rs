use crate::graph::frontier::Frontier;
use crate::graph::store::Graph;
use crate::graph::types::{Distance, NodeId};
use crate::log_search_stats;
use std::collections::btree_map;
use std::collections::BTreeMap;

/// Per-node record of the previous hop on the best known path.
///
/// Must hold every node the query should consider before the engine runs;
/// the engine updates entries but never adds keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Predecessors(BTreeMap<NodeId, Option<NodeId>>);

impl Predecessors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fresh map with every live node of `graph` mapped to "none"
    pub fn for_graph(graph: &Graph) -> Self {
        graph.all_nodes().into_iter().collect()
    }

    /// Insert or reset a key to "none"
    pub fn track(&mut self, node: NodeId) {
        self.0.insert(node, None);
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.0.contains_key(&node)
    }

    /// Predecessor of `node`; outer `None` when `node` is not a key
    pub fn get(&self, node: NodeId) -> Option<Option<NodeId>> {
        self.0.get(&node).copied()
    }

    /// Reset every entry to "none" so the map can serve another query
    pub fn reset(&mut self) {
        self.0.values_mut().for_each(|pred| *pred = None);
    }

    pub fn keys(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.0.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub(crate) fn set(&mut self, node: NodeId, pred: NodeId) {
        if let Some(slot) = self.0.get_mut(&node) {
            *slot = Some(pred);
        }
    }
}

impl FromIterator<NodeId> for Predecessors {
    fn from_iter<I: IntoIterator<Item = NodeId>>(iter: I) -> Self {
        Predecessors(iter.into_iter().map(|id| (id, None)).collect())
    }
}

/// Shortest known distance from the source, per node, in node-id order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Distances(BTreeMap<NodeId, Distance>);

impl Distances {
    /// Distance recorded for `node`, or `None` if it is not a key
    pub fn get(&self, node: NodeId) -> Option<Distance> {
        self.0.get(&node).copied()
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.0.contains_key(&node)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, NodeId, Distance> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Nodes with a finite distance
    pub fn reachable(&self) -> impl Iterator<Item = (NodeId, Distance)> + '_ {
        self.0
            .iter()
            .filter(|(_, d)| d.is_finite())
            .map(|(id, d)| (*id, *d))
    }
}

impl<'a> IntoIterator for &'a Distances {
    type Item = (&'a NodeId, &'a Distance);
    type IntoIter = btree_map::Iter<'a, NodeId, Distance>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Work counters for one engine run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub struct SearchStats {
    /// Entries taken off the frontier, stale ones included
    pub pops: u64,
    /// Entries discarded because a shorter distance was already recorded
    pub stale_skips: u64,
    /// Successful relaxations
    pub relaxations: u64,
    /// Entries pushed onto the frontier
    pub pushes: u64,
}

/// Run Dijkstra from `source`, filling `predecessors` and returning the distances.
///
/// Every key of `predecessors` starts at infinity and `source` at zero.
/// Relaxation only touches nodes that are keys, so edges into nodes the
/// caller did not track (or into orphaned slots) are ignored. Unreachable
/// nodes keep the infinity sentinel.
pub fn compute_shortest_distances(
    graph: &Graph,
    source: NodeId,
    predecessors: &mut Predecessors,
) -> Distances {
    compute_shortest_distances_with_stats(graph, source, predecessors).0
}

/// Same as [`compute_shortest_distances`], also returning work counters
#[tracing::instrument(skip(graph, source, predecessors), fields(source = %graph.name(source), nodes = predecessors.len()))]
pub fn compute_shortest_distances_with_stats(
    graph: &Graph,
    source: NodeId,
    predecessors: &mut Predecessors,
) -> (Distances, SearchStats) {
    let mut distances: BTreeMap<NodeId, Distance> = predecessors
        .keys()
        .map(|id| (id, Distance::INFINITY))
        .collect();
    distances.insert(source, Distance::ZERO);

    let mut stats = SearchStats::default();
    let mut frontier = Frontier::new();
    frontier.push(source, Distance::ZERO);
    stats.pushes += 1;

    while let Some((current, current_dist)) = frontier.pop_min() {
        stats.pops += 1;

        // Superseded duplicate
        if distances
            .get(&current)
            .is_some_and(|recorded| current_dist > *recorded)
        {
            stats.stale_skips += 1;
            continue;
        }

        for edge in graph.edges(current) {
            let candidate = current_dist.extend(edge.weight);
            let Some(best) = distances.get_mut(&edge.target) else {
                continue;
            };
            if candidate < *best {
                *best = candidate;
                predecessors.set(edge.target, current);
                frontier.push(edge.target, candidate);
                stats.relaxations += 1;
                stats.pushes += 1;
            }
        }
    }

    log_search_stats!(&stats, "compute_shortest_distances");

    (Distances(distances), stats)
}
