//! Path reconstruction from a predecessor map

use crate::graph::dijkstra::Predecessors;
use crate::graph::types::NodeId;
use std::collections::VecDeque;

/// Walk the predecessor chain back from `target`, returning source-first order.
///
/// Returns an empty vector when `target` is not a key of `predecessors`.
/// A tracked but unreached target yields `[target]`, the same shape as the
/// source itself; callers that need to tell those apart should consult the
/// distance map (see `RouteQuery::path_to`).
pub fn get_shortest_path(target: NodeId, predecessors: &Predecessors) -> Vec<NodeId> {
    if !predecessors.contains(target) {
        return Vec::new();
    }

    let mut path = VecDeque::new();
    let mut step = Some(target);

    // A chain longer than the map must contain a cycle
    while let Some(current) = step {
        if path.len() > predecessors.len() {
            tracing::warn!(node = %target, "predecessor chain does not terminate");
            break;
        }
        path.push_front(current);
        step = predecessors.get(current).flatten();
    }

    path.into()
}
