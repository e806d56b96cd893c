//! Weighted directed graphs and single-source shortest paths
//!
//! - `store`: node table and outgoing edges
//! - `frontier`: min-ordered worklist with insertion-order tie-breaking
//! - `dijkstra`: relaxation loop producing distance and predecessor maps
//! - `path`: walking the predecessor map back to the source
//! - `query`: one engine run bundled with its maps

pub mod dijkstra;
pub mod frontier;
pub mod path;
pub mod query;
pub mod store;
pub mod types;

pub use dijkstra::{
    compute_shortest_distances, compute_shortest_distances_with_stats, Distances, Predecessors,
    SearchStats,
};
pub use frontier::Frontier;
pub use path::get_shortest_path;
pub use query::{Route, RouteQuery, RouteReport};
pub use store::{Edge, Graph, Node};
pub use types::{Distance, NodeId, Weight};
