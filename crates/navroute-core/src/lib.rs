//! Navroute Core Library
//!
//! Shortest-path routing over weighted directed graphs (Dijkstra with
//! lazy deletion and predecessor-based path reconstruction), plus a
//! fixed-capacity LRU recency cache.

pub mod cache;
pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
