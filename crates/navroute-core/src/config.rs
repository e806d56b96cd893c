//! Router configuration for navroute
//!
//! A TOML file describes the network (nodes, weighted edges, default
//! endpoints) and the recency cache size. Without a file the built-in
//! five-node sample network is used.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::bail_config;
use crate::error::{Result, RouteError};
use crate::graph::{Graph, Weight};

/// Default capacity of the chat-activity cache
pub const DEFAULT_CACHE_CAPACITY: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeConfig {
    pub from: String,
    pub to: String,
    /// Signed so that a negative weight in the file is reported, not a parse error
    pub weight: i64,
}

impl EdgeConfig {
    pub fn new(from: &str, to: &str, weight: i64) -> Self {
        Self {
            from: from.to_string(),
            to: to.to_string(),
            weight,
        }
    }

    fn checked_weight(&self) -> Result<Weight> {
        Weight::try_from(self.weight)
            .map_err(|_| RouteError::invalid_weight(&self.from, &self.to, self.weight))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkConfig {
    #[serde(default)]
    pub nodes: Vec<String>,
    #[serde(default)]
    pub edges: Vec<EdgeConfig>,
    /// Default query source
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Default path target
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    /// Reject edges whose endpoints are not declared nodes
    #[serde(default)]
    pub strict: bool,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            nodes: ["A", "B", "C", "D", "E"].map(String::from).to_vec(),
            edges: vec![
                EdgeConfig::new("A", "B", 4),
                EdgeConfig::new("A", "C", 2),
                EdgeConfig::new("B", "C", 1),
                EdgeConfig::new("B", "D", 5),
                EdgeConfig::new("C", "D", 8),
                EdgeConfig::new("C", "E", 10),
                EdgeConfig::new("D", "E", 2),
            ],
            source: Some("A".to_string()),
            target: Some("E".to_string()),
            strict: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheConfig {
    #[serde(default = "default_capacity")]
    pub capacity: usize,
}

fn default_capacity() -> usize {
    DEFAULT_CACHE_CAPACITY
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CACHE_CAPACITY,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouterConfig {
    #[serde(default)]
    pub network: NetworkConfig,
    #[serde(default)]
    pub cache: CacheConfig,
}

impl RouterConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: RouterConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Check the parts of the file that do not depend on graph construction
    pub fn validate(&self) -> Result<()> {
        if self.cache.capacity == 0 {
            return Err(RouteError::InvalidCapacity(0));
        }

        let mut seen = HashSet::new();
        for name in &self.network.nodes {
            if name.is_empty() {
                bail_config!("node names must not be empty");
            }
            if !seen.insert(name.as_str()) {
                bail_config!(format!("duplicate node: {}", name));
            }
        }

        for edge in &self.network.edges {
            edge.checked_weight()?;
        }
        Ok(())
    }

    /// Build the graph described by `[network]`.
    ///
    /// Edges with undeclared endpoints are skipped unless `strict` is set,
    /// in which case they are `DanglingEdge` errors.
    pub fn build_graph(&self) -> Result<Graph> {
        self.validate()?;

        let mut graph = Graph::new();
        for name in &self.network.nodes {
            graph.add_node(name.as_str());
        }

        for edge in &self.network.edges {
            let weight = edge.checked_weight()?;
            if self.network.strict {
                graph.try_add_edge(&edge.from, &edge.to, weight)?;
            } else {
                graph.add_edge(&edge.from, &edge.to, weight);
            }
        }

        tracing::debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            strict = self.network.strict,
            "built graph"
        );
        Ok(graph)
    }
}
