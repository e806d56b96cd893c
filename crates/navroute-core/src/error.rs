//! Error types and exit codes for navroute
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (unknown node, dangling edge, invalid weight, bad config)

mod macros;

use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - unknown node, invalid network description (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during navroute operations
#[derive(Error, Debug)]
pub enum RouteError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    // Data errors (exit code 3)
    #[error("node not found: {name}")]
    NodeNotFound { name: String },

    #[error("dangling edge {from} -> {to}: node {missing} does not exist")]
    DanglingEdge {
        from: String,
        to: String,
        missing: String,
    },

    #[error("invalid weight {weight} on edge {from} -> {to} (weights must be between 0 and {max})")]
    InvalidWeight {
        from: String,
        to: String,
        weight: i64,
        max: u32,
    },

    #[error("invalid cache capacity: {0} (must be at least 1)")]
    InvalidCapacity(usize),

    #[error("invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl RouteError {
    /// Create an error for a node name that is not in the graph
    pub fn node_not_found(name: impl Into<String>) -> Self {
        RouteError::NodeNotFound { name: name.into() }
    }

    /// Create an error for an edge whose endpoint is missing
    pub fn dangling_edge(from: &str, to: &str, missing: &str) -> Self {
        RouteError::DanglingEdge {
            from: from.to_string(),
            to: to.to_string(),
            missing: missing.to_string(),
        }
    }

    /// Create an error for an out-of-range edge weight
    pub fn invalid_weight(from: &str, to: &str, weight: i64) -> Self {
        RouteError::InvalidWeight {
            from: from.to_string(),
            to: to.to_string(),
            weight,
            max: u32::MAX,
        }
    }

    /// Create an error for a malformed configuration
    pub fn invalid_config(reason: impl std::fmt::Display) -> Self {
        RouteError::InvalidConfig {
            reason: reason.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            RouteError::UnknownFormat(_) | RouteError::UsageError(_) => ExitCode::Usage,

            RouteError::NodeNotFound { .. }
            | RouteError::DanglingEdge { .. }
            | RouteError::InvalidWeight { .. }
            | RouteError::InvalidCapacity(_)
            | RouteError::InvalidConfig { .. } => ExitCode::Data,

            RouteError::Io(_)
            | RouteError::Toml(_)
            | RouteError::TomlSer(_)
            | RouteError::Json(_)
            | RouteError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            RouteError::UnknownFormat(_) => "unknown_format",
            RouteError::UsageError(_) => "usage_error",
            RouteError::NodeNotFound { .. } => "node_not_found",
            RouteError::DanglingEdge { .. } => "dangling_edge",
            RouteError::InvalidWeight { .. } => "invalid_weight",
            RouteError::InvalidCapacity(_) => "invalid_capacity",
            RouteError::InvalidConfig { .. } => "invalid_config",
            RouteError::Io(_) => "io_error",
            RouteError::Toml(_) => "toml_error",
            RouteError::TomlSer(_) => "toml_error",
            RouteError::Json(_) => "json_error",
            RouteError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for navroute operations
pub type Result<T> = std::result::Result<T, RouteError>;
