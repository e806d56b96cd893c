//! CLI argument parsing for navroute
//!
//! Global flags: --config, --format, --quiet, --verbose, --log-level, --log-json

pub mod parse;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

pub use navroute_core::format::OutputFormat;
use parse::{parse_capacity, parse_format};

/// Navroute - shortest paths over a weighted directed network
#[derive(Parser, Debug)]
#[command(name = "navroute")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Network configuration file (TOML); defaults to the built-in sample network
    #[arg(long, global = true, env = "NAVROUTE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_parser = parse_format, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. "debug", "navroute_core=trace")
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute shortest distances from a source and the route to a target
    Route(RouteArgs),

    /// Replay the chat-activity LRU cache demo
    Chats {
        /// Cache capacity (overrides [cache] capacity)
        #[arg(long, value_parser = parse_capacity)]
        capacity: Option<usize>,
    },

    /// Print the effective configuration
    Config,
}

#[derive(Args, Debug, Clone, Default)]
pub struct RouteArgs {
    /// Source node (overrides network.source)
    #[arg(long)]
    pub from: Option<String>,

    /// Target node (overrides network.target)
    #[arg(long)]
    pub to: Option<String>,

    /// Fail on edges whose endpoints are not declared nodes
    #[arg(long)]
    pub strict: bool,
}
