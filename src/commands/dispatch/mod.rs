//! Command dispatch logic for navroute

use std::time::Instant;

use crate::cli::{Cli, RouteArgs};
use navroute_core::config::RouterConfig;
use navroute_core::error::Result;
use tracing::debug;

mod command;
mod commands;

use command::Command;
pub(crate) use command::CommandContext;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let config = match &cli.config {
        Some(path) => RouterConfig::load(path)?,
        None => RouterConfig::default(),
    };

    debug!(elapsed = ?start.elapsed(), config = ?cli.config, "load_config");

    let ctx = CommandContext::new(cli, config, start);

    match &cli.command {
        // Bare invocation runs the routing demo
        None => crate::commands::route::execute(&ctx, &RouteArgs::default()),
        Some(cmd) => cmd.execute(&ctx),
    }
}
