//! Command implementations for all navroute commands

use crate::cli::Commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use crate::commands::{chats, config, route};
use navroute_core::error::Result;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Route(args) => route::execute(ctx, args),
            Commands::Chats { capacity } => chats::execute(ctx, *capacity),
            Commands::Config => config::execute(ctx),
        }
    }
}
