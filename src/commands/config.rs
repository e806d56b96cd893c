//! `navroute config` - print the effective configuration

use crate::commands::dispatch::CommandContext;
use navroute_core::error::Result;

pub fn execute(ctx: &CommandContext) -> Result<()> {
    ctx.config.validate()?;

    if ctx.is_json() {
        println!("{}", serde_json::to_string_pretty(&ctx.config)?);
    } else {
        print!("{}", ctx.config.to_toml()?);
    }
    Ok(())
}
