//! Navroute - shortest-path routing over weighted directed graphs
//!
//! Builds a network from configuration (or the built-in sample), runs
//! Dijkstra from a source node and prints distances and routes. Also
//! replays a small chat-activity LRU cache demo.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::error::ErrorKind;
use clap::Parser;

use cli::{Cli, OutputFormat};
use navroute_core::error::{ExitCode as RouteExitCode, RouteError};
use navroute_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let argv_format_json = argv_requests_json();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let informational =
                matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion);
            if !argv_format_json || informational {
                err.exit();
            }

            let route_error = usage_error_from_clap(&err);
            eprintln!("{}", route_error.to_json());
            return ExitCode::from(route_error.exit_code() as u8);
        }
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    let result = commands::dispatch::run(&cli, start);

    match result {
        Ok(()) => ExitCode::from(RouteExitCode::Success as u8),
        Err(e) => {
            let exit_code = e.exit_code();

            if cli.format == OutputFormat::Json {
                eprintln!("{}", e.to_json());
            } else if !cli.quiet {
                eprintln!("error: {}", e);
            }

            ExitCode::from(exit_code as u8)
        }
    }
}

/// Scripts consuming `navroute --format json` read errors from stderr as a
/// JSON envelope. A bad `--capacity` or an unknown subcommand fails inside
/// clap before `Cli.format` exists, so argv is scanned up front.
fn argv_requests_json() -> bool {
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--format" {
            if args.next().is_some_and(|v| v == "json") {
                return true;
            }
        } else if arg == "--format=json" {
            return true;
        }
    }
    false
}

/// Argument problems exit with the usage code; anything else clap reports
/// is a plain failure
fn usage_error_from_clap(err: &clap::Error) -> RouteError {
    match err.kind() {
        ErrorKind::ValueValidation
        | ErrorKind::InvalidValue
        | ErrorKind::InvalidSubcommand
        | ErrorKind::UnknownArgument
        | ErrorKind::MissingRequiredArgument
        | ErrorKind::ArgumentConflict => RouteError::UsageError(err.to_string()),
        _ => RouteError::Other(err.to_string()),
    }
}
