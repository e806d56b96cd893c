//! `navroute route` - shortest distances from a source and the route to a target

use std::time::Instant;

use crate::cli::RouteArgs;
use crate::commands::dispatch::CommandContext;
use navroute_core::error::Result;
use navroute_core::graph::{Graph, RouteQuery};
use navroute_core::{bail_usage, trace_time};

pub fn execute(ctx: &CommandContext, args: &RouteArgs) -> Result<()> {
    let mut config = ctx.config.clone();
    if args.strict {
        config.network.strict = true;
    }
    let graph = config.build_graph()?;

    let Some(source_name) = args.from.as_deref().or(config.network.source.as_deref()) else {
        bail_usage!("no source node: pass --from or set network.source");
    };
    let target_name = args.to.as_deref().or(config.network.target.as_deref());

    let query_start = Instant::now();
    let query = RouteQuery::from_name(&graph, source_name)?;
    let target = target_name.map(|name| graph.require_node(name)).transpose()?;
    trace_time!(query_start, "route_query");

    if ctx.is_json() {
        let report = query.report(&graph, target);
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_human(ctx, &graph, &query, target);
    }

    tracing::debug!(elapsed = ?ctx.start.elapsed(), "route");
    Ok(())
}

fn print_human(
    ctx: &CommandContext,
    graph: &Graph,
    query: &RouteQuery,
    target: Option<navroute_core::graph::NodeId>,
) {
    let source = graph.name(query.source());

    if !ctx.cli.quiet {
        println!("Shortest distances from node {}:", source);
    }
    for (node, distance) in query.distances() {
        println!("To {} = {}", graph.name(*node), distance);
    }

    let Some(target) = target else {
        return;
    };
    let route = query
        .path_to(target)
        .map(|route| route.render(graph, " -> "))
        .unwrap_or_else(|| "no path".to_string());

    if !ctx.cli.quiet {
        println!();
    }
    println!(
        "Shortest path from {} to {}: {}",
        source,
        graph.name(target),
        route
    );
}
