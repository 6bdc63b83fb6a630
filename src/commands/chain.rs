//! The `find-chain` command.

use std::io::Write;
use std::process::ExitCode;

use anyhow::Result;
use colored::Colorize;

use super::{load_stats, print_chunk_scope};
use crate::cli::ChainArgs;
use crate::error::Error;
use crate::export::{write_json, ChainReport, ExportFormat};
use crate::graph::{find_chains, MatchMode, ModuleGraph};
use crate::ui::render_chains;

/// Print the import chains leading from `args.from` to `args.to`.
///
/// Exits with success when chains are found, unless `fail_on_success`
/// inverts that; an endpoint that cannot be resolved always fails.
pub fn run<W: Write>(args: &ChainArgs, out: &mut W) -> Result<ExitCode> {
    let build_options = args.build_options()?;

    let Some(stats) = load_stats(&args.stats_file)? else {
        return Ok(ExitCode::SUCCESS);
    };
    let text = args.format == ExportFormat::Text;
    if text {
        print_chunk_scope(out, &stats, &build_options)?;
    }

    let graph = ModuleGraph::build(&stats, &build_options);
    let endpoints = resolve_endpoint(&graph, "from", &args.from, args.match_mode).and_then(|from| {
        resolve_endpoint(&graph, "to", &args.to, args.match_mode).map(|to| (from, to))
    });
    let (from, to) = match endpoints {
        Ok(endpoints) => endpoints,
        Err(err) if err.is_lookup_failure() => {
            writeln!(out, "{}", err)?;
            return Ok(ExitCode::FAILURE);
        }
        Err(err) => return Err(err.into()),
    };

    let chains = find_chains(from, to, args.depth, &graph);

    match args.format {
        ExportFormat::Text => {
            if chains.is_empty() {
                writeln!(
                    out,
                    "No chains found from {} to {} within {} hops",
                    from.bold(),
                    to.bold(),
                    args.depth
                )?;
            } else {
                writeln!(
                    out,
                    "Found {} chain(s) from {} to {}:",
                    chains.len(),
                    from.bold(),
                    to.bold()
                )?;
                write!(out, "{}", render_chains(&chains))?;
            }
        }
        ExportFormat::Json => {
            write_json(&ChainReport::new(from, to, args.depth, &chains), out)?;
        }
    }

    if exits_successfully(!chains.is_empty(), args.fail_on_success) {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

/// Whether a chain search ends in success.
pub fn exits_successfully(found: bool, fail_on_success: bool) -> bool {
    found != fail_on_success
}

fn resolve_endpoint<'g>(
    graph: &'g ModuleGraph,
    endpoint: &'static str,
    query: &str,
    mode: MatchMode,
) -> Result<&'g str, Error> {
    graph.find_module(query, mode).map_err(|err| match err {
        Error::ModuleNotFound { .. } => Error::EndpointNotFound {
            endpoint,
            query: query.to_string(),
        },
        other => other,
    })
}
