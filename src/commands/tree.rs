//! The `tree` command.

use std::io::Write;
use std::process::ExitCode;

use anyhow::Result;
use colored::Colorize;
use log::debug;

use super::{load_stats, print_chunk_scope};
use crate::cli::TreeArgs;
use crate::export::{write_json, ExportFormat, TreeReport};
use crate::graph::{leaf_count, resolve, tree_depth, trim, ModuleGraph};
use crate::ui::{render_tree, Highlighter};

/// Print the importer tree of the module matching `args.module`.
///
/// Exits with failure when no module matches the query.
pub fn run<W: Write>(args: &TreeArgs, out: &mut W) -> Result<ExitCode> {
    let build_options = args.build_options()?;
    let highlight_options = args.highlight_options()?;
    let trim_pattern = args.trim_pattern()?;
    let skip_pattern = args.skip_pattern()?;

    let Some(stats) = load_stats(&args.stats_file)? else {
        return Ok(ExitCode::SUCCESS);
    };
    let text = args.format == ExportFormat::Text;
    if text {
        print_chunk_scope(out, &stats, &build_options)?;
    }

    let graph = ModuleGraph::build(&stats, &build_options);
    let module = match graph.find_module(&args.module, args.match_mode) {
        Ok(module) => module,
        Err(err) if err.is_lookup_failure() => {
            writeln!(out, "{}", err)?;
            return Ok(ExitCode::FAILURE);
        }
        Err(err) => return Err(err.into()),
    };

    let mut tree = resolve(module, args.depth, &graph, skip_pattern.as_ref());
    trim(&mut tree, trim_pattern.as_ref(), graph.chunks());
    debug!(
        "Tree for {}: {} levels, {} leaves",
        module,
        tree_depth(&tree),
        leaf_count(&tree)
    );

    match args.format {
        ExportFormat::Text => {
            writeln!(
                out,
                "Searching for module {} {}",
                module.bold(),
                format!("(query: {})", args.module).bright_black()
            )?;
            if tree.is_empty() {
                writeln!(out, "No importers found within depth {}", args.depth)?;
            } else {
                let decorated = Highlighter::new(&graph, module, &highlight_options).decorate(&tree);
                write!(out, "{}", render_tree(&decorated))?;
            }
        }
        ExportFormat::Json => {
            let report = TreeReport {
                module,
                query: &args.module,
                depth: args.depth,
                tree: &tree,
            };
            write_json(&report, out)?;
        }
    }

    Ok(ExitCode::SUCCESS)
}
