//! Text rendering of import chains.

use colored::Colorize;

use crate::graph::Chain;

/// Separator between a module and the module importing it.
pub const IMPORTED_BY: &str = " ← ";

/// Render chains as numbered lines, the start and end modules in bold.
pub fn render_chains(chains: &[Chain]) -> String {
    let width = chains.len().to_string().len();
    chains
        .iter()
        .enumerate()
        .map(|(i, chain)| {
            let last = chain.len().saturating_sub(1);
            let modules: Vec<String> = chain
                .iter()
                .enumerate()
                .map(|(j, module)| {
                    if j == 0 || j == last {
                        module.bold().to_string()
                    } else {
                        module.to_string()
                    }
                })
                .collect();
            format!("{:>width$}. {}\n", i + 1, modules.join(IMPORTED_BY), width = width)
        })
        .collect()
}
