use std::io::{BufWriter, Write};
use std::process::ExitCode;

use anyhow::Result;
use bundle_why::cli::{Cli, Commands};
use bundle_why::commands;
use clap::Parser;
use log::debug;

fn main() -> Result<ExitCode> {
    env_logger::init();

    let cli = Cli::parse();
    debug!("Parsed CLI arguments: {:?}", cli.command);

    if cli.no_color {
        colored::control::set_override(false);
    }

    let mut stdout = BufWriter::new(std::io::stdout());
    let code = match &cli.command {
        Commands::Tree(args) => commands::tree::run(args, &mut stdout)?,
        Commands::FindChain(args) => commands::chain::run(args, &mut stdout)?,
    };
    stdout.flush()?;

    Ok(code)
}
