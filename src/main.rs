//! Stagehand CLI - deployment sequencer for Django projects
//!
//! Usage: stagehand <COMMAND>
//!
//! Commands:
//!   deploy   Run the full deployment sequence
//!   check    Run only the deployment diagnostics
//!   version  Show version information

mod cli;
mod commands;
mod ui;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let exit_code = match cli.command {
        Commands::Deploy {
            project_root,
            port,
            dry_run,
            no_serve,
        } => commands::deploy::cmd_deploy(
            &project_root,
            port,
            dry_run,
            no_serve,
            cli.json,
            cli.verbose,
        )?,
        Commands::Check { project_root } => {
            commands::check::cmd_check(&project_root, cli.json, cli.verbose)?
        }
        Commands::Version => {
            commands::version::cmd_version(cli.json);
            0
        }
    };

    if exit_code != 0 {
        std::process::exit(exit_code);
    }
    Ok(())
}
