use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Stagehand - deployment sequencer for Django projects
#[derive(Parser, Debug)]
#[command(name = "stagehand")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format for CI (one NDJSON event per line)
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the full deployment sequence (migrate, bootstrap, collectstatic, check, serve)
    Deploy {
        /// Django project root (directory containing manage.py)
        #[arg(short, long, default_value = ".")]
        project_root: PathBuf,

        /// Override the listening port (takes precedence over PORT and config)
        #[arg(long)]
        port: Option<u16>,

        /// Print each command without executing anything
        #[arg(long)]
        dry_run: bool,

        /// Stop after the deployment checks instead of starting the server
        #[arg(long)]
        no_serve: bool,
    },

    /// Run only the deployment diagnostics (exits non-zero on failure)
    Check {
        /// Django project root (directory containing manage.py)
        #[arg(short, long, default_value = ".")]
        project_root: PathBuf,
    },

    /// Show version information
    Version,
}
