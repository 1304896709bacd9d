//! klint CLI tool.
//!
//! Usage:
//! ```bash
//! klint lint [OPTIONS] <PATH>...
//! klint list-checks
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use klint_cli::commands;
use klint_cli::format::OutputFormat;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Static analysis for Kubernetes YAML manifests
#[derive(Parser)]
#[command(name = "klint")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Lint Kubernetes YAML files and directories
    Lint {
        /// Files or directories to lint
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Output format
        #[arg(short, long, default_value = "plain")]
        format: OutputFormat,

        /// Check names to enable in addition to configuration
        #[arg(long)]
        include: Vec<String>,

        /// Check names to disable in addition to configuration
        #[arg(long)]
        exclude: Vec<String>,
    },

    /// List available checks
    ListChecks,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    // Diagnostics go to stderr; stdout carries only formatted results
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Lint {
            paths,
            format,
            include,
            exclude,
        } => {
            let overrides = commands::lint::CheckOverrides { include, exclude };
            commands::lint::run(&paths, format, cli.config.as_deref(), &overrides, cli.verbose)
        }
        Commands::ListChecks => commands::list_checks::run(),
    }
}
