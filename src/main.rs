//! Extscan - native-extension module discovery.
//!
//! Walks a Python-style source tree, finds packages (directories with a
//! package marker), matches extension sources (e.g. `*.pyx`) inside them,
//! and emits buildable-module descriptors for an external compiler
//! toolchain. Optionally filters modules through a blacklist sourced from
//! the environment or a sidecar file.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use extscan::commands;
use extscan::config::Config;

#[derive(Parser)]
#[command(name = "extscan")]
#[command(about = "Native-extension module discovery for Python source trees")]
#[command(
    after_help = "QUICK START:\n  extscan preflight         Check tree, blacklist and toolchain\n  extscan scan              Discover extension modules\n  extscan scan -o build.json  Write a manifest for the build step\n  extscan show config       Show the resolved configuration"
)]
struct Cli {
    /// Root of the package tree (overrides SOURCE_ROOT, default: src)
    #[arg(long, global = true)]
    root: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Discover extension modules
    Scan {
        /// Filename pattern (overrides EXTENSION_PATTERN, default: *.pyx)
        #[arg(short, long)]
        pattern: Option<String>,

        /// Enable blacklist filtering (overrides USE_BLACKLIST)
        #[arg(long, conflicts_with = "no_blacklist")]
        blacklist: bool,

        /// Disable blacklist filtering (overrides USE_BLACKLIST)
        #[arg(long)]
        no_blacklist: bool,

        /// Write a JSON build manifest to this path
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Extra argument passed through to the compiler (repeatable)
        #[arg(long = "build-arg")]
        build_args: Vec<String>,
    },

    /// List importable packages
    Packages,

    /// Show information
    Show {
        #[command(subcommand)]
        what: ShowTarget,
    },

    /// Run preflight checks (validate inputs before a build)
    Preflight {
        /// Fail if any checks fail (exit code 1)
        #[arg(long)]
        strict: bool,
    },
}

#[derive(Subcommand)]
enum ShowTarget {
    /// Show current configuration
    Config,
    /// Show the resolved blacklist
    Blacklist,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load .env if present
    dotenvy::dotenv().ok();
    let mut config = Config::load();

    if let Some(root) = cli.root {
        config.source_root = root;
    }

    match cli.command {
        Commands::Scan {
            pattern,
            blacklist,
            no_blacklist,
            output,
            build_args,
        } => {
            if let Some(pattern) = pattern {
                config.pattern = pattern;
            }
            if blacklist {
                config.use_blacklist = true;
            }
            if no_blacklist {
                config.use_blacklist = false;
            }
            commands::cmd_scan(&config, output.as_deref(), &build_args)?;
        }

        Commands::Packages => {
            commands::cmd_packages(&config)?;
        }

        Commands::Show { what } => {
            let show_target = match what {
                ShowTarget::Config => commands::ShowTarget::Config,
                ShowTarget::Blacklist => commands::ShowTarget::Blacklist,
            };
            commands::cmd_show(&config, show_target)?;
        }

        Commands::Preflight { strict } => {
            commands::cmd_preflight(&config, strict)?;
        }
    }

    Ok(())
}
