//! # Locklab CLI Module
//!
//! ## Available Commands
//!
//! - `inspect` - Create a fresh TestObj, call its hooks, show its counters
//! - `race` - Run one increment scenario
//! - `compare` - Run every increment scenario with the same sizing
//! - `config` - Show the effective scenario configuration

mod commands;

use crate::config::ConfigOverrides;
use clap::{Parser, Subcommand};
use locklab_core::LocklabError;
use std::path::PathBuf;

pub use commands::*;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// Locklab - plain versus atomic counters
///
/// Shows what per-access atomicity does and does not guarantee when several
/// threads increment the same counter.
#[derive(Parser, Debug)]
#[command(name = "locklab")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress banner output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to a TOML scenario config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output in JSON format (for programmatic access)
    #[arg(long, global = true)]
    pub json_mode: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a fresh object and show its counters
    Inspect,

    /// Run one increment scenario
    Race {
        /// Number of worker threads
        #[arg(short, long)]
        threads: Option<usize>,

        /// Increments per worker
        #[arg(short, long)]
        iterations: Option<usize>,

        /// Increment strategy (split-atomic, locked)
        #[arg(short, long)]
        strategy: Option<String>,
    },

    /// Run every increment scenario with the same sizing
    Compare {
        /// Number of worker threads
        #[arg(short, long)]
        threads: Option<usize>,

        /// Increments per worker
        #[arg(short, long)]
        iterations: Option<usize>,
    },

    /// Show the effective scenario configuration
    Config,
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Execute the CLI with parsed arguments.
pub fn execute(cli: Cli) -> Result<(), LocklabError> {
    let config_path = cli.config.as_deref();
    let json_mode = cli.json_mode;

    match cli.command {
        Some(Commands::Race {
            threads,
            iterations,
            strategy,
        }) => {
            let overrides = ConfigOverrides {
                threads,
                iterations,
                strategy,
            };
            cmd_race(config_path, &overrides, json_mode)
        }
        Some(Commands::Compare {
            threads,
            iterations,
        }) => {
            let overrides = ConfigOverrides {
                threads,
                iterations,
                strategy: None,
            };
            cmd_compare(config_path, &overrides, json_mode)
        }
        Some(Commands::Config) => cmd_config(config_path, json_mode),
        Some(Commands::Inspect) | None => cmd_inspect(json_mode),
    }
}
