//! # Locklab
//!
//! Command-line front end for locklab-core.
//!
//! ## Usage
//!
//! ```bash
//! # Show a fresh object
//! locklab inspect
//!
//! # Race eight threads on the atomic counter
//! locklab race --threads 8 --iterations 100000 --strategy split-atomic
//!
//! # Run every strategy side by side, as JSON
//! locklab --json-mode compare -t 4
//! ```

use clap::Parser;
use locklab::cli;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

fn main() {
    let cli = cli::Cli::parse();

    // LOCKLAB_LOG_FORMAT=json enables machine-parseable output.
    let log_format = std::env::var("LOCKLAB_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let default_filter = if cli.verbose {
        "locklab=debug"
    } else {
        "locklab=info"
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }

    if !cli.quiet && !cli.json_mode {
        print_banner();
    }

    if let Err(e) = cli::execute(cli) {
        tracing::error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Print the startup banner.
fn print_banner() {
    println!("locklab v{}", env!("CARGO_PKG_VERSION"));
    println!("plain vs atomic counters");
    println!();
}
