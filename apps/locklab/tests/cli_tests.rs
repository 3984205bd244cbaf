//! # CLI and Configuration Tests
//!
//! Argument parsing, config file layering and command execution.

use clap::Parser;
use locklab::cli::{Cli, Commands, execute};
use locklab::config::{ConfigFile, ConfigOverrides, resolve};
use locklab_core::{IncrementStrategy, LocklabError, ScenarioConfig};
use std::io::Write;
use tempfile::NamedTempFile;

fn config_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("tempfile");
    file.write_all(contents.as_bytes()).expect("write");
    file.flush().expect("flush");
    file
}

// =============================================================================
// ARGUMENT PARSING
// =============================================================================

#[test]
fn no_subcommand_parses() {
    let cli = Cli::try_parse_from(["locklab"]).expect("parse");
    assert!(cli.command.is_none());
    assert!(!cli.json_mode);
    assert!(cli.config.is_none());
}

#[test]
fn race_flags_parse() {
    let cli = Cli::try_parse_from([
        "locklab", "race", "-t", "8", "-i", "500", "-s", "locked", "--json-mode",
    ])
    .expect("parse");

    assert!(cli.json_mode);
    match cli.command {
        Some(Commands::Race {
            threads,
            iterations,
            strategy,
        }) => {
            assert_eq!(threads, Some(8));
            assert_eq!(iterations, Some(500));
            assert_eq!(strategy.as_deref(), Some("locked"));
        }
        other => unreachable!("unexpected command: {:?}", other),
    }
}

#[test]
fn global_flags_after_subcommand() {
    let cli = Cli::try_parse_from(["locklab", "compare", "--quiet", "-c", "lab.toml"])
        .expect("parse");
    assert!(cli.quiet);
    assert_eq!(cli.config.as_deref(), Some(std::path::Path::new("lab.toml")));
    assert!(matches!(cli.command, Some(Commands::Compare { .. })));
}

#[test]
fn non_numeric_threads_rejected() {
    assert!(Cli::try_parse_from(["locklab", "race", "--threads", "many"]).is_err());
}

// =============================================================================
// CONFIG FILE LAYERING
// =============================================================================

#[test]
fn resolve_without_file_gives_defaults() {
    let config = resolve(None, &ConfigOverrides::default()).expect("resolve");
    assert_eq!(config, ScenarioConfig::default());
}

#[test]
fn resolve_reads_file() {
    let file = config_file("threads = 3\niterations = 120\nstrategy = \"locked\"\n");
    let config = resolve(Some(file.path()), &ConfigOverrides::default()).expect("resolve");
    assert_eq!(
        config,
        ScenarioConfig::new(3, 120, IncrementStrategy::Locked)
    );
}

#[test]
fn partial_file_keeps_defaults() {
    let file = config_file("iterations = 7\n");
    let config = resolve(Some(file.path()), &ConfigOverrides::default()).expect("resolve");
    assert_eq!(config.iterations, 7);
    assert_eq!(config.threads, ScenarioConfig::default().threads);
    assert_eq!(config.strategy, IncrementStrategy::SplitAtomic);
}

#[test]
fn flags_override_file() {
    let file = config_file("threads = 3\nstrategy = \"locked\"\n");
    let overrides = ConfigOverrides {
        threads: Some(5),
        iterations: None,
        strategy: None,
    };
    let config = resolve(Some(file.path()), &overrides).expect("resolve");
    assert_eq!(config.threads, 5);
    assert_eq!(config.strategy, IncrementStrategy::Locked);
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("absent.toml");
    let result = resolve(Some(path.as_path()), &ConfigOverrides::default());
    assert!(matches!(result, Err(LocklabError::IoError(_))));
}

#[test]
fn directory_is_not_a_config_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let result = ConfigFile::load(dir.path());
    assert!(matches!(result, Err(LocklabError::IoError(_))));
}

#[test]
fn oversized_file_rejected() {
    let padding = format!("# {}\n", "x".repeat(70 * 1024));
    let file = config_file(&padding);
    let result = ConfigFile::load(file.path());
    assert!(matches!(result, Err(LocklabError::IoError(_))));
}

#[test]
fn malformed_file_rejected() {
    let file = config_file("threads = \"four\"\n");
    let result = resolve(Some(file.path()), &ConfigOverrides::default());
    assert!(matches!(result, Err(LocklabError::SerializationError(_))));
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

#[test]
fn execute_inspect() {
    let cli = Cli::try_parse_from(["locklab", "--json-mode", "inspect"]).expect("parse");
    assert!(execute(cli).is_ok());
}

#[test]
fn execute_race_and_compare() {
    let race = Cli::try_parse_from(["locklab", "race", "-t", "2", "-i", "50"]).expect("parse");
    assert!(execute(race).is_ok());

    let compare = Cli::try_parse_from(["locklab", "--json-mode", "compare", "-t", "2", "-i", "50"])
        .expect("parse");
    assert!(execute(compare).is_ok());
}

#[test]
fn execute_config_with_file() {
    let file = config_file("threads = 2\n");
    let path = file.path().to_string_lossy().to_string();
    let cli = Cli::try_parse_from(["locklab", "--config", path.as_str(), "config"]).expect("parse");
    assert!(execute(cli).is_ok());
}

#[test]
fn execute_rejects_unknown_strategy() {
    let cli = Cli::try_parse_from(["locklab", "race", "-s", "spinlock"]).expect("parse");
    assert!(matches!(
        execute(cli),
        Err(LocklabError::UnknownStrategy(_))
    ));
}

#[test]
fn execute_rejects_zero_threads() {
    let cli = Cli::try_parse_from(["locklab", "race", "-t", "0"]).expect("parse");
    assert!(matches!(execute(cli), Err(LocklabError::InvalidConfig(_))));
}

#[test]
fn execute_rejects_strategy_shorthand() {
    for name in ["mutex", "atomic"] {
        let cli = Cli::try_parse_from(["locklab", "race", "-s", name]).expect("parse");
        assert!(matches!(
            execute(cli),
            Err(LocklabError::UnknownStrategy(_))
        ));
    }
}
