//! # Configuration
//!
//! Scenario settings are layered, lowest precedence first:
//!
//! 1. Built-in defaults (`ScenarioConfig::default()`)
//! 2. Optional TOML file passed with `--config`
//! 3. Command-line flags
//!
//! ```toml
//! threads = 8
//! iterations = 50000
//! strategy = "split-atomic"
//! ```
//!
//! Every key is optional. The merged result is validated before use.

use locklab_core::{IncrementStrategy, LocklabError, ScenarioConfig};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Maximum config file size (64 KB).
const MAX_CONFIG_FILE_SIZE: u64 = 64 * 1024;

// =============================================================================
// FILE LAYER
// =============================================================================

/// Contents of a config file. Absent keys fall through to the defaults.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub threads: Option<usize>,
    pub iterations: Option<usize>,
    /// Strategy name, using the same names the CLI accepts.
    pub strategy: Option<String>,
}

impl ConfigFile {
    /// Parse config file contents.
    pub fn parse(contents: &str) -> Result<Self, LocklabError> {
        toml::from_str(contents)
            .map_err(|e| LocklabError::SerializationError(format!("Invalid config file: {}", e)))
    }

    /// Read and parse a config file from disk.
    pub fn load(path: &Path) -> Result<Self, LocklabError> {
        let path = validate_file_path(path)?;
        validate_file_size(&path, MAX_CONFIG_FILE_SIZE)?;

        let contents = std::fs::read_to_string(&path)
            .map_err(|e| LocklabError::IoError(format!("Cannot read config file: {}", e)))?;
        Self::parse(&contents)
    }
}

// =============================================================================
// FLAG LAYER
// =============================================================================

/// Values given on the command line. `None` means "not given".
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub threads: Option<usize>,
    pub iterations: Option<usize>,
    pub strategy: Option<String>,
}

// =============================================================================
// RESOLUTION
// =============================================================================

/// Merge defaults, the optional config file and CLI overrides, then validate.
pub fn resolve(
    config_path: Option<&Path>,
    overrides: &ConfigOverrides,
) -> Result<ScenarioConfig, LocklabError> {
    let file = match config_path {
        Some(path) => ConfigFile::load(path)?,
        None => ConfigFile::default(),
    };
    merge(&file, overrides)
}

/// Apply both layers over the defaults and validate the result.
pub fn merge(
    file: &ConfigFile,
    overrides: &ConfigOverrides,
) -> Result<ScenarioConfig, LocklabError> {
    let mut config = ScenarioConfig::default();

    if let Some(threads) = overrides.threads.or(file.threads) {
        config.threads = threads;
    }
    if let Some(iterations) = overrides.iterations.or(file.iterations) {
        config.iterations = iterations;
    }
    if let Some(name) = overrides.strategy.as_ref().or(file.strategy.as_ref()) {
        config.strategy = name.parse::<IncrementStrategy>()?;
    }

    config.validate()?;
    Ok(config)
}

// =============================================================================
// PATH CHECKS
// =============================================================================

/// Canonicalize a path and ensure it names an existing regular file.
fn validate_file_path(path: &Path) -> Result<PathBuf, LocklabError> {
    let canonical = path.canonicalize().map_err(|e| {
        LocklabError::IoError(format!("Invalid file path '{}': {}", path.display(), e))
    })?;

    if !canonical.is_file() {
        return Err(LocklabError::IoError(format!(
            "Path '{}' is not a regular file",
            path.display()
        )));
    }

    Ok(canonical)
}

/// Validate file size before reading.
fn validate_file_size(path: &Path, max_size: u64) -> Result<(), LocklabError> {
    let metadata = std::fs::metadata(path)
        .map_err(|e| LocklabError::IoError(format!("Cannot read file metadata: {}", e)))?;

    if metadata.len() > max_size {
        return Err(LocklabError::IoError(format!(
            "File size {} bytes exceeds maximum allowed {} bytes",
            metadata.len(),
            max_size
        )));
    }
    Ok(())
}
