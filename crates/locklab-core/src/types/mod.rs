//! # Core Type Definitions
//!
//! Shared types for locklab:
//! - Serializable view of a `TestObj` (`TestObjSnapshot`)
//! - Increment strategies for the scenarios (`IncrementStrategy`)
//! - Error types (`LocklabError`)

use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// =============================================================================
// SNAPSHOT
// =============================================================================

/// Counter values read from a `TestObj`.
///
/// Each field was read by its own access, so the pair is not guaranteed to
/// reflect a single instant when the object was shared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
pub struct TestObjSnapshot {
    pub property1: usize,
    pub property2: usize,
}

impl TestObjSnapshot {
    /// Create a snapshot from raw values.
    #[must_use]
    pub const fn new(property1: usize, property2: usize) -> Self {
        Self {
            property1,
            property2,
        }
    }
}

// =============================================================================
// INCREMENT STRATEGY
// =============================================================================

/// How scenario workers increment the shared object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum IncrementStrategy {
    /// Read `property2`, then write back the value plus one.
    ///
    /// Each access is atomic but the pair is not, so updates can be lost.
    #[default]
    SplitAtomic,
    /// Take a mutex around the whole object, then increment both counters.
    Locked,
}

impl IncrementStrategy {
    /// Every strategy, in the order `compare` runs them.
    pub const ALL: [IncrementStrategy; 2] = [Self::SplitAtomic, Self::Locked];

    /// Get the strategy name as used in config files and on the CLI.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::SplitAtomic => "split-atomic",
            Self::Locked => "locked",
        }
    }

    /// Whether this strategy may legitimately lose updates.
    #[must_use]
    pub fn may_lose_updates(&self) -> bool {
        matches!(self, Self::SplitAtomic)
    }
}

impl fmt::Display for IncrementStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for IncrementStrategy {
    type Err = LocklabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "split-atomic" => Ok(Self::SplitAtomic),
            "locked" => Ok(Self::Locked),
            other => Err(LocklabError::UnknownStrategy(other.to_string())),
        }
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors raised by the scenario, configuration and CLI layers.
///
/// `TestObj` itself never fails.
#[derive(Debug, Error)]
pub enum LocklabError {
    /// A scenario configuration value is out of range.
    #[error("Invalid scenario configuration: {0}")]
    InvalidConfig(String),

    /// The strategy name is not recognised.
    #[error("Unknown increment strategy: {0}")]
    UnknownStrategy(String),

    /// A scenario worker thread panicked.
    #[error("Worker thread panicked")]
    WorkerPanicked,

    /// A mutex was poisoned by a panicking holder.
    #[error("Lock poisoned: {0}")]
    LockPoisoned(String),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    IoError(String),

    /// A serialization or deserialization error occurred.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

// =============================================================================
// TESTS
// =============================================================================
