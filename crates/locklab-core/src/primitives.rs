//! # Scenario Limits
//!
//! Fixed sizing constants for the increment scenarios.
//!
//! Scenarios spawn real OS threads, so both dimensions are bounded to keep a
//! run from exhausting the machine.

/// Worker threads used when neither the config file nor the CLI sets one.
pub const DEFAULT_THREADS: usize = 4;

/// Increments per worker used when nothing else sets one.
pub const DEFAULT_ITERATIONS: usize = 10_000;

/// Maximum number of worker threads in a single scenario.
pub const MAX_THREADS: usize = 256;

/// Maximum increments per worker.
///
/// `MAX_THREADS * MAX_ITERATIONS` fits in a `usize` even on 32-bit
/// targets, so the expected total never overflows.
pub const MAX_ITERATIONS: usize = 10_000_000;
