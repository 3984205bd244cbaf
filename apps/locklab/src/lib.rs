//! # locklab
//!
//! Library half of the locklab binary: CLI definitions, command
//! implementations and configuration loading. Split out of `main.rs` so the
//! integration tests can drive them directly.

pub mod cli;
pub mod config;
