//! # locklab-core
//!
//! The logic behind locklab: a two-counter object whose counters follow
//! different access contracts, and the threaded scenarios that show the
//! difference.
//!
//! ## Access Contracts
//!
//! - `property1` is a plain field. Writes need `&mut TestObj`, so sharing it
//!   across threads means the caller wraps the object in a lock.
//! - `property2` is atomic per access. Each single read or single write is
//!   indivisible, but a read followed by a write is two operations and can
//!   interleave with other threads.
//!
//! ## Architectural Constraints
//!
//! - No logging, no async, no I/O (the binary owns those)
//! - Integer arithmetic only

// =============================================================================
// MODULES
// =============================================================================

pub mod primitives;
pub mod scenario;
pub mod test_obj;
pub mod types;

// =============================================================================
// RE-EXPORTS
// =============================================================================

pub use scenario::{ScenarioConfig, ScenarioReport, run_all, run_scenario};
pub use test_obj::TestObj;
pub use types::{IncrementStrategy, LocklabError, TestObjSnapshot};
