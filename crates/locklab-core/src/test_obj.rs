//! # TestObj
//!
//! A data holder with two counters and two behavior hooks.
//!
//! | Field       | Contract                        | Rust shape     |
//! |-------------|---------------------------------|----------------|
//! | `property1` | no synchronization              | `usize`        |
//! | `property2` | each get/set is indivisible     | `AtomicUsize`  |
//!
//! The two fields are independent. Nothing orders an access to one against
//! an access to the other.

use crate::types::TestObjSnapshot;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Two independent counters with different access contracts.
///
/// `TestObj` is `Send + Sync`. Shared references can read both counters and
/// write `property2`; writing `property1` needs exclusive access, so a
/// caller sharing the object across threads must supply its own lock
/// (e.g. `Mutex<TestObj>`).
#[derive(Debug, Default)]
pub struct TestObj {
    /// Unsynchronized counter.
    property1: usize,
    /// Counter whose single reads and writes are atomic.
    property2: AtomicUsize,
}

impl TestObj {
    /// Create a new object with both counters at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an object with explicit counter values.
    #[must_use]
    pub fn with_values(property1: usize, property2: usize) -> Self {
        Self {
            property1,
            property2: AtomicUsize::new(property2),
        }
    }

    /// Read `property1`.
    #[must_use]
    pub fn property1(&self) -> usize {
        self.property1
    }

    /// Write `property1`.
    pub fn set_property1(&mut self, value: usize) {
        self.property1 = value;
    }

    /// Read `property2` as a single indivisible load.
    #[must_use]
    pub fn property2(&self) -> usize {
        self.property2.load(Ordering::SeqCst)
    }

    /// Write `property2` as a single indivisible store.
    ///
    /// There is deliberately no fetch-and-add counterpart: reading, changing
    /// and writing back is two accesses and may interleave with other writers.
    pub fn set_property2(&self, value: usize) {
        self.property2.store(value, Ordering::SeqCst);
    }

    /// Placeholder hook. Has no behavior.
    pub fn method1(&self) {}

    /// Placeholder hook. Has no behavior.
    pub fn method2(&self) {}

    /// Read both counters, one field at a time.
    ///
    /// The two reads are separate accesses; a concurrent writer may change
    /// `property2` between them.
    #[must_use]
    pub fn snapshot(&self) -> TestObjSnapshot {
        TestObjSnapshot {
            property1: self.property1(),
            property2: self.property2(),
        }
    }
}

impl From<TestObjSnapshot> for TestObj {
    fn from(snapshot: TestObjSnapshot) -> Self {
        Self::with_values(snapshot.property1, snapshot.property2)
    }
}

// =============================================================================
// TESTS
// =============================================================================
