//! # Increment Scenarios
//!
//! Threaded runs that make the two access contracts of [`TestObj`] visible.
//!
//! Every scenario spawns `threads` scoped workers, holds them at a barrier so
//! they start together, and lets each perform `iterations` increments. The
//! only difference between scenarios is how an increment is performed:
//!
//! - [`IncrementStrategy::SplitAtomic`]: `set_property2(property2() + 1)` on a
//!   shared `&TestObj`. Two indivisible accesses, not one. Another worker can
//!   store between the load and the store, and its increment is overwritten.
//!   Lost updates here are the expected outcome, not a defect.
//! - [`IncrementStrategy::Locked`]: the whole read-modify-write runs under a
//!   caller-supplied `Mutex<TestObj>`. Nothing is lost, and `property1` can be
//!   incremented too because the guard grants exclusive access.

use crate::primitives::{DEFAULT_ITERATIONS, DEFAULT_THREADS, MAX_ITERATIONS, MAX_THREADS};
use crate::{IncrementStrategy, LocklabError, TestObj, TestObjSnapshot};
use serde::Serialize;
use std::sync::{Barrier, Mutex, MutexGuard};
use std::thread::{self, ScopedJoinHandle};

// =============================================================================
// CONFIGURATION
// =============================================================================

/// Sizing and strategy for one scenario run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScenarioConfig {
    /// Number of worker threads.
    pub threads: usize,
    /// Increments performed by each worker.
    pub iterations: usize,
    /// How each increment is performed.
    pub strategy: IncrementStrategy,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            threads: DEFAULT_THREADS,
            iterations: DEFAULT_ITERATIONS,
            strategy: IncrementStrategy::default(),
        }
    }
}

impl ScenarioConfig {
    /// Create a config with explicit values.
    #[must_use]
    pub const fn new(threads: usize, iterations: usize, strategy: IncrementStrategy) -> Self {
        Self {
            threads,
            iterations,
            strategy,
        }
    }

    /// Check every value is within the scenario limits.
    pub fn validate(&self) -> Result<(), LocklabError> {
        if self.threads == 0 {
            return Err(LocklabError::InvalidConfig(
                "threads must be at least 1".to_string(),
            ));
        }
        if self.threads > MAX_THREADS {
            return Err(LocklabError::InvalidConfig(format!(
                "threads {} exceeds maximum {}",
                self.threads, MAX_THREADS
            )));
        }
        if self.iterations == 0 {
            return Err(LocklabError::InvalidConfig(
                "iterations must be at least 1".to_string(),
            ));
        }
        if self.iterations > MAX_ITERATIONS {
            return Err(LocklabError::InvalidConfig(format!(
                "iterations {} exceeds maximum {}",
                self.iterations, MAX_ITERATIONS
            )));
        }
        Ok(())
    }

    /// Total increments requested across all workers.
    #[must_use]
    pub fn expected_total(&self) -> usize {
        self.threads.saturating_mul(self.iterations)
    }
}

// =============================================================================
// REPORT
// =============================================================================

/// Outcome of one scenario run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScenarioReport {
    pub strategy: IncrementStrategy,
    pub threads: usize,
    pub iterations: usize,
    /// Increments requested (`threads * iterations`).
    pub expected: usize,
    /// Final value of `property2`.
    pub observed: usize,
    /// Both counters after all workers joined.
    pub final_state: TestObjSnapshot,
}

impl ScenarioReport {
    /// Increments that did not survive.
    #[must_use]
    pub fn lost_updates(&self) -> usize {
        self.expected.saturating_sub(self.observed)
    }

    /// Lost increments per thousand requested, rounded down.
    ///
    /// Computed in `u128` so any pair of `usize` counts is exact.
    #[must_use]
    pub fn lost_per_thousand(&self) -> u64 {
        let per_thousand = (self.lost_updates() as u128 * 1000)
            .checked_div(self.expected as u128)
            .unwrap_or(0);
        u64::try_from(per_thousand).unwrap_or(u64::MAX)
    }

    /// Whether the outcome is one the strategy's contract allows.
    ///
    /// A split increment may lose any number of updates but never all of
    /// them and never gain any. A locked increment loses nothing, on either
    /// counter.
    #[must_use]
    pub fn within_contract(&self) -> bool {
        match self.strategy {
            IncrementStrategy::SplitAtomic => {
                self.observed >= 1
                    && self.observed <= self.expected
                    && self.final_state.property1 == 0
            }
            IncrementStrategy::Locked => {
                self.observed == self.expected && self.final_state.property1 == self.expected
            }
        }
    }
}

// =============================================================================
// RUNNERS
// =============================================================================

/// Run one scenario.
pub fn run_scenario(config: &ScenarioConfig) -> Result<ScenarioReport, LocklabError> {
    config.validate()?;

    let final_state = match config.strategy {
        IncrementStrategy::SplitAtomic => run_split_atomic(config.threads, config.iterations)?,
        IncrementStrategy::Locked => run_locked(config.threads, config.iterations)?,
    };

    Ok(ScenarioReport {
        strategy: config.strategy,
        threads: config.threads,
        iterations: config.iterations,
        expected: config.expected_total(),
        observed: final_state.property2,
        final_state,
    })
}

/// Run every strategy with the same sizing, in [`IncrementStrategy::ALL`] order.
pub fn run_all(threads: usize, iterations: usize) -> Result<Vec<ScenarioReport>, LocklabError> {
    IncrementStrategy::ALL
        .iter()
        .map(|&strategy| run_scenario(&ScenarioConfig::new(threads, iterations, strategy)))
        .collect()
}

fn run_split_atomic(threads: usize, iterations: usize) -> Result<TestObjSnapshot, LocklabError> {
    let obj = TestObj::new();
    let barrier = Barrier::new(threads);
    let (shared, start) = (&obj, &barrier);

    thread::scope(|scope| {
        let handles: Vec<_> = (0..threads)
            .map(|_| {
                scope.spawn(move || -> Result<(), LocklabError> {
                    start.wait();
                    for _ in 0..iterations {
                        let current = shared.property2();
                        shared.set_property2(current.saturating_add(1));
                    }
                    Ok(())
                })
            })
            .collect();
        join_workers(handles)
    })?;

    Ok(obj.snapshot())
}

fn run_locked(threads: usize, iterations: usize) -> Result<TestObjSnapshot, LocklabError> {
    let obj = Mutex::new(TestObj::new());
    let barrier = Barrier::new(threads);
    let (shared, start) = (&obj, &barrier);

    thread::scope(|scope| {
        let handles: Vec<_> = (0..threads)
            .map(|_| {
                scope.spawn(move || -> Result<(), LocklabError> {
                    start.wait();
                    for _ in 0..iterations {
                        let mut guard = lock_obj(shared)?;
                        let next = guard.property1().saturating_add(1);
                        guard.set_property1(next);
                        let next = guard.property2().saturating_add(1);
                        guard.set_property2(next);
                    }
                    Ok(())
                })
            })
            .collect();
        join_workers(handles)
    })?;

    let obj = obj
        .into_inner()
        .map_err(|e| LocklabError::LockPoisoned(e.to_string()))?;
    Ok(obj.snapshot())
}

/// Lock the shared object, mapping poisoning to [`LocklabError::LockPoisoned`].
fn lock_obj(obj: &Mutex<TestObj>) -> Result<MutexGuard<'_, TestObj>, LocklabError> {
    obj.lock()
        .map_err(|e| LocklabError::LockPoisoned(e.to_string()))
}

/// Join every worker, returning the first failure.
///
/// All handles are joined even after a failure so no worker outlives the
/// report.
fn join_workers(
    handles: Vec<ScopedJoinHandle<'_, Result<(), LocklabError>>>,
) -> Result<(), LocklabError> {
    let mut first_error = None;
    for handle in handles {
        let outcome = handle
            .join()
            .map_err(|_| LocklabError::WorkerPanicked)
            .and_then(|result| result);
        if let Err(e) = outcome {
            first_error.get_or_insert(e);
        }
    }
    first_error.map_or(Ok(()), Err)
}

// =============================================================================
// TESTS
// =============================================================================
