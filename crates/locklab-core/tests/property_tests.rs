//! # Property-Based Tests
//!
//! Accessor and scenario invariants checked with proptest.

use locklab_core::{IncrementStrategy, ScenarioConfig, TestObj, TestObjSnapshot, run_scenario};
use proptest::prelude::*;

// =============================================================================
// PROPERTY TESTS
// =============================================================================

proptest! {
    /// Writing property1 and reading it back returns the written value.
    #[test]
    fn property1_reads_back_last_write(values in prop::collection::vec(any::<usize>(), 1..20)) {
        let mut obj = TestObj::new();
        for &v in &values {
            obj.set_property1(v);
            prop_assert_eq!(obj.property1(), v);
        }
        prop_assert_eq!(obj.property2(), 0);
    }

    /// Writing property2 and reading it back returns the written value.
    #[test]
    fn property2_reads_back_last_write(values in prop::collection::vec(any::<usize>(), 1..20)) {
        let obj = TestObj::new();
        for &v in &values {
            obj.set_property2(v);
            prop_assert_eq!(obj.property2(), v);
        }
        prop_assert_eq!(obj.property1(), 0);
    }

    /// Writes to one counter never disturb the other.
    #[test]
    fn counters_are_independent(p1 in any::<usize>(), p2 in any::<usize>(), next in any::<usize>()) {
        let mut obj = TestObj::with_values(p1, p2);
        obj.set_property1(next);
        prop_assert_eq!(obj.snapshot(), TestObjSnapshot::new(next, p2));

        obj.set_property2(next);
        prop_assert_eq!(obj.snapshot(), TestObjSnapshot::new(next, next));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    /// Whatever the sizing, every run stays within its strategy's contract.
    #[test]
    fn scenarios_stay_within_contract(threads in 1usize..6, iterations in 1usize..300) {
        for strategy in IncrementStrategy::ALL {
            let report = run_scenario(&ScenarioConfig::new(threads, iterations, strategy))
                .expect("run");
            prop_assert_eq!(report.expected, threads * iterations);
            prop_assert!(report.observed <= report.expected);
            prop_assert!(report.within_contract());
        }
    }
}
