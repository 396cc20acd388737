//! Builtin test suites.
//!
//! These run inside the kernel at boot (feature `builtin-tests` plus
//! `itests=on`) and on the host through the `#[test]` below, so everything
//! here is `no_std` and allocation-free.

#![no_std]

#[cfg(test)]
extern crate std;

pub mod animator_tests;
pub mod catalog_tests;
pub mod controller_tests;
pub mod input_tests;
pub mod ledger_tests;

use croupier_lib::testing::{run_suites, TestRunSummary, TestSuiteDesc};

pub static BUILTIN_SUITES: [&TestSuiteDesc; 5] = [
    &ledger_tests::LEDGER_SUITE_DESC,
    &catalog_tests::CATALOG_SUITE_DESC,
    &input_tests::INPUT_SUITE_DESC,
    &animator_tests::ANIMATOR_SUITE_DESC,
    &controller_tests::CONTROLLER_SUITE_DESC,
];

/// Run the suites selected by `mask` (see `croupier_lib::testing::SUITE_*`).
pub fn run_builtin_suites(mask: u32) -> TestRunSummary {
    run_suites(&BUILTIN_SUITES, mask)
}

#[cfg(test)]
mod tests {
    use super::*;
    use croupier_lib::testing::SUITE_ALL;

    #[test]
    fn every_builtin_suite_passes() {
        let summary = run_builtin_suites(SUITE_ALL);
        assert_eq!(summary.suite_count, BUILTIN_SUITES.len());
        for result in &summary.suites[..summary.suite_count] {
            assert!(result.all_passed(), "suite {} failed {}", result.name, result.failed);
        }
        assert!(summary.total_tests >= 20);
    }
}
