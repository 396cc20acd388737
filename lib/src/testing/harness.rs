//! Suite descriptors, per-suite results and the run summary.
//!
//! Suites are declared with `define_test_suite!`, which produces a static
//! [`TestSuiteDesc`]. A caller collects the descriptors it wants into a slice
//! and hands them to [`run_suites`] together with a mask of enabled suites.

use crate::klog_info;

/// Maximum number of suites tracked in one summary.
pub const HARNESS_MAX_SUITES: usize = 16;

/// Result of executing one suite.
#[derive(Clone, Copy, Debug, Default)]
pub struct TestSuiteResult {
    pub name: &'static str,
    pub total: u32,
    pub passed: u32,
    pub failed: u32,
}

impl TestSuiteResult {
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            total: 0,
            passed: 0,
            failed: 0,
        }
    }

    pub fn fill(&mut self, passed: u32, total: u32) {
        self.total = total;
        self.passed = passed;
        self.failed = total.saturating_sub(passed);
    }

    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

pub type SuiteRunnerFn = fn(&mut TestSuiteResult) -> bool;

/// Static descriptor for a suite, created by `define_test_suite!`.
#[derive(Clone, Copy)]
pub struct TestSuiteDesc {
    pub name: &'static str,
    pub mask_bit: u32,
    pub run: SuiteRunnerFn,
}

/// Aggregated results across suites.
#[derive(Clone, Copy, Debug, Default)]
pub struct TestRunSummary {
    pub suites: [TestSuiteResult; HARNESS_MAX_SUITES],
    pub suite_count: usize,
    pub total_tests: u32,
    pub passed: u32,
    pub failed: u32,
}

impl TestRunSummary {
    pub fn add_suite_result(&mut self, result: &TestSuiteResult) {
        if self.suite_count < HARNESS_MAX_SUITES {
            self.suites[self.suite_count] = *result;
            self.suite_count += 1;
        }
        self.total_tests += result.total;
        self.passed += result.passed;
        self.failed += result.failed;
    }

    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

/// Run every suite whose mask bit is enabled.
pub fn run_suites(suites: &[&TestSuiteDesc], enabled_mask: u32) -> TestRunSummary {
    let mut summary = TestRunSummary::default();
    for desc in suites.iter().filter(|d| d.mask_bit & enabled_mask != 0) {
        let mut result = TestSuiteResult::new(desc.name);
        (desc.run)(&mut result);
        klog_info!(
            "TESTS: suite {} passed {}/{}",
            result.name,
            result.passed,
            result.total
        );
        summary.add_suite_result(&result);
    }
    klog_info!(
        "TESTS: {} suites, {} tests, {} passed, {} failed",
        summary.suite_count,
        summary.total_tests,
        summary.passed,
        summary.failed
    );
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::TestResult;

    fn always_passes() -> TestResult {
        crate::pass!()
    }

    fn always_fails() -> TestResult {
        crate::fail!("expected")
    }

    crate::define_test_suite!(mixed, 1 << 0, [always_passes, always_fails]);
    crate::define_test_suite!(clean, 1 << 1, [always_passes]);

    #[test]
    fn summary_counts_failures() {
        let summary = run_suites(&[&MIXED_SUITE_DESC, &CLEAN_SUITE_DESC], u32::MAX);
        assert_eq!(summary.suite_count, 2);
        assert_eq!(summary.total_tests, 3);
        assert_eq!(summary.failed, 1);
        assert!(!summary.all_passed());
    }

    #[test]
    fn mask_filters_suites() {
        let summary = run_suites(&[&MIXED_SUITE_DESC, &CLEAN_SUITE_DESC], 1 << 1);
        assert_eq!(summary.suite_count, 1);
        assert!(summary.all_passed());
    }
}
