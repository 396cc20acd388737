//! Builtin test harness.
//!
//! Suites run inside the kernel before the game starts (and on the host
//! through an ordinary `#[test]`). Each test is a plain `fn() -> TestResult`
//! so the same code works with or without `std`.

pub mod harness;
mod runner;
pub mod suite_masks;

pub use harness::{
    run_suites, TestRunSummary, TestSuiteDesc, TestSuiteResult, HARNESS_MAX_SUITES,
};
pub use runner::run_single_test;
pub use suite_masks::*;

/// Result of a single test execution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TestResult {
    Pass,
    /// Assertion or explicit failure
    Fail,
    /// Precondition missing on this machine
    Skipped,
}

impl TestResult {
    #[inline]
    pub fn is_pass(&self) -> bool {
        matches!(self, Self::Pass)
    }

    #[inline]
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Fail)
    }
}

impl From<bool> for TestResult {
    fn from(ok: bool) -> Self {
        if ok { Self::Pass } else { Self::Fail }
    }
}

/// Return a passing test result.
#[macro_export]
macro_rules! pass {
    () => {
        $crate::testing::TestResult::Pass
    };
}

/// Return a failing test result with optional message.
///
/// # Example
/// ```ignore
/// if ledger.total_value() != 4261 {
///     return fail!("unexpected balance {}", ledger.total_value());
/// }
/// ```
#[macro_export]
macro_rules! fail {
    () => {
        $crate::testing::TestResult::Fail
    };
    ($msg:expr) => {{
        $crate::klog_info!("TEST FAIL: {}", $msg);
        $crate::testing::TestResult::Fail
    }};
    ($fmt:expr, $($arg:tt)*) => {{
        $crate::klog_info!(concat!("TEST FAIL: ", $fmt), $($arg)*);
        $crate::testing::TestResult::Fail
    }};
}

/// Run one test and accumulate its outcome.
///
/// ```ignore
/// run_test!(passed, total, test_trade_breaks_down_evenly);
/// ```
#[macro_export]
macro_rules! run_test {
    ($passed:expr, $total:expr, $test_fn:path) => {{
        $total += 1;
        let result = $crate::testing::run_single_test(stringify!($test_fn), $test_fn);
        if result.is_pass() {
            $passed += 1;
        }
        result
    }};

    ($test_fn:path) => {{
        $crate::testing::run_single_test(stringify!($test_fn), $test_fn)
    }};
}

/// Define a test suite with a generated runner and a static descriptor.
///
/// ```ignore
/// define_test_suite!(ledger, SUITE_LEDGER, [
///     test_reserve_then_payout,
///     test_trade_rejects_uneven_split,
/// ]);
/// ```
///
/// Generates `run_ledger_suite` and `LEDGER_SUITE_DESC`.
#[macro_export]
macro_rules! define_test_suite {
    ($suite_name:ident, $mask:expr, [$($test_fn:path),* $(,)?]) => {
        $crate::paste::paste! {
            fn [<run_ $suite_name _suite>](out: &mut $crate::testing::TestSuiteResult) -> bool {
                let mut passed = 0u32;
                let mut total = 0u32;

                $(
                    $crate::run_test!(passed, total, $test_fn);
                )*

                out.name = stringify!($suite_name);
                out.fill(passed, total);
                passed == total
            }

            pub static [<$suite_name:upper _SUITE_DESC>]: $crate::testing::TestSuiteDesc = $crate::testing::TestSuiteDesc {
                name: stringify!($suite_name),
                mask_bit: $mask,
                run: [<run_ $suite_name _suite>],
            };
        }
    };
}
