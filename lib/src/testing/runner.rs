use super::TestResult;
use crate::{klog_debug, klog_info};

pub fn run_single_test(name: &str, test_fn: fn() -> TestResult) -> TestResult {
    let result = test_fn();
    match result {
        TestResult::Pass => klog_debug!("  ok      {}", name),
        TestResult::Skipped => klog_info!("  skipped {}", name),
        TestResult::Fail => klog_info!("  FAILED  {}", name),
    }
    result
}
