use croupier_abi::POSITION_COUNT;
use croupier_core::SpinAnimator;
use croupier_core::animator::MIN_REVOLUTIONS;
use croupier_lib::testing::TestResult;
use croupier_lib::{define_test_suite, fail, pass, testing::SUITE_ANIMATOR};

pub fn test_stops_on_target_after_min_revolutions() -> TestResult {
    let animator = SpinAnimator::new();
    animator.arm(9, MIN_REVOLUTIONS);
    let mut ticks = 0u32;
    while animator.tick() {
        ticks += 1;
        if ticks > 10_000 {
            return fail!("animator never stopped");
        }
    }
    let expected = MIN_REVOLUTIONS * POSITION_COUNT as u32 + 9;
    if ticks != expected {
        return fail!("stopped after {} ticks, expected {}", ticks, expected);
    }
    TestResult::from(
        animator.is_complete() && animator.position() == 9 && animator.revolutions() == MIN_REVOLUTIONS,
    )
}

pub fn test_idle_tick_is_noop() -> TestResult {
    let animator = SpinAnimator::new();
    if animator.tick() || animator.position() != 0 {
        return fail!("idle animator moved");
    }
    pass!()
}

pub fn test_rearm_restarts() -> TestResult {
    let animator = SpinAnimator::new();
    animator.arm(0, 1);
    while animator.tick() {}
    animator.arm(3, 1);
    TestResult::from(animator.is_running() && !animator.is_complete() && animator.position() == 0)
}

define_test_suite!(
    animator,
    SUITE_ANIMATOR,
    [
        test_stops_on_target_after_min_revolutions,
        test_idle_tick_is_noop,
        test_rearm_restarts,
    ]
);
