//! One-shot initialization flag.
//!
//! `InitFlag` tracks whether a subsystem (serial ports, timer, log sink) has
//! been brought up, so repeated init calls become no-ops.
//!
//! # Memory Ordering
//!
//! - `init_once()` uses `SeqCst` swap so exactly one caller wins
//! - `is_set()` uses `Acquire` to observe the winner's side-effects

use core::sync::atomic::{AtomicBool, Ordering};

#[repr(transparent)]
pub struct InitFlag {
    flag: AtomicBool,
}

impl InitFlag {
    #[inline]
    pub const fn new() -> Self {
        Self {
            flag: AtomicBool::new(false),
        }
    }

    /// Returns `true` for the one caller that should perform initialization.
    #[inline]
    pub fn init_once(&self) -> bool {
        !self.flag.swap(true, Ordering::SeqCst)
    }

    #[inline]
    pub fn is_set(&self) -> bool {
        self.flag.load(Ordering::Acquire)
    }

    /// Only for tests and subsystems that support re-initialization.
    #[inline]
    pub fn reset(&self) {
        self.flag.store(false, Ordering::Release);
    }
}

impl Default for InitFlag {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_once_wins_exactly_once() {
        let flag = InitFlag::new();
        assert!(!flag.is_set());
        assert!(flag.init_once());
        assert!(!flag.init_once());
        assert!(flag.is_set());
        flag.reset();
        assert!(flag.init_once());
    }
}
