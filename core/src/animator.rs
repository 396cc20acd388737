//! Spin animator driven by a periodic tick.
//!
//! The timer interrupt calls [`SpinAnimator::tick`]; the game loop arms the
//! animator, then watches `position()` to redraw the wheel and waits for
//! `is_complete()`. While running, only `tick` writes the position, the
//! revolution count and the completion flag. `arm` writes them only while
//! the animator is idle, and publishes them with the Release store of
//! `running`.

use core::sync::atomic::{AtomicBool, AtomicU32, AtomicU8, Ordering};

use croupier_abi::POSITION_COUNT;

/// Fewest full revolutions before the wheel may stop.
pub const MIN_REVOLUTIONS: u32 = 5;

pub struct SpinAnimator {
    position: AtomicU8,
    revolutions: AtomicU32,
    target: AtomicU8,
    min_revolutions: AtomicU32,
    running: AtomicBool,
    complete: AtomicBool,
}

impl SpinAnimator {
    pub const fn new() -> Self {
        Self {
            position: AtomicU8::new(0),
            revolutions: AtomicU32::new(0),
            target: AtomicU8::new(0),
            min_revolutions: AtomicU32::new(MIN_REVOLUTIONS),
            running: AtomicBool::new(false),
            complete: AtomicBool::new(false),
        }
    }

    /// Start a spin from wheel index 0 that stops on `target`. A minimum
    /// below [`MIN_REVOLUTIONS`] is raised to it.
    pub fn arm(&self, target: u8, min_revolutions: u32) {
        self.running.store(false, Ordering::Release);
        self.complete.store(false, Ordering::Relaxed);
        self.position.store(0, Ordering::Relaxed);
        self.revolutions.store(0, Ordering::Relaxed);
        self.target
            .store(target % POSITION_COUNT as u8, Ordering::Relaxed);
        self.min_revolutions
            .store(min_revolutions.max(MIN_REVOLUTIONS), Ordering::Relaxed);
        self.running.store(true, Ordering::Release);
    }

    /// Advance one pocket. Returns whether the wheel was moving.
    pub fn tick(&self) -> bool {
        if !self.running.load(Ordering::Acquire) {
            return false;
        }
        let next = (self.position.load(Ordering::Relaxed) + 1) % POSITION_COUNT as u8;
        self.position.store(next, Ordering::Release);

        let mut revolutions = self.revolutions.load(Ordering::Relaxed);
        if next == 0 {
            revolutions += 1;
            self.revolutions.store(revolutions, Ordering::Release);
        }

        if revolutions >= self.min_revolutions.load(Ordering::Relaxed)
            && next == self.target.load(Ordering::Relaxed)
        {
            self.running.store(false, Ordering::Release);
            self.complete.store(true, Ordering::Release);
        }
        true
    }

    #[inline]
    pub fn is_complete(&self) -> bool {
        self.complete.load(Ordering::Acquire)
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }

    /// Current wheel index.
    #[inline]
    pub fn position(&self) -> u8 {
        self.position.load(Ordering::Acquire)
    }

    #[inline]
    pub fn revolutions(&self) -> u32 {
        self.revolutions.load(Ordering::Acquire)
    }
}

impl Default for SpinAnimator {
    fn default() -> Self {
        Self::new()
    }
}
