//! Pacing of the game loop's busy-waits.

/// How the game loop spends time while it waits.
///
/// On hardware `relax` halts until the next interrupt and `pause_ms` counts
/// timer ticks. Tests use it to inject input and timer ticks at exactly the
/// points where interrupts would arrive.
pub trait Pacer {
    /// Called on every pass of a wait loop.
    fn relax(&mut self);
    /// Hold the current screen for `ms` milliseconds.
    fn pause_ms(&mut self, ms: u32);
}
