//! State shared between the interrupt handlers and the game loop.
//!
//! The handlers themselves live in the boot crate's IDT; they call into the
//! functions here and acknowledge the PIC. Nothing in this module blocks or
//! logs, so it is safe to run in interrupt context.

use core::sync::atomic::{AtomicU64, Ordering};

use croupier_core::{InputChannel, LineEvent, SpinAnimator};

/// Lines typed on the game terminal.
pub static LINE_INPUT: InputChannel = InputChannel::new();
/// The wheel, advanced by the timer.
pub static WHEEL_ANIMATOR: SpinAnimator = SpinAnimator::new();

static TICKS: AtomicU64 = AtomicU64::new(0);

/// Timer interrupt body: count the tick and advance the wheel.
pub fn timer_tick() {
    TICKS.fetch_add(1, Ordering::Release);
    WHEEL_ANIMATOR.tick();
}

/// Timer interrupts seen since boot.
#[inline]
pub fn ticks() -> u64 {
    TICKS.load(Ordering::Acquire)
}

/// Terminal output that acknowledges a received byte.
pub fn echo_for(event: LineEvent, out: &mut [u8; 3]) -> usize {
    match event {
        LineEvent::Echo(byte) => {
            out[0] = byte;
            1
        }
        LineEvent::Erase => {
            *out = *b"\x08 \x08";
            3
        }
        LineEvent::Completed | LineEvent::Dropped => {
            out[..2].copy_from_slice(b"\r\n");
            2
        }
        LineEvent::Ignored => 0,
    }
}

/// Receive interrupt body for one byte: feed the line editor and echo.
pub fn receive_byte<F: FnMut(&[u8])>(channel: &InputChannel, byte: u8, mut echo: F) -> LineEvent {
    let event = channel.push_byte(byte);
    let mut buf = [0u8; 3];
    let len = echo_for(event, &mut buf);
    if len > 0 {
        echo(&buf[..len]);
    }
    event
}
