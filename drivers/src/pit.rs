//! 8253/8254 programmable interval timer, channel 0, driving the wheel.

use core::sync::atomic::{AtomicU32, Ordering};

use croupier_abi::ports::PIT_BASE_FREQUENCY_HZ;

pub const PIT_DEFAULT_FREQUENCY_HZ: u32 = 38;

static CURRENT_FREQUENCY_HZ: AtomicU32 = AtomicU32::new(0);

/// Reload value for `frequency_hz`, and the rate it actually produces.
///
/// Zero selects the default rate; the divisor is clamped to what the 16-bit
/// counter can hold.
pub fn calculate_divisor(frequency_hz: u32) -> (u16, u32) {
    let freq = match frequency_hz {
        0 => PIT_DEFAULT_FREQUENCY_HZ,
        f => f.min(PIT_BASE_FREQUENCY_HZ),
    };
    let divisor = (PIT_BASE_FREQUENCY_HZ / freq).clamp(1, 0xFFFF);
    (divisor as u16, PIT_BASE_FREQUENCY_HZ / divisor)
}

/// Programmed tick rate, or the default before `init`.
pub fn frequency() -> u32 {
    match CURRENT_FREQUENCY_HZ.load(Ordering::Acquire) {
        0 => PIT_DEFAULT_FREQUENCY_HZ,
        f => f,
    }
}

/// Ticks covering at least `ms` milliseconds at `frequency_hz`.
pub fn ms_to_ticks(ms: u32, frequency_hz: u32) -> u64 {
    (u64::from(ms) * u64::from(frequency_hz)).div_ceil(1000)
}

#[cfg(all(target_arch = "x86_64", target_os = "none"))]
pub fn init(frequency_hz: u32) {
    use croupier_abi::ports::{
        PIT_COMMAND_ACCESS_LOHI, PIT_COMMAND_BINARY, PIT_COMMAND_CHANNEL0, PIT_COMMAND_MODE_RATE,
        Port as PortAddr,
    };
    use croupier_lib::klog_info;
    use x86_64::instructions::port::Port;

    let (divisor, actual) = calculate_divisor(frequency_hz);
    let mut command: Port<u8> = Port::new(PortAddr::PIT_COMMAND.number());
    let mut channel0: Port<u8> = Port::new(PortAddr::PIT_CHANNEL0.number());
    // SAFETY: the PIT ports are owned by this driver and programmed once,
    // before the timer line is unmasked.
    unsafe {
        command.write(
            PIT_COMMAND_CHANNEL0 | PIT_COMMAND_ACCESS_LOHI | PIT_COMMAND_MODE_RATE | PIT_COMMAND_BINARY,
        );
        channel0.write((divisor & 0xFF) as u8);
        channel0.write((divisor >> 8) as u8);
    }
    CURRENT_FREQUENCY_HZ.store(actual, Ordering::Release);
    klog_info!("PIT: {} Hz (divisor {})", actual, divisor);
}
