//! Panic path: log, tell the player, halt.

use core::panic::PanicInfo;
use core::sync::atomic::{AtomicBool, Ordering};

use croupier_drivers::serial_println;
use croupier_lib::{cpu, klog_error};

static PANIC_IN_PROGRESS: AtomicBool = AtomicBool::new(false);

pub fn panic_handler_impl(info: &PanicInfo<'_>) -> ! {
    cpu::disable_interrupts();
    if PANIC_IN_PROGRESS.swap(true, Ordering::SeqCst) {
        cpu::halt_loop();
    }

    match info.location() {
        Some(loc) => klog_error!(
            "PANIC at {}:{}: {}",
            loc.file(),
            loc.line(),
            info.message()
        ),
        None => klog_error!("PANIC: {}", info.message()),
    }
    serial_println!("\r\nThe table has closed: {}", info.message());
    cpu::halt_loop()
}
