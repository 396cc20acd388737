//! Croupier: a roulette table that boots on bare x86_64 hardware.
//!
//! On `target_os = "none"` this is the Limine entry point. On a hosted
//! target the same game runs in a terminal, with two threads standing in for
//! the timer and serial interrupts.

#![cfg_attr(target_os = "none", no_std)]
#![cfg_attr(target_os = "none", no_main)]
#![forbid(unsafe_op_in_unsafe_fn)]

#[cfg(target_os = "none")]
mod bare {
    use core::panic::PanicInfo;

    #[panic_handler]
    fn panic(info: &PanicInfo) -> ! {
        croupier_boot::panic_handler_impl(info)
    }

    #[unsafe(no_mangle)]
    pub extern "C" fn _start() -> ! {
        croupier_boot::boot_main()
    }
}

#[cfg(not(target_os = "none"))]
mod hosted;

#[cfg(not(target_os = "none"))]
fn main() {
    hosted::run();
}
