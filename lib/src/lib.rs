#![no_std]

#[cfg(test)]
extern crate std;

pub mod cpu {
    //! Thin wrappers over the few CPU instructions the game needs.
    //!
    //! On a hosted target (unit tests, the terminal build) interrupts belong
    //! to the OS, so the interrupt helpers become no-ops there.

    #[cfg(all(target_arch = "x86_64", target_os = "none"))]
    #[inline(always)]
    pub fn hlt() {
        x86_64::instructions::hlt();
    }

    #[cfg(not(all(target_arch = "x86_64", target_os = "none")))]
    #[inline(always)]
    pub fn hlt() {
        core::hint::spin_loop();
    }

    #[cfg(all(target_arch = "x86_64", target_os = "none"))]
    #[inline(always)]
    pub fn enable_interrupts() {
        x86_64::instructions::interrupts::enable();
    }

    #[cfg(not(all(target_arch = "x86_64", target_os = "none")))]
    #[inline(always)]
    pub fn enable_interrupts() {}

    #[cfg(all(target_arch = "x86_64", target_os = "none"))]
    #[inline(always)]
    pub fn disable_interrupts() {
        x86_64::instructions::interrupts::disable();
    }

    #[cfg(not(all(target_arch = "x86_64", target_os = "none")))]
    #[inline(always)]
    pub fn disable_interrupts() {}

    #[cfg(all(target_arch = "x86_64", target_os = "none"))]
    #[inline(always)]
    pub fn interrupts_enabled() -> bool {
        x86_64::instructions::interrupts::are_enabled()
    }

    #[cfg(not(all(target_arch = "x86_64", target_os = "none")))]
    #[inline(always)]
    pub fn interrupts_enabled() -> bool {
        false
    }

    #[inline(always)]
    pub fn halt_loop() -> ! {
        loop {
            hlt();
        }
    }
}

pub mod init_flag;
pub mod klog;
pub mod spinlock;
pub mod testing;

pub use init_flag::InitFlag;
pub use klog::{klog_attach_sink, klog_set_level, KlogLevel};
pub use paste;
pub use spinlock::{IrqMutex, IrqMutexGuard};
