//! Bare-metal bring-up: bootloader handshake, interrupt table, platform
//! init, then hand-off to the game loop.
//!
//! Everything here only exists on `target_os = "none"`; a hosted build of the
//! workspace compiles this crate empty.

#![no_std]
#![cfg_attr(target_os = "none", feature(abi_x86_interrupt))]

#[cfg(all(target_arch = "x86_64", target_os = "none"))]
pub mod early_init;
#[cfg(all(target_arch = "x86_64", target_os = "none"))]
pub mod idt;
#[cfg(all(target_arch = "x86_64", target_os = "none"))]
pub mod limine_protocol;
#[cfg(all(target_arch = "x86_64", target_os = "none"))]
pub mod panic;

#[cfg(all(target_arch = "x86_64", target_os = "none"))]
pub use early_init::{boot_main, is_platform_initialized};
#[cfg(all(target_arch = "x86_64", target_os = "none"))]
pub use panic::panic_handler_impl;
