//! Hardware-facing producers and sinks for the game.
//!
//! `irq`, `pit` arithmetic and the pacer are portable; the port-touching
//! drivers only exist when building for the bare machine.

#![no_std]
#![forbid(unsafe_op_in_unsafe_fn)]

#[cfg(test)]
extern crate std;

pub mod irq;
pub mod pacer;
pub mod pit;

#[cfg(all(target_arch = "x86_64", target_os = "none"))]
pub mod pic;
#[cfg(all(target_arch = "x86_64", target_os = "none"))]
pub mod random;
#[cfg(all(target_arch = "x86_64", target_os = "none"))]
pub mod serial;

pub use pacer::HaltPacer;
