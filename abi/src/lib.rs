//! Croupier shared game types
//!
//! This crate holds the plain value types every other crate in the workspace
//! agrees on: wheel positions and their colors, chip denominations, the game
//! phases, bet categories and the error codes the core reports. Nothing here
//! owns state or touches hardware.

#![no_std]
#![forbid(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod bet;
pub mod chips;
pub mod error;
pub mod ports;
pub mod state;
pub mod wheel;

pub use bet::*;
pub use chips::*;
pub use error::*;
pub use state::*;
pub use wheel::*;
