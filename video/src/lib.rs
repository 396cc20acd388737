//! Character-terminal front end for the roulette game.

#![no_std]

#[cfg(test)]
extern crate std;

pub mod ansi;
pub mod layout;
pub mod terminal;

pub use ansi::{Attr, Color};
pub use terminal::AnsiTerminal;
