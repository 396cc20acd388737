//! Croupier game core.
//!
//! The roulette state machine and everything it owns: the chip ledger, the
//! bet catalog, the input channel and spin animator shared with interrupt
//! handlers, and the collaborator traits for the screen, the entropy source
//! and pacing. Nothing in this crate touches hardware.

#![no_std]

#[cfg(test)]
extern crate std;

pub mod animator;
pub mod catalog;
pub mod config;
pub mod controller;
pub mod display;
pub mod entropy;
pub mod input;
pub mod ledger;
pub mod machine;
pub mod parse;
pub mod platform;
pub mod session;

pub use animator::SpinAnimator;
pub use catalog::{payout_multiplier, resolve, BetSelection, WinningSet};
pub use config::GameConfig;
pub use controller::GameController;
pub use display::{BoardSnapshot, ChipPanel, GameDisplay, WheelWindow};
pub use entropy::{EntropySource, Xorshift64};
pub use input::{InputChannel, Line, LineEvent};
pub use ledger::ChipLedger;
pub use machine::{transition, PhaseOutcome};
pub use platform::Pacer;
pub use session::GameSession;
