//! The phase transition function.
//!
//! Each phase reports how it ended and this table decides what comes next.
//! It does no I/O, so the whole table is checked in unit tests.

use croupier_abi::GameState;

/// How a phase finished.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PhaseOutcome {
    /// Phase completed normally.
    Advance,
    /// Input was rejected or more input is needed; run the phase again.
    Retry,
    /// Player asked to start over with a fresh allocation.
    Reset,
}

pub const fn transition(state: GameState, outcome: PhaseOutcome) -> GameState {
    match outcome {
        PhaseOutcome::Retry => state,
        PhaseOutcome::Reset => GameState::Init,
        PhaseOutcome::Advance => match state {
            GameState::Init => GameState::TradeIn,
            GameState::TradeIn => GameState::SelectBetType,
            GameState::SelectBetType => GameState::UpdateBoard,
            GameState::UpdateBoard => GameState::PlaceBets,
            GameState::PlaceBets => GameState::Spin,
            GameState::Spin => GameState::Resolve,
            GameState::Resolve => GameState::RoundEnd,
            GameState::RoundEnd => GameState::TradeIn,
        },
    }
}
