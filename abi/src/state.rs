//! Game phases.

use core::fmt;

/// The phase the game controller is in. Exactly one is active at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum GameState {
    #[default]
    Init,
    TradeIn,
    SelectBetType,
    UpdateBoard,
    PlaceBets,
    Spin,
    Resolve,
    RoundEnd,
}

impl GameState {
    pub const fn name(self) -> &'static str {
        match self {
            GameState::Init => "init",
            GameState::TradeIn => "trade-in",
            GameState::SelectBetType => "select-bet-type",
            GameState::UpdateBoard => "update-board",
            GameState::PlaceBets => "place-bets",
            GameState::Spin => "spin",
            GameState::Resolve => "resolve",
            GameState::RoundEnd => "round-end",
        }
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
