//! What the game asks of the screen.
//!
//! The controller never positions a cursor or picks a color itself. It hands
//! snapshots of the board, the wheel window and the chip panel to a
//! [`GameDisplay`], plus one line of message text.

use core::fmt;

use croupier_abi::{DENOMINATION_COUNT, POSITION_COUNT, Spot};

use crate::catalog::{wheel_window, WinningSet, BOARD_LAYOUT};
use crate::ledger::ChipLedger;

/// The betting table with the current bet's pockets highlighted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoardSnapshot {
    /// In board drawing order.
    pub spots: [Spot; POSITION_COUNT],
}

impl BoardSnapshot {
    pub fn new(winning: &WinningSet) -> Self {
        let mut spots = [Spot::new(BOARD_LAYOUT[0]); POSITION_COUNT];
        for (spot, position) in spots.iter_mut().zip(BOARD_LAYOUT.iter()) {
            *spot = Spot::new(*position);
            spot.highlighted = winning.contains(*position);
        }
        Self { spots }
    }

    pub fn plain() -> Self {
        Self::new(&WinningSet::empty())
    }

    pub fn highlighted(&self) -> usize {
        self.spots.iter().filter(|s| s.highlighted).count()
    }
}

/// Nine consecutive wheel pockets; the middle one is under the pointer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WheelWindow {
    pub spots: [Spot; 9],
    /// Wheel index of the middle pocket.
    pub center: usize,
}

impl WheelWindow {
    pub const CENTER_SLOT: usize = 4;

    pub fn centered(index: usize) -> Self {
        let positions = wheel_window(index);
        let mut spots = positions.map(Spot::new);
        spots[Self::CENTER_SLOT].highlighted = true;
        Self {
            spots,
            center: index % POSITION_COUNT,
        }
    }
}

/// Chip counts and the two running totals.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChipPanel {
    pub counts: [u32; DENOMINATION_COUNT],
    pub bet: u64,
    pub balance: u64,
}

impl ChipPanel {
    pub fn new(ledger: &ChipLedger, bet: u64) -> Self {
        Self {
            counts: *ledger.counts(),
            bet,
            balance: ledger.total_value(),
        }
    }
}

/// Rendering collaborator.
pub trait GameDisplay {
    /// Clear everything and draw the frame, legend and help.
    fn start_screen(&mut self);
    fn board(&mut self, board: &BoardSnapshot);
    fn wheel(&mut self, window: &WheelWindow);
    fn chips(&mut self, panel: &ChipPanel);
    /// Replace the message line. The cursor stays at its end for typing.
    fn message(&mut self, text: fmt::Arguments<'_>);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{resolve, BetSelection};
    use croupier_abi::{BetCategory, Position};

    #[test]
    fn snapshot_highlights_the_winning_set() {
        let set = resolve(BetSelection::indexed(BetCategory::Street, 0)).expect("valid");
        let board = BoardSnapshot::new(&set);
        assert_eq!(board.highlighted(), 3);
        assert_eq!(BoardSnapshot::plain().highlighted(), 0);
        assert_eq!(board.spots[0].position, Position::DOUBLE_ZERO);
    }

    #[test]
    fn window_marks_the_pointer() {
        let window = WheelWindow::centered(9);
        assert_eq!(window.spots[WheelWindow::CENTER_SLOT].position, Position::number(17).expect("17"));
        assert_eq!(window.spots.iter().filter(|s| s.highlighted).count(), 1);
    }

    #[test]
    fn panel_reports_balance() {
        let panel = ChipPanel::new(&ChipLedger::starting(), 50);
        assert_eq!(panel.balance, 4261);
        assert_eq!(panel.bet, 50);
    }
}
