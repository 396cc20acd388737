//! Everything the game remembers between phases.

use croupier_abi::{
    BetError, Denomination, GameState, LedgerResult, Position, DENOMINATION_COUNT,
};
use croupier_lib::klog_warn;

use crate::catalog::{payout_multiplier, resolve, BetSelection, WinningSet, WHEEL_ORDER};
use crate::ledger::ChipLedger;

/// Chips placed during the betting phase, per denomination.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PendingBet {
    chips: [u32; DENOMINATION_COUNT],
}

impl PendingBet {
    pub fn add(&mut self, denomination: Denomination, count: u32) {
        let slot = &mut self.chips[denomination.slot()];
        *slot = slot.saturating_add(count);
    }

    pub fn chips(&self) -> &[u32; DENOMINATION_COUNT] {
        &self.chips
    }

    pub fn stake(&self) -> u64 {
        Denomination::ALL
            .iter()
            .map(|d| self.chips[d.slot()] as u64 * d.face() as u64)
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.stake() == 0
    }

    pub fn clear(&mut self) {
        self.chips = [0; DENOMINATION_COUNT];
    }
}

/// Where the wheel stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpinOutcome {
    wheel_index: u8,
}

impl SpinOutcome {
    pub fn new(wheel_index: u8) -> Self {
        Self {
            wheel_index: wheel_index % WHEEL_ORDER.len() as u8,
        }
    }

    pub fn wheel_index(&self) -> u8 {
        self.wheel_index
    }

    pub fn position(&self) -> Position {
        WHEEL_ORDER[self.wheel_index as usize]
    }
}

/// Settlement of one round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundResult {
    pub landed: Position,
    pub stake: u64,
    /// Amount credited back, stake included. Zero on a miss.
    pub payout: u64,
}

impl RoundResult {
    pub fn won(&self) -> bool {
        self.payout > 0
    }

    /// Winnings beyond the returned stake.
    pub fn net_gain(&self) -> u64 {
        self.payout.saturating_sub(self.stake)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct GameSession {
    pub state: GameState,
    pub ledger: ChipLedger,
    pub selection: Option<BetSelection>,
    pub winning: WinningSet,
    pub pending: PendingBet,
    /// Total stake once betting is closed.
    pub stake: u64,
    pub outcome: Option<SpinOutcome>,
    pub last_result: Option<RoundResult>,
}

impl GameSession {
    pub fn new(allocation: [u32; DENOMINATION_COUNT]) -> Self {
        Self {
            state: GameState::Init,
            ledger: ChipLedger::new(allocation),
            selection: None,
            winning: WinningSet::empty(),
            pending: PendingBet::default(),
            stake: 0,
            outcome: None,
            last_result: None,
        }
    }

    /// Adopt a bet selection. On error the previous selection is kept.
    pub fn select(&mut self, selection: BetSelection) -> Result<(), BetError> {
        let winning = resolve(selection)?;
        self.selection = Some(selection);
        self.winning = winning;
        Ok(())
    }

    /// Move chips from the ledger onto the table.
    pub fn place(&mut self, face: u32, count: u32) -> LedgerResult<Denomination> {
        let denomination = self.ledger.reserve(face, count)?;
        self.pending.add(denomination, count);
        Ok(denomination)
    }

    /// Money on the table right now, before or after betting closes.
    pub fn bet_on_table(&self) -> u64 {
        self.stake + self.pending.stake()
    }

    /// Close betting: the placed chips collapse into one stake.
    pub fn commit_stake(&mut self) -> u64 {
        self.stake += self.pending.stake();
        self.pending.clear();
        self.stake
    }

    /// Pay out a hit or forfeit the stake.
    pub fn settle(&mut self, outcome: SpinOutcome) -> RoundResult {
        let landed = outcome.position();
        let payout = match self.selection {
            Some(selection) if self.winning.contains(landed) => {
                self.stake * payout_multiplier(selection.category) as u64
            }
            _ => 0,
        };
        let unpaid = self.ledger.payout(payout);
        if unpaid != 0 {
            klog_warn!("LEDGER: ${} of a ${} payout did not fit", unpaid, payout);
        }
        let result = RoundResult {
            landed,
            stake: self.stake,
            payout,
        };
        self.outcome = Some(outcome);
        self.stake = 0;
        self.last_result = Some(result);
        result
    }

    /// Forget the round's selection and bets.
    pub fn clear_round(&mut self) {
        self.selection = None;
        self.winning = WinningSet::empty();
        self.pending.clear();
        self.stake = 0;
        self.outcome = None;
    }

    pub fn reset(&mut self, allocation: [u32; DENOMINATION_COUNT]) {
        self.clear_round();
        self.ledger.reset(allocation);
        self.last_result = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::STARTING_CHIPS;
    use croupier_abi::{BetCategory, LedgerError};

    fn seventeen() -> Position {
        Position::number(17).expect("17")
    }

    #[test]
    fn straight_seventeen_hits() {
        let mut session = GameSession::new(STARTING_CHIPS);
        session
            .select(BetSelection::straight(seventeen()))
            .expect("valid");
        assert_eq!(session.place(25, 2), Ok(Denomination::Green));
        assert_eq!(session.commit_stake(), 50);
        assert_eq!(session.ledger.total_value(), 4211);

        let result = session.settle(SpinOutcome::new(9));
        assert_eq!(result.landed, seventeen());
        assert_eq!(result.payout, 1800);
        assert_eq!(result.net_gain(), 1750);
        assert_eq!(session.ledger.total_value(), 6011);
    }

    #[test]
    fn miss_forfeits_stake() {
        let mut session = GameSession::new(STARTING_CHIPS);
        session.select(BetSelection::single(BetCategory::Red)).expect("valid");
        session.place(100, 1).expect("held");
        session.place(5, 4).expect("held");
        session.commit_stake();
        // Wheel index 0 is the green zero.
        let result = session.settle(SpinOutcome::new(0));
        assert!(!result.won());
        assert_eq!(result.stake, 120);
        assert_eq!(session.ledger.total_value(), 4261 - 120);
    }

    #[test]
    fn hit_gains_stake_times_multiplier_minus_stake() {
        for category in BetCategory::ALL {
            let mut session = GameSession::new(STARTING_CHIPS);
            let selection = if crate::catalog::needs_row(category) {
                BetSelection::indexed(category, 0)
            } else {
                BetSelection::single(category)
            };
            session.select(selection).expect("row 0 exists");
            let first = session.winning.as_slice()[0];
            let index = WHEEL_ORDER
                .iter()
                .position(|p| *p == first)
                .expect("on wheel") as u8;
            let before = session.ledger.total_value();
            session.place(10, 3).expect("held");
            session.commit_stake();
            session.settle(SpinOutcome::new(index));
            let multiplier = payout_multiplier(category) as u64;
            assert_eq!(session.ledger.total_value(), before + 30 * multiplier - 30, "{category}");
        }
    }

    #[test]
    fn rejected_selection_keeps_previous() {
        let mut session = GameSession::new(STARTING_CHIPS);
        session.select(BetSelection::single(BetCategory::Odd)).expect("valid");
        let before = session.winning;
        assert_eq!(
            session.select(BetSelection::indexed(BetCategory::DoubleStreet, 99)),
            Err(BetError::InvalidRowIndex)
        );
        assert_eq!(session.winning, before);
        assert_eq!(session.selection, Some(BetSelection::single(BetCategory::Odd)));
    }

    #[test]
    fn overdrawn_placement_changes_nothing() {
        let mut session = GameSession::new(STARTING_CHIPS);
        assert_eq!(session.place(500, 2), Err(LedgerError::InsufficientChips));
        assert!(session.pending.is_empty());
        assert_eq!(session.ledger.total_value(), 4261);
    }

    #[test]
    fn reset_restores_allocation() {
        let mut session = GameSession::new([0; DENOMINATION_COUNT]);
        session.reset(STARTING_CHIPS);
        assert_eq!(session.ledger.total_value(), 4261);
        assert!(session.selection.is_none());
    }
}
