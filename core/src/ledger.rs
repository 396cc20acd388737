//! Denominated chip ledger.
//!
//! The ledger keeps one count per denomination and never lets a count go
//! negative. Monetary amounts are `u64` so that totals and payouts cannot
//! overflow a chip count multiplied by a face value.

use croupier_abi::{Denomination, LedgerError, LedgerResult, DENOMINATION_COUNT};

/// Starting allocation, highest face value first ($4261).
pub const STARTING_CHIPS: [u32; DENOMINATION_COUNT] = [0, 1, 5, 10, 12, 10, 16, 20];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChipLedger {
    counts: [u32; DENOMINATION_COUNT],
}

impl ChipLedger {
    pub const fn new(counts: [u32; DENOMINATION_COUNT]) -> Self {
        Self { counts }
    }

    pub const fn starting() -> Self {
        Self::new(STARTING_CHIPS)
    }

    /// Map a face value to its denomination.
    pub fn lookup(face: u32) -> LedgerResult<Denomination> {
        Denomination::from_face(face).ok_or(LedgerError::UnknownDenomination)
    }

    #[inline]
    pub fn count(&self, denomination: Denomination) -> u32 {
        self.counts[denomination.slot()]
    }

    #[inline]
    pub fn counts(&self) -> &[u32; DENOMINATION_COUNT] {
        &self.counts
    }

    /// Break `in_count` chips of `in_face` down into chips of `out_face`.
    ///
    /// Returns the number of chips received. On error nothing changes.
    pub fn trade(&mut self, in_face: u32, in_count: u32, out_face: u32) -> LedgerResult<u32> {
        let from = Self::lookup(in_face)?;
        let to = Self::lookup(out_face)?;
        if from == Denomination::LOWEST || in_count == 0 {
            return Err(LedgerError::InvalidExchange);
        }
        if in_count > self.count(from) {
            return Err(LedgerError::InsufficientChips);
        }
        if to.face() >= from.face() {
            return Err(LedgerError::InvalidExchange);
        }
        let amount = from.face() as u64 * in_count as u64;
        if amount % to.face() as u64 != 0 {
            return Err(LedgerError::InvalidExchange);
        }
        let received = u32::try_from(amount / to.face() as u64)
            .map_err(|_| LedgerError::InvalidExchange)?;
        let new_to = self
            .count(to)
            .checked_add(received)
            .ok_or(LedgerError::InvalidExchange)?;

        self.counts[from.slot()] -= in_count;
        self.counts[to.slot()] = new_to;
        Ok(received)
    }

    /// Take `count` chips of `face` out of the ledger, or fail without change.
    pub fn reserve(&mut self, face: u32, count: u32) -> LedgerResult<Denomination> {
        let denomination = Self::lookup(face)?;
        let held = &mut self.counts[denomination.slot()];
        if count > *held {
            return Err(LedgerError::InsufficientChips);
        }
        *held -= count;
        Ok(denomination)
    }

    /// Credit `amount` as chips, largest face value first.
    ///
    /// A denomination whose count is full passes the rest of its share down
    /// to the next smaller chip. Returns the amount that did not fit at all,
    /// which is zero unless every count is at `u32::MAX`.
    pub fn payout(&mut self, amount: u64) -> u64 {
        let mut remaining = amount;
        for denomination in Denomination::ALL {
            let face = denomination.face() as u64;
            let slot = &mut self.counts[denomination.slot()];
            let room = (u32::MAX - *slot) as u64;
            let chips = (remaining / face).min(room);
            if chips == 0 {
                continue;
            }
            remaining -= chips * face;
            *slot += chips as u32;
        }
        remaining
    }

    pub fn total_value(&self) -> u64 {
        Denomination::ALL
            .iter()
            .map(|d| self.count(*d) as u64 * d.face() as u64)
            .sum()
    }

    pub fn is_broke(&self) -> bool {
        self.counts.iter().all(|&c| c == 0)
    }

    /// Whether any chip above the lowest face value is held.
    pub fn has_tradable_chips(&self) -> bool {
        Denomination::ALL
            .iter()
            .any(|&d| d != Denomination::LOWEST && self.count(d) > 0)
    }

    pub fn reset(&mut self, allocation: [u32; DENOMINATION_COUNT]) {
        self.counts = allocation;
    }
}

impl Default for ChipLedger {
    fn default() -> Self {
        Self::starting()
    }
}
