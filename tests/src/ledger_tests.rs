//! Chip ledger behaviour as the game relies on it.

use croupier_abi::{Denomination, LedgerError};
use croupier_core::ChipLedger;
use croupier_lib::testing::TestResult;
use croupier_lib::{define_test_suite, fail, pass, testing::SUITE_LEDGER};

pub fn test_starting_balance() -> TestResult {
    let ledger = ChipLedger::starting();
    if ledger.total_value() != 4261 {
        return fail!("starting balance {}", ledger.total_value());
    }
    pass!()
}

pub fn test_trade_breaks_down_evenly() -> TestResult {
    let mut ledger = ChipLedger::starting();
    match ledger.trade(100, 2, 25) {
        Ok(8) => {}
        other => return fail!("trade returned {:?}", other),
    }
    if ledger.count(Denomination::Black) != 3 || ledger.count(Denomination::Green) != 20 {
        return fail!("counts after trade {:?}", ledger.counts());
    }
    TestResult::from(ledger.total_value() == 4261)
}

pub fn test_trade_rejects_uneven_split() -> TestResult {
    let mut ledger = ChipLedger::starting();
    let before = *ledger.counts();
    if ledger.trade(25, 1, 10) != Err(LedgerError::InvalidExchange) {
        return fail!("$25 into $10 chips was accepted");
    }
    TestResult::from(*ledger.counts() == before)
}

pub fn test_trade_rejects_unknown_face() -> TestResult {
    let mut ledger = ChipLedger::starting();
    TestResult::from(ledger.trade(30, 1, 1) == Err(LedgerError::UnknownDenomination))
}

pub fn test_reserve_then_payout() -> TestResult {
    let mut ledger = ChipLedger::starting();
    if ledger.reserve(500, 1) != Ok(Denomination::Purple) {
        return fail!("could not reserve the purple chip");
    }
    if ledger.reserve(500, 1) != Err(LedgerError::InsufficientChips) {
        return fail!("reserved a chip that is not held");
    }
    if ledger.payout(500) != 0 {
        return fail!("payout did not fit in the ledger");
    }
    TestResult::from(ledger.total_value() == 4261)
}

define_test_suite!(
    ledger,
    SUITE_LEDGER,
    [
        test_starting_balance,
        test_trade_breaks_down_evenly,
        test_trade_rejects_uneven_split,
        test_trade_rejects_unknown_face,
        test_reserve_then_payout,
    ]
);
