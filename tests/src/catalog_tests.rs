use croupier_abi::{BetCategory, BetError, Position, SpotColor};
use croupier_core::catalog::table;
use croupier_core::{payout_multiplier, resolve, BetSelection};
use croupier_lib::testing::TestResult;
use croupier_lib::{define_test_suite, fail, pass, testing::SUITE_CATALOG};

pub fn test_row_counts() -> TestResult {
    let expected = [
        (BetCategory::Split, 61),
        (BetCategory::Street, 12),
        (BetCategory::Basket, 3),
        (BetCategory::Corner, 22),
        (BetCategory::DoubleStreet, 11),
    ];
    for (category, rows) in expected {
        if table(category).row_count() != rows {
            return fail!("{} has {} rows", category, table(category).row_count());
        }
    }
    pass!()
}

pub fn test_straight_resolves_one_pocket() -> TestResult {
    let Some(seventeen) = Position::number(17) else {
        return fail!("17 is not a pocket");
    };
    match resolve(BetSelection::straight(seventeen)) {
        Ok(set) => TestResult::from(set.as_slice() == [seventeen]),
        Err(e) => fail!("straight 17 rejected: {}", e),
    }
}

pub fn test_invalid_row_rejected() -> TestResult {
    let selection = BetSelection::indexed(BetCategory::DoubleStreet, 11);
    TestResult::from(resolve(selection).err() == Some(BetError::InvalidRowIndex))
}

pub fn test_red_covers_eighteen() -> TestResult {
    let Ok(set) = resolve(BetSelection::single(BetCategory::Red)) else {
        return fail!("red rejected");
    };
    if set.len() != 18 {
        return fail!("red covers {}", set.len());
    }
    TestResult::from(set.as_slice().iter().all(|p| p.color() == SpotColor::Red))
}

pub fn test_payout_multipliers() -> TestResult {
    let expected = [
        (BetCategory::Straight, 36),
        (BetCategory::Split, 18),
        (BetCategory::Corner, 9),
        (BetCategory::TopLine, 7),
        (BetCategory::Dozen, 3),
        (BetCategory::Even, 2),
    ];
    for (category, multiplier) in expected {
        if payout_multiplier(category) != multiplier {
            return fail!("{} pays {}", category, payout_multiplier(category));
        }
    }
    pass!()
}

define_test_suite!(
    catalog,
    SUITE_CATALOG,
    [
        test_row_counts,
        test_straight_resolves_one_pocket,
        test_invalid_row_rejected,
        test_red_covers_eighteen,
        test_payout_multipliers,
    ]
);
