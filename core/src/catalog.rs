//! Bet catalog and resolver.
//!
//! Every bet family is a table of fixed-width rows of pockets. Indexed
//! families (splits, streets, corners, ...) have one row per placement on the
//! felt and need a row index; the remaining families are a single row that
//! is always selected. One resolver and one odds table serve all of them.

use croupier_abi::{BetCategory, BetError, BetResult, POSITION_COUNT, Position, SpotColor};

const DZ: u8 = 37;

/// Largest winning set any bet can produce (red, black, odd, ...).
pub const MAX_WINNING: usize = 18;

const fn pos(raw: u8) -> Position {
    match Position::from_raw(raw) {
        Some(p) => p,
        None => panic!("pocket out of range"),
    }
}

const fn from_raw_list<const N: usize>(raw: [u8; N]) -> [Position; N] {
    let mut out = [Position::ZERO; N];
    let mut i = 0;
    while i < N {
        out[i] = pos(raw[i]);
        i += 1;
    }
    out
}

const fn build_straights() -> [Position; POSITION_COUNT] {
    let mut out = [Position::ZERO; POSITION_COUNT];
    let mut i = 0;
    while i < POSITION_COUNT {
        out[i] = pos(i as u8);
        i += 1;
    }
    out
}

const fn build_splits() -> [Position; 61 * 2] {
    let mut out = [Position::ZERO; 61 * 2];
    let zero_pairs = [[0, 1], [0, 2], [DZ, 2], [DZ, 3]];
    let mut row = 0;
    while row < zero_pairs.len() {
        out[row * 2] = pos(zero_pairs[row][0]);
        out[row * 2 + 1] = pos(zero_pairs[row][1]);
        row += 1;
    }
    let mut n = 1u8;
    while n <= 36 {
        if n % 3 != 0 {
            out[row * 2] = pos(n);
            out[row * 2 + 1] = pos(n + 1);
            row += 1;
        }
        if n <= 33 {
            out[row * 2] = pos(n);
            out[row * 2 + 1] = pos(n + 3);
            row += 1;
        }
        n += 1;
    }
    out
}

/// `count` runs of `width` consecutive numbers, starting at 1 and stepping
/// by `step` between runs.
const fn build_runs<const N: usize>(width: usize, step: u8) -> [Position; N] {
    let mut out = [Position::ZERO; N];
    let mut row = 0;
    while row * width < N {
        let first = 1 + row as u8 * step;
        let mut k = 0;
        while k < width {
            out[row * width + k] = pos(first + k as u8);
            k += 1;
        }
        row += 1;
    }
    out
}

const fn build_corners() -> [Position; 22 * 4] {
    let mut out = [Position::ZERO; 22 * 4];
    let mut row = 0;
    let mut n = 1u8;
    while n <= 32 {
        if n % 3 != 0 {
            out[row * 4] = pos(n);
            out[row * 4 + 1] = pos(n + 1);
            out[row * 4 + 2] = pos(n + 3);
            out[row * 4 + 3] = pos(n + 4);
            row += 1;
        }
        n += 1;
    }
    out
}

const fn build_columns() -> [Position; 36] {
    let mut out = [Position::ZERO; 36];
    let mut column = 0;
    while column < 3 {
        let mut k = 0;
        while k < 12 {
            out[column * 12 + k] = pos(column as u8 + 1 + 3 * k as u8);
            k += 1;
        }
        column += 1;
    }
    out
}

#[derive(Clone, Copy)]
enum EvenMoney {
    Red,
    Black,
    Odd,
    Even,
    Low,
    High,
}

/// The 18 numbers of an even-money bet, ascending.
const fn build_even_money(kind: EvenMoney) -> [Position; MAX_WINNING] {
    let mut out = [Position::ZERO; MAX_WINNING];
    let mut len = 0;
    let mut n = 1u8;
    while n <= 36 {
        let keep = match kind {
            EvenMoney::Red => matches!(pos(n).color(), SpotColor::Red),
            EvenMoney::Black => matches!(pos(n).color(), SpotColor::Black),
            EvenMoney::Odd => n % 2 == 1,
            EvenMoney::Even => n % 2 == 0,
            EvenMoney::Low => n <= 18,
            EvenMoney::High => n >= 19,
        };
        if keep {
            out[len] = pos(n);
            len += 1;
        }
        n += 1;
    }
    out
}

static STRAIGHTS: [Position; POSITION_COUNT] = build_straights();
static SPLITS: [Position; 61 * 2] = build_splits();
static STREETS: [Position; 12 * 3] = build_runs(3, 3);
static BASKETS: [Position; 3 * 3] = from_raw_list([0, 1, 2, 0, DZ, 2, DZ, 2, 3]);
static CORNERS: [Position; 22 * 4] = build_corners();
static TOP_LINE: [Position; 5] = from_raw_list([0, DZ, 1, 2, 3]);
static DOUBLE_STREETS: [Position; 11 * 6] = build_runs(6, 3);
static DOZENS: [Position; 36] = build_runs(12, 12);
static COLUMNS: [Position; 36] = build_columns();
static REDS: [Position; MAX_WINNING] = build_even_money(EvenMoney::Red);
static BLACKS: [Position; MAX_WINNING] = build_even_money(EvenMoney::Black);
static ODDS: [Position; MAX_WINNING] = build_even_money(EvenMoney::Odd);
static EVENS: [Position; MAX_WINNING] = build_even_money(EvenMoney::Even);
static LOWS: [Position; MAX_WINNING] = build_even_money(EvenMoney::Low);
static HIGHS: [Position; MAX_WINNING] = build_even_money(EvenMoney::High);

/// Pockets in the order they sit around an American wheel, starting at 0.
pub static WHEEL_ORDER: [Position; POSITION_COUNT] = from_raw_list([
    0, 28, 9, 26, 30, 11, 7, 20, 32, 17, 5, 22, 34, 15, 3, 24, 36, 13, 1, DZ, 27, 10, 25, 29, 12, 8,
    19, 31, 18, 6, 21, 33, 16, 4, 23, 35, 14, 2,
]);

/// Pockets in board drawing order: "00", "0", then the top, middle and
/// bottom rows of the number grid from left to right.
pub static BOARD_LAYOUT: [Position; POSITION_COUNT] = from_raw_list([
    DZ, 0, 3, 6, 9, 12, 15, 18, 21, 24, 27, 30, 33, 36, 2, 5, 8, 11, 14, 17, 20, 23, 26, 29, 32,
    35, 1, 4, 7, 10, 13, 16, 19, 22, 25, 28, 31, 34,
]);

/// A family of placements, stored as fixed-width rows.
#[derive(Clone, Copy, Debug)]
pub struct BetTable {
    width: usize,
    cells: &'static [Position],
}

impl BetTable {
    const fn new(width: usize, cells: &'static [Position]) -> Self {
        Self { width, cells }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn row_count(&self) -> usize {
        self.cells.len() / self.width
    }

    pub fn row(&self, index: usize) -> Option<&'static [Position]> {
        if index >= self.row_count() {
            return None;
        }
        let start = index * self.width;
        self.cells.get(start..start + self.width)
    }
}

/// The table backing a category.
pub fn table(category: BetCategory) -> BetTable {
    match category {
        BetCategory::Straight => BetTable::new(1, &STRAIGHTS),
        BetCategory::Split => BetTable::new(2, &SPLITS),
        BetCategory::Street => BetTable::new(3, &STREETS),
        BetCategory::Basket => BetTable::new(3, &BASKETS),
        BetCategory::Corner => BetTable::new(4, &CORNERS),
        BetCategory::TopLine => BetTable::new(5, &TOP_LINE),
        BetCategory::DoubleStreet => BetTable::new(6, &DOUBLE_STREETS),
        BetCategory::Dozen => BetTable::new(12, &DOZENS),
        BetCategory::Column => BetTable::new(12, &COLUMNS),
        BetCategory::Red => BetTable::new(MAX_WINNING, &REDS),
        BetCategory::Black => BetTable::new(MAX_WINNING, &BLACKS),
        BetCategory::Odd => BetTable::new(MAX_WINNING, &ODDS),
        BetCategory::Even => BetTable::new(MAX_WINNING, &EVENS),
        BetCategory::Low => BetTable::new(MAX_WINNING, &LOWS),
        BetCategory::High => BetTable::new(MAX_WINNING, &HIGHS),
    }
}

/// Whether resolving the category needs a row index.
///
/// Straight bets are keyed by the pocket's raw index, so they count as
/// indexed here even though the player types a number rather than a row.
pub fn needs_row(category: BetCategory) -> bool {
    category == BetCategory::Straight || category.is_indexed()
}

/// Payout multiplier, stake included.
pub const fn payout_multiplier(category: BetCategory) -> u32 {
    match category {
        BetCategory::Straight => 36,
        BetCategory::Split => 18,
        BetCategory::Street | BetCategory::Basket => 12,
        BetCategory::Corner => 9,
        BetCategory::TopLine => 7,
        BetCategory::DoubleStreet => 6,
        BetCategory::Dozen | BetCategory::Column => 3,
        BetCategory::Red
        | BetCategory::Black
        | BetCategory::Odd
        | BetCategory::Even
        | BetCategory::Low
        | BetCategory::High => 2,
    }
}

/// A bet category plus the placement within it, when it has several.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BetSelection {
    pub category: BetCategory,
    pub row: Option<u8>,
}

impl BetSelection {
    pub const fn single(category: BetCategory) -> Self {
        Self { category, row: None }
    }

    pub const fn indexed(category: BetCategory, row: u8) -> Self {
        Self {
            category,
            row: Some(row),
        }
    }

    pub const fn straight(position: Position) -> Self {
        Self::indexed(BetCategory::Straight, position.raw())
    }

    /// Build a selection from the 1-based row number the player typed.
    pub fn from_table_number(category: BetCategory, number: u32) -> BetResult<Self> {
        let row = number
            .checked_sub(1)
            .and_then(|r| u8::try_from(r).ok())
            .ok_or(BetError::InvalidRowIndex)?;
        let selection = Self::indexed(category, row);
        resolve(selection)?;
        Ok(selection)
    }
}

/// The pockets a resolved bet covers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WinningSet {
    positions: [Position; MAX_WINNING],
    len: usize,
}

impl WinningSet {
    pub const fn empty() -> Self {
        Self {
            positions: [Position::ZERO; MAX_WINNING],
            len: 0,
        }
    }

    fn from_row(row: &[Position]) -> Self {
        let mut set = Self::empty();
        let len = row.len().min(MAX_WINNING);
        set.positions[..len].copy_from_slice(&row[..len]);
        set.len = len;
        set
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn as_slice(&self) -> &[Position] {
        &self.positions[..self.len]
    }

    pub fn contains(&self, position: Position) -> bool {
        self.as_slice().contains(&position)
    }
}

impl Default for WinningSet {
    fn default() -> Self {
        Self::empty()
    }
}

/// Expand a selection into the pockets it wins on.
pub fn resolve(selection: BetSelection) -> BetResult<WinningSet> {
    let table = table(selection.category);
    let row = if needs_row(selection.category) {
        selection.row.ok_or(BetError::InvalidRowIndex)? as usize
    } else {
        0
    };
    table
        .row(row)
        .map(WinningSet::from_row)
        .ok_or(BetError::InvalidRowIndex)
}

/// Nine wheel pockets centered on `index`, wrapping around the wheel.
pub fn wheel_window(index: usize) -> [Position; 9] {
    let mut window = [Position::ZERO; 9];
    for (offset, slot) in window.iter_mut().enumerate() {
        let i = (index + POSITION_COUNT * 2 + offset - 4) % POSITION_COUNT;
        *slot = WHEEL_ORDER[i];
    }
    window
}
