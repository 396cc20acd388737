//! Bet categories.

use core::fmt;

/// Every bet the table accepts.
///
/// Categories marked indexed span several placements and need a row index
/// before they can be resolved. The rest cover one fixed group of pockets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BetCategory {
    /// Single number, keyed by the pocket itself.
    Straight,
    /// Two adjacent numbers (indexed).
    Split,
    /// Three numbers in a row (indexed).
    Street,
    /// Specific triples touching the zeros (indexed).
    Basket,
    /// Four numbers in a block (indexed).
    Corner,
    /// 0, 00, 1, 2 and 3.
    TopLine,
    /// Two adjacent streets (indexed).
    DoubleStreet,
    /// A third of the numbers by value (indexed).
    Dozen,
    /// A third of the numbers by table column (indexed).
    Column,
    Red,
    Black,
    Odd,
    Even,
    /// 1 through 18.
    Low,
    /// 19 through 36.
    High,
}

impl BetCategory {
    pub const ALL: [BetCategory; 15] = [
        BetCategory::Straight,
        BetCategory::Split,
        BetCategory::Street,
        BetCategory::Basket,
        BetCategory::Corner,
        BetCategory::TopLine,
        BetCategory::DoubleStreet,
        BetCategory::Dozen,
        BetCategory::Column,
        BetCategory::Red,
        BetCategory::Black,
        BetCategory::Odd,
        BetCategory::Even,
        BetCategory::Low,
        BetCategory::High,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            BetCategory::Straight => "Straight",
            BetCategory::Split => "Split",
            BetCategory::Street => "Street",
            BetCategory::Basket => "Basket",
            BetCategory::Corner => "Corner",
            BetCategory::TopLine => "Top Line",
            BetCategory::DoubleStreet => "Double Street",
            BetCategory::Dozen => "Dozen",
            BetCategory::Column => "Column",
            BetCategory::Red => "Red",
            BetCategory::Black => "Black",
            BetCategory::Odd => "Odd",
            BetCategory::Even => "Even",
            BetCategory::Low => "Low",
            BetCategory::High => "High",
        }
    }

    /// Whether the player has to pick a row of the category's table.
    pub const fn is_indexed(self) -> bool {
        matches!(
            self,
            BetCategory::Split
                | BetCategory::Street
                | BetCategory::Basket
                | BetCategory::Corner
                | BetCategory::DoubleStreet
                | BetCategory::Dozen
                | BetCategory::Column
        )
    }

    /// Match a typed category name, ignoring case and surrounding blanks.
    pub fn from_name(text: &str) -> Option<Self> {
        let text = text.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(text))
    }
}

impl fmt::Display for BetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
