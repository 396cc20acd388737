//! Wheel and board positions.
//!
//! The American layout has 38 pockets: the numbers 0 through 36 plus the
//! double zero. A [`Position`] stores the number itself for 0..=36 and uses
//! the raw value 37 for "00", so the two green pockets never collide.

use core::fmt;

/// Number of pockets on the wheel (and cells on the board).
pub const POSITION_COUNT: usize = 38;

/// Raw value used for the "00" pocket.
const DOUBLE_ZERO_RAW: u8 = 37;

const LABELS: [&str; POSITION_COUNT] = [
    "0", "1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11", "12", "13", "14", "15", "16",
    "17", "18", "19", "20", "21", "22", "23", "24", "25", "26", "27", "28", "29", "30", "31",
    "32", "33", "34", "35", "36", "00",
];

const RED_NUMBERS: [u8; 18] = [
    1, 3, 5, 7, 9, 12, 14, 16, 18, 19, 21, 23, 25, 27, 30, 32, 34, 36,
];

/// Display classification of a pocket.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpotColor {
    Red,
    Black,
    /// The 0 and 00 pockets.
    Green,
}

/// One of the 38 pockets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Position(u8);

impl Position {
    pub const ZERO: Self = Self(0);
    pub const DOUBLE_ZERO: Self = Self(DOUBLE_ZERO_RAW);

    /// Pocket for a plain number 0..=36.
    #[inline]
    pub const fn number(n: u8) -> Option<Self> {
        if n <= 36 { Some(Self(n)) } else { None }
    }

    /// Pocket from its raw index (0..=36, 37 for "00").
    #[inline]
    pub const fn from_raw(raw: u8) -> Option<Self> {
        if (raw as usize) < POSITION_COUNT {
            Some(Self(raw))
        } else {
            None
        }
    }

    #[inline]
    pub const fn raw(self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn is_double_zero(self) -> bool {
        self.0 == DOUBLE_ZERO_RAW
    }

    /// The number shown on the felt, `None` for "00".
    #[inline]
    pub const fn value(self) -> Option<u8> {
        if self.is_double_zero() { None } else { Some(self.0) }
    }

    pub fn label(self) -> &'static str {
        LABELS[self.0 as usize]
    }

    pub const fn color(self) -> SpotColor {
        if self.0 == 0 || self.0 == DOUBLE_ZERO_RAW {
            return SpotColor::Green;
        }
        let mut i = 0;
        while i < RED_NUMBERS.len() {
            if RED_NUMBERS[i] == self.0 {
                return SpotColor::Red;
            }
            i += 1;
        }
        SpotColor::Black
    }

    /// Parse a pocket as the player types it: "00" or a number 0..=36.
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        if text == "00" {
            return Some(Self::DOUBLE_ZERO);
        }
        if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        text.parse::<u8>().ok().and_then(Self::number)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A pocket together with how it should be drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Spot {
    pub position: Position,
    pub color: SpotColor,
    pub highlighted: bool,
}

impl Spot {
    pub const fn new(position: Position) -> Self {
        Self {
            position,
            color: position.color(),
            highlighted: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn double_zero_is_distinct_from_zero() {
        assert_ne!(Position::ZERO, Position::DOUBLE_ZERO);
        assert_eq!(Position::DOUBLE_ZERO.label(), "00");
        assert_eq!(Position::ZERO.label(), "0");
        assert_eq!(Position::DOUBLE_ZERO.value(), None);
    }

    #[test]
    fn colors_follow_the_american_layout() {
        assert_eq!(Position::ZERO.color(), SpotColor::Green);
        assert_eq!(Position::DOUBLE_ZERO.color(), SpotColor::Green);
        assert_eq!(Position::number(1).map(Position::color), Some(SpotColor::Red));
        assert_eq!(Position::number(2).map(Position::color), Some(SpotColor::Black));
        assert_eq!(Position::number(17).map(Position::color), Some(SpotColor::Black));
        assert_eq!(Position::number(36).map(Position::color), Some(SpotColor::Red));
        let reds = (1..=36u8)
            .filter_map(Position::number)
            .filter(|p| p.color() == SpotColor::Red)
            .count();
        assert_eq!(reds, 18);
    }

    #[test]
    fn parse_accepts_labels_only() {
        assert_eq!(Position::parse("00"), Some(Position::DOUBLE_ZERO));
        assert_eq!(Position::parse("0"), Some(Position::ZERO));
        assert_eq!(Position::parse(" 17 "), Position::number(17));
        assert_eq!(Position::parse("37"), None);
        assert_eq!(Position::parse("-1"), None);
        assert_eq!(Position::parse("seven"), None);
        assert_eq!(Position::parse(""), None);
    }
}
