//! Chip denominations.

use core::fmt;

/// Number of distinct chip face values.
pub const DENOMINATION_COUNT: usize = 8;

/// A chip face value, stored as its slot in the highest-first ordering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Denomination {
    Yellow = 0,
    Purple = 1,
    Black = 2,
    Orange = 3,
    Green = 4,
    Blue = 5,
    Red = 6,
    White = 7,
}

impl Denomination {
    /// Every denomination, strictly decreasing by face value.
    pub const ALL: [Denomination; DENOMINATION_COUNT] = [
        Denomination::Yellow,
        Denomination::Purple,
        Denomination::Black,
        Denomination::Orange,
        Denomination::Green,
        Denomination::Blue,
        Denomination::Red,
        Denomination::White,
    ];

    /// The smallest chip. It can never be traded down.
    pub const LOWEST: Denomination = Denomination::White;

    #[inline]
    pub const fn face(self) -> u32 {
        match self {
            Denomination::Yellow => 1000,
            Denomination::Purple => 500,
            Denomination::Black => 100,
            Denomination::Orange => 50,
            Denomination::Green => 25,
            Denomination::Blue => 10,
            Denomination::Red => 5,
            Denomination::White => 1,
        }
    }

    #[inline]
    pub const fn slot(self) -> usize {
        self as usize
    }

    pub fn from_face(face: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.face() == face)
    }
}

impl fmt::Display for Denomination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.face())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn faces_strictly_decrease() {
        for pair in Denomination::ALL.windows(2) {
            assert!(pair[0].face() > pair[1].face());
        }
        assert_eq!(Denomination::LOWEST.face(), 1);
    }

    #[test]
    fn from_face_rejects_unknown_values() {
        assert_eq!(Denomination::from_face(25), Some(Denomination::Green));
        assert_eq!(Denomination::from_face(30), None);
        assert_eq!(Denomination::from_face(0), None);
    }

    #[test]
    fn slots_match_order() {
        for (i, d) in Denomination::ALL.iter().enumerate() {
            assert_eq!(d.slot(), i);
        }
    }
}
