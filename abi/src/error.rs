//! Error types reported by the game core.
//!
//! Every error here is a user-input error: the controller shows the message
//! and re-enters the prompt it came from. Codes are stable so they can be
//! logged and compared across builds.

use core::fmt;

/// An error the player caused, with a stable negative code for the log.
pub trait GameError: fmt::Display + Copy {
    fn code(self) -> i32;
}

/// Implement `GameError`, messages and `Display` for a `#[repr(i32)]` error
/// enum whose variants carry negative codes.
macro_rules! impl_game_error {
    ($ty:ident, variants: { $($variant:ident : $msg:literal),* $(,)? }) => {
        impl $ty {
            /// Operator-facing text.
            pub const fn message(self) -> &'static str {
                match self {
                    $(Self::$variant => $msg,)*
                }
            }
        }

        impl GameError for $ty {
            #[inline]
            fn code(self) -> i32 {
                self as i32
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.message())
            }
        }
    };
}

/// Ledger operation result type
pub type LedgerResult<T> = Result<T, LedgerError>;

/// Errors returned by chip ledger operations
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerError {
    /// No chip has the requested face value
    UnknownDenomination = -1,
    /// Fewer chips held than requested
    InsufficientChips = -2,
    /// Exchange would not break the chips down evenly
    InvalidExchange = -3,
}

impl_game_error!(LedgerError, variants: {
    UnknownDenomination: "Invalid chip value!",
    InsufficientChips: "Not enough chips!",
    InvalidExchange: "That exchange is not possible!",
});

/// Bet resolution result type
pub type BetResult<T> = Result<T, BetError>;

/// Errors returned by the bet catalog
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BetError {
    /// Category name not recognized
    UnknownCategory = -1,
    /// Row index outside the category's table
    InvalidRowIndex = -2,
    /// Number not on the wheel
    InvalidNumber = -3,
}

impl_game_error!(BetError, variants: {
    UnknownCategory: "Invalid bet type! Choose one from the list above.",
    InvalidRowIndex: "Invalid number! The number you entered does not exist on the table.",
    InvalidNumber: "Invalid bet! Number you entered does not exist on the wheel.",
});

/// Errors from parsing typed input
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    /// Nothing was typed
    Empty = -1,
    /// Text is not a whole number
    NotANumber = -2,
    /// A quantity of zero
    Zero = -3,
}

impl_game_error!(InputError, variants: {
    Empty: "Please type a value.",
    NotANumber: "Please enter a whole number.",
    Zero: "Quantity must be at least 1.",
});
