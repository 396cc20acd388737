//! Parsing of typed numbers.

use croupier_abi::InputError;

/// A non-negative whole number such as a chip value or a table number.
pub fn parse_amount(text: &str) -> Result<u32, InputError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(InputError::Empty);
    }
    if !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(InputError::NotANumber);
    }
    text.parse::<u32>().map_err(|_| InputError::NotANumber)
}

/// A chip count: a whole number of at least one.
pub fn parse_quantity(text: &str) -> Result<u32, InputError> {
    match parse_amount(text)? {
        0 => Err(InputError::Zero),
        n => Ok(n),
    }
}
