//! Conversions between bit vectors and their `'0'`/`'1'` text form.

use bitvec::{slice::BitSlice, vec::BitVec};

use crate::errors::ParseDigitsError;

/// Render `bits` as a string of `'0'` and `'1'` characters.
pub fn to_digit_string(bits: &BitSlice) -> String {
    bits.iter()
        .by_vals()
        .map(|bit| if bit { '1' } else { '0' })
        .collect()
}

/// Parse a string of `'0'` and `'1'` characters.
pub fn parse_digits(digits: &str) -> Result<BitVec, ParseDigitsError> {
    digits
        .chars()
        .enumerate()
        .map(|(position, found)| match found {
            '0' => Ok(false),
            '1' => Ok(true),
            _ => Err(ParseDigitsError::InvalidDigit { position, found }),
        })
        .collect()
}
