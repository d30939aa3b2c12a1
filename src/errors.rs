use std::io;

/// An error encountered during [`encode`].
///
/// [`encode`]: crate::encode
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum EncodeError {
    /// The input contains a symbol the code table has no entry for.
    ///
    /// This means the table was built from a different input than the one
    /// being encoded. Rebuild the table; retrying can't help.
    #[error("symbol {symbol} at position {position} has no code in the table")]
    UnknownSymbol {
        /// Index of the offending symbol in the input.
        position: usize,
        /// The symbol, `Debug`-formatted.
        symbol: String,
    },
}

/// An error encountered while parsing a string of `'0'`/`'1'` digits.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseDigitsError {
    /// The input contains something other than `'0'` or `'1'`.
    #[error("invalid binary digit {found:?} at position {position}")]
    InvalidDigit {
        /// Index of the offending character in the input.
        position: usize,
        /// The character that was found.
        found: char,
    },
}

impl From<EncodeError> for io::Error {
    fn from(e: EncodeError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, e)
    }
}

impl From<ParseDigitsError> for io::Error {
    fn from(e: ParseDigitsError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, e)
    }
}
