//! Error types for book number handling

use thiserror::Error;

/// Errors that can occur while handling book numbers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Error), uniffi(flat_error))]
pub enum IsbnError {
    /// A complete identifier whose normalized length is not 9, 10 or 13
    #[error("book number '{input}' should be 9, 10 or 13 characters")]
    UnrecognizedLength { input: String },

    /// A checksum or conversion input of the wrong fixed length
    #[error("expected {expected} characters, got {found}")]
    WrongLength { expected: usize, found: usize },

    /// A character outside `0-9` where a digit is required
    #[error("invalid character '{found}' in book number")]
    InvalidCharacter { found: char },
}

pub(crate) fn require_length(s: &str, expected: usize) -> Result<(), IsbnError> {
    let found = s.chars().count();
    if found != expected {
        return Err(IsbnError::WrongLength { expected, found });
    }
    Ok(())
}
