//! Book numbering scheme taxonomy

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::IsbnError;

/// The three book numbering schemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
pub enum Scheme {
    /// 9-character Standard Book Number, predecessor to the ISBN-10
    Sbn,
    /// 10-character International Standard Book Number
    Isbn10,
    /// 13-character International Standard Book Number
    Isbn13,
}

impl Scheme {
    /// Get all schemes
    pub fn all() -> &'static [Scheme] {
        &[Scheme::Sbn, Scheme::Isbn10, Scheme::Isbn13]
    }

    /// Determine the scheme of a normalized book number from its length.
    ///
    /// Lengths other than 9, 10 or 13 are an error, not merely invalid.
    pub fn detect(normalized: &str) -> Result<Scheme, IsbnError> {
        match normalized.chars().count() {
            9 => Ok(Scheme::Sbn),
            10 => Ok(Scheme::Isbn10),
            13 => Ok(Scheme::Isbn13),
            _ => Err(IsbnError::UnrecognizedLength {
                input: normalized.to_string(),
            }),
        }
    }

    /// Length of a complete identifier in this scheme.
    pub fn length(&self) -> usize {
        match self {
            Scheme::Sbn => 9,
            Scheme::Isbn10 => 10,
            Scheme::Isbn13 => 13,
        }
    }

    /// Length of the coding body, the identifier minus its check character.
    pub fn body_length(&self) -> usize {
        self.length() - 1
    }

    /// Get the display name for a scheme
    pub fn display_name(&self) -> &'static str {
        match self {
            Scheme::Sbn => "SBN",
            Scheme::Isbn10 => "ISBN-10",
            Scheme::Isbn13 => "ISBN-13",
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
