//! A unified value object for book numbers

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::convert::{isbn10_to_isbn13, isbn10_to_sbn, isbn13_to_isbn10, sbn_to_isbn10};
use crate::error::IsbnError;
use crate::normalize::normalize;
use crate::scheme::Scheme;

/// A single book number, held in every scheme that can represent it.
///
/// Constructing or re-assigning from any one form eagerly derives the
/// other two as a triple. The ISBN-13 form always exists and is the
/// canonical one; the ISBN-10 and SBN forms are absent when the number
/// has no equivalent in those schemes (non-`978` ISBN-13s, non-zero
/// group ISBN-10s).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Isbn {
    isbn13: String,
    isbn10: Option<String>,
    sbn: Option<String>,
}

impl Isbn {
    /// Build from a raw SBN, ISBN-10 or ISBN-13, formatting allowed.
    ///
    /// The scheme is chosen by length after normalization: 9 characters
    /// are read as an SBN, 10 as an ISBN-10 and 13 as an ISBN-13.
    /// Anything else is an error. The trailing check character is not
    /// verified here; use [`validate`](crate::checksum::validate) for
    /// that.
    pub fn parse(raw: &str) -> Result<Self, IsbnError> {
        let clean = normalize(raw);
        match Scheme::detect(&clean)? {
            Scheme::Sbn => Self::derive_from_sbn(clean),
            Scheme::Isbn10 => Self::derive_from_isbn10(clean),
            Scheme::Isbn13 => Self::derive_from_isbn13(clean),
        }
    }

    fn derive_from_sbn(sbn: String) -> Result<Self, IsbnError> {
        let isbn10 = sbn_to_isbn10(&sbn, false)?;
        let isbn13 = isbn10_to_isbn13(&isbn10, false)?;
        Ok(Isbn {
            isbn13,
            isbn10: Some(isbn10),
            sbn: Some(sbn),
        })
    }

    fn derive_from_isbn10(isbn10: String) -> Result<Self, IsbnError> {
        let isbn13 = isbn10_to_isbn13(&isbn10, false)?;
        let sbn = isbn10_to_sbn(&isbn10, false)?;
        Ok(Isbn {
            isbn13,
            isbn10: Some(isbn10),
            sbn,
        })
    }

    fn derive_from_isbn13(isbn13: String) -> Result<Self, IsbnError> {
        let isbn10 = isbn13_to_isbn10(&isbn13, false)?;
        let sbn = match &isbn10 {
            Some(ten) => isbn10_to_sbn(ten, false)?,
            None => None,
        };
        Ok(Isbn {
            isbn13,
            isbn10,
            sbn,
        })
    }

    /// The canonical ISBN-13 form, always present.
    pub fn isbn13(&self) -> &str {
        &self.isbn13
    }

    /// The ISBN-10 form, when one exists.
    pub fn isbn10(&self) -> Option<&str> {
        self.isbn10.as_deref()
    }

    /// The old-style SBN form, when one exists.
    pub fn sbn(&self) -> Option<&str> {
        self.sbn.as_deref()
    }

    /// Amazon's ASIN for a book is its ISBN-10.
    pub fn asin(&self) -> Option<&str> {
        self.isbn10()
    }

    /// Replace the SBN representation, re-deriving the other two.
    ///
    /// On error the previous triple is left untouched.
    pub fn set_sbn(&mut self, raw: &str) -> Result<(), IsbnError> {
        *self = Self::derive_from_sbn(normalize(raw))?;
        Ok(())
    }

    /// Replace the ISBN-10 representation, re-deriving the other two.
    ///
    /// On error the previous triple is left untouched.
    pub fn set_isbn10(&mut self, raw: &str) -> Result<(), IsbnError> {
        *self = Self::derive_from_isbn10(normalize(raw))?;
        Ok(())
    }

    /// Replace the ISBN-13 representation, re-deriving the other two.
    ///
    /// On error the previous triple is left untouched.
    pub fn set_isbn13(&mut self, raw: &str) -> Result<(), IsbnError> {
        *self = Self::derive_from_isbn13(normalize(raw))?;
        Ok(())
    }
}

/// Two book numbers are the same number when their canonical ISBN-13
/// forms match.
impl PartialEq for Isbn {
    fn eq(&self, other: &Self) -> bool {
        self.isbn13 == other.isbn13
    }
}

impl Eq for Isbn {}

impl Hash for Isbn {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.isbn13.hash(state);
    }
}

impl fmt::Display for Isbn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.isbn13)
    }
}

impl FromStr for Isbn {
    type Err = IsbnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Isbn::parse(s)
    }
}
