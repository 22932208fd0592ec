//! Conversions between SBN, ISBN-10 and ISBN-13 representations
//!
//! Each conversion takes a `cleanse` flag saying whether the input
//! still needs normalization; internal call sites working on
//! already-clean intermediates pass `false`. An identifier that is
//! structurally valid but has no equivalent in the target scheme
//! yields `Ok(None)`, which is an answer, not a failure.

use crate::checksum::{isbn10_checksum, isbn13_checksum};
use crate::error::{require_length, IsbnError};
use crate::normalize::normalize;

/// Convert an ISBN-10 to its ISBN-13 form.
///
/// Drops the old check character, prepends the `978` prefix and
/// recomputes the check digit. Every ISBN-10 has an ISBN-13 form.
pub fn isbn10_to_isbn13(isbn: &str, cleanse: bool) -> Result<String, IsbnError> {
    let isbn = if cleanse { normalize(isbn) } else { isbn.to_string() };
    require_length(&isbn, 10)?;
    let mut result = String::from("978");
    result.extend(isbn.chars().take(9));
    let check = isbn13_checksum(&result)?;
    result.push(check);
    Ok(result)
}

/// Convert an ISBN-13 to its ISBN-10 form.
///
/// Only `978`-prefixed ISBN-13s map back to an ISBN-10; anything else
/// (notably the `979` range) returns `None`.
pub fn isbn13_to_isbn10(isbn: &str, cleanse: bool) -> Result<Option<String>, IsbnError> {
    let isbn = if cleanse { normalize(isbn) } else { isbn.to_string() };
    require_length(&isbn, 13)?;
    if !isbn.starts_with("978") {
        return Ok(None);
    }
    let mut result: String = isbn.chars().skip(3).take(9).collect();
    let check = isbn10_checksum(&result)?;
    result.push(check);
    Ok(Some(result))
}

/// Convert an ISBN-10 to an old-style SBN by cropping the leading zero.
///
/// Only zero-group ISBN-10s have an SBN form; others return `None`.
pub fn isbn10_to_sbn(isbn: &str, cleanse: bool) -> Result<Option<String>, IsbnError> {
    let isbn = if cleanse { normalize(isbn) } else { isbn.to_string() };
    require_length(&isbn, 10)?;
    Ok(isbn.strip_prefix('0').map(str::to_string))
}

/// Convert an old-style SBN to an ISBN-10 by prepending a zero.
///
/// Trivial, but provided for orthogonality with the other directions.
pub fn sbn_to_isbn10(sbn: &str, cleanse: bool) -> Result<String, IsbnError> {
    let sbn = if cleanse { normalize(sbn) } else { sbn.to_string() };
    require_length(&sbn, 9)?;
    Ok(format!("0{}", sbn))
}

#[cfg(feature = "uniffi")]
#[uniffi::export]
pub fn isbn10_to_isbn13_ffi(isbn: String, cleanse: bool) -> Result<String, IsbnError> {
    isbn10_to_isbn13(&isbn, cleanse)
}

#[cfg(feature = "uniffi")]
#[uniffi::export]
pub fn isbn13_to_isbn10_ffi(isbn: String, cleanse: bool) -> Result<Option<String>, IsbnError> {
    isbn13_to_isbn10(&isbn, cleanse)
}

#[cfg(feature = "uniffi")]
#[uniffi::export]
pub fn isbn10_to_sbn_ffi(isbn: String, cleanse: bool) -> Result<Option<String>, IsbnError> {
    isbn10_to_sbn(&isbn, cleanse)
}

#[cfg(feature = "uniffi")]
#[uniffi::export]
pub fn sbn_to_isbn10_ffi(sbn: String, cleanse: bool) -> Result<String, IsbnError> {
    sbn_to_isbn10(&sbn, cleanse)
}
