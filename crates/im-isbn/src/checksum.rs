//! Check character arithmetic for SBN, ISBN-10 and ISBN-13

use crate::error::{require_length, IsbnError};
use crate::normalize::normalize;
use crate::scheme::Scheme;

fn digit_value(c: char) -> Result<u32, IsbnError> {
    c.to_digit(10).ok_or(IsbnError::InvalidCharacter { found: c })
}

/// Check character over the 9-character coding body of an ISBN-10.
///
/// Each digit is weighted by its 1-based position and the sum is taken
/// modulo 11; a remainder of 10 is written as `X`.
pub fn isbn10_checksum(body: &str) -> Result<char, IsbnError> {
    require_length(body, 9)?;
    let mut sum = 0u32;
    for (i, c) in body.chars().enumerate() {
        sum += (i as u32 + 1) * digit_value(c)?;
    }
    Ok(match sum % 11 {
        10 => 'X',
        d => char::from_digit(d, 10).unwrap(),
    })
}

/// Check digit over the 12-character coding body of an ISBN-13.
///
/// Digits at even 0-based positions carry weight 1, odd positions
/// weight 3; the check digit is `(10 - sum mod 10) mod 10`.
pub fn isbn13_checksum(body: &str) -> Result<char, IsbnError> {
    require_length(body, 12)?;
    let mut sum = 0u32;
    for (i, c) in body.chars().enumerate() {
        let weight = if i % 2 == 0 { 1 } else { 3 };
        sum += weight * digit_value(c)?;
    }
    let check = (10 - sum % 10) % 10;
    Ok(char::from_digit(check, 10).unwrap())
}

/// Check character over the 8-character coding body of an SBN.
///
/// An SBN is an ISBN-10 missing its leading zero, so the two schemes
/// share their checksum arithmetic.
pub fn sbn_checksum(body: &str) -> Result<char, IsbnError> {
    require_length(body, 8)?;
    isbn10_checksum(&format!("0{}", body))
}

/// Check a book number against its trailing check character.
///
/// Formatting is allowed; the scheme is chosen by length after
/// normalization (9 = SBN, 10 = ISBN-10, 13 = ISBN-13). Any other
/// length is an error rather than merely invalid, as is a non-digit
/// character inside the coding body.
pub fn validate(raw: &str) -> Result<bool, IsbnError> {
    let clean = normalize(raw);
    let scheme = Scheme::detect(&clean)?;
    let check = clean.chars().last().unwrap(); // length checked by detect
    let body: String = clean.chars().take(scheme.body_length()).collect();
    let computed = match scheme {
        Scheme::Sbn => sbn_checksum(&body)?,
        Scheme::Isbn10 => isbn10_checksum(&body)?,
        Scheme::Isbn13 => isbn13_checksum(&body)?,
    };
    Ok(computed == check)
}

/// Convenience wrapper over [`validate`]: anything that does not
/// normalize to a well-formed book number is simply invalid.
pub fn is_valid_isbn(raw: &str) -> bool {
    validate(raw).unwrap_or(false)
}

#[cfg(feature = "uniffi")]
#[uniffi::export]
pub fn isbn10_checksum_ffi(body: String) -> Result<String, IsbnError> {
    isbn10_checksum(&body).map(String::from)
}

#[cfg(feature = "uniffi")]
#[uniffi::export]
pub fn isbn13_checksum_ffi(body: String) -> Result<String, IsbnError> {
    isbn13_checksum(&body).map(String::from)
}

#[cfg(feature = "uniffi")]
#[uniffi::export]
pub fn sbn_checksum_ffi(body: String) -> Result<String, IsbnError> {
    sbn_checksum(&body).map(String::from)
}

#[cfg(feature = "uniffi")]
#[uniffi::export]
pub fn validate_ffi(raw: String) -> Result<bool, IsbnError> {
    validate(&raw)
}

#[cfg(feature = "uniffi")]
#[uniffi::export]
pub fn is_valid_isbn_ffi(raw: String) -> bool {
    is_valid_isbn(&raw)
}
