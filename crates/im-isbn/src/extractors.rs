//! ISBN extraction from free text

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::checksum::is_valid_isbn;
use crate::normalize::normalize;
use crate::scheme::Scheme;

lazy_static! {
    // ISBN-10 and ISBN-13, with or without an "ISBN:" lead-in
    static ref ISBN_REGEX: Regex = Regex::new(
        r"(?i)(?:isbn[:\s-]*)?(?P<isbn>(?:97[89][- ]?)?(?:\d[- ]?){9}[\dxX])"
    ).unwrap();
}

/// Extracted ISBN with scheme and position information
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct ExtractedIsbn {
    pub scheme: Scheme,
    pub value: String,
    pub start_index: u32,
    pub end_index: u32,
}

/// Extract ISBNs from text, normalized and checksum-filtered.
pub fn extract_isbns(text: &str) -> Vec<String> {
    ISBN_REGEX
        .captures_iter(text)
        .filter_map(|cap| cap.name("isbn"))
        .map(|m| normalize(m.as_str()))
        .filter(|isbn| is_valid_isbn(isbn))
        .collect()
}

/// Extract ISBNs with scheme and position information.
pub fn extract_all(text: &str) -> Vec<ExtractedIsbn> {
    let mut results = Vec::new();

    for cap in ISBN_REGEX.captures_iter(text) {
        if let Some(m) = cap.name("isbn") {
            let value = normalize(m.as_str());
            if !is_valid_isbn(&value) {
                continue;
            }
            let scheme = match Scheme::detect(&value) {
                Ok(scheme) => scheme,
                Err(_) => continue,
            };
            results.push(ExtractedIsbn {
                scheme,
                value,
                start_index: m.start() as u32,
                end_index: m.end() as u32,
            });
        }
    }

    // Sort by position
    results.sort_by_key(|r| r.start_index);
    results
}

#[cfg(feature = "uniffi")]
#[uniffi::export]
pub fn extract_isbns_ffi(text: String) -> Vec<String> {
    extract_isbns(&text)
}

#[cfg(feature = "uniffi")]
#[uniffi::export]
pub fn extract_all_ffi(text: String) -> Vec<ExtractedIsbn> {
    extract_all(&text)
}
