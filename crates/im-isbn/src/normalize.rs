//! Formatting cleanup for raw book numbers

/// Strip spaces and hyphens from a book number and uppercase it.
///
/// Nothing else is cleaned or checked here: unexpected characters pass
/// through so that the length dispatch and checksum arithmetic
/// downstream remain the only validation gates.
pub fn normalize(raw: &str) -> String {
    raw.chars()
        .filter(|c| *c != ' ' && *c != '-')
        .collect::<String>()
        .to_uppercase()
}

#[cfg(feature = "uniffi")]
#[uniffi::export]
pub fn normalize_ffi(raw: String) -> String {
    normalize(&raw)
}
