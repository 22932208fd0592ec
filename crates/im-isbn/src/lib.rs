// Allow manual modulo checks since .is_multiple_of() is nightly-only
#![allow(clippy::manual_is_multiple_of)]

//! Normalization, validation and interconversion of book numbers
//!
//! Although International Standard Book Numbers have been issued as
//! ISBN-13s for years, catalogues still carry large numbers of legacy
//! ISBN-10s and old-style 9-digit SBNs. This crate provides:
//! - Formatting cleanup for raw book numbers
//! - Check character computation and validation for all three schemes
//! - Conversion between SBN, ISBN-10 and ISBN-13 forms
//! - A value object holding a book number in every scheme that can
//!   represent it
//! - ISBN extraction from free text

pub mod checksum;
pub mod convert;
pub mod error;
pub mod extractors;
pub mod isbn;
pub mod normalize;
pub mod scheme;

pub use checksum::*;
pub use convert::*;
pub use error::*;
pub use extractors::*;
pub use isbn::*;
pub use normalize::*;
pub use scheme::*;

// Setup UniFFI when the feature is enabled
#[cfg(feature = "uniffi")]
uniffi::setup_scaffolding!();
