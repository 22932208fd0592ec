//! Book number normalization, validation and conversion integration tests

use im_isbn::{
    extract_all, extract_isbns, is_valid_isbn, isbn10_checksum, isbn10_to_isbn13, isbn10_to_sbn,
    isbn13_checksum, isbn13_to_isbn10, normalize, sbn_checksum, sbn_to_isbn10, validate, Isbn,
    IsbnError, Scheme,
};
use proptest::prelude::*;
use rstest::rstest;

// === Normalization ===

#[rstest]
#[case(" 0-940016-73-7 ", "0940016737")]
#[case("978-0-940016-73-6", "9780940016736")]
#[case("3-8055-7505-x", "380557505X")]
#[case("9780940016736", "9780940016736")]
fn test_normalize(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(normalize(input), expected);
}

#[test]
fn test_normalize_leaves_other_characters_for_downstream_checks() {
    // Only spaces and hyphens are stripped; anything else has to be
    // caught by length dispatch or checksum arithmetic
    assert_eq!(normalize("isbn 0940016737"), "ISBN0940016737");
}

// === Checksums ===

#[rstest]
#[case("094001673", '7')]
#[case("380557505", 'X')]
#[case("030640615", '2')]
fn test_isbn10_checksum(#[case] body: &str, #[case] expected: char) {
    assert_eq!(isbn10_checksum(body), Ok(expected));
}

#[rstest]
#[case("978094001673", '6')]
#[case("979123456789", '6')]
#[case("978032112521", '7')]
fn test_isbn13_checksum(#[case] body: &str, #[case] expected: char) {
    assert_eq!(isbn13_checksum(body), Ok(expected));
}

#[test]
fn test_sbn_checksum() {
    assert_eq!(sbn_checksum("94001673"), Ok('7'));
}

#[rstest]
#[case("0940016737")] // 10 characters into a 9-character function
#[case("94001673")]
fn test_isbn10_checksum_rejects_wrong_length(#[case] body: &str) {
    assert!(matches!(
        isbn10_checksum(body),
        Err(IsbnError::WrongLength { expected: 9, .. })
    ));
}

#[test]
fn test_checksum_rejects_non_digit_body() {
    assert_eq!(
        isbn13_checksum("97809400167A"),
        Err(IsbnError::InvalidCharacter { found: 'A' })
    );
}

// === Validation ===

#[rstest]
#[case("940016737", true)]
#[case("3-8055-7505-X", true)]
#[case("3-8055-7505-3", false)]
#[case("0-306-40615-2", true)]
#[case("0-306-40615-1", false)]
#[case("978-0-321-12521-7", true)]
#[case("978-0-321-12521-8", false)]
fn test_validate(#[case] input: &str, #[case] expected: bool) {
    assert_eq!(validate(input), Ok(expected), "input: {}", input);
}

#[test]
fn test_validate_errors_on_unrecognized_length() {
    let err = validate("12-345").unwrap_err();
    assert_eq!(
        err,
        IsbnError::UnrecognizedLength {
            input: "12345".to_string()
        }
    );
    assert!(err.to_string().contains("9, 10 or 13"));
}

// === Conversions ===

#[test]
fn test_isbn10_to_isbn13() {
    assert_eq!(
        isbn10_to_isbn13("0-940016-73-7", true),
        Ok("9780940016736".to_string())
    );
    assert_eq!(
        isbn10_to_isbn13("3-8055-7505-X", true),
        Ok("9783805575058".to_string())
    );
}

#[test]
fn test_isbn13_to_isbn10() {
    assert_eq!(
        isbn13_to_isbn10("978-3-8055-7505-8", true),
        Ok(Some("380557505X".to_string()))
    );
}

#[test]
fn test_isbn13_to_isbn10_absent_outside_978() {
    assert_eq!(isbn13_to_isbn10("979-1-234-56789-6", true), Ok(None));
}

#[test]
fn test_isbn10_to_sbn_absent_outside_zero_group() {
    assert_eq!(
        isbn10_to_sbn("0-940016-73-7", true),
        Ok(Some("940016737".to_string()))
    );
    assert_eq!(isbn10_to_sbn("1-56414-682-0", true), Ok(None));
}

#[test]
fn test_sbn_to_isbn10() {
    assert_eq!(
        sbn_to_isbn10("940016-73-7", true),
        Ok("0940016737".to_string())
    );
}

#[test]
fn test_cleanse_false_takes_input_as_is() {
    assert_eq!(
        isbn13_to_isbn10("9780940016736", false),
        Ok(Some("0940016737".to_string()))
    );
    assert!(matches!(
        isbn13_to_isbn10("978-0-940016-73-6", false),
        Err(IsbnError::WrongLength { expected: 13, .. })
    ));
}

// === Value object ===

#[test]
fn test_isbn_from_any_form() {
    let from_13 = Isbn::parse("978-0940-01673-6").unwrap();
    assert_eq!(from_13.isbn13(), "9780940016736");
    assert_eq!(from_13.isbn10(), Some("0940016737"));
    assert_eq!(from_13.sbn(), Some("940016737"));
    assert_eq!(from_13.asin(), Some("0940016737"));

    let from_10 = Isbn::parse("0940016737").unwrap();
    let from_sbn = Isbn::parse("940016737").unwrap();
    assert_eq!(from_13, from_10);
    assert_eq!(from_10, from_sbn);
}

#[test]
fn test_isbn_absent_representations() {
    let isbn = Isbn::parse("9791234567896").unwrap();
    assert_eq!(isbn.isbn10(), None);
    assert_eq!(isbn.sbn(), None);

    let non_zero_group = Isbn::parse("1-56414-682-0").unwrap();
    assert_eq!(non_zero_group.isbn10(), Some("1564146820"));
    assert_eq!(non_zero_group.sbn(), None);
}

#[test]
fn test_isbn_format_error() {
    let err = Isbn::parse("0-940016").unwrap_err();
    assert!(matches!(err, IsbnError::UnrecognizedLength { .. }));
}

#[test]
fn test_isbn_reassignment_cascades() {
    let mut isbn = Isbn::parse("9780940016736").unwrap();
    isbn.set_isbn13("978-3-8055-7505-8").unwrap();
    assert_eq!(isbn.isbn10(), Some("380557505X"));
    assert_eq!(isbn.sbn(), None);

    isbn.set_sbn("940016737").unwrap();
    assert_eq!(isbn.isbn13(), "9780940016736");
}

#[test]
fn test_isbn_serde_round_trip() {
    let isbn = Isbn::parse("978-0940-01673-6").unwrap();
    let json = serde_json::to_string(&isbn).unwrap();
    let back: Isbn = serde_json::from_str(&json).unwrap();
    assert_eq!(isbn, back);
    assert_eq!(back.sbn(), Some("940016737"));
}

// === Extraction ===

#[test]
fn test_extract_isbns_from_citation() {
    let text = r#"
        isbn = {978-0-321-12521-7},
        note = {also printed as ISBN 0-306-40615-2}
    "#;
    let isbns = extract_isbns(text);
    assert_eq!(isbns.len(), 2);
    assert!(isbns.contains(&"9780321125217".to_string()));
    assert!(isbns.contains(&"0306406152".to_string()));
}

#[test]
fn test_extract_all_reports_schemes_in_order() {
    let text = "Hardcover 0-306-40615-2, paperback 978-0-321-12521-7";
    let found = extract_all(text);
    assert_eq!(found.len(), 2);
    assert_eq!(found[0].scheme, Scheme::Isbn10);
    assert_eq!(found[1].scheme, Scheme::Isbn13);
    for pair in found.windows(2) {
        assert!(pair[0].start_index <= pair[1].start_index);
    }
}

// === Property-Based Tests ===

proptest! {
    #[test]
    fn test_normalize_is_idempotent(s in "[ -~]{0,40}") {
        let once = normalize(&s);
        prop_assert_eq!(normalize(&once), once);
    }

    #[test]
    fn test_isbn10_checksum_deterministic_and_in_alphabet(body in "[0-9]{9}") {
        let first = isbn10_checksum(&body).unwrap();
        let second = isbn10_checksum(&body).unwrap();
        prop_assert_eq!(first, second);
        prop_assert!(first.is_ascii_digit() || first == 'X');
    }

    #[test]
    fn test_isbn13_checksum_is_always_a_digit(body in "[0-9]{12}") {
        let check = isbn13_checksum(&body).unwrap();
        prop_assert!(check.is_ascii_digit(), "got '{}'", check);
    }

    #[test]
    fn test_sbn_checksum_agrees_with_zero_padded_isbn10(body in "[0-9]{8}") {
        let padded = format!("0{}", body);
        prop_assert_eq!(sbn_checksum(&body).unwrap(), isbn10_checksum(&padded).unwrap());
    }

    #[test]
    fn test_round_trip_for_zero_group_isbn10(body in "0[0-9]{8}") {
        // Build a valid zero-group ISBN-10, then walk it through
        // ISBN-13 and back down to SBN and up again
        let mut isbn10 = body.clone();
        isbn10.push(isbn10_checksum(&body).unwrap());
        prop_assert!(validate(&isbn10).unwrap());

        let isbn13 = isbn10_to_isbn13(&isbn10, false).unwrap();
        prop_assert!(validate(&isbn13).unwrap());
        let back = isbn13_to_isbn10(&isbn13, false).unwrap();
        prop_assert_eq!(back.as_deref(), Some(isbn10.as_str()));

        let sbn = isbn10_to_sbn(&isbn10, false).unwrap().unwrap();
        prop_assert_eq!(sbn_to_isbn10(&sbn, false).unwrap(), isbn10);
    }

    #[test]
    fn test_extracted_isbns_always_validate(text in "[ -~]{0,60}") {
        for isbn in extract_isbns(&text) {
            prop_assert!(is_valid_isbn(&isbn));
        }
    }
}
