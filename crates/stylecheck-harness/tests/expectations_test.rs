//! Expected-violations parser: grammar, failures and idempotence.

use proptest::prelude::*;
use stylecheck_core::{HarnessError, StylecheckErrorCode, ViolationRecord};
use stylecheck_harness::ExpectationSet;

#[test]
fn test_parses_line_and_trimmed_message() {
    let set = ExpectationSet::parse("5: Line is too long").expect("should parse");
    assert_eq!(set.records(), &[ViolationRecord::new(5, "Line is too long")]);
}

#[test]
fn test_only_first_colon_separates() {
    let set = ExpectationSet::parse("12 :  Console output: use a logger  \n").expect("should parse");
    assert_eq!(set.len(), 1);
    assert_eq!(set.records()[0].line, 12);
    assert_eq!(set.records()[0].message, "Console output: use a logger");
}

#[test]
fn test_keeps_file_order_and_duplicates() {
    let set = ExpectationSet::parse("9:b\n2:a\n9:b\n").expect("should parse");
    let lines: Vec<u32> = set.iter().map(|r| r.line).collect();
    assert_eq!(lines, vec![9, 2, 9]);
}

#[test]
fn test_crlf_and_blank_lines() {
    let set = ExpectationSet::parse("1:a\r\n\r\n\n3:c\r\n").expect("should parse");
    assert_eq!(
        set.records(),
        &[ViolationRecord::new(1, "a"), ViolationRecord::new(3, "c")]
    );
}

#[test]
fn test_empty_resource_is_an_empty_set() {
    assert!(ExpectationSet::parse("").unwrap().is_empty());
    assert!(ExpectationSet::parse("\n  \n").unwrap().is_empty());
}

#[test]
fn test_non_integer_line_is_malformed() {
    let err = ExpectationSet::parse("x: bad").unwrap_err();
    match &err {
        HarnessError::MalformedExpectation { index, raw, .. } => {
            assert_eq!(*index, 1);
            assert_eq!(raw, "x: bad");
        }
        other => panic!("expected MalformedExpectation, got {other:?}"),
    }
    assert_eq!(err.error_code(), "MALFORMED_EXPECTATION");
}

#[test]
fn test_malformed_line_index_counts_blank_lines() {
    let err = ExpectationSet::parse("1:ok\n\n-3: negative\n").unwrap_err();
    assert!(
        matches!(err, HarnessError::MalformedExpectation { index: 3, .. }),
        "got {err:?}"
    );
}

#[test]
fn test_other_malformed_shapes() {
    for text in ["7 no colon", "0: zero", "5:", "5:   ", "1.5: float", "+4: sign", "99999999999: big"] {
        let err = ExpectationSet::parse(text).unwrap_err();
        assert!(
            matches!(err, HarnessError::MalformedExpectation { .. }),
            "{text:?} gave {err:?}"
        );
    }
}

#[test]
fn test_from_str() {
    let set: ExpectationSet = "3:three".parse().expect("should parse");
    assert_eq!(set.len(), 1);
}

#[test]
fn test_missing_file_is_resource_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = ExpectationSet::from_file(&dir.path().join("violations.txt"), "EmptyLinesCheck")
        .unwrap_err();
    match err {
        HarnessError::FixtureResourceMissing { rule, .. } => assert_eq!(rule, "EmptyLinesCheck"),
        other => panic!("expected FixtureResourceMissing, got {other:?}"),
    }
}

proptest! {
    #[test]
    fn prop_parsing_is_idempotent(entries in prop::collection::vec((1u32..10_000, "[A-Za-z:;(). ]{1,30}"), 0..20)) {
        let text: String = entries
            .iter()
            .map(|(line, message)| format!("{line}:{message}\n"))
            .collect();
        let first = ExpectationSet::parse(&text);
        let second = ExpectationSet::parse(&text);
        match (first, second) {
            (Ok(a), Ok(b)) => prop_assert_eq!(a, b),
            (Err(a), Err(b)) => prop_assert_eq!(a.to_string(), b.to_string()),
            _ => prop_assert!(false, "parse results differ"),
        }
    }

    #[test]
    fn prop_non_integer_first_token_always_fails(token in "[a-z]{1,6}", message in "[a-z ]{1,10}") {
        let text = format!("1:fine\n{token}:{message}\n");
        let is_malformed = matches!(
            ExpectationSet::parse(&text),
            Err(HarnessError::MalformedExpectation { index: 2, .. })
        );
        prop_assert!(is_malformed);
    }
}
