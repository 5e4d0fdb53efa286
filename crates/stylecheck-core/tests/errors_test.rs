//! Error display and error-code mapping.

use std::path::PathBuf;

use stylecheck_core::errors::SampleKind;
use stylecheck_core::{ConfigError, EngineError, HarnessError, StylecheckErrorCode, ViolationRecord};

#[test]
fn test_expectation_not_met_names_line_rule_and_summary() {
    let err = HarnessError::ExpectationNotMet {
        rule: "LineLengthCheck".to_string(),
        kind: SampleKind::Invalid,
        line: 5,
        message: "Line is too long".to_string(),
        summary: "6:Line is too long".to_string(),
    };
    let text = err.to_string();
    assert!(text.contains("Line no.5"), "{text}");
    assert!(text.contains("'Line is too long'"), "{text}");
    assert!(text.contains("LineLengthCheck"), "{text}");
    assert!(text.contains("for the invalid sample"), "{text}");
    assert!(text.contains("6:Line is too long"), "{text}");
    assert!(err.is_assertion());
    assert_eq!(err.error_code(), "EXPECTATION_NOT_MET");
}

#[test]
fn test_unexpected_violation_lists_every_event() {
    let err = HarnessError::UnexpectedViolation {
        rule: "EmptyLinesCheck".to_string(),
        kind: SampleKind::Valid,
        violations: vec![
            ViolationRecord::new(3, "Empty line inside method"),
            ViolationRecord::new(9, "Empty line inside method"),
        ],
    };
    let text = err.to_string();
    assert!(text.contains("valid sample reported 2 unexpected"), "{text}");
    assert!(text.contains("3:Empty line inside method; 9:Empty line inside method"), "{text}");
    assert_eq!(err.error_code(), "UNEXPECTED_VIOLATION");
}

#[test]
fn test_resource_errors_are_not_assertions() {
    let err = HarnessError::FixtureResourceMissing {
        rule: "X".to_string(),
        resource: PathBuf::from("X/config.xml"),
    };
    assert!(!err.is_assertion());
    assert_eq!(err.error_code(), "FIXTURE_RESOURCE_MISSING");
}

#[test]
fn test_engine_error_code_passes_through_config_error() {
    let err = EngineError::from(ConfigError::UnknownModule {
        name: "Nope".to_string(),
    });
    assert_eq!(err.error_code(), "CONFIG_UNKNOWN_MODULE");
}

#[test]
fn test_undefined_property_display() {
    let err = ConfigError::UndefinedProperty {
        name: "line.max".to_string(),
    };
    assert_eq!(err.to_string(), "Property ${line.max} is not defined");
}

#[test]
fn test_violation_record_display_and_match() {
    let record = ViolationRecord::new(12, "msg: with colon");
    assert_eq!(record.to_string(), "12:msg: with colon");
    assert!(record.matches(12, "msg: with colon"));
    assert!(!record.matches(12, "msg:  with colon"));
    assert!(!record.matches(13, "msg: with colon"));
}
