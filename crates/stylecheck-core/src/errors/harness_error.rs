//! Errors of the verification harness: resource, parse, engine and assertion failures.
//!
//! Every variant aborts only the fixture case it belongs to. The two assertion
//! variants (`ExpectationNotMet`, `UnexpectedViolation`) are the harness's
//! primary product and carry everything needed for triage.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::config_error::ConfigError;
use super::engine_error::EngineError;
use super::error_code::{self, StylecheckErrorCode};
use crate::types::violation::ViolationRecord;

/// Which sample of a fixture an analysis ran against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SampleKind {
    /// The known-bad sample, checked against the expectations file.
    Invalid,
    /// The known-good sample, which must produce nothing.
    Valid,
}

impl fmt::Display for SampleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Invalid => f.write_str("invalid"),
            Self::Valid => f.write_str("valid"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    #[error("Cannot load configuration {path}: {source}")]
    ConfigurationLoad {
        path: PathBuf,
        #[source]
        source: ConfigError,
    },

    #[error("Fixture resource for {rule} not found: {resource}")]
    FixtureResourceMissing { rule: String, resource: PathBuf },

    #[error("Malformed expectation at line {index} ('{raw}'): {reason}")]
    MalformedExpectation {
        index: usize,
        raw: String,
        reason: String,
    },

    #[error("Analysis of {sample} failed: {source}")]
    AnalysisEngine {
        sample: PathBuf,
        #[source]
        source: EngineError,
    },

    #[error("Analysis of {sample} did not finish within {timeout_ms}ms")]
    AnalysisTimeout { sample: PathBuf, timeout_ms: u64 },

    #[error("Line no.{line} ('{message}') not reported by {rule} for the {kind} sample: '{summary}'")]
    ExpectationNotMet {
        rule: String,
        kind: SampleKind,
        line: u32,
        message: String,
        summary: String,
    },

    #[error(
        "{rule}: {kind} sample reported {} unexpected violation(s): {}",
        .violations.len(),
        render_records(.violations)
    )]
    UnexpectedViolation {
        rule: String,
        kind: SampleKind,
        violations: Vec<ViolationRecord>,
    },

    #[error("Invalid harness settings {path}: {message}")]
    Settings { path: PathBuf, message: String },
}

impl HarnessError {
    /// True for the two assertion failures, false for resource/parse/engine errors.
    pub fn is_assertion(&self) -> bool {
        matches!(
            self,
            Self::ExpectationNotMet { .. } | Self::UnexpectedViolation { .. }
        )
    }
}

impl StylecheckErrorCode for HarnessError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::ConfigurationLoad { .. } => error_code::CONFIGURATION_LOAD,
            Self::FixtureResourceMissing { .. } => error_code::FIXTURE_RESOURCE_MISSING,
            Self::MalformedExpectation { .. } => error_code::MALFORMED_EXPECTATION,
            Self::AnalysisEngine { .. } => error_code::ANALYSIS_ENGINE,
            Self::AnalysisTimeout { .. } => error_code::ANALYSIS_TIMEOUT,
            Self::ExpectationNotMet { .. } => error_code::EXPECTATION_NOT_MET,
            Self::UnexpectedViolation { .. } => error_code::UNEXPECTED_VIOLATION,
            Self::Settings { .. } => error_code::SETTINGS,
        }
    }
}

fn render_records(records: &[ViolationRecord]) -> String {
    records
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
