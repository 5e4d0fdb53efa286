//! Errors raised by the analysis engine while processing source files.

use std::path::PathBuf;

use super::config_error::ConfigError;
use super::error_code::{self, StylecheckErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("Cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed source {path}: syntax error at line {line}")]
    MalformedSource { path: PathBuf, line: u32 },

    #[error("Parser failure: {message}")]
    Parser { message: String },

    #[error("Check '{check}' panicked while processing {path}")]
    CheckPanicked { check: String, path: PathBuf },

    #[error("Checker was used before configure()")]
    NotConfigured,

    #[error("Analysis engine crashed: {message}")]
    Crashed { message: String },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl StylecheckErrorCode for EngineError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Io { .. } => error_code::ENGINE_IO,
            Self::MalformedSource { .. } => error_code::ENGINE_MALFORMED_SOURCE,
            Self::Parser { .. } => error_code::ENGINE_PARSER,
            Self::CheckPanicked { .. } => error_code::ENGINE_CHECK_PANICKED,
            Self::NotConfigured => error_code::ENGINE_NOT_CONFIGURED,
            Self::Crashed { .. } => error_code::ENGINE_CRASHED,
            Self::Config(e) => e.error_code(),
        }
    }
}
