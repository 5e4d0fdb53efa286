//! Errors raised while loading and expanding a check configuration.

use std::path::PathBuf;

use super::error_code::{self, StylecheckErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Cannot read configuration {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed configuration XML at byte {position}: {message}")]
    Xml { position: u64, message: String },

    #[error("Invalid configuration: {message}")]
    Invalid { message: String },

    #[error("Property ${{{name}}} is not defined")]
    UndefinedProperty { name: String },

    #[error("Unknown module '{name}'")]
    UnknownModule { name: String },

    #[error("Module '{module}' has an invalid value for '{property}': {message}")]
    InvalidProperty {
        module: String,
        property: String,
        message: String,
    },
}

impl StylecheckErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Io { .. } => error_code::CONFIG_IO,
            Self::Xml { .. } => error_code::CONFIG_XML,
            Self::UndefinedProperty { .. } => error_code::CONFIG_UNDEFINED_PROPERTY,
            Self::UnknownModule { .. } => error_code::CONFIG_UNKNOWN_MODULE,
            Self::Invalid { .. } | Self::InvalidProperty { .. } => error_code::CONFIG_INVALID,
        }
    }
}
