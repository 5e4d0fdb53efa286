//! Error types for every subsystem, each mapped to a stable error code.

pub mod config_error;
pub mod engine_error;
pub mod error_code;
pub mod harness_error;

pub use config_error::ConfigError;
pub use engine_error::EngineError;
pub use harness_error::{HarnessError, SampleKind};
