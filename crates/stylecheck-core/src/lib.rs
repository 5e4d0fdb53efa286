//! # stylecheck-core
//!
//! Foundation crate for the stylecheck verification harness.
//! Defines the shared violation type, errors, harness config and tracing setup.
//! The engine and harness crates both depend on this.

pub mod config;
pub mod errors;
pub mod tracing;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::HarnessConfig;
pub use errors::error_code::StylecheckErrorCode;
pub use errors::{ConfigError, EngineError, HarnessError};
pub use types::collections::{FxHashMap, FxHashSet};
pub use types::violation::ViolationRecord;
