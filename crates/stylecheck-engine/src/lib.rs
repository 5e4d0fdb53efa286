//! # stylecheck-engine
//!
//! Reference analysis engine driven by the verification harness.
//! Loads an XML check configuration with property expansion, parses Java
//! sources with tree-sitter, runs the configured checks and streams every
//! finding to registered audit listeners.

#![allow(clippy::module_inception)]

pub mod checker;
pub mod checks;
pub mod config;
pub mod listener;
pub mod source;

pub use checker::Checker;
pub use checks::registry::CheckRegistry;
pub use config::{load_configuration, load_configuration_file, Configuration, PropertiesExpander, PropertyResolver};
pub use listener::{AuditEvent, AuditListener, Severity};
