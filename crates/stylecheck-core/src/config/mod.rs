//! Harness configuration, loaded from TOML.

pub mod harness_config;

pub use harness_config::HarnessConfig;
