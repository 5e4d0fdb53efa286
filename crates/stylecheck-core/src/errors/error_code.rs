//! Stable error codes surfaced in reports and JSON output.

/// Maps an error to a stable, machine-readable code.
pub trait StylecheckErrorCode {
    fn error_code(&self) -> &'static str;
}

// Check configuration
pub const CONFIG_IO: &str = "CONFIG_IO";
pub const CONFIG_XML: &str = "CONFIG_XML";
pub const CONFIG_INVALID: &str = "CONFIG_INVALID";
pub const CONFIG_UNDEFINED_PROPERTY: &str = "CONFIG_UNDEFINED_PROPERTY";
pub const CONFIG_UNKNOWN_MODULE: &str = "CONFIG_UNKNOWN_MODULE";

// Analysis engine
pub const ENGINE_IO: &str = "ENGINE_IO";
pub const ENGINE_MALFORMED_SOURCE: &str = "ENGINE_MALFORMED_SOURCE";
pub const ENGINE_PARSER: &str = "ENGINE_PARSER";
pub const ENGINE_CHECK_PANICKED: &str = "ENGINE_CHECK_PANICKED";
pub const ENGINE_NOT_CONFIGURED: &str = "ENGINE_NOT_CONFIGURED";
pub const ENGINE_CRASHED: &str = "ENGINE_CRASHED";

// Harness
pub const CONFIGURATION_LOAD: &str = "CONFIGURATION_LOAD";
pub const FIXTURE_RESOURCE_MISSING: &str = "FIXTURE_RESOURCE_MISSING";
pub const MALFORMED_EXPECTATION: &str = "MALFORMED_EXPECTATION";
pub const ANALYSIS_ENGINE: &str = "ANALYSIS_ENGINE";
pub const ANALYSIS_TIMEOUT: &str = "ANALYSIS_TIMEOUT";
pub const EXPECTATION_NOT_MET: &str = "EXPECTATION_NOT_MET";
pub const UNEXPECTED_VIOLATION: &str = "UNEXPECTED_VIOLATION";
pub const SETTINGS: &str = "SETTINGS";
