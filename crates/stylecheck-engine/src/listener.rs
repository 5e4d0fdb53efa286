//! Audit events and the streaming listener capability.

use std::path::{Path, PathBuf};

/// Severity attached to a configured check and to every event it emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Severity {
    Ignore,
    Info,
    Warning,
    #[default]
    Error,
}

impl Severity {
    /// Parse the value of a `severity` property.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "ignore" => Some(Self::Ignore),
            "info" => Some(Self::Info),
            "warning" => Some(Self::Warning),
            "error" => Some(Self::Error),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Ignore => "ignore",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

/// One violation reported by one check for one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditEvent {
    pub file: PathBuf,
    /// 1-based line.
    pub line: u32,
    /// 1-based column.
    pub column: u32,
    pub message: String,
    pub check_id: String,
    pub severity: Severity,
}

/// Receives audit lifecycle callbacks from a [`Checker`](crate::Checker).
///
/// `add_error` is called once per violation, as soon as the file that produced
/// it has been checked. The lifecycle hooks default to no-ops.
pub trait AuditListener {
    fn audit_started(&mut self) {}

    fn file_started(&mut self, _file: &Path) {}

    fn add_error(&mut self, event: &AuditEvent);

    fn file_finished(&mut self, _file: &Path) {}

    fn audit_finished(&mut self) {}
}

impl AuditListener for Vec<AuditEvent> {
    fn add_error(&mut self, event: &AuditEvent) {
        self.push(event.clone());
    }
}
