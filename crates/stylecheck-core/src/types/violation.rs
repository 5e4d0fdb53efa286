//! The (line, message) pair every comparison in the harness is made of.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One reported or expected issue: a 1-based source line and the exact message text.
///
/// Equality is an exact match on both fields. There is no substring or
/// case-insensitive matching anywhere in the harness.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ViolationRecord {
    pub line: u32,
    pub message: String,
}

impl ViolationRecord {
    pub fn new(line: u32, message: impl Into<String>) -> Self {
        Self {
            line,
            message: message.into(),
        }
    }

    /// True when this record has exactly this line and message.
    pub fn matches(&self, line: u32, message: &str) -> bool {
        self.line == line && self.message == message
    }
}

impl fmt::Display for ViolationRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.message)
    }
}
