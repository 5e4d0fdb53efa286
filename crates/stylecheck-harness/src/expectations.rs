//! Expected-violations parser.
//!
//! Grammar, one expectation per text line:
//!
//! ```text
//! LINE := INTEGER WS* ":" WS* MESSAGE
//! ```
//!
//! Only the first colon separates the fields, so messages may contain colons.
//! Whitespace around both fields is stripped. Blank lines are skipped; any
//! other line that does not fit the grammar aborts the whole parse.

use std::path::Path;
use std::str::FromStr;

use stylecheck_core::{HarnessError, ViolationRecord};

/// Ordered expected violations of one fixture.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpectationSet {
    records: Vec<ViolationRecord>,
}

impl ExpectationSet {
    /// Parse expectation text.
    pub fn parse(text: &str) -> Result<Self, HarnessError> {
        let mut records = Vec::new();
        for (idx, raw) in text.lines().enumerate() {
            if raw.trim().is_empty() {
                continue;
            }
            records.push(parse_line(idx + 1, raw)?);
        }
        Ok(Self { records })
    }

    /// Read and parse an expectations file belonging to `rule`.
    pub fn from_file(path: &Path, rule: &str) -> Result<Self, HarnessError> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            tracing::debug!(path = %path.display(), error = %e, "cannot read expectations");
            HarnessError::FixtureResourceMissing {
                rule: rule.to_string(),
                resource: path.to_path_buf(),
            }
        })?;
        Self::parse(&text)
    }

    pub fn records(&self) -> &[ViolationRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ViolationRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl FromStr for ExpectationSet {
    type Err = HarnessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl<'a> IntoIterator for &'a ExpectationSet {
    type Item = &'a ViolationRecord;
    type IntoIter = std::slice::Iter<'a, ViolationRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Parse one non-blank line; `index` is 1-based.
fn parse_line(index: usize, raw: &str) -> Result<ViolationRecord, HarnessError> {
    let malformed = |reason: String| HarnessError::MalformedExpectation {
        index,
        raw: raw.to_string(),
        reason,
    };

    let (number, message) = raw
        .split_once(':')
        .ok_or_else(|| malformed("missing ':' between line number and message".to_string()))?;

    let number = number.trim();
    if number.is_empty() || !number.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed(format!("'{number}' is not an integer line number")));
    }
    let line: u32 = number
        .parse()
        .map_err(|_| malformed(format!("line number '{number}' is out of range")))?;
    if line == 0 {
        return Err(malformed("line numbers start at 1".to_string()));
    }

    let message = message.trim();
    if message.is_empty() {
        return Err(malformed("empty message".to_string()));
    }

    Ok(ViolationRecord::new(line, message))
}
