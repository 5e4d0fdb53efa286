//! EventCollector — accumulates the violations reported during one analysis run.

use stylecheck_core::ViolationRecord;
use stylecheck_engine::{AuditEvent, AuditListener};

/// Separator between entries of [`EventCollector::summary`].
pub const SUMMARY_SEPARATOR: &str = "; ";

/// Violations observed in one run, in emission order.
///
/// Owned by exactly one analysis run; never shared between samples or cases.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventCollector {
    events: Vec<ViolationRecord>,
}

impl EventCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record. No deduplication.
    pub fn record(&mut self, violation: ViolationRecord) {
        self.events.push(violation);
    }

    /// Was `line` reported with exactly `message`?
    pub fn has(&self, line: u32, message: &str) -> bool {
        self.events.iter().any(|event| event.matches(line, message))
    }

    /// Every record as `line:message`, in emission order.
    pub fn summary(&self) -> String {
        self.events
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(SUMMARY_SEPARATOR)
    }

    pub fn events(&self) -> &[ViolationRecord] {
        &self.events
    }

    pub fn into_events(self) -> Vec<ViolationRecord> {
        self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl AuditListener for EventCollector {
    fn add_error(&mut self, event: &AuditEvent) {
        self.record(ViolationRecord::new(event.line, event.message.clone()));
    }
}

impl Extend<ViolationRecord> for EventCollector {
    fn extend<I: IntoIterator<Item = ViolationRecord>>(&mut self, iter: I) {
        self.events.extend(iter);
    }
}

impl FromIterator<ViolationRecord> for EventCollector {
    fn from_iter<I: IntoIterator<Item = ViolationRecord>>(iter: I) -> Self {
        Self {
            events: iter.into_iter().collect(),
        }
    }
}
