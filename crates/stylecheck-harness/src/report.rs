//! Per-case and aggregate verdicts, rendered as text or JSON.

use std::fmt::Write as _;

use serde::Serialize;
use stylecheck_core::errors::SampleKind;
use stylecheck_core::{HarnessError, StylecheckErrorCode};

/// Result of one sub-check (true positive or true negative).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CheckOutcome {
    /// `checked` is the number of expectations verified (true positive) or
    /// zero (true negative).
    Passed { checked: usize },
    Failed {
        code: String,
        assertion: bool,
        diagnostic: String,
    },
}

impl CheckOutcome {
    pub fn from_error(error: &HarnessError) -> Self {
        Self::Failed {
            code: error.error_code().to_string(),
            assertion: error.is_assertion(),
            diagnostic: error.to_string(),
        }
    }

    pub fn is_passed(&self) -> bool {
        matches!(self, Self::Passed { .. })
    }

    /// Error code of a failed outcome.
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Passed { .. } => None,
            Self::Failed { code, .. } => Some(code),
        }
    }

    pub fn diagnostic(&self) -> Option<&str> {
        match self {
            Self::Passed { .. } => None,
            Self::Failed { diagnostic, .. } => Some(diagnostic),
        }
    }
}

/// Verdict for one fixture case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaseReport {
    pub rule: String,
    pub true_positive: CheckOutcome,
    pub true_negative: CheckOutcome,
    /// Suspicious but legal fixture contents.
    pub warnings: Vec<String>,
    pub elapsed_ms: u64,
}

impl CaseReport {
    pub fn passed(&self) -> bool {
        self.true_positive.is_passed() && self.true_negative.is_passed()
    }

    pub fn outcome(&self, kind: SampleKind) -> &CheckOutcome {
        match kind {
            SampleKind::Invalid => &self.true_positive,
            SampleKind::Valid => &self.true_negative,
        }
    }
}

/// Verdicts for every case of one harness run, in catalog order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HarnessReport {
    pub engine: String,
    pub cases: Vec<CaseReport>,
    pub elapsed_ms: u64,
}

impl HarnessReport {
    /// True when every case passed. An empty catalog passes vacuously.
    pub fn passed(&self) -> bool {
        self.cases.iter().all(CaseReport::passed)
    }

    pub fn passed_count(&self) -> usize {
        self.cases.iter().filter(|c| c.passed()).count()
    }

    pub fn failed_cases(&self) -> Vec<&CaseReport> {
        self.cases.iter().filter(|c| !c.passed()).collect()
    }

    pub fn case(&self, rule: &str) -> Option<&CaseReport> {
        self.cases.iter().find(|c| c.rule == rule)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Human-readable report, one block per case plus a totals line.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        for case in &self.cases {
            let verdict = if case.passed() { "PASS" } else { "FAIL" };
            let _ = writeln!(out, "{verdict} {} ({}ms)", case.rule, case.elapsed_ms);
            for (label, outcome) in [
                ("true-positive", &case.true_positive),
                ("true-negative", &case.true_negative),
            ] {
                if let CheckOutcome::Failed {
                    code, diagnostic, ..
                } = outcome
                {
                    let _ = writeln!(out, "  {label} [{code}] {diagnostic}");
                }
            }
            for warning in &case.warnings {
                let _ = writeln!(out, "  warning: {warning}");
            }
        }
        let _ = writeln!(
            out,
            "{} cases: {} passed, {} failed (engine: {}, {}ms)",
            self.cases.len(),
            self.passed_count(),
            self.cases.len() - self.passed_count(),
            self.engine,
            self.elapsed_ms
        );
        out
    }
}
