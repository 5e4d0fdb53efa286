//! Verification engine: the two-sided contract for every fixture case.
//!
//! True positive: every expectation parsed from `violations.txt` must be
//! reported for the bad sample. The check is one-directional; violations
//! beyond the expected ones are not failures.
//!
//! True negative: the good sample must report nothing at all.
//!
//! Cases are independent and run on a rayon pool. A failure in one case never
//! stops the others.

use std::time::Instant;

use rayon::prelude::*;
use stylecheck_core::errors::SampleKind;
use stylecheck_core::HarnessError;

use crate::catalog::{FixtureCase, FixtureCatalog};
use crate::collector::EventCollector;
use crate::expectations::ExpectationSet;
use crate::report::{CaseReport, CheckOutcome, HarnessReport};
use crate::runner::AnalysisRunner;

/// Outcome of a passing true-positive check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruePositive {
    pub expected: usize,
    pub observed: usize,
    pub warnings: Vec<String>,
}

/// Drives the analysis runner over a fixture catalog.
pub struct VerificationEngine {
    runner: AnalysisRunner,
    threads: usize,
}

impl VerificationEngine {
    pub fn new(runner: AnalysisRunner) -> Self {
        Self { runner, threads: 0 }
    }

    /// Worker threads for [`run`](Self::run). 0 = rayon default.
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    pub fn runner(&self) -> &AnalysisRunner {
        &self.runner
    }

    /// Bad sample must report every expected violation.
    ///
    /// The expectations are parsed before the engine runs, so a malformed
    /// oracle fails the check without any analysis.
    pub fn true_positive(&self, case: &FixtureCase) -> Result<TruePositive, HarnessError> {
        let expected = ExpectationSet::from_file(&case.violations_path(), case.rule())?;
        let mut warnings = Vec::new();
        if expected.is_empty() {
            tracing::warn!(rule = case.rule(), "expectations file lists no violations");
            warnings.push(format!(
                "{} lists no violations; the bad sample is only required to analyze cleanly",
                case.violations_path().display()
            ));
        }

        let observed = self
            .runner
            .run(&case.config_path(), &case.sample_path(SampleKind::Invalid))?;
        check_expectations(case.rule(), &expected, &observed)?;

        Ok(TruePositive {
            expected: expected.len(),
            observed: observed.len(),
            warnings,
        })
    }

    /// Good sample must report nothing.
    pub fn true_negative(&self, case: &FixtureCase) -> Result<(), HarnessError> {
        let observed = self
            .runner
            .run(&case.config_path(), &case.sample_path(SampleKind::Valid))?;
        check_clean(case.rule(), SampleKind::Valid, observed)
    }

    /// Run both sub-checks of one case.
    pub fn verify_case(&self, case: &FixtureCase) -> CaseReport {
        let started = Instant::now();
        let mut warnings = Vec::new();

        let (true_positive, true_negative) = match case.ensure_resources() {
            Err(e) => {
                let outcome = CheckOutcome::from_error(&e);
                (outcome.clone(), outcome)
            }
            Ok(()) => {
                let true_positive = match self.true_positive(case) {
                    Ok(tp) => {
                        warnings.extend(tp.warnings);
                        CheckOutcome::Passed {
                            checked: tp.expected,
                        }
                    }
                    Err(e) => CheckOutcome::from_error(&e),
                };
                let true_negative = match self.true_negative(case) {
                    Ok(()) => CheckOutcome::Passed { checked: 0 },
                    Err(e) => CheckOutcome::from_error(&e),
                };
                (true_positive, true_negative)
            }
        };

        let report = CaseReport {
            rule: case.rule().to_string(),
            true_positive,
            true_negative,
            warnings,
            elapsed_ms: started.elapsed().as_millis() as u64,
        };
        if report.passed() {
            tracing::info!(rule = case.rule(), elapsed_ms = report.elapsed_ms, "case passed");
        } else {
            tracing::info!(
                rule = case.rule(),
                true_positive = report.true_positive.code().unwrap_or("ok"),
                true_negative = report.true_negative.code().unwrap_or("ok"),
                "case failed"
            );
        }
        report
    }

    /// Verify every case of the catalog and collect one report per case.
    pub fn run(&self, catalog: &FixtureCatalog) -> HarnessReport {
        let started = Instant::now();
        let cases = if self.threads > 0 {
            match rayon::ThreadPoolBuilder::new()
                .num_threads(self.threads)
                .build()
            {
                Ok(pool) => pool.install(|| self.verify_all(catalog)),
                Err(e) => {
                    tracing::warn!(error = %e, "cannot build worker pool, using the global pool");
                    self.verify_all(catalog)
                }
            }
        } else {
            self.verify_all(catalog)
        };

        HarnessReport {
            engine: self.runner.engine_name().to_string(),
            cases,
            elapsed_ms: started.elapsed().as_millis() as u64,
        }
    }

    fn verify_all(&self, catalog: &FixtureCatalog) -> Vec<CaseReport> {
        catalog
            .cases()
            .par_iter()
            .map(|case| self.verify_case(case))
            .collect()
    }
}

/// Every expectation must be present in `observed`; fails on the first miss.
pub fn check_expectations(
    rule: &str,
    expected: &ExpectationSet,
    observed: &EventCollector,
) -> Result<(), HarnessError> {
    match expected
        .iter()
        .find(|record| !observed.has(record.line, &record.message))
    {
        Some(missing) => Err(HarnessError::ExpectationNotMet {
            rule: rule.to_string(),
            kind: SampleKind::Invalid,
            line: missing.line,
            message: missing.message.clone(),
            summary: observed.summary(),
        }),
        None => Ok(()),
    }
}

/// `observed` must be empty; otherwise every recorded violation is reported.
pub fn check_clean(
    rule: &str,
    kind: SampleKind,
    observed: EventCollector,
) -> Result<(), HarnessError> {
    if observed.is_empty() {
        return Ok(());
    }
    Err(HarnessError::UnexpectedViolation {
        rule: rule.to_string(),
        kind,
        violations: observed.into_events(),
    })
}
