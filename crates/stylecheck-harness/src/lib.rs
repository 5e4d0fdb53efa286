//! # stylecheck-harness
//!
//! Fixture-driven verification of style checks. For every rule in the
//! catalog the harness runs the analysis engine on the rule's known-bad
//! sample (every documented violation must be reported) and on its
//! known-good sample (nothing may be reported).
//!
//! - `collector.rs`: per-run sink of reported violations
//! - `expectations.rs`: `<line>:<message>` oracle parser
//! - `runner.rs`: adapter to the analysis engine, with timeout
//! - `catalog.rs`: rule identifier → fixture directory table
//! - `verify.rs`: true-positive / true-negative checks over the catalog
//! - `report.rs`: per-case and aggregate verdicts
//! - `cli.rs`: command-line flags, settings layering, exit codes

pub mod catalog;
pub mod cli;
pub mod collector;
pub mod expectations;
pub mod report;
pub mod runner;
pub mod verify;

pub use catalog::{FixtureCase, FixtureCatalog};
pub use collector::EventCollector;
pub use expectations::ExpectationSet;
pub use report::{CaseReport, CheckOutcome, HarnessReport};
pub use runner::{AnalysisEngine, AnalysisRunner, CheckerEngine};
pub use verify::VerificationEngine;
