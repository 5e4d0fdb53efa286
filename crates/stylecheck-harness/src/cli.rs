//! Command-line front end: flag parsing, settings layering and exit codes.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use stylecheck_core::tracing::init_tracing;
use stylecheck_core::{HarnessConfig, HarnessError};
use stylecheck_engine::PropertiesExpander;

use crate::catalog::FixtureCatalog;
use crate::runner::{AnalysisRunner, CheckerEngine};
use crate::verify::VerificationEngine;

/// Every case passed.
pub const EXIT_PASSED: u8 = 0;
/// At least one case failed.
pub const EXIT_FAILED: u8 = 1;
/// The harness could not start or could not render its report.
pub const EXIT_SETUP: u8 = 2;

/// Fixtures shipped with this crate, independent of the working directory.
pub fn default_fixtures_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/checks")
}

#[derive(Parser, Debug, Clone)]
#[command(
    name = "stylecheck-harness",
    version,
    about = "Run every style check against its known-bad and known-good fixtures"
)]
pub struct Cli {
    /// Directory holding one fixture directory per rule.
    #[arg(long)]
    pub fixtures: Option<PathBuf>,

    /// Harness settings file (TOML).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Verify only these rules (repeatable). Replaces the configured catalog.
    #[arg(long = "rule", value_name = "RULE")]
    pub rules: Vec<String>,

    /// Per-analysis timeout in milliseconds; 0 disables it.
    #[arg(long)]
    pub timeout_ms: Option<u64>,

    /// Worker threads; 0 uses one per CPU.
    #[arg(long)]
    pub threads: Option<usize>,

    /// Property for `${name}` expansion in rule configurations (repeatable).
    #[arg(long = "property", value_name = "KEY=VALUE", value_parser = parse_property)]
    pub properties: Vec<(String, String)>,

    /// Print the report as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Parse a `KEY=VALUE` flag. The value may be empty or contain `=`.
pub fn parse_property(raw: &str) -> Result<(String, String), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{raw}'"))?;
    if key.trim().is_empty() {
        return Err(format!("empty property name in '{raw}'"));
    }
    Ok((key.trim().to_string(), value.to_string()))
}

/// Settings file first, then command-line overrides.
pub fn resolve_config(cli: &Cli) -> Result<HarnessConfig, HarnessError> {
    let mut config = match &cli.config {
        Some(path) => HarnessConfig::from_file(path)?,
        None => HarnessConfig::default(),
    };
    if let Some(root) = &cli.fixtures {
        config.fixtures_root = Some(root.clone());
    }
    if !cli.rules.is_empty() {
        config.rules = cli.rules.clone();
    }
    if let Some(ms) = cli.timeout_ms {
        config.timeout_ms = Some(ms);
    }
    if let Some(threads) = cli.threads {
        config.threads = Some(threads);
    }
    for (key, value) in &cli.properties {
        config.properties.insert(key.clone(), value.clone());
    }
    Ok(config)
}

/// Verify the catalog described by `cli`, writing the report to `out`.
/// Returns the process exit status.
pub fn run(cli: &Cli, out: &mut dyn Write) -> u8 {
    let config = match resolve_config(cli) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "cannot resolve harness settings");
            eprintln!("stylecheck-harness: {e}");
            return EXIT_SETUP;
        }
    };

    let catalog = FixtureCatalog::from_config(&config, &default_fixtures_root());
    let properties: PropertiesExpander = config.properties.clone().into_iter().collect();
    let engine = CheckerEngine::new().with_properties(properties);
    let runner = AnalysisRunner::new(Arc::new(engine)).with_timeout(config.effective_timeout());
    let verifier = VerificationEngine::new(runner).with_threads(config.effective_threads());

    tracing::info!(
        cases = catalog.len(),
        timeout_ms = config.effective_timeout().map(|t: Duration| t.as_millis() as u64),
        "verifying fixture catalog"
    );
    let report = verifier.run(&catalog);

    let rendered = if cli.json {
        match report.to_json() {
            Ok(json) => json + "\n",
            Err(e) => {
                eprintln!("stylecheck-harness: cannot render report: {e}");
                return EXIT_SETUP;
            }
        }
    } else {
        report.render_text()
    };
    if let Err(e) = out.write_all(rendered.as_bytes()) {
        eprintln!("stylecheck-harness: cannot write report: {e}");
        return EXIT_SETUP;
    }

    if report.passed() {
        EXIT_PASSED
    } else {
        EXIT_FAILED
    }
}

/// Binary entry point.
pub fn main_entry() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();
    let stdout = std::io::stdout();
    ExitCode::from(run(&cli, &mut stdout.lock()))
}
