//! Shipped fixtures verified end-to-end through the reference checker.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use stylecheck_core::errors::SampleKind;
use stylecheck_core::HarnessConfig;
use stylecheck_engine::PropertiesExpander;
use stylecheck_harness::catalog::DEFAULT_RULES;
use stylecheck_harness::{
    AnalysisRunner, CheckerEngine, ExpectationSet, FixtureCatalog, HarnessReport,
    VerificationEngine,
};

fn fixtures_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/checks")
}

fn run_catalog(catalog: &FixtureCatalog) -> HarnessReport {
    let engine = CheckerEngine::new()
        .with_properties(PropertiesExpander::new().with("line.max", "80"));
    let runner = AnalysisRunner::new(Arc::new(engine))
        .with_timeout(Some(std::time::Duration::from_secs(60)));
    VerificationEngine::new(runner).run(catalog)
}

#[test]
fn test_builtin_catalog_passes() {
    let catalog = FixtureCatalog::builtin(&fixtures_root());
    assert_eq!(catalog.len(), DEFAULT_RULES.len());

    let report = run_catalog(&catalog);
    assert!(report.passed(), "{}", report.render_text());
    assert_eq!(report.passed_count(), DEFAULT_RULES.len());
    for rule in DEFAULT_RULES {
        let case = report.case(rule).expect("every rule has a case");
        assert!(case.outcome(SampleKind::Invalid).is_passed(), "{rule}");
        assert!(case.outcome(SampleKind::Valid).is_passed(), "{rule}");
        assert!(case.warnings.is_empty(), "{rule}: {:?}", case.warnings);
    }
}

#[test]
fn test_every_fixture_oracle_parses() {
    for case in FixtureCatalog::builtin(&fixtures_root()).cases() {
        case.ensure_resources().expect("fixture directory is complete");
        let set = ExpectationSet::from_file(&case.violations_path(), case.rule())
            .expect("violations.txt parses");
        assert!(!set.is_empty(), "{} documents no violations", case.rule());
    }
}

#[test]
fn test_unset_property_falls_back_to_config_default() {
    let catalog = FixtureCatalog::new(&fixtures_root(), &["LineLengthCheck"], "java");
    let runner = AnalysisRunner::new(Arc::new(CheckerEngine::new()));
    let report = VerificationEngine::new(runner).run(&catalog);
    assert!(report.passed(), "{}", report.render_text());
}

#[test]
fn test_smaller_limit_breaks_the_good_sample() {
    let catalog = FixtureCatalog::new(&fixtures_root(), &["LineLengthCheck"], "java");
    let engine = CheckerEngine::new()
        .with_properties(PropertiesExpander::new().with("line.max", "20"));
    let report = VerificationEngine::new(AnalysisRunner::new(Arc::new(engine))).run(&catalog);
    let case = report.case("LineLengthCheck").unwrap();
    assert_eq!(case.true_negative.code(), Some("UNEXPECTED_VIOLATION"));
    assert_eq!(case.true_positive.code(), Some("EXPECTATION_NOT_MET"));
}

#[test]
fn test_shipped_settings_file_describes_builtin_catalog() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("stylecheck.toml");
    let config = HarnessConfig::from_file(&path).expect("stylecheck.toml loads");
    assert_eq!(config.fixtures_root.as_deref(), Some(fixtures_root().as_path()));
    assert_eq!(config.effective_sample_extension(), "java");

    let catalog = FixtureCatalog::from_config(&config, Path::new("unused"));
    assert_eq!(catalog.rules(), FixtureCatalog::builtin(&fixtures_root()).rules());
    assert_eq!(config.properties.get("line.max").map(String::as_str), Some("80"));
}
