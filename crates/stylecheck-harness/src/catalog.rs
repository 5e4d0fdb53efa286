//! Fixture catalog — the static table of rule identifiers and their fixture directories.
//!
//! Layout per rule `R`:
//!
//! ```text
//! R/config.xml       rule configuration, opaque to the harness
//! R/Invalid.<ext>    known-bad sample
//! R/Valid.<ext>      known-good sample
//! R/violations.txt   expected violations of the bad sample
//! ```

use std::path::{Path, PathBuf};

use stylecheck_core::errors::SampleKind;
use stylecheck_core::{FxHashSet, HarnessConfig, HarnessError};

pub const CONFIG_FILE: &str = "config.xml";
pub const INVALID_STEM: &str = "Invalid";
pub const VALID_STEM: &str = "Valid";
pub const VIOLATIONS_FILE: &str = "violations.txt";

/// Rules with fixtures shipped in `fixtures/checks/`.
pub const DEFAULT_RULES: &[&str] = &[
    "LineLengthCheck",
    "RegexpSinglelineCheck",
    "EmptyLinesCheck",
    "StringLiteralsConcatenationCheck",
    "MethodBodyCommentsCheck",
];

/// One rule identifier bound to its fixture directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureCase {
    rule: String,
    dir: PathBuf,
    extension: String,
}

impl FixtureCase {
    pub fn new(rule: impl Into<String>, dir: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self {
            rule: rule.into(),
            dir: dir.into(),
            extension: extension.into(),
        }
    }

    pub fn rule(&self) -> &str {
        &self.rule
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn config_path(&self) -> PathBuf {
        self.dir.join(CONFIG_FILE)
    }

    pub fn sample_path(&self, kind: SampleKind) -> PathBuf {
        let stem = match kind {
            SampleKind::Invalid => INVALID_STEM,
            SampleKind::Valid => VALID_STEM,
        };
        self.dir.join(format!("{stem}.{}", self.extension))
    }

    pub fn violations_path(&self) -> PathBuf {
        self.dir.join(VIOLATIONS_FILE)
    }

    /// The four resources every fixture directory must contain.
    pub fn resources(&self) -> [PathBuf; 4] {
        [
            self.config_path(),
            self.sample_path(SampleKind::Invalid),
            self.sample_path(SampleKind::Valid),
            self.violations_path(),
        ]
    }

    /// Fail with `FixtureResourceMissing` naming the first absent resource.
    pub fn ensure_resources(&self) -> Result<(), HarnessError> {
        match self.resources().into_iter().find(|path| !path.is_file()) {
            Some(resource) => Err(HarnessError::FixtureResourceMissing {
                rule: self.rule.clone(),
                resource,
            }),
            None => Ok(()),
        }
    }
}

/// All fixture cases of one harness run, in catalog order.
#[derive(Debug, Clone, Default)]
pub struct FixtureCatalog {
    cases: Vec<FixtureCase>,
}

impl FixtureCatalog {
    /// One case per rule, each under `root/<rule>`. Repeated identifiers keep
    /// their first position.
    pub fn new<S: AsRef<str>>(root: &Path, rules: &[S], extension: &str) -> Self {
        let mut seen = FxHashSet::default();
        let mut cases = Vec::with_capacity(rules.len());
        for rule in rules {
            let rule = rule.as_ref();
            if !seen.insert(rule.to_string()) {
                tracing::warn!(rule, "duplicate rule identifier in catalog, ignoring repeat");
                continue;
            }
            cases.push(FixtureCase::new(rule, root.join(rule), extension));
        }
        Self { cases }
    }

    /// The built-in rules under `root`, with `.java` samples.
    pub fn builtin(root: &Path) -> Self {
        Self::new(root, DEFAULT_RULES, "java")
    }

    /// Catalog described by a harness config; `default_root` applies when the
    /// config names no fixtures root, and the built-in rules when it lists none.
    pub fn from_config(config: &HarnessConfig, default_root: &Path) -> Self {
        let root = config.fixtures_root.as_deref().unwrap_or(default_root);
        let extension = config.effective_sample_extension();
        if config.rules.is_empty() {
            Self::new(root, DEFAULT_RULES, extension)
        } else {
            Self::new(root, config.rules.as_slice(), extension)
        }
    }

    pub fn cases(&self) -> &[FixtureCase] {
        &self.cases
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    pub fn rules(&self) -> Vec<&str> {
        self.cases.iter().map(FixtureCase::rule).collect()
    }
}
