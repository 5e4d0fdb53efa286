//! Checker — runs configured checks over files and streams events to listeners.
//!
//! Lifecycle: `configure` → `add_listener` → `process` → `destroy`. The Java
//! parser and configured checks are owned by the checker and released on
//! `destroy` or drop, whichever comes first.

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::path::{Path, PathBuf};

use stylecheck_core::{ConfigError, EngineError};

use crate::checks::registry::CheckRegistry;
use crate::checks::Check;
use crate::config::Configuration;
use crate::listener::{AuditEvent, AuditListener, Severity};
use crate::source::{JavaParser, SourceFile};

const ROOT_MODULE: &str = "Checker";
const GROUP_MODULE: &str = "TreeWalker";

struct ConfiguredCheck {
    check: Box<dyn Check>,
    severity: Severity,
}

pub struct Checker<'l> {
    checks: Vec<ConfiguredCheck>,
    listeners: Vec<&'l mut dyn AuditListener>,
    parser: Option<JavaParser>,
}

impl<'l> Checker<'l> {
    pub fn new() -> Self {
        Self {
            checks: Vec::new(),
            listeners: Vec::new(),
            parser: None,
        }
    }

    /// Instantiate every check module of `config`. Replaces any earlier configuration.
    pub fn configure(
        &mut self,
        config: &Configuration,
        registry: &CheckRegistry,
    ) -> Result<(), EngineError> {
        if config.name() != ROOT_MODULE {
            return Err(ConfigError::Invalid {
                message: format!(
                    "root module must be '{ROOT_MODULE}', found '{}'",
                    config.name()
                ),
            }
            .into());
        }
        let severity = config.severity()?.unwrap_or_default();
        let mut checks = Vec::new();
        collect_checks(config, severity, registry, &mut checks)?;

        self.parser = Some(JavaParser::new()?);
        self.checks = checks;
        tracing::debug!(checks = self.checks.len(), "checker configured");
        Ok(())
    }

    /// Register a listener; it receives every event of every later `process` call.
    pub fn add_listener(&mut self, listener: &'l mut dyn AuditListener) {
        self.listeners.push(listener);
    }

    pub fn check_count(&self) -> usize {
        self.checks.len()
    }

    /// Check every file in order. Returns the number of events emitted.
    ///
    /// Stops at the first file that cannot be read or parsed; events already
    /// delivered for earlier files stay delivered.
    pub fn process(&mut self, files: &[PathBuf]) -> Result<usize, EngineError> {
        let Some(parser) = self.parser.as_mut() else {
            return Err(EngineError::NotConfigured);
        };

        for listener in self.listeners.iter_mut() {
            listener.audit_started();
        }

        let mut total = 0;
        for path in files {
            for listener in self.listeners.iter_mut() {
                listener.file_started(path);
            }

            let events = check_file(path, parser, &self.checks)?;
            total += events.len();
            for event in &events {
                for listener in self.listeners.iter_mut() {
                    listener.add_error(event);
                }
            }

            for listener in self.listeners.iter_mut() {
                listener.file_finished(path);
            }
        }

        for listener in self.listeners.iter_mut() {
            listener.audit_finished();
        }
        Ok(total)
    }

    /// Release the parser, checks and listener borrows.
    pub fn destroy(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if self.parser.take().is_some() {
            tracing::debug!(checks = self.checks.len(), "checker destroyed");
        }
        self.checks.clear();
        self.listeners.clear();
    }
}

impl Default for Checker<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Checker<'_> {
    fn drop(&mut self) {
        self.release();
    }
}

/// Walk the module tree. `TreeWalker` only groups checks and passes its severity down.
fn collect_checks(
    module: &Configuration,
    inherited: Severity,
    registry: &CheckRegistry,
    out: &mut Vec<ConfiguredCheck>,
) -> Result<(), EngineError> {
    for child in module.children() {
        let severity = child.severity()?.unwrap_or(inherited);
        if child.name() == GROUP_MODULE {
            collect_checks(child, severity, registry, out)?;
        } else {
            out.push(ConfiguredCheck {
                check: registry.create(child)?,
                severity,
            });
        }
    }
    Ok(())
}

/// Run every non-ignored check on one file; events sorted by (line, column).
fn check_file(
    path: &Path,
    parser: &mut JavaParser,
    checks: &[ConfiguredCheck],
) -> Result<Vec<AuditEvent>, EngineError> {
    let text = std::fs::read_to_string(path).map_err(|source| EngineError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let file = if SourceFile::is_java(path) {
        SourceFile::parse_java(path, text, parser)?
    } else {
        SourceFile::new(path, text)
    };

    let mut events = Vec::new();
    for configured in checks {
        if configured.severity == Severity::Ignore {
            continue;
        }
        let check = configured.check.as_ref();
        let findings = catch_unwind(AssertUnwindSafe(|| check.check(&file))).map_err(|_| {
            tracing::error!(
                check = check.id(),
                path = %path.display(),
                "check panicked during analysis"
            );
            EngineError::CheckPanicked {
                check: check.id().to_string(),
                path: path.to_path_buf(),
            }
        })?;
        events.extend(findings.into_iter().map(|finding| AuditEvent {
            file: path.to_path_buf(),
            line: finding.line,
            column: finding.column,
            message: finding.message,
            check_id: check.id().to_string(),
            severity: configured.severity,
        }));
    }
    events.sort_by(|a, b| a.line.cmp(&b.line).then(a.column.cmp(&b.column)));
    tracing::debug!(path = %path.display(), events = events.len(), "file checked");
    Ok(events)
}
