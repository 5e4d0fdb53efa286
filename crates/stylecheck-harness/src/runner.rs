//! Analysis runner, the seam between the harness and the analysis engine.
//!
//! An [`AnalysisEngine`] loads a configuration, registers a listener, checks
//! one sample and tears everything down again. [`AnalysisRunner`] gives each
//! call a fresh [`EventCollector`], converts engine panics into errors and
//! enforces the per-analysis timeout.

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crossbeam_channel::RecvTimeoutError;
use stylecheck_core::{EngineError, HarnessError};
use stylecheck_engine::{
    load_configuration_file, AuditListener, CheckRegistry, Checker, PropertiesExpander,
};

use crate::collector::EventCollector;

/// An analysis engine the harness can drive.
///
/// Implementations must acquire every engine-internal resource inside
/// `analyze` and release it before returning, on success and on failure.
pub trait AnalysisEngine: Send + Sync {
    /// Short name used in reports.
    fn name(&self) -> &str;

    /// Run the engine configured by `config` against `sample`, streaming
    /// every reported violation into `listener`.
    fn analyze(
        &self,
        config: &Path,
        sample: &Path,
        listener: &mut dyn AuditListener,
    ) -> Result<(), HarnessError>;
}

/// [`AnalysisEngine`] backed by the reference [`Checker`].
pub struct CheckerEngine {
    registry: CheckRegistry,
    properties: PropertiesExpander,
}

impl CheckerEngine {
    /// Built-in checks, no properties.
    pub fn new() -> Self {
        Self {
            registry: CheckRegistry::with_builtins(),
            properties: PropertiesExpander::new(),
        }
    }

    /// Properties used for `${name}` expansion in every loaded configuration.
    pub fn with_properties(mut self, properties: PropertiesExpander) -> Self {
        self.properties = properties;
        self
    }

    /// Replace the check registry.
    pub fn with_registry(mut self, registry: CheckRegistry) -> Self {
        self.registry = registry;
        self
    }
}

impl Default for CheckerEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalysisEngine for CheckerEngine {
    fn name(&self) -> &str {
        "checker"
    }

    fn analyze(
        &self,
        config: &Path,
        sample: &Path,
        listener: &mut dyn AuditListener,
    ) -> Result<(), HarnessError> {
        let configuration = load_configuration_file(config, &self.properties, true).map_err(
            |source| HarnessError::ConfigurationLoad {
                path: config.to_path_buf(),
                source,
            },
        )?;

        let mut checker = Checker::new();
        checker
            .configure(&configuration, &self.registry)
            .map_err(|e| match e {
                EngineError::Config(source) => HarnessError::ConfigurationLoad {
                    path: config.to_path_buf(),
                    source,
                },
                source => HarnessError::AnalysisEngine {
                    sample: sample.to_path_buf(),
                    source,
                },
            })?;
        checker.add_listener(listener);
        checker
            .process(&[sample.to_path_buf()])
            .map_err(|source| HarnessError::AnalysisEngine {
                sample: sample.to_path_buf(),
                source,
            })?;
        checker.destroy();
        Ok(())
    }
}

/// Runs an engine against one sample at a time, each into a fresh collector.
#[derive(Clone)]
pub struct AnalysisRunner {
    engine: Arc<dyn AnalysisEngine>,
    timeout: Option<Duration>,
    /// Timed-out analysis threads that were left running. Shared by clones.
    detached: Arc<AtomicUsize>,
}

impl AnalysisRunner {
    /// Runner without a timeout.
    pub fn new(engine: Arc<dyn AnalysisEngine>) -> Self {
        Self {
            engine,
            timeout: None,
            detached: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Per-analysis timeout; `None` runs on the calling thread.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn engine_name(&self) -> &str {
        self.engine.name()
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Number of timed-out analyses whose threads were detached so far.
    pub fn detached_analyses(&self) -> usize {
        self.detached.load(Ordering::Relaxed)
    }

    /// Analyze `sample` with the configuration at `config`.
    ///
    /// With a timeout the engine runs on a dedicated thread. A timed-out
    /// analysis is reported as `AnalysisTimeout`; its thread is left to finish
    /// on its own and its result is discarded.
    pub fn run(&self, config: &Path, sample: &Path) -> Result<EventCollector, HarnessError> {
        if !sample.is_file() {
            return Err(HarnessError::FixtureResourceMissing {
                rule: rule_of(sample),
                resource: sample.to_path_buf(),
            });
        }

        let started = Instant::now();
        let result = match self.timeout {
            None => analyze_guarded(self.engine.as_ref(), config, sample),
            Some(timeout) => self.run_with_timeout(config, sample, timeout),
        };
        tracing::debug!(
            engine = self.engine.name(),
            sample = %sample.display(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            ok = result.is_ok(),
            "analysis finished"
        );
        result
    }

    fn run_with_timeout(
        &self,
        config: &Path,
        sample: &Path,
        timeout: Duration,
    ) -> Result<EventCollector, HarnessError> {
        let (tx, rx) = crossbeam_channel::bounded(1);
        let engine = Arc::clone(&self.engine);
        let config_owned = config.to_path_buf();
        let sample_owned = sample.to_path_buf();
        let thread_name = format!("analysis-{}", rule_of(sample));

        std::thread::Builder::new()
            .name(thread_name.clone())
            .spawn(move || {
                let result = analyze_guarded(engine.as_ref(), &config_owned, &sample_owned);
                // The receiver is gone after a timeout.
                let _ = tx.send(result);
            })
            .map_err(|e| HarnessError::AnalysisEngine {
                sample: sample.to_path_buf(),
                source: EngineError::Crashed {
                    message: format!("cannot spawn analysis thread: {e}"),
                },
            })?;

        match rx.recv_timeout(timeout) {
            Ok(result) => result,
            Err(RecvTimeoutError::Timeout) => {
                let detached = self.detached.fetch_add(1, Ordering::Relaxed) + 1;
                tracing::warn!(
                    sample = %sample.display(),
                    timeout_ms = timeout.as_millis() as u64,
                    thread = %thread_name,
                    detached,
                    "analysis timed out, thread detached"
                );
                Err(HarnessError::AnalysisTimeout {
                    sample: sample.to_path_buf(),
                    timeout_ms: timeout.as_millis() as u64,
                })
            }
            Err(RecvTimeoutError::Disconnected) => Err(HarnessError::AnalysisEngine {
                sample: sample.to_path_buf(),
                source: EngineError::Crashed {
                    message: "analysis thread exited without a result".to_string(),
                },
            }),
        }
    }
}

/// Run the engine into a fresh collector; a panic becomes `AnalysisEngine`.
fn analyze_guarded(
    engine: &dyn AnalysisEngine,
    config: &Path,
    sample: &Path,
) -> Result<EventCollector, HarnessError> {
    let mut collector = EventCollector::new();
    let outcome = catch_unwind(AssertUnwindSafe(|| {
        engine.analyze(config, sample, &mut collector)
    }));
    match outcome {
        Ok(Ok(())) => Ok(collector),
        Ok(Err(e)) => Err(e),
        Err(payload) => Err(HarnessError::AnalysisEngine {
            sample: sample.to_path_buf(),
            source: EngineError::Crashed {
                message: panic_message(&*payload),
            },
        }),
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "engine panicked".to_string()
    }
}

/// Fixture directory name of a sample, used when nothing better is known.
fn rule_of(sample: &Path) -> String {
    sample
        .parent()
        .and_then(Path::file_name)
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "<unknown>".to_string())
}
