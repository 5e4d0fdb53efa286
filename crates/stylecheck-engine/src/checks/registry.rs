//! CheckRegistry — module name → check factory.

use stylecheck_core::{ConfigError, FxHashMap};

use super::Check;
use crate::config::Configuration;

/// Builds a configured check from its `<module>` element.
pub type CheckFactory = fn(&Configuration) -> Result<Box<dyn Check>, ConfigError>;

/// Registry of every check module the engine can instantiate.
pub struct CheckRegistry {
    factories: FxHashMap<String, CheckFactory>,
}

impl CheckRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            factories: FxHashMap::default(),
        }
    }

    /// Create a registry with all built-in checks.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register("LineLengthCheck", super::LineLengthCheck::from_config);
        registry.register("RegexpSinglelineCheck", super::RegexpSinglelineCheck::from_config);
        registry.register("EmptyLinesCheck", super::EmptyLinesCheck::from_config);
        registry.register(
            "StringLiteralsConcatenationCheck",
            super::StringLiteralsConcatenationCheck::from_config,
        );
        registry.register("MethodBodyCommentsCheck", super::MethodBodyCommentsCheck::from_config);
        registry
    }

    /// Register a factory, replacing any earlier one with the same name.
    pub fn register(&mut self, name: &str, factory: CheckFactory) {
        self.factories.insert(name.to_string(), factory);
    }

    /// Whether a module name resolves, with or without the `Check` suffix.
    pub fn contains(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    /// Registered module names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of registered checks.
    pub fn count(&self) -> usize {
        self.factories.len()
    }

    /// Build the check for a configuration module.
    pub fn create(&self, module: &Configuration) -> Result<Box<dyn Check>, ConfigError> {
        let factory = self
            .lookup(module.name())
            .ok_or_else(|| ConfigError::UnknownModule {
                name: module.name().to_string(),
            })?;
        factory(module)
    }

    fn lookup(&self, name: &str) -> Option<CheckFactory> {
        self.factories
            .get(name)
            .or_else(|| self.factories.get(&format!("{name}Check")))
            .copied()
    }
}

impl Default for CheckRegistry {
    fn default() -> Self {
        Self::new()
    }
}
