//! Configuration module tree.

use stylecheck_core::ConfigError;

use crate::listener::Severity;

/// One `<module>` element: its name, its expanded properties and nested modules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    name: String,
    properties: Vec<(String, String)>,
    children: Vec<Configuration>,
}

impl Configuration {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Builder-style property setter, mostly for tests.
    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_property(name, value);
        self
    }

    /// Builder-style child setter, mostly for tests.
    pub fn with_child(mut self, child: Configuration) -> Self {
        self.children.push(child);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set a property, replacing an earlier value of the same name.
    pub fn set_property(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.properties.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.properties.push((name, value)),
        }
    }

    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn properties(&self) -> &[(String, String)] {
        &self.properties
    }

    pub fn add_child(&mut self, child: Configuration) {
        self.children.push(child);
    }

    pub fn children(&self) -> &[Configuration] {
        &self.children
    }

    /// The module's own `severity` property, if any.
    pub fn severity(&self) -> Result<Option<Severity>, ConfigError> {
        match self.property("severity") {
            None => Ok(None),
            Some(raw) => Severity::parse(raw)
                .map(Some)
                .ok_or_else(|| ConfigError::InvalidProperty {
                    module: self.name.clone(),
                    property: "severity".to_string(),
                    message: format!("unknown severity '{raw}'"),
                }),
        }
    }

    /// True when the module declares `severity = ignore`.
    pub fn is_ignored(&self) -> bool {
        matches!(self.severity(), Ok(Some(Severity::Ignore)))
    }

    /// Parse an integer property, falling back to `default` when absent.
    pub fn usize_property(&self, name: &str, default: usize) -> Result<usize, ConfigError> {
        match self.property(name) {
            None => Ok(default),
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidProperty {
                module: self.name.clone(),
                property: name.to_string(),
                message: format!("'{raw}' is not a non-negative integer"),
            }),
        }
    }

    /// Parse a boolean property, falling back to `default` when absent.
    pub fn bool_property(&self, name: &str, default: bool) -> Result<bool, ConfigError> {
        match self.property(name).map(str::trim) {
            None => Ok(default),
            Some("true") => Ok(true),
            Some("false") => Ok(false),
            Some(raw) => Err(ConfigError::InvalidProperty {
                module: self.name.clone(),
                property: name.to_string(),
                message: format!("'{raw}' is not a boolean"),
            }),
        }
    }

    /// A property that must be present.
    pub fn required_property(&self, name: &str) -> Result<&str, ConfigError> {
        self.property(name).ok_or_else(|| ConfigError::InvalidProperty {
            module: self.name.clone(),
            property: name.to_string(),
            message: "property is required".to_string(),
        })
    }
}
