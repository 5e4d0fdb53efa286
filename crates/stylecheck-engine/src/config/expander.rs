//! `${name}` property expansion.

use stylecheck_core::{ConfigError, FxHashMap};

/// Resolves property names referenced as `${name}` in configuration values.
pub trait PropertyResolver {
    fn resolve(&self, name: &str) -> Option<String>;
}

/// Resolver backed by an in-memory map of properties.
#[derive(Debug, Clone, Default)]
pub struct PropertiesExpander {
    values: FxHashMap<String, String>,
}

impl PropertiesExpander {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for PropertiesExpander {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl PropertyResolver for PropertiesExpander {
    fn resolve(&self, name: &str) -> Option<String> {
        self.values.get(name).cloned()
    }
}

/// Expand every `${name}` reference in `value`.
///
/// When a reference cannot be resolved and `default` is given, the whole value
/// becomes `default`. Otherwise an unresolved name is an error.
pub fn expand(
    value: &str,
    resolver: &dyn PropertyResolver,
    default: Option<&str>,
) -> Result<String, ConfigError> {
    let mut out = String::with_capacity(value.len());
    let mut rest = value;

    while let Some(start) = rest.find("${") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let end = after.find('}').ok_or_else(|| ConfigError::Invalid {
            message: format!("unterminated property reference in '{value}'"),
        })?;
        let name = &after[..end];
        if name.is_empty() {
            return Err(ConfigError::Invalid {
                message: format!("empty property reference in '{value}'"),
            });
        }
        match resolver.resolve(name) {
            Some(resolved) => out.push_str(&resolved),
            None => {
                return match default {
                    Some(fallback) => Ok(fallback.to_string()),
                    None => Err(ConfigError::UndefinedProperty {
                        name: name.to_string(),
                    }),
                };
            }
        }
        rest = &after[end + 1..];
    }

    out.push_str(rest);
    Ok(out)
}
