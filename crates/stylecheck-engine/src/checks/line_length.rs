//! LineLengthCheck — lines longer than `max` characters.

use regex::Regex;
use stylecheck_core::ConfigError;

use super::{Check, Finding};
use crate::config::Configuration;
use crate::source::SourceFile;

pub const DEFAULT_MAX: usize = 80;

pub struct LineLengthCheck {
    max: usize,
    ignore_pattern: Option<Regex>,
}

impl LineLengthCheck {
    pub fn new(max: usize) -> Self {
        Self {
            max,
            ignore_pattern: None,
        }
    }

    /// Properties: `max` (default 80), `ignorePattern` (lines matching it are skipped).
    pub fn from_config(module: &Configuration) -> Result<Box<dyn Check>, ConfigError> {
        let max = module.usize_property("max", DEFAULT_MAX)?;
        let ignore_pattern = module
            .property("ignorePattern")
            .map(|raw| {
                Regex::new(raw).map_err(|e| ConfigError::InvalidProperty {
                    module: module.name().to_string(),
                    property: "ignorePattern".to_string(),
                    message: e.to_string(),
                })
            })
            .transpose()?;
        Ok(Box::new(Self {
            max,
            ignore_pattern,
        }))
    }
}

impl Check for LineLengthCheck {
    fn id(&self) -> &str {
        "LineLengthCheck"
    }

    fn check(&self, file: &SourceFile) -> Vec<Finding> {
        file.lines()
            .iter()
            .enumerate()
            .filter_map(|(idx, line)| {
                let len = line.chars().count();
                if len <= self.max {
                    return None;
                }
                if self.ignore_pattern.as_ref().is_some_and(|re| re.is_match(line)) {
                    return None;
                }
                Some(Finding::new(
                    idx as u32 + 1,
                    self.max as u32 + 1,
                    format!(
                        "Line is longer than {} characters (found {}).",
                        self.max, len
                    ),
                ))
            })
            .collect()
    }
}
