//! RegexpSinglelineCheck — lines matching an illegal pattern.

use regex::{Regex, RegexBuilder};
use stylecheck_core::ConfigError;

use super::{Check, Finding};
use crate::config::Configuration;
use crate::source::SourceFile;

pub struct RegexpSinglelineCheck {
    format: Regex,
    message: String,
}

impl RegexpSinglelineCheck {
    /// Properties: `format` (required), `message`, `ignoreCase` (default false).
    pub fn from_config(module: &Configuration) -> Result<Box<dyn Check>, ConfigError> {
        let raw = module.required_property("format")?;
        let format = RegexBuilder::new(raw)
            .case_insensitive(module.bool_property("ignoreCase", false)?)
            .build()
            .map_err(|e| ConfigError::InvalidProperty {
                module: module.name().to_string(),
                property: "format".to_string(),
                message: e.to_string(),
            })?;
        let message = module
            .property("message")
            .map(str::to_string)
            .unwrap_or_else(|| format!("Line matches the illegal pattern '{raw}'."));
        Ok(Box::new(Self { format, message }))
    }
}

impl Check for RegexpSinglelineCheck {
    fn id(&self) -> &str {
        "RegexpSinglelineCheck"
    }

    fn check(&self, file: &SourceFile) -> Vec<Finding> {
        let mut findings = Vec::new();
        for (idx, line) in file.lines().iter().enumerate() {
            if let Some(found) = self.format.find(line) {
                let column = line[..found.start()].chars().count() as u32 + 1;
                findings.push(Finding::new(idx as u32 + 1, column, self.message.clone()));
            }
        }
        findings
    }
}
