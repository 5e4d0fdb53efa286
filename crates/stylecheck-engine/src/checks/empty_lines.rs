//! EmptyLinesCheck — blank lines inside method and constructor bodies.

use std::collections::BTreeSet;

use stylecheck_core::ConfigError;

use super::java_ast::method_bodies;
use super::{Check, Finding};
use crate::config::Configuration;
use crate::source::SourceFile;

pub const MESSAGE: &str = "Empty line inside method";

#[derive(Default)]
pub struct EmptyLinesCheck;

impl EmptyLinesCheck {
    pub fn from_config(_module: &Configuration) -> Result<Box<dyn Check>, ConfigError> {
        Ok(Box::new(Self))
    }
}

impl Check for EmptyLinesCheck {
    fn id(&self) -> &str {
        "EmptyLinesCheck"
    }

    fn check(&self, file: &SourceFile) -> Vec<Finding> {
        let Some(tree) = file.tree() else {
            return Vec::new();
        };
        // Rows are 0-based; nested bodies overlap their enclosing body.
        let mut rows = BTreeSet::new();
        for body in method_bodies(tree.root_node()) {
            let first = body.start_position().row + 1;
            let last = body.end_position().row;
            for row in first..last {
                if file
                    .lines()
                    .get(row)
                    .is_some_and(|line| line.trim().is_empty())
                {
                    rows.insert(row);
                }
            }
        }
        rows.into_iter()
            .map(|row| Finding::new(row as u32 + 1, 1, MESSAGE))
            .collect()
    }
}
