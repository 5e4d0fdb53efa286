//! MethodBodyCommentsCheck — comments inside method and constructor bodies.

use stylecheck_core::ConfigError;

use super::java_ast::{column_of, line_of, method_bodies, strictly_inside, visit};
use super::{Check, Finding};
use crate::config::Configuration;
use crate::source::SourceFile;

pub const MESSAGE: &str = "Comments inside method body are prohibited";

const COMMENT_KINDS: &[&str] = &["line_comment", "block_comment"];

#[derive(Default)]
pub struct MethodBodyCommentsCheck;

impl MethodBodyCommentsCheck {
    pub fn from_config(_module: &Configuration) -> Result<Box<dyn Check>, ConfigError> {
        Ok(Box::new(Self))
    }
}

impl Check for MethodBodyCommentsCheck {
    fn id(&self) -> &str {
        "MethodBodyCommentsCheck"
    }

    fn check(&self, file: &SourceFile) -> Vec<Finding> {
        let Some(tree) = file.tree() else {
            return Vec::new();
        };
        let root = tree.root_node();
        let bodies = method_bodies(root);
        let mut findings = Vec::new();
        visit(root, &mut |node| {
            if COMMENT_KINDS.contains(&node.kind())
                && bodies.iter().any(|body| strictly_inside(node, *body))
            {
                findings.push(Finding::new(line_of(node), column_of(node), MESSAGE));
            }
        });
        findings
    }
}
