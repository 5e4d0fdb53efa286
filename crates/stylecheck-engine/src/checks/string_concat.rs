//! StringLiteralsConcatenationCheck — `+` chains with a string literal operand.
//!
//! A chain like `"a" + b + "c"` parses as nested binary expressions; only the
//! outermost `+` of a chain is inspected so each chain is reported once.

use stylecheck_core::ConfigError;
use tree_sitter::Node;

use super::java_ast::{column_of, line_of, visit};
use super::{Check, Finding};
use crate::config::Configuration;
use crate::source::SourceFile;

pub const MESSAGE: &str = "Concatenation of string literals prohibited";

#[derive(Default)]
pub struct StringLiteralsConcatenationCheck;

impl StringLiteralsConcatenationCheck {
    pub fn from_config(_module: &Configuration) -> Result<Box<dyn Check>, ConfigError> {
        Ok(Box::new(Self))
    }
}

impl Check for StringLiteralsConcatenationCheck {
    fn id(&self) -> &str {
        "StringLiteralsConcatenationCheck"
    }

    fn check(&self, file: &SourceFile) -> Vec<Finding> {
        let Some(tree) = file.tree() else {
            return Vec::new();
        };
        let mut findings = Vec::new();
        visit(tree.root_node(), &mut |node| {
            if !is_plus(node) || node.parent().is_some_and(is_plus) {
                return;
            }
            if has_string_operand(node) {
                findings.push(Finding::new(line_of(node), column_of(node), MESSAGE));
            }
        });
        findings
    }
}

fn is_plus(node: Node<'_>) -> bool {
    node.kind() == "binary_expression"
        && node
            .child_by_field_name("operator")
            .is_some_and(|op| op.kind() == "+")
}

fn has_string_operand(node: Node<'_>) -> bool {
    ["left", "right"].iter().any(|field| {
        node.child_by_field_name(*field).is_some_and(|operand| {
            if is_plus(operand) {
                has_string_operand(operand)
            } else {
                operand.kind() == "string_literal"
            }
        })
    })
}
