//! Source files handed to checks: text, split lines and the optional Java syntax tree.

use std::path::{Path, PathBuf};

use stylecheck_core::EngineError;
use tree_sitter::{Node, Parser, Tree};

/// Tree-sitter parser for Java sources.
pub struct JavaParser {
    parser: Parser,
}

impl JavaParser {
    pub fn new() -> Result<Self, EngineError> {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_java::LANGUAGE.into())
            .map_err(|e| EngineError::Parser {
                message: e.to_string(),
            })?;
        Ok(Self { parser })
    }

    /// Parse `text`, failing with `MalformedSource` if the tree contains any
    /// error or missing node.
    pub fn parse(&mut self, path: &Path, text: &str) -> Result<Tree, EngineError> {
        let tree = self
            .parser
            .parse(text, None)
            .ok_or_else(|| EngineError::Parser {
                message: format!("tree-sitter produced no tree for {}", path.display()),
            })?;
        let root = tree.root_node();
        if root.has_error() {
            let line = first_error_line(root).unwrap_or(1);
            return Err(EngineError::MalformedSource {
                path: path.to_path_buf(),
                line,
            });
        }
        Ok(tree)
    }
}

/// Line of the first error or missing node, depth-first.
fn first_error_line(node: Node<'_>) -> Option<u32> {
    if node.is_error() || node.is_missing() {
        return Some(node.start_position().row as u32 + 1);
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if child.has_error() || child.is_missing() {
            if let Some(line) = first_error_line(child) {
                return Some(line);
            }
        }
    }
    None
}

/// A source file loaded for checking.
pub struct SourceFile {
    path: PathBuf,
    text: String,
    lines: Vec<String>,
    tree: Option<Tree>,
}

impl SourceFile {
    /// Build a source file without a syntax tree (line-based checks only).
    pub fn new(path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        let text = text.into();
        let lines = text.lines().map(str::to_string).collect();
        Self {
            path: path.into(),
            text,
            lines,
            tree: None,
        }
    }

    /// Build a source file and parse it as Java.
    pub fn parse_java(
        path: impl Into<PathBuf>,
        text: impl Into<String>,
        parser: &mut JavaParser,
    ) -> Result<Self, EngineError> {
        let mut file = Self::new(path, text);
        file.tree = Some(parser.parse(&file.path, &file.text)?);
        Ok(file)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Line by 1-based number.
    pub fn line(&self, number: u32) -> Option<&str> {
        let idx = (number as usize).checked_sub(1)?;
        self.lines.get(idx).map(String::as_str)
    }

    pub fn tree(&self) -> Option<&Tree> {
        self.tree.as_ref()
    }

    /// True for `.java` files.
    pub fn is_java(path: &Path) -> bool {
        path.extension().is_some_and(|ext| ext == "java")
    }
}
