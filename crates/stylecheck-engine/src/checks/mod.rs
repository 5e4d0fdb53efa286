//! Style checks and the registry that builds them from configuration modules.

pub mod empty_lines;
pub mod java_ast;
pub mod line_length;
pub mod method_body_comments;
pub mod regexp_singleline;
pub mod registry;
pub mod string_concat;

use crate::source::SourceFile;

pub use empty_lines::EmptyLinesCheck;
pub use line_length::LineLengthCheck;
pub use method_body_comments::MethodBodyCommentsCheck;
pub use regexp_singleline::RegexpSinglelineCheck;
pub use string_concat::StringLiteralsConcatenationCheck;

/// A violation found by a check, before the checker attaches file and severity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    /// 1-based line.
    pub line: u32,
    /// 1-based column.
    pub column: u32,
    pub message: String,
}

impl Finding {
    pub fn new(line: u32, column: u32, message: impl Into<String>) -> Self {
        Self {
            line,
            column,
            message: message.into(),
        }
    }
}

/// A configured style check.
pub trait Check: Send + Sync {
    /// Module name this check was registered under.
    fn id(&self) -> &str;

    /// Inspect one file. Checks that need a syntax tree return nothing when the
    /// file has none.
    fn check(&self, file: &SourceFile) -> Vec<Finding>;
}
