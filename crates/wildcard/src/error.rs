// third-party imports
use thiserror::Error;

/// Error which may occur when compiling a pattern.
///
/// Offsets are byte offsets into the raw pattern string.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompileError {
    #[error("dangling escape character at offset {offset}")]
    DanglingEscape { offset: usize },
    #[error("unterminated character class starting at offset {offset}")]
    UnterminatedClass { offset: usize },
    #[error("empty character class at offset {offset}")]
    EmptyClass { offset: usize },
}

impl CompileError {
    /// Byte offset in the raw pattern where the problem was detected.
    pub fn offset(&self) -> usize {
        match *self {
            Self::DanglingEscape { offset } => offset,
            Self::UnterminatedClass { offset } => offset,
            Self::EmptyClass { offset } => offset,
        }
    }
}
