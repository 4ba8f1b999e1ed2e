// std imports
use std::io::{self, IsTerminal, Write};

// third-party imports
use config::ConfigError;
use owo_colors::OwoColorize;
use thiserror::Error;
use wildcard::CompileError;

/// Error is an error which may occur in the application.
#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid pattern #{index} {pattern:?}: {source}")]
    InvalidPattern {
        index: usize,
        pattern: String,
        #[source]
        source: CompileError,
    },
    #[error("failed to load configuration: {0}")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl Error {
    /// Returns the underlying pattern compilation error, if any.
    pub fn compile_error(&self) -> Option<&CompileError> {
        match self {
            Self::InvalidPattern { source, .. } => Some(source),
            _ => None,
        }
    }

    /// Prints the error to stderr, highlighted if stderr is a terminal.
    pub fn log(&self) {
        let stderr = io::stderr();
        let colored = stderr.is_terminal();
        self.log_to(&mut stderr.lock(), colored).ok();
    }

    pub fn log_to<W: Write>(&self, target: &mut W, colored: bool) -> io::Result<()> {
        if colored {
            writeln!(target, "{} {}", "error:".bright_red().bold(), self)
        } else {
            writeln!(target, "error: {}", self)
        }
    }
}

/// Result is an alias for standard result with bound Error type.
pub type Result<T> = std::result::Result<T, Error>;
