//! Ordered include/exclude filtering of texts with glob-style wildcard patterns.
//!
//! Patterns are compiled by the [`wildcard`] crate; this crate groups them into
//! [`PatternSet`]s, memoizes compilation in a [`Matcher`] and loads filter [`Settings`]
//! from configuration files.

// public modules
pub mod app;
pub mod cache;
pub mod cli;
pub mod error;
pub mod filtering;
pub mod matcher;
pub mod settings;

// public uses
pub use cache::PatternCache;
pub use error::{Error, Result};
pub use filtering::{Disposition, PatternEntry, PatternSet, PatternSetBuilder, Precedence};
pub use matcher::Matcher;
pub use settings::Settings;
pub use wildcard::{CharClass, CompileError, MatchOptions, Pattern, Token, compile};
