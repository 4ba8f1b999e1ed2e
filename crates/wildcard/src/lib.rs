//! A lightweight glob-style wildcard pattern compiler and matcher.
//!
//! Patterns are compiled once into an immutable token sequence and then matched against
//! any number of texts. Compilation is the only fallible step; matching is a total function.
//!
//! # Pattern Syntax
//!
//! - `*` - Matches zero or more characters, runs of `*` are collapsed into one
//! - `?` - Matches exactly one UTF-8 character
//! - `[abc]` - Matches one of the listed characters
//! - `[!abc]` - Matches one character that is not listed
//! - `[]abc]` - A `]` right after the opening bracket (or `[!`) is a member
//! - `\*`, `\?`, `\[`, `\\` - Escaped literal characters (the escape character is configurable)
//! - Any other character matches itself
//!
//! # Examples
//!
//! ```
//! use wildcard::Pattern;
//!
//! let pattern = Pattern::new("*.txt").unwrap();
//! assert!(pattern.matches("hello.txt"));
//! assert!(!pattern.matches("hello.rs"));
//!
//! let pattern = Pattern::new("test?.log").unwrap();
//! assert!(pattern.matches("test1.log"));
//! assert!(!pattern.matches("test.log"));
//! assert!(!pattern.matches("test12.log"));
//!
//! let pattern = Pattern::new("[!_]*").unwrap();
//! assert!(pattern.matches("public"));
//! assert!(!pattern.matches("_private"));
//! ```
//!
//! # Case Sensitivity
//!
//! Case-insensitive patterns fold both the pattern and the text to lowercase:
//!
//! ```
//! use wildcard::{MatchOptions, Pattern};
//!
//! let options = MatchOptions::new().case_sensitive(false);
//! let pattern = Pattern::with_options("README.*", options).unwrap();
//! assert!(pattern.matches("readme.md"));
//! assert!(pattern.matches("ReadMe.txt"));
//! ```
//!
//! # Pattern Display
//!
//! Patterns can be converted back to strings with proper escaping:
//!
//! ```
//! use wildcard::Pattern;
//!
//! let pattern = Pattern::new("hello**world").unwrap();
//! assert_eq!(pattern.to_string(), "hello*world");
//!
//! let pattern = Pattern::new(r"file\*.[ba]").unwrap();
//! assert_eq!(pattern.to_string(), r"file\*.[ab]");
//! ```

mod case;
mod compile;
mod error;
mod pattern;

pub use compile::{MatchOptions, compile};
pub use error::CompileError;
pub use pattern::{CharClass, Pattern, Token};
