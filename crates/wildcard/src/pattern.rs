// std imports
use std::fmt::{self, Write};
use std::str::FromStr;

// third-party imports
use memchr::memmem;

// local imports
use crate::case;
use crate::compile::{MatchOptions, compile};
use crate::error::CompileError;

/// A compiled wildcard pattern for matching text strings.
///
/// Patterns are created from strings containing wildcard characters:
/// - `*` matches zero or more characters
/// - `?` matches exactly one UTF-8 character
/// - `[abc]` matches one of the listed characters, `[!abc]` any other character
/// - `\` escapes the next character
///
/// A pattern is immutable once compiled and can be shared between threads freely.
///
/// # Examples
///
/// ```
/// use wildcard::Pattern;
///
/// let pattern = Pattern::new("*.txt").unwrap();
/// assert!(pattern.matches("readme.txt"));
/// assert!(!pattern.matches("readme.md"));
///
/// let pattern = Pattern::new("test?.[lL]og").unwrap();
/// assert!(pattern.matches("test1.log"));
/// assert!(pattern.matches("test2.Log"));
/// assert!(!pattern.matches("test.log"));
/// ```
///
/// - Patterns can be displayed back to strings with proper escaping via the `Display` trait
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct Pattern {
    tokens: Box<[Token]>,
    folded: bool,
    shortcut: Shortcut,
}

impl Pattern {
    /// Compiles a pattern with default [`MatchOptions`].
    ///
    /// # Examples
    ///
    /// ```
    /// use wildcard::{CompileError, Pattern};
    ///
    /// let pattern = Pattern::new("hello*").unwrap();
    /// assert!(pattern.matches("hello world"));
    ///
    /// // Escaped wildcards
    /// let pattern = Pattern::new(r"file\*.txt").unwrap();
    /// assert!(pattern.matches("file*.txt"));
    /// assert!(!pattern.matches("file123.txt"));
    ///
    /// // Trailing backslash is an error
    /// assert_eq!(Pattern::new(r"path\"), Err(CompileError::DanglingEscape { offset: 4 }));
    /// ```
    pub fn new(raw: impl AsRef<str>) -> Result<Self, CompileError> {
        Self::with_options(raw, MatchOptions::default())
    }

    /// Compiles a pattern with the given options.
    pub fn with_options(raw: impl AsRef<str>, options: MatchOptions) -> Result<Self, CompileError> {
        compile(raw.as_ref(), options)
    }

    pub(crate) fn from_tokens(tokens: Vec<Token>, folded: bool) -> Self {
        let shortcut = Shortcut::detect(&tokens, folded);
        Self {
            tokens: tokens.into_boxed_slice(),
            folded,
            shortcut,
        }
    }

    /// Returns the compiled token sequence.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Returns `true` if the pattern was compiled case-sensitively.
    pub fn is_case_sensitive(&self) -> bool {
        !self.folded
    }

    #[inline]
    /// Tests whether the pattern matches the given text.
    ///
    /// Returns `true` if the entire text matches the pattern, `false` otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use wildcard::Pattern;
    ///
    /// let pattern = Pattern::new("*.rs").unwrap();
    /// assert!(pattern.matches("main.rs"));
    /// assert!(pattern.matches("lib.rs"));
    /// assert!(!pattern.matches("main.txt"));
    ///
    /// // UTF-8 character matching
    /// let pattern = Pattern::new("??").unwrap();
    /// assert!(pattern.matches("ab"));
    /// assert!(pattern.matches("🦀🎉"));
    /// assert!(!pattern.matches("a"));
    ///
    /// // Complex patterns with backtracking
    /// let pattern = Pattern::new("*test*").unwrap();
    /// assert!(pattern.matches("this is a test case"));
    /// assert!(pattern.matches("test"));
    /// assert!(!pattern.matches("no match here"));
    /// ```
    pub fn matches(&self, text: &str) -> bool {
        match self.shortcut.apply(text) {
            Some(result) => result,
            None => self.scan(text),
        }
    }

    // Two-index scan with a single bookmark at the most recent `*`.
    // Each retry moves the bookmark one character further, so the scan is bounded
    // by the product of pattern and text lengths and needs no extra memory.
    fn scan(&self, text: &str) -> bool {
        let tokens = &*self.tokens;
        let mut p = 0;
        let mut t = 0;
        let mut bookmark: Option<(usize, usize)> = None;

        loop {
            if let Some(token) = tokens.get(p) {
                if *token == Token::AnySequence {
                    bookmark = Some((p + 1, t));
                    p += 1;
                    continue;
                }
                if let Some(ch) = text[t..].chars().next() {
                    if token.accepts(self.fold(ch)) {
                        p += 1;
                        t += ch.len_utf8();
                        continue;
                    }
                }
            } else if t == text.len() {
                return true;
            }

            let Some((star_p, star_t)) = bookmark else {
                return false;
            };
            let Some(skipped) = text[star_t..].chars().next() else {
                return false;
            };
            let star_t = star_t + skipped.len_utf8();
            bookmark = Some((star_p, star_t));
            p = star_p;
            t = star_t;
        }
    }

    #[inline]
    fn fold(&self, ch: char) -> char {
        if self.folded { case::fold(ch) } else { ch }
    }
}

impl Default for Pattern {
    /// Returns the empty pattern, which matches only the empty string.
    fn default() -> Self {
        Self::from_tokens(Vec::new(), false)
    }
}

impl FromStr for Pattern {
    type Err = CompileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for token in self.tokens.iter() {
            match token {
                Token::Literal(ch) => {
                    if matches!(*ch, '*' | '?' | '[' | ']' | '\\') {
                        f.write_char('\\')?;
                    }
                    f.write_char(*ch)?;
                }
                Token::AnySingle => f.write_char('?')?,
                Token::AnySequence => f.write_char('*')?,
                Token::CharClass(class) => {
                    f.write_char('[')?;
                    if class.negated {
                        f.write_char('!')?;
                    }
                    for (i, &ch) in class.members.iter().enumerate() {
                        if matches!(ch, ']' | '\\') || (i == 0 && ch == '!') {
                            f.write_char('\\')?;
                        }
                        f.write_char(ch)?;
                    }
                    f.write_char(']')?;
                }
            }
        }
        Ok(())
    }
}

// ---

/// A single unit of a compiled pattern.
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub enum Token {
    /// Matches exactly this character.
    Literal(char),
    /// Matches any single character (`?`).
    AnySingle,
    /// Matches zero or more characters (`*`).
    AnySequence,
    /// Matches one character that is, or with negation is not, a member (`[...]`).
    CharClass(CharClass),
}

impl Token {
    #[inline]
    fn accepts(&self, ch: char) -> bool {
        match self {
            Self::Literal(expected) => *expected == ch,
            Self::AnySingle | Self::AnySequence => true,
            Self::CharClass(class) => class.contains(ch),
        }
    }
}

// ---

/// Set of characters of a `[...]` class.
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct CharClass {
    members: Box<[char]>,
    negated: bool,
}

impl CharClass {
    pub(crate) fn new(members: impl IntoIterator<Item = char>, negated: bool) -> Self {
        let mut members: Vec<char> = members.into_iter().collect();
        members.sort_unstable();
        members.dedup();
        Self {
            members: members.into_boxed_slice(),
            negated,
        }
    }

    /// Class members, sorted and deduplicated.
    pub fn members(&self) -> &[char] {
        &self.members
    }

    pub fn negated(&self) -> bool {
        self.negated
    }

    #[inline]
    pub fn contains(&self, ch: char) -> bool {
        self.members.binary_search(&ch).is_ok() != self.negated
    }
}

// ---

/// Fast path for case-sensitive patterns made of literals with optional stars at the ends.
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
enum Shortcut {
    General,
    Any,
    Exact(Box<str>),
    Prefix(Box<str>),
    Suffix(Box<str>),
    Contains(Box<str>),
}

impl Shortcut {
    fn detect(tokens: &[Token], folded: bool) -> Self {
        if let [Token::AnySequence] = tokens {
            return Self::Any;
        }
        if folded {
            return Self::General;
        }

        let (leading, rest) = match tokens.split_first() {
            Some((Token::AnySequence, rest)) => (true, rest),
            _ => (false, tokens),
        };
        let (trailing, middle) = match rest.split_last() {
            Some((Token::AnySequence, middle)) => (true, middle),
            _ => (false, rest),
        };

        let mut literal = String::with_capacity(middle.len());
        for token in middle {
            match token {
                Token::Literal(ch) => literal.push(*ch),
                _ => return Self::General,
            }
        }
        let literal = literal.into_boxed_str();

        match (leading, trailing) {
            (false, false) => Self::Exact(literal),
            (false, true) => Self::Prefix(literal),
            (true, false) => Self::Suffix(literal),
            (true, true) => Self::Contains(literal),
        }
    }

    #[inline]
    fn apply(&self, text: &str) -> Option<bool> {
        match self {
            Self::General => None,
            Self::Any => Some(true),
            Self::Exact(literal) => Some(text == &**literal),
            Self::Prefix(literal) => Some(text.starts_with(&**literal)),
            Self::Suffix(literal) => Some(text.ends_with(&**literal)),
            Self::Contains(literal) => Some(memmem::find(text.as_bytes(), literal.as_bytes()).is_some()),
        }
    }
}
