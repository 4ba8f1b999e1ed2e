// std imports
use std::iter::Peekable;
use std::str::CharIndices;

// local imports
use crate::case;
use crate::error::CompileError;
use crate::pattern::{CharClass, Pattern, Token};

// ---

/// Options applied when compiling a pattern.
///
/// Both options are baked into the compiled [`Pattern`]; matching itself is not configurable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MatchOptions {
    /// When `false`, literals and class members are folded to lowercase, and so is the text being matched.
    pub case_sensitive: bool,
    /// Character that makes the next character literal, `None` disables escaping.
    pub escape: Option<char>,
}

impl MatchOptions {
    pub const DEFAULT_ESCAPE: char = '\\';

    pub const fn new() -> Self {
        Self {
            case_sensitive: true,
            escape: Some(Self::DEFAULT_ESCAPE),
        }
    }

    pub const fn case_sensitive(mut self, value: bool) -> Self {
        self.case_sensitive = value;
        self
    }

    pub const fn escape(mut self, escape: Option<char>) -> Self {
        self.escape = escape;
        self
    }
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self::new()
    }
}

// ---

/// Compiles `raw` into a [`Pattern`] using the given options.
///
/// # Examples
///
/// ```
/// use wildcard::{CompileError, MatchOptions, compile};
///
/// let pattern = compile("[!abc]*", MatchOptions::new()).unwrap();
/// assert!(pattern.matches("def"));
/// assert!(!pattern.matches("abc"));
///
/// let pattern = compile("ABC", MatchOptions::new().case_sensitive(false)).unwrap();
/// assert!(pattern.matches("abc"));
///
/// assert_eq!(
///     compile("[abc", MatchOptions::new()),
///     Err(CompileError::UnterminatedClass { offset: 0 }),
/// );
/// ```
pub fn compile(raw: &str, options: MatchOptions) -> Result<Pattern, CompileError> {
    Compiler::new(options).compile(raw)
}

// ---

type Chars<'a> = Peekable<CharIndices<'a>>;

struct Compiler {
    options: MatchOptions,
    tokens: Vec<Token>,
}

impl Compiler {
    fn new(options: MatchOptions) -> Self {
        Self {
            options,
            tokens: Vec::new(),
        }
    }

    fn compile(mut self, raw: &str) -> Result<Pattern, CompileError> {
        let mut chars = raw.char_indices().peekable();
        while let Some((offset, ch)) = chars.next() {
            let token = match ch {
                _ if self.is_escape(ch) => Token::Literal(self.fold(escaped(&mut chars, offset)?)),
                '*' => Token::AnySequence,
                '?' => Token::AnySingle,
                '[' => self.class(&mut chars, offset)?,
                _ => Token::Literal(self.fold(ch)),
            };
            self.push(token);
        }

        Ok(Pattern::from_tokens(self.tokens, !self.options.case_sensitive))
    }

    fn push(&mut self, token: Token) {
        if token == Token::AnySequence && self.tokens.last() == Some(&Token::AnySequence) {
            return;
        }
        self.tokens.push(token);
    }

    fn class(&self, chars: &mut Chars<'_>, offset: usize) -> Result<Token, CompileError> {
        let negated = chars.next_if(|&(_, ch)| ch == '!' && !self.is_escape(ch)).is_some();
        let mut members = Vec::new();
        let mut first = true;

        loop {
            let Some((i, ch)) = chars.next() else {
                return Err(CompileError::UnterminatedClass { offset });
            };
            match ch {
                _ if self.is_escape(ch) => members.push(escaped(chars, i)?),
                // A leading `]` is a member unless it ends the pattern.
                ']' if first && chars.peek().is_some() => members.push(ch),
                ']' => break,
                _ => members.push(ch),
            }
            first = false;
        }

        if members.is_empty() {
            return Err(CompileError::EmptyClass { offset });
        }

        let members = members.into_iter().map(|ch| self.fold(ch));
        Ok(Token::CharClass(CharClass::new(members, negated)))
    }

    #[inline]
    fn is_escape(&self, ch: char) -> bool {
        self.options.escape == Some(ch)
    }

    #[inline]
    fn fold(&self, ch: char) -> char {
        if self.options.case_sensitive { ch } else { case::fold(ch) }
    }
}

fn escaped(chars: &mut Chars<'_>, offset: usize) -> Result<char, CompileError> {
    match chars.next() {
        Some((_, ch)) => Ok(ch),
        None => Err(CompileError::DanglingEscape { offset }),
    }
}

#[cfg(test)]
mod tests;
