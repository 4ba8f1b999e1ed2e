// third-party imports
use wildcard::{CompileError, MatchOptions, Pattern};

// local imports
use crate::{
    cache::PatternCache,
    error::Result,
    filtering::{Disposition, PatternSet, Precedence},
};

// ---

/// Entry point for compiling and evaluating patterns with shared options.
///
/// Compiled patterns are memoized unless the matcher is created with [`Matcher::uncached`].
/// Memoization is not observable: compiling the same pattern twice yields equal patterns.
///
/// # Examples
///
/// ```
/// use wildfilter::{Disposition::*, MatchOptions, Matcher};
///
/// let matcher = Matcher::new(MatchOptions::new().case_sensitive(false));
/// let pattern = matcher.compile_one("*.TXT").unwrap();
/// assert!(matcher.matches(&pattern, "notes.txt"));
///
/// let set = matcher.compile_set([("*", Include), ("*.tmp", Exclude)]).unwrap();
/// assert!(matcher.evaluate(&set, "main.rs"));
/// assert!(!matcher.evaluate(&set, "x.TMP"));
/// ```
#[derive(Debug)]
pub struct Matcher {
    options: MatchOptions,
    precedence: Precedence,
    cache: Option<PatternCache>,
}

impl Matcher {
    pub fn new(options: MatchOptions) -> Self {
        Self {
            options,
            precedence: Precedence::default(),
            cache: Some(PatternCache::new()),
        }
    }

    /// Creates a matcher that compiles every pattern from scratch.
    pub fn uncached(options: MatchOptions) -> Self {
        Self {
            cache: None,
            ..Self::new(options)
        }
    }

    /// Sets the precedence used for sets compiled by this matcher.
    pub fn with_precedence(mut self, precedence: Precedence) -> Self {
        self.precedence = precedence;
        self
    }

    pub fn options(&self) -> MatchOptions {
        self.options
    }

    pub fn precedence(&self) -> Precedence {
        self.precedence
    }

    pub fn compile_one(&self, raw: &str) -> std::result::Result<Pattern, CompileError> {
        match &self.cache {
            Some(cache) => cache.get_or_compile(raw, self.options),
            None => wildcard::compile(raw, self.options),
        }
    }

    pub fn compile_set<I, S>(&self, entries: I) -> Result<PatternSet>
    where
        I: IntoIterator<Item = (S, Disposition)>,
        S: Into<String>,
    {
        PatternSet::builder()
            .options(self.options)
            .precedence(self.precedence)
            .extend(entries)
            .build_with(|raw| self.compile_one(raw))
    }

    #[inline]
    pub fn matches(&self, pattern: &Pattern, text: &str) -> bool {
        pattern.matches(text)
    }

    #[inline]
    pub fn evaluate(&self, set: &PatternSet, text: &str) -> bool {
        set.evaluate(text)
    }

    #[inline]
    pub fn evaluate_verbose(&self, set: &PatternSet, text: &str) -> Option<usize> {
        set.evaluate_verbose(text)
    }

    /// Compiles `raw` (or takes it from the cache) and matches it against `text`.
    ///
    /// Each distinct `raw` adds a cache entry, so use an [uncached](Matcher::uncached) matcher
    /// for open-ended pattern input.
    pub fn is_match(&self, raw: &str, text: &str) -> std::result::Result<bool, CompileError> {
        Ok(self.compile_one(raw)?.matches(text))
    }

    /// Number of cached patterns, always zero for an uncached matcher.
    pub fn cache_len(&self) -> usize {
        self.cache.as_ref().map_or(0, PatternCache::len)
    }

    pub fn clear_cache(&self) {
        if let Some(cache) = &self.cache {
            cache.clear();
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::new(MatchOptions::default())
    }
}
