// std imports
use std::slice;

// third-party imports
use serde::{Deserialize, Serialize};
use wildcard::{CompileError, MatchOptions, Pattern};

// local imports
use crate::error::{Error, Result};

// ---

/// Whether texts matched by an entry are accepted or rejected.
#[derive(PartialEq, Eq, Clone, Copy, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Disposition {
    Include,
    Exclude,
}

impl Disposition {
    pub fn is_include(self) -> bool {
        self == Self::Include
    }
}

// ---

/// Rule choosing which of the matching entries decides the verdict.
#[derive(PartialEq, Eq, Clone, Copy, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Precedence {
    /// The last matching entry in insertion order wins, so later rules override earlier ones.
    #[default]
    LastMatch,
    /// The first matching entry in insertion order wins.
    FirstMatch,
}

// ---

/// A compiled pattern together with its disposition and position in the set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternEntry {
    pub pattern: Pattern,
    pub source: String,
    pub disposition: Disposition,
    pub order: usize,
}

// ---

/// Ordered list of include/exclude patterns evaluated together to classify a text.
///
/// A text that matches no entry is rejected.
///
/// # Examples
///
/// ```
/// use wildfilter::{Disposition::*, MatchOptions, PatternSet};
///
/// let set = PatternSet::compile([("*.log", Include), ("debug.log", Exclude)], MatchOptions::new()).unwrap();
/// assert!(set.evaluate("app.log"));
/// assert!(!set.evaluate("debug.log"));
/// assert!(!set.evaluate("readme.txt"));
/// assert_eq!(set.evaluate_verbose("debug.log"), Some(1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PatternSet {
    entries: Vec<PatternEntry>,
    precedence: Precedence,
}

impl PatternSet {
    /// Compiles all entries with the given options, failing on the first malformed pattern.
    pub fn compile<I, S>(entries: I, options: MatchOptions) -> Result<Self>
    where
        I: IntoIterator<Item = (S, Disposition)>,
        S: Into<String>,
    {
        Self::builder().options(options).extend(entries).build()
    }

    pub fn builder() -> PatternSetBuilder {
        PatternSetBuilder::new()
    }

    /// Returns the same set evaluated with another precedence.
    pub fn with_precedence(mut self, precedence: Precedence) -> Self {
        self.precedence = precedence;
        self
    }

    pub fn precedence(&self) -> Precedence {
        self.precedence
    }

    /// Returns `true` if the deciding entry for `text` is an include entry.
    pub fn evaluate(&self, text: &str) -> bool {
        self.decide(text).is_some_and(|entry| entry.disposition.is_include())
    }

    /// Returns the index of the entry deciding the verdict for `text`, or `None` if no entry matches.
    pub fn evaluate_verbose(&self, text: &str) -> Option<usize> {
        match self.precedence {
            Precedence::LastMatch => {
                let mut decided = None;
                for (i, entry) in self.entries.iter().enumerate() {
                    if entry.pattern.matches(text) {
                        decided = Some(i);
                    }
                }
                decided
            }
            Precedence::FirstMatch => self.entries.iter().position(|entry| entry.pattern.matches(text)),
        }
    }

    /// Returns the entry deciding the verdict for `text`.
    pub fn decide(&self, text: &str) -> Option<&PatternEntry> {
        self.evaluate_verbose(text).map(|i| &self.entries[i])
    }

    /// Returns `true` if any entry matches `text`, regardless of its disposition.
    pub fn any_match(&self, text: &str) -> bool {
        self.first_match(text).is_some()
    }

    /// Returns the source of the first entry matching `text`, regardless of its disposition.
    pub fn first_match(&self, text: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.pattern.matches(text))
            .map(|entry| entry.source.as_str())
    }

    pub fn entries(&self) -> &[PatternEntry] {
        &self.entries
    }

    pub fn iter(&self) -> slice::Iter<'_, PatternEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a PatternSet {
    type Item = &'a PatternEntry;
    type IntoIter = slice::Iter<'a, PatternEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ---

/// Collects raw patterns and compiles them into a [`PatternSet`] in one step.
///
/// Nothing is compiled until [`build`](Self::build), and a single malformed pattern fails the whole build.
#[derive(Debug, Clone, Default)]
pub struct PatternSetBuilder {
    entries: Vec<(String, Disposition)>,
    options: MatchOptions,
    precedence: Precedence,
}

impl PatternSetBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn options(mut self, options: MatchOptions) -> Self {
        self.options = options;
        self
    }

    pub fn precedence(mut self, precedence: Precedence) -> Self {
        self.precedence = precedence;
        self
    }

    pub fn include(self, raw: impl Into<String>) -> Self {
        self.add(raw, Disposition::Include)
    }

    pub fn exclude(self, raw: impl Into<String>) -> Self {
        self.add(raw, Disposition::Exclude)
    }

    pub fn add(mut self, raw: impl Into<String>, disposition: Disposition) -> Self {
        self.entries.push((raw.into(), disposition));
        self
    }

    pub fn extend<I, S>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (S, Disposition)>,
        S: Into<String>,
    {
        self.entries
            .extend(entries.into_iter().map(|(raw, disposition)| (raw.into(), disposition)));
        self
    }

    /// Drops all collected entries, keeping options and precedence.
    pub fn clear(mut self) -> Self {
        self.entries.clear();
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn build(self) -> Result<PatternSet> {
        let options = self.options;
        self.build_with(|raw| wildcard::compile(raw, options))
    }

    /// Builds the set using a custom compile function, e.g. a caching one.
    pub fn build_with<F>(self, mut compile: F) -> Result<PatternSet>
    where
        F: FnMut(&str) -> std::result::Result<Pattern, CompileError>,
    {
        let mut entries = Vec::with_capacity(self.entries.len());
        for (order, (source, disposition)) in self.entries.into_iter().enumerate() {
            let pattern = match compile(&source) {
                Ok(pattern) => pattern,
                Err(source_err) => {
                    return Err(Error::InvalidPattern {
                        index: order,
                        pattern: source,
                        source: source_err,
                    });
                }
            };
            entries.push(PatternEntry {
                pattern,
                source,
                disposition,
                order,
            });
        }

        log::debug!(
            "compiled pattern set with {} entries, precedence {:?}",
            entries.len(),
            self.precedence
        );

        Ok(PatternSet {
            entries,
            precedence: self.precedence,
        })
    }
}

// ---
