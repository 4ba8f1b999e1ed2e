// std imports
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

// third-party imports
use wildcard::{CompileError, MatchOptions, Pattern};

// ---

/// Memoizes compiled patterns keyed by options and raw pattern text.
///
/// Compilation happens outside the lock. When two threads race on the same key both
/// compile it and the first inserted pattern is kept, which is equal to the other one.
/// Failed compilations are not cached.
///
/// There is no eviction: every distinct `(options, raw)` pair stays until [`PatternCache::clear`].
/// The cache suits a bounded set of configured patterns, not patterns taken from untrusted input.
#[derive(Debug, Default)]
pub struct PatternCache {
    patterns: RwLock<HashMap<MatchOptions, HashMap<Box<str>, Pattern>>>,
}

impl PatternCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_compile(&self, raw: &str, options: MatchOptions) -> Result<Pattern, CompileError> {
        if let Some(pattern) = self.get(raw, options) {
            log::trace!("pattern cache hit: {:?}", raw);
            return Ok(pattern);
        }

        log::trace!("pattern cache miss: {:?}", raw);
        let pattern = wildcard::compile(raw, options)?;

        let mut patterns = self.patterns.write().unwrap_or_else(PoisonError::into_inner);
        Ok(patterns
            .entry(options)
            .or_default()
            .entry(raw.into())
            .or_insert(pattern)
            .clone())
    }

    pub fn get(&self, raw: &str, options: MatchOptions) -> Option<Pattern> {
        let patterns = self.patterns.read().unwrap_or_else(PoisonError::into_inner);
        patterns.get(&options)?.get(raw).cloned()
    }

    pub fn len(&self) -> usize {
        let patterns = self.patterns.read().unwrap_or_else(PoisonError::into_inner);
        patterns.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.patterns.write().unwrap_or_else(PoisonError::into_inner).clear();
    }
}

#[cfg(test)]
mod tests;
