use std::thread;

use assert_matches::assert_matches;

use super::*;

#[test]
fn test_caches_compiled_patterns() {
    let cache = PatternCache::new();
    assert!(cache.is_empty());
    assert_eq!(cache.get("*.rs", MatchOptions::new()), None);

    let first = cache.get_or_compile("*.rs", MatchOptions::new()).unwrap();
    let second = cache.get_or_compile("*.rs", MatchOptions::new()).unwrap();
    assert_eq!(first, second);
    assert_eq!(first, Pattern::new("*.rs").unwrap());
    assert_eq!(cache.len(), 1);
    assert_eq!(cache.get("*.rs", MatchOptions::new()), Some(first));
}

#[test]
fn test_options_are_part_of_the_key() {
    let cache = PatternCache::new();
    let sensitive = cache.get_or_compile("ABC", MatchOptions::new()).unwrap();
    let insensitive = cache
        .get_or_compile("ABC", MatchOptions::new().case_sensitive(false))
        .unwrap();

    assert_eq!(cache.len(), 2);
    assert!(!sensitive.matches("abc"));
    assert!(insensitive.matches("abc"));
}

#[test]
fn test_errors_are_not_cached() {
    let cache = PatternCache::new();
    assert_matches!(
        cache.get_or_compile("[abc", MatchOptions::new()),
        Err(CompileError::UnterminatedClass { .. })
    );
    assert!(cache.is_empty());
}

#[test]
fn test_clear() {
    let cache = PatternCache::new();
    cache.get_or_compile("a", MatchOptions::new()).unwrap();
    cache.get_or_compile("b", MatchOptions::new()).unwrap();
    assert_eq!(cache.len(), 2);
    cache.clear();
    assert!(cache.is_empty());
}

#[test]
fn test_concurrent_access() {
    let cache = PatternCache::new();
    let raws = ["*.log", "a?c", "[!x]*", "plain"];

    thread::scope(|s| {
        for _ in 0..8 {
            s.spawn(|| {
                for raw in raws {
                    let pattern = cache.get_or_compile(raw, MatchOptions::new()).unwrap();
                    assert_eq!(pattern, Pattern::new(raw).unwrap());
                }
            });
        }
    });

    assert_eq!(cache.len(), raws.len());
}

#[test]
fn test_grows_per_distinct_pattern_until_cleared() {
    let cache = PatternCache::new();
    for i in 0..100 {
        cache.get_or_compile(&format!("*{}*", i), MatchOptions::new()).unwrap();
        cache.get_or_compile(&format!("*{}*", i), MatchOptions::new()).unwrap();
    }
    assert_eq!(cache.len(), 100);
    cache.clear();
    assert!(cache.is_empty());
}
