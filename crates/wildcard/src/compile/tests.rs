use assert_matches::assert_matches;
use rstest::rstest;

use super::*;

fn tokens(raw: &str) -> Vec<Token> {
    compile(raw, MatchOptions::new()).unwrap().tokens().to_vec()
}

fn class(members: &str, negated: bool) -> Token {
    Token::CharClass(CharClass::new(members.chars(), negated))
}

#[test]
fn test_pattern_parsing_literal() {
    assert_eq!(
        tokens("abc"),
        vec![Token::Literal('a'), Token::Literal('b'), Token::Literal('c')]
    );
}

#[test]
fn test_pattern_parsing_empty() {
    assert!(tokens("").is_empty());
}

#[test]
fn test_pattern_parsing_wildcards() {
    assert_eq!(tokens("*"), vec![Token::AnySequence]);
    assert_eq!(tokens("?"), vec![Token::AnySingle]);
    assert_eq!(
        tokens("?*?"),
        vec![Token::AnySingle, Token::AnySequence, Token::AnySingle]
    );
}

#[rstest]
#[case("**")]
#[case("***")]
#[case("*****")]
fn test_pattern_parsing_multiple_asterisks(#[case] raw: &str) {
    assert_eq!(tokens(raw), vec![Token::AnySequence]);
}

#[test]
fn test_pattern_parsing_asterisks_collapse_only_when_adjacent() {
    assert_eq!(
        tokens("a**b"),
        vec![Token::Literal('a'), Token::AnySequence, Token::Literal('b')]
    );
    assert_eq!(
        tokens("*?*"),
        vec![Token::AnySequence, Token::AnySingle, Token::AnySequence]
    );
    assert_eq!(
        tokens(r"*\**"),
        vec![Token::AnySequence, Token::Literal('*'), Token::AnySequence]
    );
}

#[rstest]
#[case(r"\*", '*')]
#[case(r"\?", '?')]
#[case(r"\[", '[')]
#[case(r"\]", ']')]
#[case(r"\\", '\\')]
#[case(r"\a", 'a')]
fn test_pattern_parsing_escaped(#[case] raw: &str, #[case] expected: char) {
    assert_eq!(tokens(raw), vec![Token::Literal(expected)]);
}

#[test]
fn test_pattern_parsing_custom_escape() {
    let options = MatchOptions::new().escape(Some('%'));
    let pattern = compile(r"%*\", options).unwrap();
    assert_eq!(pattern.tokens(), &[Token::Literal('*'), Token::Literal('\\')]);
}

#[test]
fn test_pattern_parsing_no_escape() {
    let options = MatchOptions::new().escape(None);
    let pattern = compile(r"a\*", options).unwrap();
    assert_eq!(
        pattern.tokens(),
        &[Token::Literal('a'), Token::Literal('\\'), Token::AnySequence]
    );
}

#[test]
fn test_pattern_parsing_class() {
    assert_eq!(tokens("[cab]"), vec![class("abc", false)]);
    assert_eq!(tokens("[!abc]"), vec![class("abc", true)]);
    assert_eq!(tokens("[aab]"), vec![class("ab", false)]);
}

#[test]
fn test_pattern_parsing_class_members_are_literal() {
    assert_eq!(tokens("[*?[]"), vec![class("*?[", false)]);
    assert_eq!(tokens("[a-c]"), vec![class("-ac", false)]);
    assert_eq!(tokens("[a!]"), vec![class("!a", false)]);
    assert_eq!(tokens(r"[\]\\]"), vec![class(r"]\", false)]);
}

#[test]
fn test_pattern_parsing_class_leading_bracket() {
    assert_eq!(tokens("[]abc]"), vec![class("]abc", false)]);
    assert_eq!(tokens("[!]abc]"), vec![class("]abc", true)]);
    assert_eq!(tokens("[]]"), vec![class("]", false)]);
}

#[test]
fn test_pattern_parsing_lone_closing_bracket() {
    assert_eq!(tokens("a]"), vec![Token::Literal('a'), Token::Literal(']')]);
}

#[test]
fn test_pattern_parsing_complex() {
    assert_eq!(
        tokens(r"x*[!0-]?\*"),
        vec![
            Token::Literal('x'),
            Token::AnySequence,
            class("-0", true),
            Token::AnySingle,
            Token::Literal('*'),
        ]
    );
}

#[test]
fn test_pattern_parsing_case_insensitive() {
    let options = MatchOptions::new().case_sensitive(false);
    let pattern = compile(r"Ab[XY]\Z", options).unwrap();
    assert_eq!(
        pattern.tokens(),
        &[
            Token::Literal('a'),
            Token::Literal('b'),
            class("xy", false),
            Token::Literal('z'),
        ]
    );
    assert!(!pattern.is_case_sensitive());
}

#[rstest]
#[case(r"ab\", CompileError::DanglingEscape { offset: 2 })]
#[case(r"\", CompileError::DanglingEscape { offset: 0 })]
#[case(r"[ab\", CompileError::DanglingEscape { offset: 3 })]
#[case("[abc", CompileError::UnterminatedClass { offset: 0 })]
#[case("x[", CompileError::UnterminatedClass { offset: 1 })]
#[case("[!", CompileError::UnterminatedClass { offset: 0 })]
#[case(r"[a\]", CompileError::UnterminatedClass { offset: 0 })]
#[case("[]", CompileError::EmptyClass { offset: 0 })]
#[case("[!]", CompileError::EmptyClass { offset: 0 })]
#[case("ab[]", CompileError::EmptyClass { offset: 2 })]
#[case("[]abc", CompileError::UnterminatedClass { offset: 0 })]
#[case("a[]b", CompileError::UnterminatedClass { offset: 1 })]
#[case("[!]x", CompileError::UnterminatedClass { offset: 0 })]
#[case(r"[]\]", CompileError::UnterminatedClass { offset: 0 })]
#[case(r"[]\", CompileError::DanglingEscape { offset: 2 })]
fn test_pattern_parsing_errors(#[case] raw: &str, #[case] expected: CompileError) {
    assert_eq!(compile(raw, MatchOptions::new()), Err(expected));
}

#[test]
fn test_error_offset_is_in_bytes() {
    assert_matches!(
        compile("ä[", MatchOptions::new()),
        Err(CompileError::UnterminatedClass { offset: 2 })
    );
    assert_eq!(CompileError::EmptyClass { offset: 7 }.offset(), 7);
}

#[test]
fn test_error_display() {
    assert_eq!(
        CompileError::DanglingEscape { offset: 2 }.to_string(),
        "dangling escape character at offset 2"
    );
    assert_eq!(
        CompileError::UnterminatedClass { offset: 0 }.to_string(),
        "unterminated character class starting at offset 0"
    );
}

#[test]
fn test_no_escape_trailing_backslash_is_literal() {
    let options = MatchOptions::new().escape(None);
    assert_matches!(compile(r"ab\", options), Ok(_));
}

#[test]
fn test_default_options() {
    let options = MatchOptions::default();
    assert!(options.case_sensitive);
    assert_eq!(options.escape, Some('\\'));
    assert_eq!(options, MatchOptions::new());
}

#[test]
fn test_pattern_parsing_class_escape_before_negation() {
    let options = MatchOptions::new().escape(Some('!'));
    let pattern = compile("[!a]", options).unwrap();
    assert_eq!(pattern.tokens(), &[class("a", false)]);
    assert!(pattern.matches("a"));
    assert!(!pattern.matches("b"));

    let pattern = compile("[!!a]", options).unwrap();
    assert_eq!(pattern.tokens(), &[class("!a", false)]);
}
