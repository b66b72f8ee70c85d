//! Fixture tests for the highlighter
//! These lock the rule ordering: the expected strings are the exact
//! byte sequences the sequential passes produce.

use super::highlight;

#[test]
fn test_plain_text_untouched() {
    assert_eq!(highlight("plain words only"), "plain words only");
    assert_eq!(highlight(""), "");
}

#[test]
fn test_numbers_red() {
    assert_eq!(highlight("abc 42 def"), "abc \x1b[31m42\x1b[39m def");
}

#[test]
fn test_single_quoted_magenta() {
    assert_eq!(highlight("'ab'"), "\x1b[35m'ab'\x1b[39m");
}

#[test]
fn test_unpaired_quote_untouched() {
    assert_eq!(highlight("it s fine"), "it s fine");
}

#[test]
fn test_operators_cyan() {
    assert_eq!(highlight("a + b"), "a \x1b[36m+\x1b[39m b");
    assert_eq!(highlight("a && b"), "a \x1b[36m&&\x1b[39m b");
}

#[test]
fn test_keyword_green_needs_nonword_neighbors() {
    assert_eq!(highlight(" let x "), " \x1b[32mlet\x1b[39m x ");
    // No surrounding non-word characters, no match
    assert_eq!(highlight("let"), "let");
}

#[test]
fn test_reserved_yellow() {
    assert_eq!(highlight(" else { "), " \x1b[33melse\x1b[39m { ");
}

#[test]
fn test_comment_cyan_to_end_of_line() {
    assert_eq!(highlight("code // note"), "code \x1b[36m// note\x1b[39m");
}

#[test]
fn test_number_then_operator_composition() {
    // NUMBER runs before OPERATOR; both rules land in one line
    assert_eq!(
        highlight("x = 42"),
        "x \x1b[36m=\x1b[39m \x1b[31m42\x1b[39m"
    );
}

#[test]
fn test_double_quotes_rewrapped_by_operator_rule() {
    // The operator class contains '"', so the quote characters of an
    // already-wrapped string get wrapped again. Sequential substitution,
    // reproduced exactly.
    assert_eq!(
        highlight("say \"hi\""),
        "say \x1b[35m\x1b[36m\"\x1b[39mhi\x1b[36m\"\x1b[39m\x1b[39m"
    );
}

#[test]
fn test_number_inside_comment_keeps_inner_wrap() {
    // NUMBER fires before COMMENT, so the digit keeps its inner color
    assert_eq!(
        highlight("// x 5"),
        "\x1b[36m// x \x1b[31m5\x1b[39m\x1b[39m"
    );
}

#[test]
fn test_keyword_inside_string_not_rematched() {
    // After the quote passes, the text before "let" ends in an escape
    // code's final letter (a word character), so the keyword rule cannot
    // fire inside the string. Ordering is doing the token exclusion.
    let out = highlight("\"let it\"");
    assert!(!out.contains("\x1b[32m"));
}
