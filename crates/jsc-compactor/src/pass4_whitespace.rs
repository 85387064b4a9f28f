//! Pass 4: whitespace compaction.

use regex::Regex;
use std::sync::LazyLock;

static RE_BLANK_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[ \t]{2,}|\t").unwrap());

/// Assignment and comparison operators, longest first so `===` wins over `==` and `=`.
/// `>==` and `<==` are not JavaScript but were in the legacy operator list.
static RE_OPERATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*(===|!==|>==|<==|==|!=|>=|<=|=)\s*").unwrap());

static RE_PUNCTUATION: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s*([{}():])\s*").unwrap());

/// Collapse tabs and space runs into a single space.
pub fn collapse_blanks(content: &str) -> String {
    RE_BLANK_RUN.replace_all(content, " ").into_owned()
}

/// Delete whitespace around operators, braces, parentheses and `:`.
/// Repeats until nothing changes, so `a ! = b` ends as `a!=b`.
pub fn remove_unneeded_spaces(content: &str) -> String {
    let mut result = content.to_string();
    loop {
        let tightened = RE_OPERATOR.replace_all(&result, "$1");
        let tightened = RE_PUNCTUATION.replace_all(&tightened, "$1").into_owned();
        if tightened == result {
            return result;
        }
        result = tightened;
    }
}

/// Apply both whitespace passes.
pub fn compact_whitespace(content: &str) -> String {
    remove_unneeded_spaces(&collapse_blanks(content))
}
