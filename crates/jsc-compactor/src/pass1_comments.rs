//! Pass 1: comment stripping.
//!
//! Only ever applied to vault-protected text, so `//` or `/*` inside string
//! literals is invisible here.

use regex::Regex;
use std::sync::LazyLock;

/// Block comments up to the first `*/`, or line comments up to (not including) the line break.
static RE_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)/\*.*?\*/|//[^\r\n]*").unwrap());

/// Remove `//` and `/* */` comments. An unclosed block comment is kept.
pub fn strip(content: &str) -> String {
    RE_COMMENT.replace_all(content, "").into_owned()
}
