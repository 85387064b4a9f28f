//! Pass 2: line compaction — one logical line per file.

use regex::Regex;
use std::sync::LazyLock;

static RE_CONTINUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\[ \t]*\r?\n").unwrap());
static RE_LINE_BREAK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\r\n|\r|\n").unwrap());

/// Join backslash-continued lines. The backslash, any blanks after it and
/// the line break go; the next line's indentation stays since it belongs
/// to the continued literal.
pub fn join_continuations(content: &str) -> String {
    RE_CONTINUATION.replace_all(content, "").into_owned()
}

/// Trim every line and drop the ones left empty.
pub fn drop_blank_lines(content: &str) -> String {
    let mut out = String::with_capacity(content.len());
    for line in content.lines().map(str::trim).filter(|l| !l.is_empty()) {
        out.push_str(line);
        out.push('\n');
    }
    out
}

/// Remove every remaining line break.
pub fn remove_line_breaks(content: &str) -> String {
    RE_LINE_BREAK.replace_all(content, "").into_owned()
}

/// Apply the three line passes in order.
pub fn compact_lines(content: &str) -> String {
    let joined = join_continuations(content);
    let trimmed = drop_blank_lines(&joined);
    remove_line_breaks(&trimmed)
}
