//! Literal vault — swaps quoted string literals for indexed placeholders so
//! the rewriting passes never see their contents.

use regex::{Captures, Regex};
use std::sync::LazyLock;

/// `'...'` or `"..."` on a single line, shortest match.
static RE_LITERAL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"'.*?'|".*?""#).unwrap());
static RE_PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"__\{(\d+)\}__").unwrap());

/// Placeholder token for literal `index`.
pub fn placeholder(index: usize) -> String {
    format!("__{{{index}}}__")
}

/// Extracted literals in order of appearance. Entry `i` belongs to placeholder `i`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LiteralTable {
    literals: Vec<String>,
}

impl LiteralTable {
    pub fn len(&self) -> usize {
        self.literals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.literals.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.literals.iter().map(String::as_str)
    }
}

/// Replace every string literal with its placeholder.
pub fn protect(content: &str) -> (String, LiteralTable) {
    let mut table = LiteralTable::default();
    let working = RE_LITERAL.replace_all(content, |caps: &Captures| {
        let token = placeholder(table.literals.len());
        table.literals.push(caps[0].to_string());
        token
    });
    (working.into_owned(), table)
}

/// Put literals back by index. Restored text is not scanned again, and
/// tokens with no table entry are left alone.
pub fn restore(content: &str, table: &LiteralTable) -> String {
    if table.is_empty() {
        return content.to_string();
    }
    RE_PLACEHOLDER
        .replace_all(content, |caps: &Captures| {
            caps[1]
                .parse::<usize>()
                .ok()
                .and_then(|i| table.get(i))
                .unwrap_or(&caps[0])
                .to_string()
        })
        .into_owned()
}

/// Number of placeholder tokens in `content`.
pub fn count_placeholders(content: &str) -> usize {
    RE_PLACEHOLDER.find_iter(content).count()
}
