//! Pass 3: semicolon normalization.

use regex::Regex;
use std::sync::LazyLock;

static RE_SEMICOLON_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r";{2,}").unwrap());

/// Collapse `;;+` into `;` and drop a `;` right before `}`.
pub fn normalize_semicolons(content: &str) -> String {
    let collapsed = RE_SEMICOLON_RUN.replace_all(content, ";");
    collapsed.replace(";}", "}")
}
