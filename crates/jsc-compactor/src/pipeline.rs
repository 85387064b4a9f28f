//! Compaction pipeline — an ordered list of passes run between literal
//! protection and restoration.

use crate::{pass1_comments, pass2_lines, pass3_semicolons, pass4_whitespace, vault};
use tracing::debug;

/// A named content rewrite. Passes are pure and stateless.
#[derive(Debug, Clone, Copy)]
pub struct Pass {
    pub name: &'static str,
    pub apply: fn(&str) -> String,
}

impl Pass {
    pub const fn new(name: &'static str, apply: fn(&str) -> String) -> Self {
        Self { name, apply }
    }
}

/// Default pass order. Whitespace compaction must follow the comment and line passes.
pub const STANDARD_PASSES: &[Pass] = &[
    Pass::new("strip comments", pass1_comments::strip),
    Pass::new("compact lines", pass2_lines::compact_lines),
    Pass::new("normalize semicolons", pass3_semicolons::normalize_semicolons),
    Pass::new("compact whitespace", pass4_whitespace::compact_whitespace),
];

/// Runs its passes over vault-protected text.
///
/// Protection and restoration are not passes: they always wrap the whole
/// list, so no pass can observe the inside of a string literal.
#[derive(Debug, Clone)]
pub struct Pipeline {
    passes: Vec<Pass>,
}

impl Pipeline {
    pub fn new(passes: Vec<Pass>) -> Self {
        Self { passes }
    }

    pub fn standard() -> Self {
        Self::new(STANDARD_PASSES.to_vec())
    }

    /// Pass names in execution order.
    pub fn pass_names(&self) -> Vec<String> {
        self.passes.iter().map(|p| p.name.to_string()).collect()
    }

    /// Compact one unit of source text.
    pub fn compact(&self, content: &str) -> String {
        let (mut working, table) = vault::protect(content);
        debug!(literals = table.len(), "substituted string literals");

        for pass in &self.passes {
            working = (pass.apply)(&working);
            debug!(pass = pass.name, len = working.len(), "pass applied");
        }

        let restored = vault::restore(&working, &table);
        debug!(len = restored.len(), "restored string literals");
        restored
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::standard()
    }
}
