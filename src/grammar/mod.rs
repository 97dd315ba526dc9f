//! Grammar checking contract.
//!
//! The checking engine is a black box: the pipeline only needs `check` to
//! report issues and `correct` to apply them. `languagetool` talks to a
//! LanguageTool server, `rulebook` runs the same rules locally through
//! nlprule, and `Passthrough` reports nothing.

pub mod languagetool;
pub mod rulebook;

pub use languagetool::LanguageToolClient;
pub use rulebook::NlpruleChecker;

use crate::engine::error::Result;
use serde::Serialize;

/// A grammar issue reported by the checker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GrammarMatch {
    pub message: String,
    /// Candidate fixes, best first. May be empty.
    pub replacements: Vec<String>,
    /// Character offset of the flagged region in the checked text.
    pub offset: usize,
    /// Length of the flagged region in characters.
    pub length: usize,
    pub rule_id: Option<String>,
}

impl GrammarMatch {
    pub fn new(message: impl Into<String>, offset: usize, length: usize) -> Self {
        Self {
            message: message.into(),
            replacements: Vec::new(),
            offset,
            length,
            rule_id: None,
        }
    }

    pub fn with_replacement(mut self, replacement: impl Into<String>) -> Self {
        self.replacements.push(replacement.into());
        self
    }

    pub fn with_rule_id(mut self, rule_id: impl Into<String>) -> Self {
        self.rule_id = Some(rule_id.into());
        self
    }

    pub fn best_replacement(&self) -> Option<&str> {
        self.replacements.first().map(String::as_str)
    }
}

pub trait GrammarChecker: Send + Sync {
    fn check(&self, text: &str) -> Result<Vec<GrammarMatch>>;

    fn correct(&self, text: &str, matches: &[GrammarMatch]) -> Result<String> {
        Ok(apply_matches(text, matches))
    }
}

/// Applies the first replacement of every match, left to right.
///
/// Matches without replacements, matches running past the end of the text
/// and matches overlapping an already applied one are skipped.
pub fn apply_matches(text: &str, matches: &[GrammarMatch]) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut ordered: Vec<&GrammarMatch> = matches
        .iter()
        .filter(|m| !m.replacements.is_empty())
        .collect();
    ordered.sort_by_key(|m| (m.offset, m.length));

    let mut out = String::with_capacity(text.len());
    let mut cursor = 0;
    for m in ordered {
        let end = m.offset.saturating_add(m.length);
        if m.offset < cursor || end > chars.len() {
            continue;
        }
        out.extend(&chars[cursor..m.offset]);
        out.push_str(&m.replacements[0]);
        cursor = end;
    }
    out.extend(&chars[cursor..]);
    out
}

/// Checker that never reports anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct Passthrough;

impl GrammarChecker for Passthrough {
    fn check(&self, _text: &str) -> Result<Vec<GrammarMatch>> {
        Ok(Vec::new())
    }
}
