//! POS heuristic post-pass for usage errors the grammar checker leaves
//! behind.

pub mod rules;

pub use rules::{default_rules, AreAfterWhat, CorrectionRule, Substitution, YourAfterPresentVerb};

use crate::engine::error::Result;
use crate::text::{TaggedToken, Tagger};
use log::debug;

pub struct PosCorrector {
    rules: Vec<Box<dyn CorrectionRule>>,
}

impl Default for PosCorrector {
    fn default() -> Self {
        Self::new(default_rules())
    }
}

impl PosCorrector {
    pub fn new(rules: Vec<Box<dyn CorrectionRule>>) -> Self {
        Self { rules }
    }

    pub fn with_rule(mut self, rule: Box<dyn CorrectionRule>) -> Self {
        self.rules.push(rule);
        self
    }

    /// Scans left to right; at each position the first matching rule wins.
    pub fn find_substitutions(&self, tokens: &[TaggedToken]) -> Vec<Substitution> {
        (0..tokens.len())
            .filter_map(|index| self.rules.iter().find_map(|rule| rule.check(tokens, index)))
            .collect()
    }

    /// Tags `text` once and returns it with every substitution applied.
    pub fn correct(&self, tagger: &dyn Tagger, text: &str) -> Result<String> {
        let tokens = tagger.tag(text)?;
        let substitutions = self.find_substitutions(&tokens);
        for sub in &substitutions {
            debug!("{}: {:?} -> {:?} at {:?}", sub.rule, sub.old, sub.new, sub.span);
        }
        Ok(apply_substitutions(text, &substitutions))
    }
}

/// Rewrites each substitution's span. Spans must come from `text`, sorted
/// and non-overlapping; they are applied right to left so earlier spans
/// stay valid.
pub fn apply_substitutions(text: &str, substitutions: &[Substitution]) -> String {
    let mut out = text.to_string();
    for sub in substitutions.iter().rev() {
        if out.get(sub.span.clone()) == Some(sub.old.as_str()) {
            out.replace_range(sub.span.clone(), &sub.new);
        }
    }
    out
}
