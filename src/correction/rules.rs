use crate::text::TaggedToken;
use std::ops::Range;

/// Replacement of one token's text, located by byte span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitution {
    pub span: Range<usize>,
    pub old: String,
    pub new: String,
    pub rule: &'static str,
}

/// A usage rule checked at a single token position.
///
/// Rules look at the tagged sequence but never at each other's output, and
/// never change the number of tokens.
pub trait CorrectionRule: Send + Sync {
    fn name(&self) -> &'static str;

    fn check(&self, tokens: &[TaggedToken], index: usize) -> Option<Substitution>;
}

/// "your" directly after a present-tense verb becomes "you"
/// ("What is your problem" -> "What is you problem").
#[derive(Debug, Clone, Copy, Default)]
pub struct YourAfterPresentVerb;

impl CorrectionRule for YourAfterPresentVerb {
    fn name(&self) -> &'static str {
        "your-after-present-verb"
    }

    fn check(&self, tokens: &[TaggedToken], index: usize) -> Option<Substitution> {
        let prev = tokens.get(index.checked_sub(1)?)?;
        let token = tokens.get(index)?;
        if token.token.lowercase() != "your" || !prev.tag.is_present_tense_verb() {
            return None;
        }
        Some(substitute(token, "you", self.name()))
    }
}

/// "are" directly after "what" becomes "is".
#[derive(Debug, Clone, Copy, Default)]
pub struct AreAfterWhat;

impl CorrectionRule for AreAfterWhat {
    fn name(&self) -> &'static str {
        "are-after-what"
    }

    fn check(&self, tokens: &[TaggedToken], index: usize) -> Option<Substitution> {
        let prev = tokens.get(index.checked_sub(1)?)?;
        let token = tokens.get(index)?;
        if token.token.lowercase() != "are" || prev.token.lowercase() != "what" {
            return None;
        }
        Some(substitute(token, "is", self.name()))
    }
}

/// The built-in rule list, in evaluation order.
pub fn default_rules() -> Vec<Box<dyn CorrectionRule>> {
    vec![Box::new(YourAfterPresentVerb), Box::new(AreAfterWhat)]
}

fn substitute(token: &TaggedToken, replacement: &str, rule: &'static str) -> Substitution {
    Substitution {
        span: token.token.span.clone(),
        old: token.token.text.clone(),
        new: match_capitalization(&token.token.text, replacement),
        rule,
    }
}

/// Carries a leading capital over from `original`.
fn match_capitalization(original: &str, replacement: &str) -> String {
    let capitalized = original.chars().next().is_some_and(char::is_uppercase);
    let mut chars = replacement.chars();
    match chars.next() {
        Some(first) if capitalized => first.to_uppercase().chain(chars).collect(),
        _ => replacement.to_string(),
    }
}
