use super::{GrammarChecker, GrammarMatch};
use crate::engine::error::Result;
use crate::input::LoadError;
use log::{debug, info};
use nlprule::{Rules, Tokenizer};
use std::path::Path;
use std::sync::Arc;

/// Offline checker running LanguageTool's rule set through nlprule
/// (`en_rules.bin`). Suggestion offsets are already character indices.
pub struct NlpruleChecker {
    tokenizer: Arc<Tokenizer>,
    rules: Rules,
}

impl NlpruleChecker {
    pub fn new(tokenizer: Arc<Tokenizer>, rules: Rules) -> Self {
        Self { tokenizer, rules }
    }

    pub fn from_file(
        tokenizer: Arc<Tokenizer>,
        path: &Path,
    ) -> std::result::Result<Self, LoadError> {
        Ok(Self::new(tokenizer, load_rules(path)?))
    }
}

/// Loads a binary rule set.
pub fn load_rules(path: &Path) -> std::result::Result<Rules, LoadError> {
    if !path.exists() {
        return Err(LoadError::FileNotFound(path.to_path_buf()));
    }
    let rules = Rules::new(path).map_err(|e| LoadError::Parse(path.to_path_buf(), e.to_string()))?;
    info!("loaded grammar rules from {}", path.display());
    Ok(rules)
}

impl GrammarChecker for NlpruleChecker {
    fn check(&self, text: &str) -> Result<Vec<GrammarMatch>> {
        if text.trim().is_empty() {
            return Ok(Vec::new());
        }

        let matches: Vec<GrammarMatch> = self
            .rules
            .suggest(text, &self.tokenizer)
            .iter()
            .map(|suggestion| {
                let span = suggestion.span().char();
                GrammarMatch {
                    message: suggestion.message().to_string(),
                    replacements: suggestion.replacements().to_vec(),
                    offset: span.start,
                    length: span.end.saturating_sub(span.start),
                    rule_id: Some(suggestion.source().to_string()),
                }
            })
            .collect();

        debug!("nlprule: {} suggestions", matches.len());
        Ok(matches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::model::load_tokenizer;
    use std::path::PathBuf;

    fn model(name: &str) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("models").join(name)
    }

    #[test]
    fn test_missing_rules_file() {
        let result = load_rules(Path::new("/nonexistent/en_rules.bin"));
        assert!(matches!(result, Err(LoadError::FileNotFound(_))));
    }

    // Runs only when the English models have been downloaded into models/.
    #[test]
    fn test_corrects_agreement_with_models() {
        let (Ok(tokenizer), true) = (
            load_tokenizer(&model("en_tokenizer.bin")),
            model("en_rules.bin").exists(),
        ) else {
            return;
        };
        let checker = NlpruleChecker::from_file(Arc::new(tokenizer), &model("en_rules.bin")).unwrap();

        let text = "She was not been here since Monday.";
        let matches = checker.check(text).unwrap();
        assert!(!matches.is_empty());
        assert_eq!(checker.correct(text, &matches).unwrap(), "She was not here since Monday.");
        assert!(checker.check("").unwrap().is_empty());
    }
}
