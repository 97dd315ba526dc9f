// Configuration for the quill pipeline and its external collaborators
// All sections are optional in the TOML file; missing values take the defaults below

use super::error::{AssistError, Result};
use crate::thesaurus::ThesaurusFormat;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Rephrasing settings
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RephraseConfig {
    /// Rephrasings produced per run (default 3)
    pub count: usize,

    /// Chance that an open-class word is swapped for a synonym (default 0.4)
    pub substitution_probability: f64,

    /// Fixed RNG seed for reproducible output (default: none, seeded from entropy)
    pub seed: Option<u64>,
}

impl Default for RephraseConfig {
    fn default() -> Self {
        Self {
            count: 3,
            substitution_probability: 0.4,
            seed: None,
        }
    }
}

/// Where grammar checking runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GrammarBackend {
    /// A LanguageTool server at `endpoint`
    #[default]
    LanguageTool,
    /// LanguageTool's rules run locally from `resources.rules_model`
    Nlprule,
}

/// Part-of-speech tag model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TaggerKind {
    /// nlprule tokenizer model from `resources.tokenizer_model`
    #[default]
    Nlprule,
    /// Embedded word list with shape guessing; needs no model files
    Lexicon,
}

/// Grammar checking settings
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GrammarConfig {
    /// Checker to use (default languagetool)
    pub backend: GrammarBackend,


    /// Server base URL (default http://localhost:8081)
    pub endpoint: String,

    /// LanguageTool language code (default en-US)
    pub language: String,

    /// Request timeout in seconds (default 10)
    pub timeout_secs: u64,

    /// When false, grammar checking is skipped entirely (default true)
    pub enabled: bool,
}

impl Default for GrammarConfig {
    fn default() -> Self {
        Self {
            backend: GrammarBackend::LanguageTool,
            endpoint: "http://localhost:8081".to_string(),
            language: "en-US".to_string(),
            timeout_secs: 10,
            enabled: true,
        }
    }
}

/// Linguistic resource locations
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResourceConfig {
    /// Tag model (default nlprule)
    pub tagger: TaggerKind,

    /// nlprule tokenizer model, shared by the tagger and the nlprule grammar
    /// backend (default models/en_tokenizer.bin)
    pub tokenizer_model: PathBuf,

    /// nlprule rule set for the nlprule grammar backend
    /// (default models/en_rules.bin)
    pub rules_model: PathBuf,

    /// Extra `word<TAB>TAG` lexicon merged over the embedded one
    pub lexicon: Option<PathBuf>,

    /// Synonym source replacing the embedded group list
    pub thesaurus: Option<PathBuf>,

    /// Layout of `thesaurus` (default groups)
    pub thesaurus_format: ThesaurusFormat,
}

impl Default for ResourceConfig {
    fn default() -> Self {
        Self {
            tagger: TaggerKind::Nlprule,
            tokenizer_model: PathBuf::from("models/en_tokenizer.bin"),
            rules_model: PathBuf::from("models/en_rules.bin"),
            lexicon: None,
            thesaurus: None,
            thesaurus_format: ThesaurusFormat::Groups,
        }
    }
}

/// Master configuration combining all quill settings
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub rephrase: RephraseConfig,
    pub grammar: GrammarConfig,
    pub resources: ResourceConfig,
}

impl Config {
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Config =
            toml::from_str(source).map_err(|e| AssistError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)
            .map_err(|e| AssistError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_toml_str(&source)
    }

    pub fn validate(&self) -> Result<()> {
        let p = self.rephrase.substitution_probability;
        if !(0.0..=1.0).contains(&p) {
            return Err(AssistError::Config(format!(
                "substitution_probability must be within 0..=1, got {}",
                p
            )));
        }
        if self.grammar.endpoint.trim().is_empty() {
            return Err(AssistError::Config("grammar endpoint is empty".to_string()));
        }
        if self.grammar.language.trim().is_empty() {
            return Err(AssistError::Config("grammar language is empty".to_string()));
        }
        Ok(())
    }
}
