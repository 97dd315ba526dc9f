//! End-to-end writing assistance.
//!
//! raw text -> grammar check/correct -> POS heuristics -> {analysis,
//! rephrasings}. Each stage finishes before the next starts; a failing
//! grammar or tagging step aborts the run with no partial report.

use super::config::{Config, GrammarBackend, RephraseConfig, TaggerKind};
use super::error::Result;
use crate::correction::PosCorrector;
use crate::grammar::{
    GrammarChecker, GrammarMatch, LanguageToolClient, NlpruleChecker, Passthrough,
};
use crate::rephrase::Rephraser;
use crate::text::model::load_tokenizer;
use crate::text::{analyze, Analysis, LexiconTagger, NlpruleTagger, Tagger};
use crate::thesaurus::{SynonymLookup, Thesaurus};
use log::{debug, info};
use nlprule::Tokenizer;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use std::path::Path;
use std::sync::Arc;

/// Everything one run produces.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Report {
    pub original: String,
    pub grammar_corrected: String,
    pub matches: Vec<GrammarMatch>,
    /// Grammar corrections plus POS heuristic fixes.
    pub corrected: String,
    pub analysis: Analysis,
    pub rephrasings: Vec<String>,
}

/// Owns the shared collaborators. Safe to share between threads; runs do
/// not touch each other's data.
pub struct Pipeline {
    grammar: Arc<dyn GrammarChecker>,
    tagger: Arc<dyn Tagger>,
    synonyms: Arc<dyn SynonymLookup>,
    corrector: PosCorrector,
    rephrase: RephraseConfig,
}

impl Pipeline {
    pub fn new(
        grammar: Arc<dyn GrammarChecker>,
        tagger: Arc<dyn Tagger>,
        synonyms: Arc<dyn SynonymLookup>,
    ) -> Self {
        Self {
            grammar,
            tagger,
            synonyms,
            corrector: PosCorrector::default(),
            rephrase: RephraseConfig::default(),
        }
    }

    /// Builds the collaborators described by `config`. The nlprule
    /// tokenizer model is loaded at most once and shared by the tagger and
    /// the nlprule grammar backend.
    pub fn from_config(config: &Config) -> Result<Self> {
        config.validate()?;
        let resources = &config.resources;
        let mut model: Option<Arc<Tokenizer>> = None;

        let grammar: Arc<dyn GrammarChecker> = match (config.grammar.enabled, config.grammar.backend)
        {
            (false, _) => {
                info!("grammar checking disabled");
                Arc::new(Passthrough)
            }
            (true, GrammarBackend::LanguageTool) => {
                Arc::new(LanguageToolClient::new(&config.grammar)?)
            }
            (true, GrammarBackend::Nlprule) => Arc::new(NlpruleChecker::from_file(
                shared_model(&mut model, &resources.tokenizer_model)?,
                &resources.rules_model,
            )?),
        };

        let tagger: Arc<dyn Tagger> = match resources.tagger {
            TaggerKind::Nlprule => Arc::new(NlpruleTagger::new(shared_model(
                &mut model,
                &resources.tokenizer_model,
            )?)),
            TaggerKind::Lexicon => Arc::new(match &resources.lexicon {
                Some(path) => LexiconTagger::from_file(path)?,
                None => LexiconTagger::new(),
            }),
        };

        let thesaurus = match &resources.thesaurus {
            Some(path) => Thesaurus::from_file(path, resources.thesaurus_format)?,
            None => Thesaurus::embedded(),
        };

        Ok(Self::new(grammar, tagger, Arc::new(thesaurus))
            .with_rephrase_config(config.rephrase.clone()))
    }

    pub fn with_rephrase_config(mut self, rephrase: RephraseConfig) -> Self {
        self.rephrase = rephrase;
        self
    }

    pub fn with_corrector(mut self, corrector: PosCorrector) -> Self {
        self.corrector = corrector;
        self
    }

    pub fn rephrase_config(&self) -> &RephraseConfig {
        &self.rephrase
    }

    /// Runs with the configured seed, or fresh entropy when none is set.
    pub fn run(&self, text: &str) -> Result<Report> {
        let mut rng = match self.rephrase.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        self.run_with_rng(text, &mut rng)
    }

    pub fn run_seeded(&self, text: &str, seed: u64) -> Result<Report> {
        self.run_with_rng(text, &mut StdRng::seed_from_u64(seed))
    }

    pub fn run_with_rng<R: Rng + ?Sized>(&self, text: &str, rng: &mut R) -> Result<Report> {
        info!("processing {} chars", text.chars().count());

        let matches = self.grammar.check(text)?;
        let grammar_corrected = self.grammar.correct(text, &matches)?;
        debug!("grammar: {} matches", matches.len());

        let corrected = self.corrector.correct(self.tagger.as_ref(), &grammar_corrected)?;
        debug!("heuristics: {:?} -> {:?}", grammar_corrected, corrected);

        let analysis = analyze(self.tagger.as_ref(), &corrected)?;
        debug!("analysis: {} tokens", analysis.tokens.len());

        let rephraser = Rephraser::new(
            self.tagger.as_ref(),
            self.synonyms.as_ref(),
            self.rephrase.substitution_probability,
        );
        let rephrasings = (0..self.rephrase.count)
            .map(|_| rephraser.rephrase(&corrected, &mut *rng).map(|r| r.text()))
            .collect::<Result<Vec<_>>>()?;
        debug!("generated {} rephrasings", rephrasings.len());

        Ok(Report {
            original: text.to_string(),
            grammar_corrected,
            matches,
            corrected,
            analysis,
            rephrasings,
        })
    }
}

fn shared_model(slot: &mut Option<Arc<Tokenizer>>, path: &Path) -> Result<Arc<Tokenizer>> {
    if let Some(tokenizer) = slot {
        return Ok(Arc::clone(tokenizer));
    }
    let tokenizer = Arc::new(load_tokenizer(path)?);
    *slot = Some(Arc::clone(&tokenizer));
    Ok(tokenizer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::error::{AssistError, Service};
    use crate::input::LoadError;

    struct Unreachable;

    impl GrammarChecker for Unreachable {
        fn check(&self, _text: &str) -> Result<Vec<GrammarMatch>> {
            Err(AssistError::unavailable(Service::Grammar, "connection refused"))
        }
    }

    fn offline_pipeline() -> Pipeline {
        Pipeline::new(
            Arc::new(Passthrough),
            Arc::new(LexiconTagger::new()),
            Arc::new(Thesaurus::embedded()),
        )
    }

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_pipeline_is_shareable() {
        assert_send_sync::<Pipeline>();
    }

    #[test]
    fn test_empty_input_gives_empty_report() {
        let report = offline_pipeline().run_seeded("", 1).unwrap();
        assert_eq!(report.original, "");
        assert_eq!(report.corrected, "");
        assert!(report.matches.is_empty());
        assert!(report.analysis.tokens.is_empty());
        assert!(report.analysis.pos_frequency.is_empty());
        assert_eq!(report.rephrasings, vec![String::new(); 3]);
    }

    #[test]
    fn test_heuristics_applied_after_grammar() {
        let report = offline_pipeline().run_seeded("What are you doing", 5).unwrap();
        assert_eq!(report.grammar_corrected, "What are you doing");
        assert_eq!(report.corrected, "What is you doing");
        assert_eq!(report.analysis.tokens[1], "is");
    }

    #[test]
    fn test_rephrase_count_configurable() {
        let pipeline = offline_pipeline().with_rephrase_config(RephraseConfig {
            count: 5,
            ..RephraseConfig::default()
        });
        let report = pipeline.run_seeded("big happy friend", 2).unwrap();
        assert_eq!(report.rephrasings.len(), 5);
    }

    #[test]
    fn test_configured_seed_is_reproducible() {
        let pipeline = offline_pipeline().with_rephrase_config(RephraseConfig {
            seed: Some(11),
            ..RephraseConfig::default()
        });
        let text = "The quick child often reads a good book.";
        assert_eq!(pipeline.run(text).unwrap(), pipeline.run(text).unwrap());
    }

    #[test]
    fn test_grammar_failure_aborts() {
        let pipeline = Pipeline::new(
            Arc::new(Unreachable),
            Arc::new(LexiconTagger::new()),
            Arc::new(Thesaurus::embedded()),
        );
        let err = pipeline.run_seeded("He go home", 0).unwrap_err();
        assert_eq!(err.service(), Some(Service::Grammar));
    }

    fn offline_config() -> Config {
        let mut config = Config::default();
        config.grammar.enabled = false;
        config.resources.tagger = TaggerKind::Lexicon;
        config
    }

    #[test]
    fn test_from_config_offline() {
        let mut config = offline_config();
        config.rephrase.seed = Some(3);
        let pipeline = Pipeline::from_config(&config).unwrap();
        assert_eq!(pipeline.rephrase_config().seed, Some(3));
        let report = pipeline.run("What is your problem").unwrap();
        assert_eq!(report.corrected, "What is you problem");
    }

    #[test]
    fn test_from_config_missing_thesaurus() {
        let mut config = offline_config();
        config.resources.thesaurus = Some("/nonexistent/synonyms.txt".into());
        assert!(matches!(
            Pipeline::from_config(&config),
            Err(AssistError::Load(LoadError::FileNotFound(_)))
        ));
    }

    #[test]
    fn test_from_config_missing_tokenizer_model() {
        let mut config = offline_config();
        config.resources.tagger = TaggerKind::Nlprule;
        config.resources.tokenizer_model = "/nonexistent/en_tokenizer.bin".into();
        match Pipeline::from_config(&config) {
            Err(AssistError::Load(LoadError::FileNotFound(path))) => {
                assert_eq!(path, config.resources.tokenizer_model)
            }
            Err(e) => panic!("unexpected error: {}", e),
            Ok(_) => panic!("pipeline built without a tokenizer model"),
        }
    }

    #[test]
    fn test_from_config_nlprule_grammar_needs_model() {
        let mut config = offline_config();
        config.grammar.enabled = true;
        config.grammar.backend = GrammarBackend::Nlprule;
        config.resources.tokenizer_model = "/nonexistent/en_tokenizer.bin".into();
        assert!(matches!(
            Pipeline::from_config(&config),
            Err(AssistError::Load(LoadError::FileNotFound(_)))
        ));
    }
}
