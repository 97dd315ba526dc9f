//! Randomised rephrasing by synonym substitution.
//!
//! Every open-class word (noun, verb, adjective, adverb) gets an independent
//! draw; on success it is swapped for a uniformly chosen synonym. No tense,
//! number or casing agreement is attempted, and the output may equal the
//! input.

use crate::engine::error::Result;
use crate::text::Tagger;
use crate::thesaurus::SynonymLookup;
use rand::seq::IteratorRandom;
use rand::Rng;
use serde::Serialize;

/// One rephrasing: one output word per input token.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RephraseResult {
    pub words: Vec<String>,
}

impl RephraseResult {
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Words joined by single spaces.
    pub fn text(&self) -> String {
        self.words.join(" ")
    }
}

pub struct Rephraser<'a> {
    tagger: &'a dyn Tagger,
    synonyms: &'a dyn SynonymLookup,
    /// Chance that an open-class word is looked up at all.
    substitution_probability: f64,
}

impl<'a> Rephraser<'a> {
    pub fn new(
        tagger: &'a dyn Tagger,
        synonyms: &'a dyn SynonymLookup,
        substitution_probability: f64,
    ) -> Self {
        Self {
            tagger,
            synonyms,
            substitution_probability: substitution_probability.clamp(0.0, 1.0),
        }
    }

    pub fn rephrase<R: Rng + ?Sized>(&self, sentence: &str, rng: &mut R) -> Result<RephraseResult> {
        let tagged = self.tagger.tag(sentence)?;
        let mut words = Vec::with_capacity(tagged.len());

        for token in &tagged {
            let substitute = token.tag.word_class().is_open()
                && rng.gen::<f64>() < self.substitution_probability;

            let replacement = if substitute {
                self.synonyms
                    .synonyms(token.text())?
                    .into_iter()
                    .choose(&mut *rng)
            } else {
                None
            };

            words.push(replacement.unwrap_or_else(|| token.text().to_string()));
        }

        Ok(RephraseResult { words })
    }
}
