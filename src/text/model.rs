//! Tagging with an nlprule tokenizer model (`en_tokenizer.bin`): the
//! LanguageTool English tagger plus its disambiguation rules.

use super::tagger::{is_sentence_start, shape_tag, Tagger};
use super::token::{tokenize, PosTag, TaggedToken, Token};
use crate::engine::error::Result;
use crate::input::LoadError;
use log::info;
use nlprule::Tokenizer;
use std::path::Path;
use std::sync::Arc;

/// How many model tokens ahead a word may be found before it is treated as
/// split differently by the model.
const LOOKAHEAD: usize = 4;

/// Loads a binary tokenizer model.
pub fn load_tokenizer(path: &Path) -> std::result::Result<Tokenizer, LoadError> {
    if !path.exists() {
        return Err(LoadError::FileNotFound(path.to_path_buf()));
    }
    let tokenizer = Tokenizer::new(path)
        .map_err(|e| LoadError::Parse(path.to_path_buf(), e.to_string()))?;
    info!("loaded tokenizer model from {}", path.display());
    Ok(tokenizer)
}

/// One word as the model analysed it, with its candidate tags in model
/// order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reading {
    pub text: String,
    pub tags: Vec<String>,
}

impl Reading {
    pub fn new(text: impl Into<String>, tags: &[&str]) -> Self {
        Self {
            text: text.into(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }
}

pub struct NlpruleTagger {
    tokenizer: Arc<Tokenizer>,
}

impl NlpruleTagger {
    pub fn new(tokenizer: Arc<Tokenizer>) -> Self {
        Self { tokenizer }
    }

    pub fn from_file(path: &Path) -> std::result::Result<Self, LoadError> {
        Ok(Self::new(Arc::new(load_tokenizer(path)?)))
    }

    pub fn tokenizer(&self) -> &Arc<Tokenizer> {
        &self.tokenizer
    }

    fn readings(&self, text: &str) -> Vec<Reading> {
        let mut readings = Vec::new();
        for sentence in self.tokenizer.pipe(text) {
            for token in sentence.tokens() {
                let word = token.word();
                readings.push(Reading {
                    text: word.text().as_str().to_string(),
                    tags: word
                        .tags()
                        .iter()
                        .map(|data| data.pos().as_str().to_string())
                        .collect(),
                });
            }
        }
        readings
    }
}

impl Tagger for NlpruleTagger {
    fn tag_tokens(&self, tokens: &[Token]) -> Result<Vec<PosTag>> {
        let text = tokens
            .iter()
            .map(|t| t.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        Ok(align(tokens, &self.readings(&text)))
    }

    fn tag(&self, text: &str) -> Result<Vec<TaggedToken>> {
        let tokens = tokenize(text);
        if tokens.is_empty() {
            return Ok(Vec::new());
        }
        let tags = align(&tokens, &self.readings(text));
        Ok(tokens
            .into_iter()
            .zip(tags)
            .map(|(token, tag)| TaggedToken::new(token, tag))
            .collect())
    }
}

/// Pairs every token with the model reading of the same word. Always
/// returns one tag per token; words the model split differently
/// ("don't" against "do" + "n't") get a shape guess.
pub fn align(tokens: &[Token], readings: &[Reading]) -> Vec<PosTag> {
    let readings: Vec<&Reading> = readings
        .iter()
        .filter(|r| !r.text.trim().is_empty())
        .collect();

    let mut cursor = 0;
    let mut tags: Vec<PosTag> = Vec::with_capacity(tokens.len());
    for (index, token) in tokens.iter().enumerate() {
        let found = readings[cursor..]
            .iter()
            .take(LOOKAHEAD)
            .position(|r| r.text == token.text);

        let chosen = found.and_then(|offset| {
            let reading = readings[cursor + offset];
            cursor += offset + 1;
            choose_tag(tags.last().map(PosTag::as_str), &reading.tags)
        });

        let tag = match chosen {
            Some(tag) => PosTag::new(tag),
            None => PosTag::new(shape_tag(&token.text, is_sentence_start(tokens, index))),
        };
        tags.push(tag);
    }
    tags
}

/// Picks one of a word's candidate tags using the tag before it: a finite
/// verb after a subject ("he likes"), a base form after "to" or a modal,
/// a noun after a determiner ("your work"). Otherwise the model's first
/// reading.
pub fn choose_tag(prev: Option<&str>, candidates: &[String]) -> Option<String> {
    let usable: Vec<&str> = candidates
        .iter()
        .map(String::as_str)
        .filter(|tag| is_word_tag(tag))
        .collect();
    let first = *usable.first()?;

    let first_of = |wanted: &[&str]| {
        usable
            .iter()
            .copied()
            .find(|t| wanted.iter().any(|w| w == t))
    };
    let noun = usable.iter().copied().find(|t| t.starts_with("NN"));

    let picked = match prev {
        Some("TO" | "MD") => first_of(&["VB"]),
        Some("PRP" | "NNP" | "NNPS" | "NN" | "NNS" | "WP" | "WDT") => {
            first_of(&["VBZ", "VBP", "VBD"])
        }
        Some("DT" | "PRP$" | "JJ" | "JJR" | "JJS" | "CD" | "POS") => noun,
        _ => None,
    }
    .unwrap_or(first);

    Some(picked.to_string())
}

/// Sentence markers and unknown readings carry no part of speech.
fn is_word_tag(tag: &str) -> bool {
    !tag.is_empty() && !matches!(tag, "SENT_START" | "SENT_END" | "PCT" | "UNKNOWN")
}
