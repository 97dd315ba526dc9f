use serde::Serialize;
use std::ops::Range;
use unicode_segmentation::UnicodeSegmentation;

/// A contiguous piece of the source text.
#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct Token {
    pub text: String,
    /// Byte range of the token inside the text it was cut from.
    pub span: Range<usize>,
}

impl Token {
    pub fn new(text: impl Into<String>, span: Range<usize>) -> Self {
        Self {
            text: text.into(),
            span,
        }
    }

    pub fn lowercase(&self) -> String {
        self.text.to_lowercase()
    }
}

/// Coarse grammatical category derived from a Penn Treebank tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WordClass {
    Noun,
    Verb,
    Adjective,
    Adverb,
    Other,
}

impl WordClass {
    /// Open-class categories freely admit new vocabulary.
    pub fn is_open(self) -> bool {
        !matches!(self, WordClass::Other)
    }
}

/// POS tag drawn from the tag model's vocabulary (Penn Treebank for the
/// bundled lexicon tagger).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct PosTag(String);

impl PosTag {
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn word_class(&self) -> WordClass {
        match self.0.chars().next() {
            Some('N') => WordClass::Noun,
            Some('V') => WordClass::Verb,
            Some('J') => WordClass::Adjective,
            Some('R') => WordClass::Adverb,
            _ => WordClass::Other,
        }
    }

    /// `VBZ` or `VBP`.
    pub fn is_present_tense_verb(&self) -> bool {
        self.0 == "VBZ" || self.0 == "VBP"
    }
}

impl std::fmt::Display for PosTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct TaggedToken {
    #[serde(flatten)]
    pub token: Token,
    pub tag: PosTag,
}

impl TaggedToken {
    pub fn new(token: Token, tag: PosTag) -> Self {
        Self { token, tag }
    }

    pub fn text(&self) -> &str {
        &self.token.text
    }
}

/// Splits text on Unicode word boundaries, dropping whitespace.
///
/// Punctuation marks come out as tokens of their own, so "school." yields
/// "school" and ".". Contractions such as "don't" stay in one piece.
pub fn tokenize(text: &str) -> Vec<Token> {
    text.split_word_bound_indices()
        .filter(|(_, segment)| !segment.trim().is_empty())
        .map(|(start, segment)| Token::new(segment, start..start + segment.len()))
        .collect()
}
