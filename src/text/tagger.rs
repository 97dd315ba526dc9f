use super::token::{tokenize, PosTag, TaggedToken, Token};
use crate::engine::error::{AssistError, Result, Service};
use crate::input::LoadError;
use lazy_static::lazy_static;
use log::info;
use std::collections::HashMap;
use std::path::Path;

const EMBEDDED_LEXICON_TSV: &str = include_str!("../../data/lexicon.tsv");

lazy_static! {
    static ref EMBEDDED_LEXICON: HashMap<String, PosTag> =
        parse_lexicon(EMBEDDED_LEXICON_TSV).unwrap_or_default();
}

/// Assigns part-of-speech tags to text.
///
/// Implementors provide `tag_tokens`; `tag` tokenizes and guarantees that
/// no token is dropped along the way.
pub trait Tagger: Send + Sync {
    /// Returns exactly one tag per input token.
    fn tag_tokens(&self, tokens: &[Token]) -> Result<Vec<PosTag>>;

    fn tag(&self, text: &str) -> Result<Vec<TaggedToken>> {
        let tokens = tokenize(text);
        if tokens.is_empty() {
            return Ok(Vec::new());
        }

        let tags = self.tag_tokens(&tokens)?;
        if tags.len() != tokens.len() {
            return Err(AssistError::unavailable(
                Service::Tagger,
                format!(
                    "model returned {} tags for {} tokens",
                    tags.len(),
                    tokens.len()
                ),
            ));
        }

        Ok(tokens
            .into_iter()
            .zip(tags)
            .map(|(token, tag)| TaggedToken::new(token, tag))
            .collect())
    }
}

/// Parses `word<TAB>TAG` lines. Blank lines and `#` comments are skipped;
/// the first tag given for a word wins.
pub fn parse_lexicon(source: &str) -> std::result::Result<HashMap<String, PosTag>, String> {
    let mut entries = HashMap::new();

    for (line_no, line) in source.lines().enumerate() {
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() || line.starts_with('#') {
            continue;
        }

        let (word, tag) = line
            .split_once('\t')
            .ok_or_else(|| format!("line {}: expected word<TAB>tag", line_no + 1))?;
        let (word, tag) = (word.trim(), tag.trim());
        if word.is_empty() || tag.is_empty() {
            return Err(format!("line {}: empty word or tag", line_no + 1));
        }

        entries
            .entry(word.to_lowercase())
            .or_insert_with(|| PosTag::new(tag));
    }

    Ok(entries)
}

/// Dictionary tagger with shape fallbacks for unknown words and a small
/// contextual repair pass.
#[derive(Debug, Clone)]
pub struct LexiconTagger {
    entries: HashMap<String, PosTag>,
}

impl Default for LexiconTagger {
    fn default() -> Self {
        Self::new()
    }
}

impl LexiconTagger {
    /// Tagger backed by the embedded English lexicon.
    pub fn new() -> Self {
        Self {
            entries: EMBEDDED_LEXICON.clone(),
        }
    }

    /// Embedded lexicon extended (and overridden) by a user TSV file.
    pub fn from_file(path: &Path) -> std::result::Result<Self, LoadError> {
        if !path.exists() {
            return Err(LoadError::FileNotFound(path.to_path_buf()));
        }
        let source = std::fs::read_to_string(path)
            .map_err(|e| LoadError::Read(path.to_path_buf(), e.to_string()))?;
        let extra = parse_lexicon(&source)
            .map_err(|e| LoadError::Parse(path.to_path_buf(), e))?;

        info!("loaded {} lexicon entries from {}", extra.len(), path.display());

        let mut tagger = Self::new();
        tagger.entries.extend(extra);
        Ok(tagger)
    }

    pub fn with_entry(mut self, word: &str, tag: &str) -> Self {
        self.entries.insert(word.to_lowercase(), PosTag::new(tag));
        self
    }

    pub fn lookup(&self, word: &str) -> Option<&PosTag> {
        self.entries.get(&word.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn initial_tag(&self, tokens: &[Token], index: usize) -> PosTag {
        let word = &tokens[index].text;
        if let Some(tag) = self.lookup(word) {
            return tag.clone();
        }

        PosTag::new(shape_tag(word, is_sentence_start(tokens, index)))
    }
}

impl Tagger for LexiconTagger {
    fn tag_tokens(&self, tokens: &[Token]) -> Result<Vec<PosTag>> {
        let mut tags: Vec<PosTag> = (0..tokens.len())
            .map(|i| self.initial_tag(tokens, i))
            .collect();

        for i in 1..tags.len() {
            let word = tokens[i].text.as_str();
            let known = self.lookup(word).is_some();
            let prev = tags[i - 1].as_str();
            let current = tags[i].as_str();
            let next = tags.get(i + 1).map(PosTag::as_str);

            let repaired = match (prev, current) {
                // "he walks": an unknown plural-looking word after a subject
                ("PRP" | "NNP", "NNS") if !known => Some("VBZ"),
                // "the dog likes your", "they admire the"
                ("PRP" | "NNP" | "NN" | "NNS", "NN" | "NNS")
                    if !known && matches!(next, Some("DT" | "PRP$" | "PRP")) =>
                {
                    Some(if third_person_form(word) { "VBZ" } else { "VBP" })
                }
                // "to go", "will do"
                ("TO" | "MD", "VBP") => Some("VB"),
                // "your work", "the answer"
                ("PRP$" | "DT", "VB" | "VBP") => Some("NN"),
                _ => None,
            };
            if let Some(tag) = repaired {
                tags[i] = PosTag::new(tag);
            }

            // "Mary loves": a sentence-initial unknown word guessed as an
            // adjective directly before a finite verb is a name.
            if tags[i - 1].as_str() == "JJ"
                && matches!(tags[i].as_str(), "VBZ" | "VBD" | "MD")
                && is_sentence_start(tokens, i - 1)
                && self.lookup(&tokens[i - 1].text).is_none()
                && tokens[i - 1].text.chars().next().is_some_and(char::is_uppercase)
            {
                tags[i - 1] = PosTag::new("NNP");
            }
        }

        Ok(tags)
    }
}

pub(crate) fn is_sentence_start(tokens: &[Token], index: usize) -> bool {
    index == 0 || matches!(tokens[index - 1].text.as_str(), "." | "!" | "?")
}

fn third_person_form(word: &str) -> bool {
    word.ends_with('s') && !word.ends_with("ss")
}

/// Guesses a tag from the surface form of a word the lexicon doesn't know.
pub(crate) fn shape_tag(word: &str, sentence_initial: bool) -> &'static str {
    if !word.chars().any(char::is_alphanumeric) {
        return match word {
            "." | "!" | "?" => ".",
            "," => ",",
            ":" | ";" | "-" | "--" | "..." | "\u{2026}" | "\u{2013}" | "\u{2014}" => ":",
            "(" | "[" | "{" => "(",
            ")" | "]" | "}" => ")",
            "\"" | "'" | "\u{201c}" | "\u{201d}" | "\u{2018}" | "\u{2019}" | "`" => "''",
            "$" => "$",
            "#" => "#",
            _ => "SYM",
        };
    }

    if word.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        return "CD";
    }

    if !sentence_initial && word.chars().next().is_some_and(char::is_uppercase) {
        return "NNP";
    }

    let lower = word.to_lowercase();
    const ADJECTIVE_SUFFIXES: &[&str] = &[
        "ous", "ful", "able", "ible", "ive", "less", "ical", "ish", "ary",
    ];
    const NOUN_SUFFIXES: &[&str] = &["tion", "sion", "ment", "ness", "ity", "ship", "ance", "ence"];

    if lower.ends_with("ly") {
        "RB"
    } else if lower.ends_with("ing") && lower.len() > 4 {
        "VBG"
    } else if lower.ends_with("ed") && lower.len() > 3 {
        "VBD"
    } else if ADJECTIVE_SUFFIXES.iter().any(|s| lower.ends_with(s)) {
        "JJ"
    } else if NOUN_SUFFIXES.iter().any(|s| lower.ends_with(s)) {
        "NN"
    } else if lower.ends_with('s') && !lower.ends_with("ss") && lower.len() > 2 {
        "NNS"
    } else {
        "NN"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn tags_of(text: &str) -> Vec<(String, String)> {
        LexiconTagger::new()
            .tag(text)
            .unwrap()
            .into_iter()
            .map(|t| (t.token.text, t.tag.to_string()))
            .collect()
    }

    fn tag_for(text: &str, word: &str) -> String {
        tags_of(text)
            .into_iter()
            .find(|(w, _)| w == word)
            .map(|(_, tag)| tag)
            .unwrap()
    }

    #[test]
    fn test_embedded_lexicon_parses() {
        assert!(parse_lexicon(EMBEDDED_LEXICON_TSV).is_ok());
        assert!(LexiconTagger::new().len() > 500);
    }

    #[test]
    fn test_tag_empty_text() {
        assert!(LexiconTagger::new().tag("").unwrap().is_empty());
        assert!(LexiconTagger::new().tag("  \n ").unwrap().is_empty());
    }

    #[test]
    fn test_tag_count_matches_token_count() {
        let text = "He goes to school everyday and does his homework.";
        let tagged = LexiconTagger::new().tag(text).unwrap();
        assert_eq!(tagged.len(), tokenize(text).len());
    }

    #[test]
    fn test_known_words() {
        let tags = tags_of("What is your problem");
        let expected = vec![
            ("What", "WP"),
            ("is", "VBZ"),
            ("your", "PRP$"),
            ("problem", "NN"),
        ];
        for ((word, tag), (ew, et)) in tags.iter().zip(expected) {
            assert_eq!(word, ew);
            assert_eq!(tag, et);
        }
    }

    #[test]
    fn test_punctuation_and_numbers() {
        assert_eq!(tag_for("It costs 42 dollars.", "42"), "CD");
        assert_eq!(tag_for("It costs 42 dollars.", "."), ".");
        assert_eq!(tag_for("Wait, what", ","), ",");
    }

    #[test]
    fn test_suffix_fallbacks() {
        assert_eq!(tag_for("she sang joyfully", "joyfully"), "RB");
        assert_eq!(tag_for("they were jumping", "jumping"), "VBG");
        assert_eq!(tag_for("a dangerous road", "dangerous"), "JJ");
        assert_eq!(tag_for("the celebration", "celebration"), "NN");
        assert_eq!(tag_for("the gadgets", "gadgets"), "NNS");
    }

    #[test]
    fn test_capitalized_mid_sentence_is_proper_noun() {
        assert_eq!(tag_for("I met Alice there", "Alice"), "NNP");
        assert_eq!(tag_for("Gadgets are fun", "Gadgets"), "NNS");
    }

    #[test]
    fn test_contextual_third_person_verb() {
        assert_eq!(tag_for("He jogs daily", "jogs"), "VBZ");
    }

    #[test]
    fn test_contextual_verb_before_object() {
        assert_eq!(tag_for("The dog likes your shoes", "likes"), "VBZ");
        assert_eq!(tag_for("They admire your courage", "admire"), "VBP");
        assert_eq!(tag_for("The teachers praise your work", "praise"), "VBP");
        assert_eq!(tag_for("The teachers praise your work", "work"), "NN");
    }

    #[test]
    fn test_sentence_initial_name_before_verb() {
        assert_eq!(tag_for("Mary loves your cooking", "Mary"), "NNP");
        assert_eq!(tag_for("Mary loves your cooking", "loves"), "VBZ");
        assert_eq!(tag_for("A dangerous road", "dangerous"), "JJ");
    }

    #[test]
    fn test_contextual_base_form_after_modal() {
        assert_eq!(tag_for("I will go home", "go"), "VB");
        assert_eq!(tag_for("I want to do it", "do"), "VB");
        assert_eq!(tag_for("I go home", "go"), "VBP");
    }

    #[test]
    fn test_with_entry_overrides() {
        let tagger = LexiconTagger::new().with_entry("Rust", "NNP");
        assert_eq!(tagger.lookup("rust").unwrap().as_str(), "NNP");
    }

    #[test]
    fn test_from_file_extends_lexicon() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# custom").unwrap();
        writeln!(file, "borrow\tVBP").unwrap();
        let tagger = LexiconTagger::from_file(file.path()).unwrap();
        assert_eq!(tagger.lookup("borrow").unwrap().as_str(), "VBP");
        assert_eq!(tagger.lookup("the").unwrap().as_str(), "DT");
    }

    #[test]
    fn test_from_file_rejects_malformed_line() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "no tab here").unwrap();
        let result = LexiconTagger::from_file(file.path());
        assert!(matches!(result, Err(LoadError::Parse(_, msg)) if msg.contains("line 1")));
    }

    #[test]
    fn test_from_file_missing() {
        let result = LexiconTagger::from_file(Path::new("/nonexistent/lexicon.tsv"));
        assert!(matches!(result, Err(LoadError::FileNotFound(_))));
    }

    struct ShortModel;

    impl Tagger for ShortModel {
        fn tag_tokens(&self, _tokens: &[Token]) -> Result<Vec<PosTag>> {
            Ok(vec![PosTag::new("NN")])
        }
    }

    #[test]
    fn test_dropped_tags_are_reported() {
        let err = ShortModel.tag("two words").unwrap_err();
        assert_eq!(err.service(), Some(Service::Tagger));
    }
}
