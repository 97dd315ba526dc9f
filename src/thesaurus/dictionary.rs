use super::SynonymLookup;
use crate::engine::error::Result;
use crate::input::LoadError;
use log::info;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use std::path::Path;

const EMBEDDED_GROUPS: &str = include_str!("../../data/synonyms.txt");

/// On-disk layout of a synonym source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThesaurusFormat {
    /// One comma-separated group per line, `#` comments.
    #[default]
    Groups,
    /// WordNet `wn_s.pl`: `s(synset_id,w_num,'word',ss_type,sense,tag_count).`
    WordNet,
}

#[derive(Debug, Clone, Default)]
pub struct Thesaurus {
    groups: Vec<Vec<String>>,
    /// Lowercased entry -> indices into `groups`.
    index: HashMap<String, Vec<usize>>,
}

impl Thesaurus {
    pub fn new() -> Self {
        Self::default()
    }

    /// The small English group list bundled with the crate.
    pub fn embedded() -> Self {
        Self::parse(EMBEDDED_GROUPS, ThesaurusFormat::Groups).unwrap_or_default()
    }

    pub fn from_file(path: &Path, format: ThesaurusFormat) -> std::result::Result<Self, LoadError> {
        if !path.exists() {
            return Err(LoadError::FileNotFound(path.to_path_buf()));
        }
        let source = std::fs::read_to_string(path)
            .map_err(|e| LoadError::Read(path.to_path_buf(), e.to_string()))?;
        let thesaurus =
            Self::parse(&source, format).map_err(|e| LoadError::Parse(path.to_path_buf(), e))?;

        info!(
            "loaded {} synonym groups from {}",
            thesaurus.len(),
            path.display()
        );
        Ok(thesaurus)
    }

    pub fn parse(source: &str, format: ThesaurusFormat) -> std::result::Result<Self, String> {
        match format {
            ThesaurusFormat::Groups => Ok(Self::parse_groups(source)),
            ThesaurusFormat::WordNet => Self::parse_wordnet(source),
        }
    }

    fn parse_groups(source: &str) -> Self {
        let mut thesaurus = Self::new();
        for line in source.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            thesaurus.add_group(line.split(','));
        }
        thesaurus
    }

    fn parse_wordnet(source: &str) -> std::result::Result<Self, String> {
        let mut synsets: Vec<Vec<String>> = Vec::new();
        let mut by_id: HashMap<&str, usize> = HashMap::new();

        for (line_no, line) in source.lines().enumerate() {
            let line = line.trim();
            if !line.starts_with("s(") {
                continue;
            }
            let (synset, word) = parse_wordnet_line(line)
                .ok_or_else(|| format!("line {}: malformed s/6 fact", line_no + 1))?;

            let slot = *by_id.entry(synset).or_insert_with(|| {
                synsets.push(Vec::new());
                synsets.len() - 1
            });
            synsets[slot].push(word);
        }

        let mut thesaurus = Self::new();
        for members in synsets {
            thesaurus.add_group(members);
        }
        Ok(thesaurus)
    }

    /// Adds a synonym group. Entries are trimmed, `_` becomes a space and
    /// duplicates within the group are dropped.
    pub fn add_group<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut members: Vec<String> = Vec::new();
        for word in words {
            let word = normalize_entry(word.as_ref());
            if word.is_empty() || members.iter().any(|m| m.eq_ignore_ascii_case(&word)) {
                continue;
            }
            members.push(word);
        }
        if members.len() < 2 {
            return;
        }

        let group = self.groups.len();
        for member in &members {
            self.index
                .entry(member.to_lowercase())
                .or_default()
                .push(group);
        }
        self.groups.push(members);
    }

    /// Number of synonym groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl SynonymLookup for Thesaurus {
    fn synonyms(&self, word: &str) -> Result<BTreeSet<String>> {
        let key = normalize_entry(word).to_lowercase();
        let Some(groups) = self.index.get(&key) else {
            return Ok(BTreeSet::new());
        };

        Ok(groups
            .iter()
            .flat_map(|&group| self.groups[group].iter())
            .filter(|member| member.to_lowercase() != key)
            .cloned()
            .collect())
    }
}

fn normalize_entry(word: &str) -> String {
    word.trim().replace('_', " ")
}

/// Returns `(synset_id, word)` with `''` unescaped.
fn parse_wordnet_line(line: &str) -> Option<(&str, String)> {
    let rest = line.strip_prefix("s(")?;
    let (synset, rest) = rest.split_once(',')?;
    let (_, rest) = rest.split_once(',')?;
    let rest = rest.strip_prefix('\'')?;

    let mut word = String::new();
    let mut chars = rest.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '\'' {
            word.push(c);
        } else if chars.peek() == Some(&'\'') {
            chars.next();
            word.push('\'');
        } else {
            return Some((synset, word));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn set(words: &[&str]) -> BTreeSet<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_embedded_has_groups() {
        let thesaurus = Thesaurus::embedded();
        assert!(thesaurus.len() > 50);
        assert!(thesaurus.synonyms("big").unwrap().contains("large"));
    }

    #[test]
    fn test_lookup_excludes_word_itself() {
        let mut thesaurus = Thesaurus::new();
        thesaurus.add_group(["quick", "fast", "rapid"]);
        assert_eq!(thesaurus.synonyms("quick").unwrap(), set(&["fast", "rapid"]));
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let mut thesaurus = Thesaurus::new();
        thesaurus.add_group(["Quick", "fast"]);
        let synonyms = thesaurus.synonyms("QUICK").unwrap();
        assert_eq!(synonyms, set(&["fast"]));
        assert!(!thesaurus.synonyms("Fast").unwrap().contains("fast"));
    }

    #[test]
    fn test_lookup_unions_groups() {
        let mut thesaurus = Thesaurus::new();
        thesaurus.add_group(["bright", "smart"]);
        thesaurus.add_group(["bright", "vivid"]);
        assert_eq!(thesaurus.synonyms("bright").unwrap(), set(&["smart", "vivid"]));
    }

    #[test]
    fn test_unknown_word_is_empty_not_error() {
        let thesaurus = Thesaurus::embedded();
        assert!(thesaurus.synonyms("zyzzyva").unwrap().is_empty());
        assert!(thesaurus.synonyms("").unwrap().is_empty());
    }

    #[test]
    fn test_underscores_become_spaces() {
        let mut thesaurus = Thesaurus::new();
        thesaurus.add_group(["learn", "pick_up", "study"]);
        assert!(thesaurus.synonyms("learn").unwrap().contains("pick up"));
        assert!(thesaurus.synonyms("pick_up").unwrap().contains("learn"));
    }

    #[test]
    fn test_single_member_group_ignored() {
        let mut thesaurus = Thesaurus::new();
        thesaurus.add_group(["alone", "ALONE"]);
        assert!(thesaurus.is_empty());
    }

    #[test]
    fn test_parse_groups_skips_comments() {
        let source = "# header\n\nhappy, glad\n  sad ,unhappy  \n";
        let thesaurus = Thesaurus::parse(source, ThesaurusFormat::Groups).unwrap();
        assert_eq!(thesaurus.len(), 2);
        assert_eq!(thesaurus.synonyms("sad").unwrap(), set(&["unhappy"]));
    }

    #[test]
    fn test_parse_wordnet() {
        let source = "\
s(100001740,1,'entity',n,1,11).
s(201835496,1,'travel',v,1,60).
s(201835496,2,'go',v,1,21).
s(201835496,3,'move',v,1,12).
s(201835496,4,'locomote',v,1,0).
s(302064745,1,'o''er',r,1,0).
s(302064745,2,'over',r,1,0).
";
        let thesaurus = Thesaurus::parse(source, ThesaurusFormat::WordNet).unwrap();
        // "entity" has no synonyms of its own, so its synset is dropped.
        assert_eq!(thesaurus.len(), 2);
        assert_eq!(
            thesaurus.synonyms("go").unwrap(),
            set(&["locomote", "move", "travel"])
        );
        assert_eq!(thesaurus.synonyms("over").unwrap(), set(&["o'er"]));
    }

    #[test]
    fn test_parse_wordnet_malformed() {
        let err = Thesaurus::parse("s(1,2,broken", ThesaurusFormat::WordNet).unwrap_err();
        assert!(err.contains("line 1"));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "car, automobile").unwrap();
        let thesaurus = Thesaurus::from_file(file.path(), ThesaurusFormat::Groups).unwrap();
        assert_eq!(thesaurus.synonyms("car").unwrap(), set(&["automobile"]));
    }

    #[test]
    fn test_from_file_missing() {
        let result = Thesaurus::from_file(Path::new("/nonexistent/wn_s.pl"), ThesaurusFormat::WordNet);
        assert!(matches!(result, Err(LoadError::FileNotFound(_))));
    }
}
