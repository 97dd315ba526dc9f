use super::tagger::Tagger;
use super::token::TaggedToken;
use crate::engine::error::Result;
use serde::Serialize;
use std::collections::BTreeMap;

/// Occurrence count per POS tag. Only tags that occur are present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FrequencyTable(BTreeMap<String, usize>);

impl FrequencyTable {
    pub fn from_tagged(tagged: &[TaggedToken]) -> Self {
        let mut counts = BTreeMap::new();
        for token in tagged {
            *counts.entry(token.tag.as_str().to_string()).or_insert(0) += 1;
        }
        Self(counts)
    }

    pub fn get(&self, tag: &str) -> usize {
        self.0.get(tag).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.0.values().sum()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.0.iter().map(|(tag, count)| (tag.as_str(), *count))
    }

    /// Tags ordered by descending count, ties broken alphabetically.
    pub fn most_common(&self) -> Vec<(&str, usize)> {
        let mut entries: Vec<(&str, usize)> = self.iter().collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        entries
    }
}

/// Token list, per-token tags and tag distribution of one text.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Analysis {
    pub tokens: Vec<String>,
    pub pos_tags: Vec<(String, String)>,
    pub pos_frequency: FrequencyTable,
}

impl Analysis {
    pub fn from_tagged(tagged: &[TaggedToken]) -> Self {
        Self {
            tokens: tagged.iter().map(|t| t.text().to_string()).collect(),
            pos_tags: tagged
                .iter()
                .map(|t| (t.text().to_string(), t.tag.to_string()))
                .collect(),
            pos_frequency: FrequencyTable::from_tagged(tagged),
        }
    }
}

/// Re-tags `text` and reports its POS distribution. Reporting only.
pub fn analyze(tagger: &dyn Tagger, text: &str) -> Result<Analysis> {
    let tagged = tagger.tag(text)?;
    Ok(Analysis::from_tagged(&tagged))
}
