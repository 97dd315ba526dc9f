//! Synonym lookup.
//!
//! A [`Thesaurus`] is a list of synonym groups (synsets). Looking a word up
//! returns every other member of every group containing it.

pub mod dictionary;

pub use dictionary::{Thesaurus, ThesaurusFormat};

use crate::engine::error::Result;
use std::collections::BTreeSet;

pub trait SynonymLookup: Send + Sync {
    /// Known synonyms of `word`, never including `word` itself.
    ///
    /// An empty set means "no alternative available" and is not an error.
    fn synonyms(&self, word: &str) -> Result<BTreeSet<String>>;
}
