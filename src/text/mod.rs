pub mod frequency;
pub mod model;
pub mod tagger;
pub mod token;

pub use frequency::{analyze, Analysis, FrequencyTable};
pub use model::NlpruleTagger;
pub use tagger::{LexiconTagger, Tagger};
pub use token::{tokenize, PosTag, TaggedToken, Token, WordClass};
