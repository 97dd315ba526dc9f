//! quill: grammar correction, POS usage heuristics, POS statistics and
//! randomised rephrasing for English text.
//!
//! The grammar checker, the tag model and the synonym source are traits
//! injected into [`Pipeline`], so any of them can be swapped for a stub.

pub mod app;
pub mod correction;
pub mod engine;
pub mod grammar;
pub mod input;
pub mod rephrase;
pub mod repl;
pub mod text;
pub mod thesaurus;
pub mod ui;

pub use engine::{AssistError, Config, Pipeline, Report, Result};
