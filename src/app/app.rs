use super::event::AppEvent;
use super::mode::AppMode;
use crate::engine::error::Result;
use crate::engine::pipeline::{Pipeline, Report};
use crate::input;
use crate::ui::report::{render, OutputFormat};
use log::debug;
use rand::rngs::StdRng;
use rand::SeedableRng;

pub const HELP: &str = "\
Type or paste text to analyse it.
  @path      analyse a text file
  @@         analyse the clipboard
  :seed N    fix the rephrasing seed (:seed off to clear)
  :h, :help  show this help
  :q, :quit  exit";

pub struct App {
    pub mode: AppMode,
    pipeline: Pipeline,
    format: OutputFormat,
    seed: Option<u64>,
}

impl App {
    pub fn new(pipeline: Pipeline, format: OutputFormat) -> Self {
        let seed = pipeline.rephrase_config().seed;
        Self {
            mode: AppMode::Repl,
            pipeline,
            format,
            seed,
        }
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Seeded runs repeat; unseeded runs draw fresh entropy every time,
    /// even when the configuration carries a seed.
    pub fn report(&self, text: &str) -> Result<Report> {
        match self.seed {
            Some(seed) => self.pipeline.run_seeded(text, seed),
            None => self.pipeline.run_with_rng(text, &mut StdRng::from_entropy()),
        }
    }

    pub fn analyze(&self, text: &str) -> Result<String> {
        self.report(text).map(|report| render(&report, self.format))
    }

    /// Returns the text to show for `event`. Errors carry no partial output.
    pub fn handle_event(&mut self, event: AppEvent) -> Result<Option<String>> {
        debug!("event: {:?}", event);
        match event {
            AppEvent::Analyze(text) => self.analyze(&text).map(Some),
            AppEvent::LoadFile(path) => {
                let loaded = input::load_file(&path)?;
                self.analyze(&loaded.text).map(Some)
            }
            AppEvent::LoadClipboard => {
                let loaded = input::clipboard::load()?;
                self.analyze(&loaded.text).map(Some)
            }
            AppEvent::SetSeed(seed) => {
                self.seed = seed;
                Ok(Some(match self.seed {
                    Some(seed) => format!("Rephrasing seed set to {}", seed),
                    None => "Rephrasing seed cleared".to_string(),
                }))
            }
            AppEvent::Quit => {
                self.mode = AppMode::Quit;
                Ok(None)
            }
            AppEvent::Help => Ok(Some(HELP.to_string())),
            AppEvent::InvalidCommand(input) => Ok(Some(format!(
                "Unknown command: '{}'. Type :h for help.",
                input
            ))),
            AppEvent::None => Ok(None),
        }
    }
}
