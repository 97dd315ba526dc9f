//! REPL (Read-Eval-Print Loop) module
//!
//! - **command.rs**: Command definitions and conversion to AppEvent
//! - **parser.rs**: String parsing for `@` and `:` prefixes
//! - **input.rs**: Rustyline wrapper with history

pub mod command;
pub mod input;
pub mod parser;

pub use command::ReplCommand;
pub use input::ReplInput;

use crate::app::{App, AppMode};
use rustyline::error::ReadlineError;

/// Reads lines until `:q`, EOF or Ctrl-C, printing each result.
pub fn run(app: &mut App) -> Result<(), ReadlineError> {
    let mut repl = ReplInput::new()?;
    println!("quill: type text to analyse it, :h for help, :q to quit");

    while app.mode != AppMode::Quit {
        let line = match repl.readline() {
            Ok(line) => line,
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(err) => return Err(err),
        };
        if line.trim().is_empty() {
            continue;
        }
        let _ = repl.add_history_entry(&line);

        match app.handle_event(repl.to_app_event(&line)) {
            Ok(Some(output)) => println!("{}", output),
            Ok(None) => {}
            Err(err) => eprintln!("Error: {}", err),
        }
    }

    Ok(())
}
