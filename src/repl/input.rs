use crate::app::AppEvent;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

/// Line editor for the REPL
///
/// Provides:
/// - Command history for the session
/// - Arrow key navigation (left/right, up/down)
/// - Basic editing (backspace)
pub struct ReplInput {
    editor: DefaultEditor,
}

impl ReplInput {
    pub fn new() -> Result<Self, ReadlineError> {
        let editor = DefaultEditor::new()?;
        Ok(Self { editor })
    }

    /// Read a line of input with "quill> " prompt
    pub fn readline(&mut self) -> Result<String, ReadlineError> {
        self.editor.readline("quill> ")
    }

    pub fn add_history_entry(&mut self, line: &str) -> Result<(), ReadlineError> {
        self.editor.add_history_entry(line).map(|_| ())
    }

    /// Parses an input line and converts it to an AppEvent
    pub fn to_app_event(&self, line: &str) -> AppEvent {
        use super::command::command_to_app_event;
        use super::parser::parse_repl_input;

        command_to_app_event(parse_repl_input(line))
    }
}
