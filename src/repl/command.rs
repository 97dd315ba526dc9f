use crate::app::AppEvent;

/// Commands that can be parsed from REPL input
///
/// These commands map to AppEvent for handling in App core.
#[derive(Debug, Clone, PartialEq)]
pub enum ReplCommand {
    /// Quit the application
    Quit,

    /// Show help information
    Help,

    /// Analyse a line of text as typed
    Analyze(String),

    /// Analyse the contents of a text file
    LoadFile(String),

    /// Analyse the clipboard
    LoadClipboard,

    /// Fix the rephrasing seed, or clear it with `None`
    Seed(Option<u64>),

    /// Unknown/invalid command
    Unknown(String),
}

/// Convert a parsed REPL command into an AppEvent
pub fn command_to_app_event(command: ReplCommand) -> AppEvent {
    match command {
        ReplCommand::Quit => AppEvent::Quit,
        ReplCommand::Help => AppEvent::Help,
        ReplCommand::Analyze(text) => AppEvent::Analyze(text),
        ReplCommand::LoadFile(path) => AppEvent::LoadFile(path),
        ReplCommand::LoadClipboard => AppEvent::LoadClipboard,
        ReplCommand::Seed(seed) => AppEvent::SetSeed(seed),
        ReplCommand::Unknown(input) => AppEvent::InvalidCommand(input),
    }
}
