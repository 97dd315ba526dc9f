/// Application events
#[derive(Debug, PartialEq, Clone)]
pub enum AppEvent {
    Analyze(String),
    LoadFile(String),
    LoadClipboard,
    /// `None` returns to the configured seed (or entropy).
    SetSeed(Option<u64>),
    Quit,
    Help,
    InvalidCommand(String),
    None,
}
