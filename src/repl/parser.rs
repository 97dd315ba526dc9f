use super::ReplCommand;

/// Parse REPL input string into a command
///
/// Supports:
/// - `:q` or `:quit` → Quit command
/// - `:h` or `:help` → Help command
/// - `:seed N` / `:seed off` → Seed command
/// - `@filename` → Load file command
/// - `@@` → Load clipboard
/// - Anything else → text to analyse
pub fn parse_repl_input(input: &str) -> ReplCommand {
    let input = input.trim();

    if input.is_empty() {
        return ReplCommand::Unknown(input.to_string());
    }

    if let Some(cmd) = input.strip_prefix(':') {
        let mut parts = cmd.split_whitespace();
        match (parts.next(), parts.next(), parts.next()) {
            (Some("q" | "quit"), None, _) => ReplCommand::Quit,
            (Some("h" | "help"), None, _) => ReplCommand::Help,
            (Some("seed"), Some("off"), None) => ReplCommand::Seed(None),
            (Some("seed"), Some(value), None) => match value.parse() {
                Ok(seed) => ReplCommand::Seed(Some(seed)),
                Err(_) => ReplCommand::Unknown(input.to_string()),
            },
            _ => ReplCommand::Unknown(input.to_string()),
        }
    } else if let Some(rest) = input.strip_prefix('@') {
        let filename = rest.trim();
        if filename.is_empty() || filename == "@" {
            ReplCommand::LoadClipboard
        } else {
            ReplCommand::LoadFile(filename.to_string())
        }
    } else {
        ReplCommand::Analyze(input.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quit_variants() {
        assert_eq!(parse_repl_input(":q"), ReplCommand::Quit);
        assert_eq!(parse_repl_input(":quit"), ReplCommand::Quit);
    }

    #[test]
    fn test_parse_help_variants() {
        assert_eq!(parse_repl_input(":h"), ReplCommand::Help);
        assert_eq!(parse_repl_input(":help"), ReplCommand::Help);
    }

    #[test]
    fn test_parse_seed() {
        assert_eq!(parse_repl_input(":seed 42"), ReplCommand::Seed(Some(42)));
        assert_eq!(parse_repl_input(":seed off"), ReplCommand::Seed(None));
        assert!(matches!(parse_repl_input(":seed -1"), ReplCommand::Unknown(_)));
        assert!(matches!(parse_repl_input(":seed"), ReplCommand::Unknown(_)));
    }

    #[test]
    fn test_parse_load_file() {
        assert_eq!(
            parse_repl_input("@draft.txt"),
            ReplCommand::LoadFile("draft.txt".to_string())
        );
    }

    #[test]
    fn test_parse_load_file_with_spaces() {
        assert_eq!(
            parse_repl_input("@  draft.txt"),
            ReplCommand::LoadFile("draft.txt".to_string())
        );
    }

    #[test]
    fn test_parse_load_clipboard() {
        assert_eq!(parse_repl_input("@@"), ReplCommand::LoadClipboard);
        assert_eq!(parse_repl_input("@"), ReplCommand::LoadClipboard);
    }

    #[test]
    fn test_parse_text() {
        assert_eq!(
            parse_repl_input("  What are you doing  "),
            ReplCommand::Analyze("What are you doing".to_string())
        );
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(matches!(parse_repl_input(""), ReplCommand::Unknown(_)));
        assert!(matches!(parse_repl_input("   "), ReplCommand::Unknown(_)));
    }

    #[test]
    fn test_parse_invalid_command() {
        assert!(matches!(parse_repl_input(":bogus"), ReplCommand::Unknown(_)));
    }
}
