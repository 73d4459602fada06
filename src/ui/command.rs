//! Command parsing for the TUI command deck
//!
//! Parses user input in Command mode, supporting:
//! - `:q` or `:quit` → Quit command
//! - `:h` or `:help` → Help command
//! - `:s` or `:submit` → Classify the current input
//! - `:c` or `:clear` → Clear the input box and result
//! - `@request.json` → Load the file into the input box
//! - `@@` → Load the clipboard into the input box

use crate::app::AppEvent;

/// Commands that can be parsed from command deck input
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Quit,
    Help,
    Submit,
    Clear,
    LoadFile(String),
    LoadClipboard,
    Unknown(String),
}

/// Parse command deck input string into a Command
pub fn parse_command(input: &str) -> Command {
    let input = input.trim();

    if input.is_empty() {
        return Command::Unknown(input.to_string());
    }

    if let Some(cmd) = input.strip_prefix(':') {
        match cmd.trim() {
            "q" | "quit" => Command::Quit,
            "h" | "help" => Command::Help,
            "s" | "submit" => Command::Submit,
            "c" | "clear" => Command::Clear,
            _ => Command::Unknown(input.to_string()),
        }
    } else if let Some(rest) = input.strip_prefix('@') {
        let filename = rest.trim();
        if filename.is_empty() || filename == "@" {
            Command::LoadClipboard
        } else {
            Command::LoadFile(filename.to_string())
        }
    } else {
        Command::Unknown(input.to_string())
    }
}

/// Convert a parsed command into an AppEvent
pub fn command_to_app_event(command: Command) -> AppEvent {
    match command {
        Command::Quit => AppEvent::Quit,
        Command::Help => AppEvent::Help,
        Command::Submit => AppEvent::Submit,
        Command::Clear => AppEvent::Clear,
        Command::LoadFile(path) => AppEvent::LoadFile(path),
        Command::LoadClipboard => AppEvent::LoadClipboard,
        Command::Unknown(input) => AppEvent::InvalidCommand(input),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quit_variants() {
        assert_eq!(parse_command(":q"), Command::Quit);
        assert_eq!(parse_command(":quit"), Command::Quit);
    }

    #[test]
    fn test_parse_help_variants() {
        assert_eq!(parse_command(":h"), Command::Help);
        assert_eq!(parse_command(":help"), Command::Help);
    }

    #[test]
    fn test_parse_submit_and_clear() {
        assert_eq!(parse_command(":s"), Command::Submit);
        assert_eq!(parse_command(" :submit "), Command::Submit);
        assert_eq!(parse_command(":c"), Command::Clear);
        assert_eq!(parse_command(":clear"), Command::Clear);
    }

    #[test]
    fn test_parse_load_file_with_spaces() {
        assert_eq!(
            parse_command("@  request.json"),
            Command::LoadFile("request.json".to_string())
        );
    }

    #[test]
    fn test_parse_load_clipboard() {
        assert_eq!(parse_command("@@"), Command::LoadClipboard);
        assert_eq!(parse_command("@"), Command::LoadClipboard);
    }

    #[test]
    fn test_parse_empty_and_invalid() {
        assert!(matches!(parse_command("   "), Command::Unknown(_)));
        assert!(matches!(parse_command(":x"), Command::Unknown(_)));
        assert!(matches!(parse_command("submit"), Command::Unknown(_)));
    }

    #[test]
    fn test_command_to_app_event() {
        assert_eq!(command_to_app_event(Command::Submit), AppEvent::Submit);
        assert_eq!(command_to_app_event(Command::Clear), AppEvent::Clear);
        assert_eq!(
            command_to_app_event(Command::LoadFile("r.json".to_string())),
            AppEvent::LoadFile("r.json".to_string())
        );
        assert_eq!(
            command_to_app_event(Command::LoadClipboard),
            AppEvent::LoadClipboard
        );
        assert!(matches!(
            command_to_app_event(Command::Unknown("nope".to_string())),
            AppEvent::InvalidCommand(_)
        ));
    }
}
