//! Playback commands understood by `requests/status.xml`

use std::fmt;

/// A transport action forwarded to VLC as the `command` query parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Toggle between playing and paused
    PlayPause,
    /// Skip to the next playlist item
    Next,
    /// Go back to the previous playlist item
    Previous,
}

impl Command {
    /// The backend token VLC expects for this command
    pub fn token(&self) -> &'static str {
        match self {
            Command::PlayPause => "pl_pause",
            Command::Next => "pl_next",
            Command::Previous => "pl_previous",
        }
    }

    /// Every command, in the order a host usually lays out its buttons
    pub fn all() -> [Command; 3] {
        [Command::PlayPause, Command::Next, Command::Previous]
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Command::PlayPause, "pl_pause")]
    #[case(Command::Next, "pl_next")]
    #[case(Command::Previous, "pl_previous")]
    fn test_command_tokens(#[case] command: Command, #[case] token: &str) {
        assert_eq!(command.token(), token);
        assert_eq!(command.to_string(), token);
    }

    #[test]
    fn test_all_commands_have_distinct_tokens() {
        let tokens: std::collections::HashSet<_> =
            Command::all().iter().map(Command::token).collect();
        assert_eq!(tokens.len(), 3);
        assert!(tokens.iter().all(|token| token.starts_with("pl_")));
    }
}
