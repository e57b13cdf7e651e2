use crate::error::TodozError;
use std::fmt;
use std::str::FromStr;

/// What the user can ask for at the menu prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Add,
    Complete,
    Remove,
    Exit,
}

impl Command {
    pub const ALL: [Command; 4] = [
        Command::Add,
        Command::Complete,
        Command::Remove,
        Command::Exit,
    ];

    pub fn token(self) -> char {
        match self {
            Command::Add => 'a',
            Command::Complete => 'c',
            Command::Remove => 'r',
            Command::Exit => 'q',
        }
    }

    pub fn describe(self) -> &'static str {
        match self {
            Command::Add => "add a todo",
            Command::Complete => "complete a todo by number",
            Command::Remove => "remove a todo by its text",
            Command::Exit => "save and quit",
        }
    }

    /// One-line menu naming every command, e.g. `[a] add a todo  [q] save and quit`.
    pub fn menu() -> String {
        Self::ALL
            .iter()
            .map(|cmd| format!("[{}] {}", cmd.token(), cmd.describe()))
            .collect::<Vec<_>>()
            .join("  ")
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

impl FromStr for Command {
    type Err = TodozError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        let mut chars = token.chars();
        let (Some(c), None) = (chars.next(), chars.next()) else {
            return Err(TodozError::UnknownCommand(token.to_string()));
        };
        let c = c.to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|cmd| cmd.token() == c)
            .ok_or_else(|| TodozError::UnknownCommand(token.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_token() {
        for cmd in Command::ALL {
            assert_eq!(cmd.to_string().parse::<Command>().unwrap(), cmd);
        }
    }

    #[test]
    fn tokens_are_distinct() {
        let mut tokens: Vec<char> = Command::ALL.iter().map(|c| c.token()).collect();
        tokens.sort_unstable();
        tokens.dedup();
        assert_eq!(tokens.len(), Command::ALL.len());
    }

    #[test]
    fn tolerates_whitespace_and_case() {
        assert_eq!(" Q \n".parse::<Command>().unwrap(), Command::Exit);
        assert_eq!("A".parse::<Command>().unwrap(), Command::Add);
    }

    #[test]
    fn rejects_unknown_and_multi_char_tokens() {
        assert!(matches!(
            "x".parse::<Command>(),
            Err(TodozError::UnknownCommand(ref t)) if t == "x"
        ));
        assert!("add".parse::<Command>().is_err());
        assert!("".parse::<Command>().is_err());
    }

    #[test]
    fn menu_lists_all_commands() {
        let menu = Command::menu();
        for cmd in Command::ALL {
            assert!(menu.contains(&format!("[{}]", cmd.token())));
        }
    }
}
