//! Short status lines a session or subcommand hands back to the user.

use crate::error::TodozError;
use colored::{ColoredString, Colorize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    /// A value the user asked to see.
    Info,
    /// The list or config changed.
    Done,
    /// The user's input was rejected; nothing changed.
    Rejected,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            text: text.into(),
        }
    }

    pub fn done(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Done,
            text: text.into(),
        }
    }

    pub fn rejected(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Rejected,
            text: text.into(),
        }
    }

    /// The text coloured for a terminal: dim for info, green for done, red
    /// for rejected.
    pub fn styled(&self) -> ColoredString {
        match self.level {
            NoticeLevel::Info => self.text.dimmed(),
            NoticeLevel::Done => self.text.green(),
            NoticeLevel::Rejected => self.text.red(),
        }
    }
}

impl From<&TodozError> for Notice {
    fn from(err: &TodozError) -> Self {
        Notice::rejected(err.to_string())
    }
}
