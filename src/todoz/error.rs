use thiserror::Error;

#[derive(Error, Debug)]
pub enum TodozError {
    #[error("Todo not found: {0}")]
    NotFound(String),

    #[error("Position {position} is out of range for {len} todo(s)")]
    IndexOutOfRange { position: usize, len: usize },

    #[error("There is no todo #{0}")]
    NoSuchTodo(usize),

    #[error("Not a todo number: '{0}'")]
    Parse(String),

    #[error("Unknown command: '{0}'")]
    UnknownCommand(String),

    #[error("A todo needs some text")]
    EmptyTask,

    #[error("Input channel closed")]
    ChannelClosed,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl TodozError {
    /// Errors caused by what the user typed. A session reports these and
    /// keeps going; everything else ends it.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            TodozError::NotFound(_)
                | TodozError::IndexOutOfRange { .. }
                | TodozError::NoSuchTodo(_)
                | TodozError::Parse(_)
                | TodozError::UnknownCommand(_)
                | TodozError::EmptyTask
        )
    }
}

pub type Result<T> = std::result::Result<T, TodozError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_are_recoverable() {
        assert!(TodozError::NotFound("x".into()).is_recoverable());
        assert!(TodozError::IndexOutOfRange { position: 3, len: 1 }.is_recoverable());
        assert!(TodozError::Parse("abc".into()).is_recoverable());
        assert!(TodozError::UnknownCommand("z".into()).is_recoverable());
    }

    #[test]
    fn io_and_channel_errors_are_fatal() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk gone");
        assert!(!TodozError::from(io).is_recoverable());
        assert!(!TodozError::ChannelClosed.is_recoverable());
        assert!(!TodozError::Config("bad".into()).is_recoverable());
    }
}
