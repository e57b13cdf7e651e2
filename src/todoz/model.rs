use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scope {
    Project,
    Global,
}

/// A single to-do item. Its text is its only identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Task(String);

impl Task {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Task {
    fn from(text: &str) -> Self {
        Self(text.to_string())
    }
}

impl From<String> for Task {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl PartialEq<&str> for Task {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
