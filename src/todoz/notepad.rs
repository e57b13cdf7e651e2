//! # Notepad
//!
//! The in-memory list for one session. Order is insertion order and
//! duplicates are allowed; a task is addressed either by its text or by its
//! zero-based position.

use crate::error::{Result, TodozError};
use crate::model::Task;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Notepad {
    todos: Vec<Task>,
}

impl Notepad {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current entries in insertion order. The slice is read-only, so callers
    /// can never mutate the list behind the notepad's back.
    pub fn todos(&self) -> &[Task] {
        &self.todos
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    pub fn write(&mut self, task: impl Into<Task>) {
        self.todos.push(task.into());
    }

    /// Removes the first entry whose text equals `task`.
    pub fn remove(&mut self, task: impl AsRef<str>) -> Result<Task> {
        let text = task.as_ref();
        let position = self
            .todos
            .iter()
            .position(|t| t.as_str() == text)
            .ok_or_else(|| TodozError::NotFound(text.to_string()))?;
        Ok(self.todos.remove(position))
    }

    pub fn remove_indexed(&mut self, position: usize) -> Result<Task> {
        if position >= self.todos.len() {
            return Err(TodozError::IndexOutOfRange {
                position,
                len: self.todos.len(),
            });
        }
        Ok(self.todos.remove(position))
    }
}
