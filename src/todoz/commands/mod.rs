//! # Commands
//!
//! Non-interactive operations behind the binary's subcommands. Like the
//! session itself they never print: each returns a [`CmdResult`] whose
//! notices the caller renders however it likes.

use crate::config::TodozConfig;
use crate::error::Result;
use crate::model::Scope;
use crate::notice::Notice;
use std::path::PathBuf;

pub mod config;
pub mod paths;

#[derive(Debug, Clone)]
pub struct TodozPaths {
    pub project: PathBuf,
    pub global: PathBuf,
}

impl TodozPaths {
    pub fn scope_dir(&self, scope: Scope) -> PathBuf {
        match scope {
            Scope::Project => self.project.clone(),
            Scope::Global => self.global.clone(),
        }
    }

    /// The task file for `scope`, named by that scope's config.
    pub fn task_file(&self, scope: Scope) -> Result<PathBuf> {
        let dir = self.scope_dir(scope);
        let config = TodozConfig::load(&dir)?;
        Ok(dir.join(config.file_name))
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub task_file: Option<PathBuf>,
    pub config: Option<TodozConfig>,
    pub notices: Vec<Notice>,
}

impl CmdResult {
    pub fn add_notice(&mut self, notice: Notice) {
        self.notices.push(notice);
    }

    pub fn with_task_file(mut self, path: PathBuf) -> Self {
        self.task_file = Some(path);
        self
    }

    pub fn with_config(mut self, config: TodozConfig) -> Self {
        self.config = Some(config);
        self
    }
}
