//! # Console
//!
//! One interactive session over a [`Channel`] and a [`Stream`]:
//!
//! ```text
//! Loading ──take_out──▶ Menu ◀──┐
//!                        │      │ add / complete / remove / bad input
//!                        ├──────┘
//!                        │ exit (or input closed)
//!                        ▼
//!                     Exiting ──store──▶ Finished
//! ```
//!
//! Mistakes in what the user types (an unknown command, a number that is not
//! a number, a todo that does not exist) are reported on the channel and the
//! menu comes back. I/O failures on the stream or channel end the session
//! with an error and nothing is stored.

use crate::channel::Channel;
use crate::error::{Result, TodozError};
use crate::notepad::Notepad;
use crate::notice::Notice;
use crate::store::{FileCabinet, Stream};
use log::{debug, info, warn};

pub mod command;

pub use command::Command;

const HEADER: &str = "Here's your current todos.";
const EMPTY: &str = "Nothing to do yet.";
const ADD_PROMPT: &str = "What needs doing?";
const COMPLETE_PROMPT: &str = "Which number is done?";
const REMOVE_PROMPT: &str = "Type the todo to remove:";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Loading,
    Menu,
    Exiting,
    Finished,
}

pub struct Console<C: Channel, S: Stream> {
    channel: C,
    cabinet: FileCabinet<S>,
    notepad: Notepad,
    state: SessionState,
}

impl<C: Channel, S: Stream> Console<C, S> {
    pub fn new(channel: C, stream: S) -> Self {
        Self {
            channel,
            cabinet: FileCabinet::new(stream),
            notepad: Notepad::new(),
            state: SessionState::Loading,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn channel(&self) -> &C {
        &self.channel
    }

    /// Runs the session to completion: load, loop until exit, store once.
    pub fn start(&mut self) -> Result<()> {
        self.cabinet.take_out(&mut self.notepad)?;
        info!("session started with {} todo(s)", self.notepad.len());
        self.state = SessionState::Menu;

        while self.state == SessionState::Menu {
            self.step()?;
        }

        self.cabinet.store(&self.notepad)?;
        self.state = SessionState::Finished;
        info!("session saved {} todo(s)", self.notepad.len());
        Ok(())
    }

    pub fn into_parts(self) -> (C, S, Notepad) {
        (self.channel, self.cabinet.into_inner(), self.notepad)
    }

    fn step(&mut self) -> Result<()> {
        self.show_todos()?;
        self.channel.output(&Command::menu())?;

        let outcome = self
            .channel
            .input()
            .and_then(|token| token.parse::<Command>())
            .and_then(|cmd| self.dispatch(cmd));

        match outcome {
            Ok(()) => Ok(()),
            Err(TodozError::ChannelClosed) => {
                debug!("input closed, leaving the menu");
                self.state = SessionState::Exiting;
                Ok(())
            }
            Err(e) if e.is_recoverable() => {
                warn!("{}", e);
                self.channel.notice(&Notice::from(&e))
            }
            Err(e) => Err(e),
        }
    }

    fn dispatch(&mut self, command: Command) -> Result<()> {
        debug!("dispatching {:?}", command);
        match command {
            Command::Exit => {
                self.state = SessionState::Exiting;
                Ok(())
            }
            Command::Add => self.add(),
            Command::Complete => self.complete(),
            Command::Remove => self.remove(),
        }
    }

    fn show_todos(&mut self) -> Result<()> {
        self.channel.output(HEADER)?;
        if self.notepad.is_empty() {
            return self.channel.output(EMPTY);
        }
        for (idx, task) in self.notepad.todos().iter().enumerate() {
            self.channel.output(&format!("{} {}", idx + 1, task))?;
        }
        Ok(())
    }

    fn add(&mut self) -> Result<()> {
        self.channel.output(ADD_PROMPT)?;
        let text = self.channel.input()?;
        let text = text.trim();
        if text.is_empty() {
            return Err(TodozError::EmptyTask);
        }
        self.notepad.write(text);
        self.channel
            .notice(&Notice::done(format!("Added: {}", text)))
    }

    fn complete(&mut self) -> Result<()> {
        self.channel.output(COMPLETE_PROMPT)?;
        let raw = self.channel.input()?;
        let raw = raw.trim();
        let number: usize = raw
            .parse()
            .map_err(|_| TodozError::Parse(raw.to_string()))?;
        let position = number
            .checked_sub(1)
            .ok_or(TodozError::NoSuchTodo(number))?;
        let task = self
            .notepad
            .remove_indexed(position)
            .map_err(|_| TodozError::NoSuchTodo(number))?;
        self.channel
            .notice(&Notice::done(format!("Completed: {}", task)))
    }

    fn remove(&mut self) -> Result<()> {
        self.channel.output(REMOVE_PROMPT)?;
        let text = self.channel.input()?;
        let task = self.notepad.remove(text.trim())?;
        self.channel
            .notice(&Notice::done(format!("Removed: {}", task)))
    }
}
