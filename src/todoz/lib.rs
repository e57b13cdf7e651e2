//! # Todoz Architecture
//!
//! Todoz keeps a to-do list in a plain text file and edits it through a
//! small prompt loop. The library never touches stdin or stdout itself: the
//! session talks through a [`channel::Channel`] and persists through a
//! [`store::Stream`], both supplied by the caller.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Binary (main.rs)                                           │
//! │  - Parses arguments, opens the task file, wires stdio       │
//! │  - The ONLY place that knows about exit codes               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Console (console/)                                         │
//! │  - Menu loop: list, prompt, dispatch, report                │
//! │  - Loads at start, stores exactly once at exit              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Notepad (notepad.rs) + FileCabinet (store/)                │
//! │  - Ordered in-memory list                                   │
//! │  - Line-per-task load, truncate-and-rewrite store           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Overview
//!
//! - [`notepad`]: the in-memory list
//! - [`store`]: the stream abstraction and the `FileCabinet`
//! - [`console`]: the interactive session and its command vocabulary
//! - [`channel`]: line-based input/output for sessions
//! - [`commands`]: non-interactive operations (config, paths)
//! - [`config`]: per-scope configuration
//! - [`notice`]: leveled status lines for the user
//! - [`model`]: `Task` and `Scope`
//! - [`error`]: error types

pub mod channel;
pub mod commands;
pub mod config;
pub mod console;
pub mod error;
pub mod model;
pub mod notepad;
pub mod notice;
pub mod store;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;
