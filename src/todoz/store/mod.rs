//! # Storage Layer
//!
//! Tasks persist as plain text: one task per line, lines joined by a single
//! `\n`, no trailing newline and no header.
//!
//! ```text
//! Write a todo list app
//! Profit
//! ```
//!
//! The [`FileCabinet`](cabinet::FileCabinet) moves a [`Notepad`](crate::notepad::Notepad)
//! in and out of anything implementing [`Stream`]. The stream is read once at
//! the start of a session and rewritten wholesale at the end, so shrinking the
//! list shortens the backing content and no diffing is needed.
//!
//! ## Implementations
//!
//! - [`std::fs::File`]: production, opened by [`fs::open_task_file`]
//! - [`std::io::Cursor<Vec<u8>>`]: in-memory, for tests
//! - `&mut S` for any stream `S`, so callers can lend a stream and inspect it
//!   after the session ends

use std::fs::File;
use std::io::{self, Cursor, Read, Seek, Write};

pub mod cabinet;
pub mod fs;

pub use cabinet::FileCabinet;

/// A seekable text source and sink that can be cut short.
pub trait Stream: Read + Write + Seek {
    /// Discard everything after the current position.
    fn truncate(&mut self) -> io::Result<()>;
}

impl Stream for File {
    fn truncate(&mut self) -> io::Result<()> {
        let position = self.stream_position()?;
        self.set_len(position)
    }
}

impl Stream for Cursor<Vec<u8>> {
    fn truncate(&mut self) -> io::Result<()> {
        let position = usize::try_from(self.position()).unwrap_or(usize::MAX);
        self.get_mut().truncate(position);
        Ok(())
    }
}

impl<S: Stream + ?Sized> Stream for &mut S {
    fn truncate(&mut self) -> io::Result<()> {
        (**self).truncate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::SeekFrom;

    #[test]
    fn cursor_truncates_at_position() {
        let mut cursor = Cursor::new(b"todo 1\ntodo 2".to_vec());
        cursor.seek(SeekFrom::Start(6)).unwrap();
        cursor.truncate().unwrap();
        assert_eq!(cursor.get_ref().as_slice(), b"todo 1");
    }

    #[test]
    fn file_truncates_at_position() {
        let mut file = tempfile::tempfile().unwrap();
        file.write_all(b"first\nsecond").unwrap();
        file.seek(SeekFrom::Start(5)).unwrap();
        file.truncate().unwrap();

        let mut content = String::new();
        file.seek(SeekFrom::Start(0)).unwrap();
        file.read_to_string(&mut content).unwrap();
        assert_eq!(content, "first");
    }
}
