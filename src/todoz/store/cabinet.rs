use super::Stream;
use crate::error::Result;
use crate::notepad::Notepad;
use log::debug;
use std::io::{Read, Seek, SeekFrom, Write};

/// Moves a notepad to and from one stream for the length of a session.
pub struct FileCabinet<S: Stream> {
    stream: S,
}

impl<S: Stream> FileCabinet<S> {
    pub fn new(stream: S) -> Self {
        Self { stream }
    }

    /// Reads every line from the stream's current position to its end and
    /// writes each, trimmed, into `notepad`. Blank lines are skipped.
    ///
    /// The stream is not rewound first; call [`rewind`](Self::rewind) when
    /// the stream may already have been read.
    pub fn take_out(&mut self, notepad: &mut Notepad) -> Result<()> {
        let mut content = String::new();
        self.stream.read_to_string(&mut content)?;

        let mut loaded = 0;
        for line in content.lines() {
            let task = line.trim();
            if task.is_empty() {
                continue;
            }
            notepad.write(task);
            loaded += 1;
        }
        debug!("loaded {} todo(s) from stream", loaded);
        Ok(())
    }

    /// Replaces the stream's content with the notepad's todos, newline-joined.
    pub fn store(&mut self, notepad: &Notepad) -> Result<()> {
        let content = notepad
            .todos()
            .iter()
            .map(|task| task.as_str())
            .collect::<Vec<_>>()
            .join("\n");

        self.rewind()?;
        self.stream.truncate()?;
        self.stream.write_all(content.as_bytes())?;
        self.stream.flush()?;
        debug!(
            "stored {} todo(s), {} byte(s)",
            notepad.len(),
            content.len()
        );
        Ok(())
    }

    pub fn rewind(&mut self) -> Result<()> {
        self.stream.seek(SeekFrom::Start(0))?;
        Ok(())
    }

    pub fn into_inner(self) -> S {
        self.stream
    }
}
