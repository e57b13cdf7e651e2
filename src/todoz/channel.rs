//! # Channels
//!
//! A [`Channel`] is the only way a session talks to its user: one line in,
//! one line out. The console is generic over it, so a terminal, a socket or a
//! scripted test double all drive the same loop.

use crate::error::{Result, TodozError};
use crate::notice::Notice;
use std::io::{self, BufRead, Write};

pub trait Channel {
    /// Blocks for the next line of input, without its line ending.
    ///
    /// Returns [`TodozError::ChannelClosed`] once no more input will arrive.
    fn input(&mut self) -> Result<String>;

    fn output(&mut self, text: &str) -> Result<()>;

    /// Writes a status line. Plain channels drop the level.
    fn notice(&mut self, notice: &Notice) -> Result<()> {
        self.output(&notice.text)
    }
}

impl<C: Channel + ?Sized> Channel for &mut C {
    fn input(&mut self) -> Result<String> {
        (**self).input()
    }

    fn output(&mut self, text: &str) -> Result<()> {
        (**self).output(text)
    }

    fn notice(&mut self, notice: &Notice) -> Result<()> {
        (**self).notice(notice)
    }
}

/// A channel over any line reader and writer.
pub struct IoChannel<R, W> {
    reader: R,
    writer: W,
    styled: bool,
}

impl<R: BufRead, W: Write> IoChannel<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            styled: false,
        }
    }

    /// Colour notices by level.
    pub fn styled(mut self, styled: bool) -> Self {
        self.styled = styled;
        self
    }

    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }
}

impl IoChannel<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout()).styled(true)
    }
}

impl<R: BufRead, W: Write> Channel for IoChannel<R, W> {
    /// Bytes that are not UTF-8 become U+FFFD rather than an error, so a
    /// stray byte from the terminal is just a bad answer to the prompt.
    fn input(&mut self) -> Result<String> {
        let mut bytes = Vec::new();
        if self.reader.read_until(b'\n', &mut bytes)? == 0 {
            return Err(TodozError::ChannelClosed);
        }
        while matches!(bytes.last(), Some(b'\n' | b'\r')) {
            bytes.pop();
        }
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    fn output(&mut self, text: &str) -> Result<()> {
        writeln!(self.writer, "{}", text)?;
        self.writer.flush()?;
        Ok(())
    }

    fn notice(&mut self, notice: &Notice) -> Result<()> {
        if self.styled {
            self.output(&notice.styled().to_string())
        } else {
            self.output(&notice.text)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_lines_without_endings() {
        let input = b"a\r\nschedule birthday\n" as &[u8];
        let mut channel = IoChannel::new(input, Vec::new());

        assert_eq!(channel.input().unwrap(), "a");
        assert_eq!(channel.input().unwrap(), "schedule birthday");
    }

    #[test]
    fn end_of_input_closes_the_channel() {
        let mut channel = IoChannel::new(b"last" as &[u8], Vec::new());

        assert_eq!(channel.input().unwrap(), "last");
        assert!(matches!(channel.input(), Err(TodozError::ChannelClosed)));
    }

    #[test]
    fn invalid_utf8_is_replaced_not_fatal() {
        let mut channel = IoChannel::new(b"ok\n\xff\xfe\nafter\n" as &[u8], Vec::new());

        assert_eq!(channel.input().unwrap(), "ok");
        assert_eq!(channel.input().unwrap(), "\u{FFFD}\u{FFFD}");
        assert_eq!(channel.input().unwrap(), "after");
    }

    #[test]
    fn output_writes_one_line_each() {
        let mut channel = IoChannel::new(&b""[..], Vec::new());
        channel.output("first").unwrap();
        channel.notice(&Notice::rejected("second")).unwrap();

        let (_, written) = channel.into_inner();
        assert_eq!(String::from_utf8(written).unwrap(), "first\nsecond\n");
    }
}
