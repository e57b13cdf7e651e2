use crate::channel::Channel;
use crate::error::{Result, TodozError};
use crate::notice::Notice;
use std::collections::VecDeque;

/// A channel that replays canned input and records everything written.
#[derive(Debug, Default)]
pub struct ScriptedChannel {
    inputs: VecDeque<String>,
    outputs: Vec<String>,
    notices: Vec<Notice>,
}

impl ScriptedChannel {
    pub fn new<I, T>(inputs: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn outputs(&self) -> &[String] {
        &self.outputs
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    pub fn remaining_inputs(&self) -> usize {
        self.inputs.len()
    }
}

impl Channel for ScriptedChannel {
    fn input(&mut self) -> Result<String> {
        self.inputs.pop_front().ok_or(TodozError::ChannelClosed)
    }

    fn output(&mut self, text: &str) -> Result<()> {
        self.outputs.push(text.to_string());
        Ok(())
    }

    fn notice(&mut self, notice: &Notice) -> Result<()> {
        self.notices.push(notice.clone());
        self.output(&notice.text)
    }
}
