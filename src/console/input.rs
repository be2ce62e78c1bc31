//! Line-oriented input sources.

use anyhow::Result;
use std::collections::VecDeque;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Stdin};
use tracing::{debug, instrument};

/// Supplies raw lines of text on demand.
#[async_trait::async_trait]
pub trait InputProvider: Send {
    /// Reads the next line without its terminator.
    ///
    /// Returns `Ok(None)` once the source is exhausted.
    async fn read_line(&mut self) -> Result<Option<String>>;
}

/// Reads lines from any buffered async reader.
///
/// Bytes that are not valid UTF-8 are replaced rather than treated as an
/// error, so a garbled line reaches the move parser and is rejected there.
#[derive(Debug)]
pub struct ReaderInput<R> {
    reader: R,
}

impl<R> ReaderInput<R>
where
    R: AsyncBufRead + Unpin + Send,
{
    /// Wraps a buffered reader.
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

#[async_trait::async_trait]
impl<R> InputProvider for ReaderInput<R>
where
    R: AsyncBufRead + Unpin + Send,
{
    #[instrument(skip(self))]
    async fn read_line(&mut self) -> Result<Option<String>> {
        let mut buf = Vec::new();
        let read = self.reader.read_until(b'\n', &mut buf).await?;
        if read == 0 {
            debug!("End of input");
            return Ok(None);
        }

        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        }
        let line = String::from_utf8_lossy(&buf).into_owned();
        debug!(bytes = read, "Read line");
        Ok(Some(line))
    }
}

/// Line input from the process's standard input.
pub type StdinInput = ReaderInput<BufReader<Stdin>>;

impl StdinInput {
    /// Wraps tokio's stdin handle.
    pub fn stdin() -> Self {
        Self::new(BufReader::new(tokio::io::stdin()))
    }
}

/// Serves a fixed list of lines, then reports end of input.
///
/// Used to replay a session without a terminal.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
}

impl ScriptedInput {
    /// Creates a script from the given lines, served in order.
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Lines not yet consumed.
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

#[async_trait::async_trait]
impl InputProvider for ScriptedInput {
    async fn read_line(&mut self) -> Result<Option<String>> {
        Ok(self.lines.pop_front())
    }
}
