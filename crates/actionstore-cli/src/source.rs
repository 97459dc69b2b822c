//! MessageSource port - 受信メッセージの供給元
//!
//! 転送とデシリアライズは core の外側の責務なので、CLI 側でここに閉じ込める。

use actionstore_core::ActionMessage;
use async_trait::async_trait;
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("read failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: {source}")]
    Decode {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}

impl SourceError {
    /// A bad message that the caller can skip; anything else ends the stream.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Decode { .. })
    }
}

#[async_trait]
pub trait MessageSource: Send {
    /// Next message, or `Ok(None)` once the source is exhausted.
    async fn next_message(&mut self) -> Result<Option<ActionMessage>, SourceError>;
}

/// Reads one JSON message per line. Blank lines are skipped.
pub struct LineSource<R> {
    reader: R,
    line_no: usize,
    buf: String,
}

impl<R> LineSource<R>
where
    R: AsyncBufRead + Unpin + Send,
{
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line_no: 0,
            buf: String::new(),
        }
    }
}

#[async_trait]
impl<R> MessageSource for LineSource<R>
where
    R: AsyncBufRead + Unpin + Send,
{
    async fn next_message(&mut self) -> Result<Option<ActionMessage>, SourceError> {
        loop {
            self.buf.clear();
            if self.reader.read_line(&mut self.buf).await? == 0 {
                return Ok(None);
            }
            self.line_no += 1;

            let line = self.buf.trim();
            if line.is_empty() {
                continue;
            }
            return serde_json::from_str(line)
                .map(Some)
                .map_err(|source| SourceError::Decode {
                    line: self.line_no,
                    source,
                });
        }
    }
}
