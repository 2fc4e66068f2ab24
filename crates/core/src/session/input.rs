//! Whitespace-delimited token input.

use std::collections::VecDeque;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};

/// Reads whitespace-separated tokens from a line-oriented stream.
///
/// Tokens may be spread over lines in any way: `"Jo Do\nj@d.co 1\n"` yields
/// the same four tokens as one token per line. Bytes that are not valid
/// UTF-8 are kept as replacement characters rather than failing the read.
pub struct TokenReader<R> {
    reader: R,
    pending: VecDeque<String>,
    line: Vec<u8>,
}

impl<R> TokenReader<R>
where
    R: AsyncBufRead + Unpin,
{
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
            line: Vec::new(),
        }
    }

    /// Next token, or `None` once the stream is exhausted.
    pub async fn next_token(&mut self) -> std::io::Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }

            self.line.clear();
            if self.reader.read_until(b'\n', &mut self.line).await? == 0 {
                return Ok(None);
            }
            self.pending.extend(
                String::from_utf8_lossy(&self.line)
                    .split_whitespace()
                    .map(str::to_string),
            );
        }
    }
}
