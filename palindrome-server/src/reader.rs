//! Bounded request reader
//!
//! Reads one newline-terminated frame at a time without ever buffering more
//! than `max_bytes + 1` bytes of a single line.

use std::string::FromUtf8Error;
use tokio::io::{self, AsyncBufRead, AsyncBufReadExt, AsyncReadExt};

/// One line of input, classified
#[derive(Debug)]
pub enum Frame {
    Line(String),
    /// Bytes that are not UTF-8
    Invalid(FromUtf8Error),
    /// Line longer than the limit; its remainder has been discarded
    TooLarge,
}

pub struct FrameReader<R> {
    inner: R,
    max_bytes: usize,
}

impl<R: AsyncBufRead + Unpin> FrameReader<R> {
    pub fn new(inner: R, max_bytes: usize) -> Self {
        Self { inner, max_bytes }
    }

    /// Next frame, or `None` at end of input
    pub async fn next_frame(&mut self) -> io::Result<Option<Frame>> {
        let mut buf = Vec::new();
        let limit = self.max_bytes as u64 + 1;
        let n = (&mut self.inner)
            .take(limit)
            .read_until(b'\n', &mut buf)
            .await?;
        if n == 0 {
            return Ok(None);
        }

        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        } else if buf.len() > self.max_bytes {
            self.skip_line().await?;
            return Ok(Some(Frame::TooLarge));
        }

        Ok(Some(match String::from_utf8(buf) {
            Ok(line) => Frame::Line(line),
            Err(e) => Frame::Invalid(e),
        }))
    }

    /// Discard input up to and including the next newline
    async fn skip_line(&mut self) -> io::Result<()> {
        loop {
            let available = self.inner.fill_buf().await?;
            if available.is_empty() {
                return Ok(());
            }
            match available.iter().position(|b| *b == b'\n') {
                Some(pos) => {
                    self.inner.consume(pos + 1);
                    return Ok(());
                }
                None => {
                    let len = available.len();
                    self.inner.consume(len);
                }
            }
        }
    }
}
