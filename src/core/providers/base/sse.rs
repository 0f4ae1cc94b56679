//! SSE (Server-Sent Events) decoding for backend response bodies
//!
//! Backends answer a streaming request with an `text/event-stream` body. The
//! parser here turns raw network reads into complete `data:` payloads:
//!
//! - bytes are buffered until a full line is available, so payloads and
//!   multi-byte characters split across reads are reassembled
//! - consecutive `data:` lines of one event are joined with `\n`
//! - comment lines (`: OPENROUTER PROCESSING`) and non-data fields are ignored
//! - the `[DONE]` payload ends the stream

use bytes::Bytes;
use futures::Stream;
use futures::stream::BoxStream;
use std::collections::VecDeque;
use std::pin::Pin;
use std::task::{Context, Poll};

use crate::core::providers::error::BackendError;

/// End-of-stream marker sent by OpenAI-compatible backends
pub const DONE_MARKER: &str = "[DONE]";

/// A complete event decoded from the body
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SseFrame {
    /// Payload of a data event
    Data(String),
    /// The `[DONE]` marker
    Done,
}

/// Incremental SSE parser
#[derive(Debug, Default)]
pub struct SseParser {
    buffer: Vec<u8>,
    data: Option<String>,
}

impl SseParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed raw bytes and collect every event they complete
    pub fn process_bytes(&mut self, bytes: &[u8]) -> Vec<SseFrame> {
        self.buffer.extend_from_slice(bytes);

        let mut frames = Vec::new();
        while let Some(pos) = self.buffer.iter().position(|b| *b == b'\n') {
            let line: Vec<u8> = self.buffer.drain(..=pos).collect();
            let line = String::from_utf8_lossy(&line);
            let line = line.trim_end_matches(['\n', '\r']);
            if let Some(frame) = self.process_line(line) {
                frames.push(frame);
            }
        }
        frames
    }

    /// Flush whatever is left once the body has ended
    pub fn finish(&mut self) -> Option<SseFrame> {
        if !self.buffer.is_empty() {
            let rest = std::mem::take(&mut self.buffer);
            let line = String::from_utf8_lossy(&rest).into_owned();
            if let Some(frame) = self.process_line(line.trim_end_matches('\r')) {
                return Some(frame);
            }
        }
        self.dispatch()
    }

    fn process_line(&mut self, line: &str) -> Option<SseFrame> {
        // Empty line terminates the current event
        if line.is_empty() {
            return self.dispatch();
        }
        if line.starts_with(':') {
            return None;
        }

        let (field, value) = match line.split_once(':') {
            Some((field, value)) => (field, value.strip_prefix(' ').unwrap_or(value)),
            None => (line, ""),
        };

        if field == "data" {
            match self.data.as_mut() {
                Some(data) => {
                    data.push('\n');
                    data.push_str(value);
                }
                None => self.data = Some(value.to_string()),
            }
        }
        None
    }

    fn dispatch(&mut self) -> Option<SseFrame> {
        let data = self.data.take()?;
        if data.trim() == DONE_MARKER {
            Some(SseFrame::Done)
        } else if data.trim().is_empty() {
            None
        } else {
            Some(SseFrame::Data(data))
        }
    }
}

/// Stream of `data:` payloads read from a backend response body
///
/// Ends after `[DONE]` or when the body ends. Transport failures are surfaced
/// as [`BackendError::Network`] and end the stream.
pub struct SseStream {
    backend: String,
    inner: BoxStream<'static, Result<Bytes, reqwest::Error>>,
    parser: SseParser,
    pending: VecDeque<String>,
    finished: bool,
}

impl SseStream {
    pub fn new(
        backend: impl Into<String>,
        inner: impl Stream<Item = Result<Bytes, reqwest::Error>> + Send + 'static,
    ) -> Self {
        Self {
            backend: backend.into(),
            inner: Box::pin(inner),
            parser: SseParser::new(),
            pending: VecDeque::new(),
            finished: false,
        }
    }

    fn push_frames(&mut self, frames: impl IntoIterator<Item = SseFrame>) {
        for frame in frames {
            match frame {
                SseFrame::Data(data) if !self.finished => self.pending.push_back(data),
                SseFrame::Data(_) => {}
                SseFrame::Done => self.finished = true,
            }
        }
    }
}

impl Stream for SseStream {
    type Item = Result<String, BackendError>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();

        loop {
            if let Some(data) = this.pending.pop_front() {
                return Poll::Ready(Some(Ok(data)));
            }
            if this.finished {
                return Poll::Ready(None);
            }

            match this.inner.as_mut().poll_next(cx) {
                Poll::Ready(Some(Ok(bytes))) => {
                    let frames = this.parser.process_bytes(&bytes);
                    this.push_frames(frames);
                }
                Poll::Ready(Some(Err(e))) => {
                    this.finished = true;
                    this.pending.clear();
                    return Poll::Ready(Some(Err(BackendError::from_reqwest(
                        this.backend.as_str(),
                        &e,
                    ))));
                }
                Poll::Ready(None) => {
                    let frame = this.parser.finish();
                    this.push_frames(frame);
                    this.finished = true;
                }
                Poll::Pending => return Poll::Pending,
            }
        }
    }
}
