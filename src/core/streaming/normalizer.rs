//! Stream normalization
//!
//! Turns the raw increments of any backend into the canonical chunk sequence:
//! a role chunk, content chunks, one stop chunk, then the end marker.

use super::types::{
    ChatCompletionChunk, ChatCompletionChunkChoice, ChatCompletionDelta, StreamEvent,
};
use super::utils::{
    CHUNK_OBJECT, UNKNOWN_MODEL, generate_fingerprint, generate_response_id, unix_timestamp,
};
use crate::core::types::{FinishReason, MessageRole, Usage};
use futures::Stream;
use pin_project_lite::pin_project;
use std::pin::Pin;
use std::task::{Context, Poll};

/// Parameters fixed for the lifetime of one response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseParams {
    pub id: String,
    pub created: i64,
    pub model: String,
    pub fingerprint: String,
    pub include_usage: bool,
}

impl ResponseParams {
    /// Fresh id, timestamp and fingerprint for a new response
    pub fn new(model: Option<&str>, include_usage: bool) -> Self {
        Self {
            id: generate_response_id(),
            created: unix_timestamp(),
            model: model
                .filter(|model| !model.is_empty())
                .unwrap_or(UNKNOWN_MODEL)
                .to_string(),
            fingerprint: generate_fingerprint(),
            include_usage,
        }
    }

    fn chunk(
        &self,
        delta: ChatCompletionDelta,
        finish_reason: Option<FinishReason>,
    ) -> ChatCompletionChunk {
        ChatCompletionChunk {
            id: self.id.clone(),
            object: CHUNK_OBJECT.to_string(),
            created: self.created,
            model: self.model.clone(),
            system_fingerprint: self.fingerprint.clone(),
            choices: vec![ChatCompletionChunkChoice {
                index: 0,
                delta,
                finish_reason,
                logprobs: None,
            }],
            usage: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// No increment seen yet
    AwaitingFirst,
    Streaming,
    /// Final chunk sent, end marker pending
    Finished,
    Terminated,
}

pin_project! {
    /// Canonical chunk stream over a source of text increments
    ///
    /// Pulls one increment per chunk and keeps only the running content
    /// length. A source error is passed through and ends the stream without
    /// a stop chunk or end marker.
    pub struct StreamNormalizer<S> {
        #[pin]
        source: S,
        params: ResponseParams,
        state: State,
        content_len: usize,
    }
}

impl<S> StreamNormalizer<S> {
    pub fn new(source: S, params: ResponseParams) -> Self {
        Self {
            source,
            params,
            state: State::AwaitingFirst,
            content_len: 0,
        }
    }
}

impl<S, E> Stream for StreamNormalizer<S>
where
    S: Stream<Item = Result<String, E>>,
{
    type Item = Result<StreamEvent, E>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.project();

        match *this.state {
            State::AwaitingFirst | State::Streaming => match this.source.poll_next(cx) {
                Poll::Ready(Some(Ok(text))) => {
                    let role =
                        (*this.state == State::AwaitingFirst).then_some(MessageRole::Assistant);
                    *this.state = State::Streaming;
                    *this.content_len += text.chars().count();
                    let delta = ChatCompletionDelta {
                        role,
                        content: Some(text),
                    };
                    Poll::Ready(Some(Ok(StreamEvent::Chunk(this.params.chunk(delta, None)))))
                }
                Poll::Ready(Some(Err(e))) => {
                    *this.state = State::Terminated;
                    Poll::Ready(Some(Err(e)))
                }
                Poll::Ready(None) => {
                    *this.state = State::Finished;
                    let mut chunk = this
                        .params
                        .chunk(ChatCompletionDelta::default(), Some(FinishReason::Stop));
                    if this.params.include_usage {
                        chunk.usage = Some(Usage::from_completion_len(*this.content_len));
                    }
                    Poll::Ready(Some(Ok(StreamEvent::Chunk(chunk))))
                }
                Poll::Pending => Poll::Pending,
            },
            State::Finished => {
                *this.state = State::Terminated;
                Poll::Ready(Some(Ok(StreamEvent::Done)))
            }
            State::Terminated => Poll::Ready(None),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.state {
            State::AwaitingFirst | State::Streaming => {
                let (lower, upper) = self.source.size_hint();
                (lower + 2, upper.and_then(|upper| upper.checked_add(2)))
            }
            State::Finished => (1, Some(1)),
            State::Terminated => (0, Some(0)),
        }
    }
}

/// Normalize `source` into canonical chunks
pub fn normalize<S, E>(source: S, params: ResponseParams) -> StreamNormalizer<S>
where
    S: Stream<Item = Result<String, E>>,
{
    StreamNormalizer::new(source, params)
}
