//! Completion aggregation for non-streaming callers

use super::normalizer::ResponseParams;
use super::utils::COMPLETION_OBJECT;
use crate::core::types::{
    ChatCompletionChoice, ChatCompletionResponse, ChatMessage, FinishReason, Usage,
};
use futures::{Stream, StreamExt};

/// Drain `source` into one finished completion
///
/// The whole source is consumed in order. The first error aborts the drain and
/// is returned as is.
pub async fn aggregate<S, E>(source: S, params: ResponseParams) -> Result<ChatCompletionResponse, E>
where
    S: Stream<Item = Result<String, E>>,
{
    let mut source = std::pin::pin!(source);
    let mut content = String::new();
    while let Some(increment) = source.next().await {
        content.push_str(&increment?);
    }

    let usage = Usage::from_completion_len(content.chars().count());
    Ok(ChatCompletionResponse {
        id: params.id,
        object: COMPLETION_OBJECT.to_string(),
        created: params.created,
        model: params.model,
        choices: vec![ChatCompletionChoice {
            index: 0,
            message: ChatMessage::assistant(content),
            finish_reason: FinishReason::Stop,
            logprobs: None,
        }],
        usage,
    })
}
