//! E2E tests for chat completion
//!
//! These tests make real API calls and require API keys.
//! Run with: cargo test -- --ignored

#[cfg(test)]
mod tests {
    use crate::skip_without_env;
    use futures::StreamExt;
    use switchyard::config::BackendConfig;
    use switchyard::core::providers::create_backend;
    use switchyard::core::streaming::{ResponseParams, StreamEvent, aggregate, normalize};
    use switchyard::{BackendKind, ChatMessage};

    fn messages() -> Vec<ChatMessage> {
        vec![
            ChatMessage::system("Answer with a single word."),
            ChatMessage::user("What is the capital of France?"),
        ]
    }

    async fn assert_answers(kind: BackendKind) {
        let config = BackendConfig::new(kind.to_string(), kind);
        let backend = create_backend(&config)
            .expect("backend config")
            .expect("API key present");

        let increments = backend.chat(&messages(), None).await.expect("stream opens");
        let completion = aggregate(increments, ResponseParams::new(None, false))
            .await
            .expect("stream completes");

        assert!(
            completion.content().to_lowercase().contains("paris"),
            "unexpected answer from {}: {}",
            kind,
            completion.content()
        );
    }

    #[tokio::test]
    #[ignore]
    async fn test_groq_completion() {
        skip_without_env!("GROQ_API_KEY");
        assert_answers(BackendKind::Groq).await;
    }

    #[tokio::test]
    #[ignore]
    async fn test_cerebras_completion() {
        skip_without_env!("CEREBRAS_API_KEY");
        assert_answers(BackendKind::Cerebras).await;
    }

    #[tokio::test]
    #[ignore]
    async fn test_openrouter_completion() {
        skip_without_env!("OPENROUTER_API_KEY");
        assert_answers(BackendKind::OpenRouter).await;
    }

    #[tokio::test]
    #[ignore]
    async fn test_groq_normalized_stream() {
        skip_without_env!("GROQ_API_KEY");

        let config = BackendConfig::new("groq", BackendKind::Groq);
        let backend = create_backend(&config).unwrap().unwrap();
        let increments = backend.chat(&messages(), None).await.unwrap();

        let events: Vec<StreamEvent> = normalize(increments, ResponseParams::new(None, true))
            .map(|event| event.unwrap())
            .collect()
            .await;

        assert!(matches!(events.last(), Some(StreamEvent::Done)));
        let stop = events[events.len() - 2].chunk().unwrap();
        assert!(stop.usage.unwrap().completion_tokens > 0);
    }
}
