//! HTTP backend speaking the OpenAI-compatible streaming chat protocol
//!
//! Groq, Cerebras and OpenRouter all accept `POST {base}/chat/completions`
//! with `stream: true` and answer with an SSE body. They differ in base URL,
//! default model, fixed request parameters and chunk schema, all of which are
//! selected by [`BackendKind`].

use async_trait::async_trait;
use futures::StreamExt;
use reqwest::Client;
use reqwest::header::{ACCEPT, HeaderMap, HeaderName, HeaderValue};
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, error};

use super::chunk::BackendChunk;
use super::sse::SseStream;
use crate::core::providers::error::BackendError;
use crate::core::providers::{BackendKind, ChatBackend, TextStream};
use crate::core::types::ChatMessage;
use crate::utils::error::{GatewayError, Result};

/// Resolved settings of one HTTP backend
#[derive(Debug, Clone)]
pub struct BackendSettings {
    pub name: String,
    pub kind: BackendKind,
    pub api_key: String,
    pub api_base: String,
    pub default_model: String,
    pub models: Vec<String>,
    pub timeout: Duration,
    pub headers: HashMap<String, String>,
}

#[derive(Serialize)]
struct StreamRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    stream: bool,
    #[serde(flatten)]
    params: &'a Map<String, Value>,
}

/// Streaming chat client for one configured backend
#[derive(Debug)]
pub struct OpenAICompatibleBackend {
    settings: BackendSettings,
    params: Map<String, Value>,
    client: Client,
}

impl OpenAICompatibleBackend {
    pub fn new(settings: BackendSettings) -> Result<Self> {
        let mut header_map = HeaderMap::new();
        for (key, value) in &settings.headers {
            let header_name = HeaderName::from_bytes(key.as_bytes()).map_err(|e| {
                GatewayError::config(format!("Invalid header key '{}': {}", key, e))
            })?;
            let header_value = HeaderValue::from_str(value.trim()).map_err(|e| {
                GatewayError::config(format!("Invalid header value for '{}': {}", key, e))
            })?;
            header_map.insert(header_name, header_value);
        }

        let client = Client::builder()
            .connect_timeout(settings.timeout)
            .default_headers(header_map)
            .build()?;

        Ok(Self {
            params: settings.kind.request_params(),
            settings,
            client,
        })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/chat/completions",
            self.settings.api_base.trim_end_matches('/')
        )
    }
}

#[async_trait]
impl ChatBackend for OpenAICompatibleBackend {
    fn name(&self) -> &str {
        &self.settings.name
    }

    fn display_name(&self) -> &str {
        self.settings.kind.display_name()
    }

    fn models(&self) -> &[String] {
        &self.settings.models
    }

    async fn chat(
        &self,
        messages: &[ChatMessage],
        model: Option<&str>,
    ) -> std::result::Result<TextStream, BackendError> {
        let name = self.settings.name.clone();
        let kind = self.settings.kind;
        let model = model.unwrap_or(self.settings.default_model.as_str());

        let request = StreamRequest {
            model,
            messages,
            stream: true,
            params: &self.params,
        };

        debug!(
            backend = %name,
            model = %model,
            messages = messages.len(),
            "Sending streaming chat request"
        );

        let send = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.settings.api_key)
            .header(ACCEPT, "text/event-stream")
            .json(&request)
            .send();

        let response = tokio::time::timeout(self.settings.timeout, send)
            .await
            .map_err(|_| BackendError::timeout(name.as_str()))?
            .map_err(|e| BackendError::from_reqwest(name.as_str(), &e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(
                backend = %name,
                status = status.as_u16(),
                body = %body,
                "Backend rejected chat request"
            );
            return Err(BackendError::from_status(name, status.as_u16(), body));
        }

        let stream = SseStream::new(name.clone(), response.bytes_stream()).map(move |payload| {
            payload.and_then(|payload| {
                BackendChunk::decode(kind, &name, &payload)?.into_increment(&name)
            })
        });

        Ok(Box::pin(stream))
    }
}
