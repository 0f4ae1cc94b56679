//! In-process backend for unit tests

use super::{BackendError, ChatBackend, TextStream};
use crate::core::types::ChatMessage;
use async_trait::async_trait;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Backend replaying a fixed script of increments
pub(crate) struct MockBackend {
    name: String,
    models: Vec<String>,
    script: Vec<Result<String, BackendError>>,
    fail_on_open: bool,
    calls: AtomicUsize,
    last_model: Mutex<Option<String>>,
}

impl MockBackend {
    pub(crate) fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            models: Vec::new(),
            script: Vec::new(),
            fail_on_open: false,
            calls: AtomicUsize::new(0),
            last_model: Mutex::new(None),
        }
    }

    pub(crate) fn with_increments(mut self, increments: &[&str]) -> Self {
        self.script = increments.iter().map(|s| Ok(s.to_string())).collect();
        self
    }

    pub(crate) fn with_script(mut self, script: Vec<Result<String, BackendError>>) -> Self {
        self.script = script;
        self
    }

    pub(crate) fn with_models(mut self, models: &[&str]) -> Self {
        self.models = models.iter().map(|s| s.to_string()).collect();
        self
    }

    pub(crate) fn failing(mut self) -> Self {
        self.fail_on_open = true;
        self
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub(crate) fn last_model(&self) -> Option<String> {
        self.last_model.lock().ok().and_then(|m| m.clone())
    }
}

#[async_trait]
impl ChatBackend for MockBackend {
    fn name(&self) -> &str {
        &self.name
    }

    fn models(&self) -> &[String] {
        &self.models
    }

    async fn chat(
        &self,
        _messages: &[ChatMessage],
        model: Option<&str>,
    ) -> Result<TextStream, BackendError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut last) = self.last_model.lock() {
            *last = model.map(str::to_string);
        }
        if self.fail_on_open {
            return Err(BackendError::network(self.name.as_str(), "connection refused"));
        }
        Ok(Box::pin(futures::stream::iter(self.script.clone())))
    }
}
