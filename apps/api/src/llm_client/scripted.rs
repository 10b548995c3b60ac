//! Scripted `LanguageModel` for tests: replays queued replies and records every prompt.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use super::{LanguageModel, LlmError, ModelReply};

#[derive(Default)]
pub struct ScriptedModel {
    replies: Mutex<VecDeque<Result<ModelReply, LlmError>>>,
    prompts: Mutex<Vec<String>>,
    delay: Option<Duration>,
}

impl ScriptedModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_texts<S: AsRef<str>>(texts: &[S]) -> Self {
        let model = Self::new();
        for text in texts {
            model.push_text(text.as_ref());
        }
        model
    }

    /// Every call sleeps this long before replying.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn push_text(&self, text: &str) {
        self.push(Ok(ModelReply {
            parts: vec![text.to_string()],
        }));
    }

    pub fn push(&self, reply: Result<ModelReply, LlmError>) {
        self.replies.lock().unwrap().push_back(reply);
    }

    pub fn call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl LanguageModel for ScriptedModel {
    async fn send_prompt(&self, prompt: &str) -> Result<ModelReply, LlmError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(LlmError::EmptyContent))
    }

    fn name(&self) -> &str {
        "scripted"
    }
}
