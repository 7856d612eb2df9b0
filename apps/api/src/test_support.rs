//! Shared fixtures for unit tests: an in-process HTTP server and a scripted `TextGenerator`.

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Mutex,
};

use async_trait::async_trait;
use axum::Router;
use serde_json::{json, Value};

use crate::llm_client::{GenerationConfig, LlmError, TextGenerator};

/// Serves `router` on an ephemeral localhost port and returns its base URL.
pub async fn spawn_server(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

/// A `generateContent` reply body carrying a single text candidate.
pub fn gemini_reply(text: &str) -> Value {
    json!({
        "candidates": [
            {"content": {"role": "model", "parts": [{"text": text}]}}
        ]
    })
}

enum Scripted {
    Text(Option<String>),
    Status(u16, String),
}

/// `TextGenerator` that replays a fixed outcome and records what it was asked.
pub struct FakeGenerator {
    reply: Scripted,
    calls: AtomicUsize,
    last_prompt: Mutex<Option<String>>,
    last_config: Mutex<Option<GenerationConfig>>,
}

impl FakeGenerator {
    fn scripted(reply: Scripted) -> Self {
        Self {
            reply,
            calls: AtomicUsize::new(0),
            last_prompt: Mutex::new(None),
            last_config: Mutex::new(None),
        }
    }

    pub fn replying(text: &str) -> Self {
        Self::scripted(Scripted::Text(Some(text.to_string())))
    }

    pub fn empty() -> Self {
        Self::scripted(Scripted::Text(None))
    }

    pub fn failing(status: u16, message: &str) -> Self {
        Self::scripted(Scripted::Status(status, message.to_string()))
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.last_prompt.lock().unwrap().clone()
    }

    pub fn last_config(&self) -> Option<GenerationConfig> {
        *self.last_config.lock().unwrap()
    }
}

#[async_trait]
impl TextGenerator for FakeGenerator {
    async fn generate_text(
        &self,
        prompt: &str,
        config: GenerationConfig,
    ) -> Result<Option<String>, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_prompt.lock().unwrap() = Some(prompt.to_string());
        *self.last_config.lock().unwrap() = Some(config);
        match &self.reply {
            Scripted::Text(text) => Ok(text.clone()),
            Scripted::Status(status, message) => Err(LlmError::Api {
                status: *status,
                message: message.clone(),
            }),
        }
    }
}
