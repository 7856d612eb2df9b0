use std::sync::Arc;

use crate::fonts::FontPreview;
use crate::llm_client::TextGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Generative-text backend. `GeminiClient` in production, scripted fakes in tests.
    pub llm: Arc<dyn TextGenerator>,
    /// Font loading + availability detection for design results.
    pub fonts: FontPreview,
}
