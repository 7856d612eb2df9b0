//! Axum route handlers for the Generation API.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::generation::character::{generate_character_prompt, CharacterPrompt};
use crate::generation::design::{request_design, DesignPrompt};
use crate::generation::input::UserInput;
use crate::generation::technical::generate_technical_prompt;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct PromptRequest {
    /// Missing or non-string is a 400, not a body-rejection 422.
    #[serde(rename = "userInput", default, deserialize_with = "string_or_none")]
    pub user_input: Option<String>,
}

fn string_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(Some(s)),
        _ => Ok(None),
    }
}

#[derive(Debug, Serialize)]
pub struct TechPromptResponse {
    pub prompt: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/generate-tech-prompt
///
/// Upstream failures surface as 500 `{ "error": ... }`; nothing is synthesised.
/// An unreadable body is a 400 with the same JSON error shape.
pub async fn handle_generate_tech_prompt(
    State(state): State<AppState>,
    payload: Result<Json<PromptRequest>, JsonRejection>,
) -> Result<Json<TechPromptResponse>, AppError> {
    let Json(request) = payload?;
    let topic = UserInput::parse(request.user_input.as_deref())?;
    let prompt = generate_technical_prompt(&topic, state.llm.as_ref()).await?;
    Ok(Json(TechPromptResponse { prompt }))
}

/// POST /api/generate-design-prompt
///
/// Always 200 with a well-formed design unless `userInput` is missing or blank: any
/// generation error, and any body that cannot be read at all, is logged and replaced
/// with `DesignPrompt::fallback()`.
pub async fn handle_generate_design_prompt(
    State(state): State<AppState>,
    payload: Result<Json<PromptRequest>, JsonRejection>,
) -> Result<Json<DesignPrompt>, AppError> {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            warn!(
                "Unreadable design request, serving fallback: {}",
                rejection.body_text()
            );
            return Ok(Json(DesignPrompt::fallback()));
        }
    };
    let theme = UserInput::parse(request.user_input.as_deref())?;

    let design = match request_design(&theme, state.llm.as_ref()).await {
        Ok(design) => {
            info!(
                "Generated design: {} + {}, {} colors",
                design.fonts.primary,
                design.fonts.secondary,
                design.colors.len()
            );
            design
        }
        Err(e) => {
            warn!("Design generation failed, serving fallback: {e}");
            DesignPrompt::fallback()
        }
    };

    Ok(Json(design))
}

/// POST /api/generate-character-prompt
pub async fn handle_generate_character_prompt() -> Json<CharacterPrompt> {
    let prompt = generate_character_prompt(&mut rand::thread_rng());
    Json(prompt)
}
