//! Technical prompt requester — one AI-generated app concept per topic.
//!
//! Failures surface to the caller as `AppError::Llm`; nothing is synthesised on error.

use tracing::info;

use crate::errors::AppError;
use crate::generation::input::UserInput;
use crate::generation::prompts::{build_tech_prompt, TECH_GENERATION_CONFIG};
use crate::llm_client::TextGenerator;

/// Returned when the upstream call succeeds but carries no usable text.
pub const UNABLE_TO_GENERATE: &str = "Unable to generate prompt";

/// Asks the model for a specific, 1–2 sentence app concept about `topic`.
///
/// The reply text is returned as-is. A successful reply with no text yields
/// `UNABLE_TO_GENERATE`; transport and status failures become `AppError::Llm`.
pub async fn generate_technical_prompt(
    topic: &UserInput,
    llm: &dyn TextGenerator,
) -> Result<String, AppError> {
    let prompt = build_tech_prompt(topic.as_str());
    let text = llm
        .generate_text(&prompt, TECH_GENERATION_CONFIG)
        .await
        .map_err(|e| AppError::Llm(format!("Technical prompt generation failed: {e}")))?;

    match text {
        Some(text) if !text.trim().is_empty() => {
            info!("Generated technical prompt ({} chars)", text.len());
            Ok(text)
        }
        _ => Ok(UNABLE_TO_GENERATE.to_string()),
    }
}
