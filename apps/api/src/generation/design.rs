//! Design prompt requester — typography + palette suggestions for a theme.
//!
//! `request_design` returns an explicit `Result`. The HTTP boundary decides to absorb
//! every `DesignError` into `DesignPrompt::fallback()`; nothing here hides failures.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::generation::input::UserInput;
use crate::generation::json_extract::first_json_object;
use crate::generation::prompts::{build_design_prompt, DESIGN_GENERATION_CONFIG};
use crate::llm_client::{LlmError, TextGenerator};

pub const MIN_COLORS: usize = 3;
pub const MAX_COLORS: usize = 7;

/// Keys the reply object must carry before shape validation.
const REQUIRED_FIELDS: [&str; 3] = ["fonts", "colors", "description"];

/// Heading and body font pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontPair {
    pub primary: String,
    pub secondary: String,
}

/// A complete design suggestion. Field values are kept exactly as the model wrote them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesignPrompt {
    pub fonts: FontPair,
    pub colors: Vec<String>,
    pub description: String,
}

#[derive(Debug, Error)]
pub enum DesignError {
    #[error("upstream request failed: {0}")]
    Upstream(#[from] LlmError),

    #[error("upstream reply carried no text")]
    EmptyReply,

    #[error("no JSON object found in reply")]
    NoJson,

    #[error("reply is missing required field `{0}`")]
    MissingField(&'static str),

    #[error("reply has the wrong shape: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("invalid design: {0}")]
    Invalid(String),
}

impl DesignPrompt {
    /// Neutral design returned whenever generation fails.
    pub fn fallback() -> Self {
        Self {
            fonts: FontPair {
                primary: "Playfair Display".to_string(),
                secondary: "Inter".to_string(),
            },
            colors: ["#2D3748", "#4A5568", "#718096", "#A0AEC0", "#E2E8F0"]
                .into_iter()
                .map(String::from)
                .collect(),
            description: "A classic and elegant combination with neutral tones for versatile design applications.".to_string(),
        }
    }

    /// Checks the shape invariant: named fonts, 3–7 hex colors, a description.
    pub fn validate(&self) -> Result<(), DesignError> {
        if self.fonts.primary.trim().is_empty() {
            return Err(DesignError::Invalid("primary font is empty".to_string()));
        }
        if self.fonts.secondary.trim().is_empty() {
            return Err(DesignError::Invalid("secondary font is empty".to_string()));
        }
        if !(MIN_COLORS..=MAX_COLORS).contains(&self.colors.len()) {
            return Err(DesignError::Invalid(format!(
                "expected {MIN_COLORS}-{MAX_COLORS} colors, got {}",
                self.colors.len()
            )));
        }
        if let Some(bad) = self.colors.iter().find(|c| !is_hex_color(c)) {
            return Err(DesignError::Invalid(format!("'{bad}' is not a hex color")));
        }
        if self.description.trim().is_empty() {
            return Err(DesignError::Invalid("description is empty".to_string()));
        }
        Ok(())
    }
}

/// `#` followed by 3, 4, 6 or 8 hex digits. Either case is accepted.
pub fn is_hex_color(s: &str) -> bool {
    match s.strip_prefix('#') {
        Some(digits) => {
            matches!(digits.len(), 3 | 4 | 6 | 8) && digits.chars().all(|c| c.is_ascii_hexdigit())
        }
        None => false,
    }
}

/// Extracts, parses and validates a `DesignPrompt` from free-form model output.
pub fn parse_design_reply(text: &str) -> Result<DesignPrompt, DesignError> {
    let span = first_json_object(text).ok_or(DesignError::NoJson)?;
    let object: Map<String, Value> = serde_json::from_str(span)?;

    for field in REQUIRED_FIELDS {
        if matches!(object.get(field), None | Some(Value::Null)) {
            return Err(DesignError::MissingField(field));
        }
    }

    let design: DesignPrompt = serde_json::from_value(Value::Object(object))?;
    design.validate()?;
    Ok(design)
}

/// Asks the model for a design matching `theme`. One upstream call, no retry.
pub async fn request_design(
    theme: &UserInput,
    llm: &dyn TextGenerator,
) -> Result<DesignPrompt, DesignError> {
    let prompt = build_design_prompt(theme.as_str());
    let text = llm
        .generate_text(&prompt, DESIGN_GENERATION_CONFIG)
        .await?
        .ok_or(DesignError::EmptyReply)?;
    parse_design_reply(&text)
}
