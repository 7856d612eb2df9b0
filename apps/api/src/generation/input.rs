//! Validated user input shared by the AI-backed requesters.

use crate::errors::AppError;

/// A trimmed, non-empty topic or theme.
///
/// Requesters only accept this type, so blank input is rejected before any upstream call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserInput(String);

impl UserInput {
    /// Rejects a missing or whitespace-only value with a 400-class validation error.
    pub fn parse(raw: Option<&str>) -> Result<Self, AppError> {
        match raw.map(str::trim) {
            Some(trimmed) if !trimmed.is_empty() => Ok(Self(trimmed.to_string())),
            _ => Err(AppError::Validation("User input is required".to_string())),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
