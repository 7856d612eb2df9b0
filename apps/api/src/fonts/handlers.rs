//! Axum route handler for design font preparation.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::Deserialize;

use crate::errors::AppError;
use crate::fonts::preview::DesignFonts;
use crate::generation::design::FontPair;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct DesignFontsRequest {
    pub fonts: FontPair,
}

/// POST /api/design-fonts
///
/// Loads both fonts of a design result and waits (bounded) for each to render.
/// Always 200 for named fonts; load failures show up as `loaded: false` / `timed_out`.
pub async fn handle_design_fonts(
    State(state): State<AppState>,
    payload: Result<Json<DesignFontsRequest>, JsonRejection>,
) -> Result<Json<DesignFonts>, AppError> {
    let Json(request) = payload?;
    if request.fonts.primary.trim().is_empty() || request.fonts.secondary.trim().is_empty() {
        return Err(AppError::Validation(
            "Both primary and secondary fonts are required".to_string(),
        ));
    }

    Ok(Json(state.fonts.prepare(&request.fonts).await))
}
