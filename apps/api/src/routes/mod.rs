pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::fonts::handlers as fonts;
use crate::generation::handlers as generation;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Generation API
        .route(
            "/api/generate-tech-prompt",
            post(generation::handle_generate_tech_prompt),
        )
        .route(
            "/api/generate-design-prompt",
            post(generation::handle_generate_design_prompt),
        )
        .route(
            "/api/generate-character-prompt",
            post(generation::handle_generate_character_prompt),
        )
        // Font preparation for design results
        .route("/api/design-fonts", post(fonts::handle_design_fonts))
        .with_state(state)
}
