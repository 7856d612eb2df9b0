//! Font preparation for a design result: load both fonts, then wait for each to render.
//!
//! Primary and secondary run concurrently; the combined wait ends when both are done.
//! Load failures and detection timeouts are logged and reported, never returned as errors.

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tracing::{info, warn};

use crate::fonts::loader::FontLoader;
use crate::fonts::metrics::MetricsSurface;
use crate::fonts::observer::{FontLoadOutcome, FontObserver};
use crate::generation::design::FontPair;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FontStatus {
    Confirmed,
    TimedOut,
}

impl From<FontLoadOutcome> for FontStatus {
    fn from(outcome: FontLoadOutcome) -> Self {
        match outcome {
            FontLoadOutcome::Confirmed { .. } => FontStatus::Confirmed,
            FontLoadOutcome::TimedOut { .. } => FontStatus::TimedOut,
        }
    }
}

/// Per-font result reported to the client.
#[derive(Debug, Clone, Serialize)]
pub struct FontReadiness {
    pub family: String,
    pub stylesheet_url: String,
    /// Whether the stylesheet fetch succeeded (or the family was already loaded).
    pub loaded: bool,
    pub status: FontStatus,
    pub elapsed_ms: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct DesignFonts {
    pub primary: FontReadiness,
    pub secondary: FontReadiness,
}

/// Loads and observes design fonts against a shared measurement surface.
#[derive(Clone)]
pub struct FontPreview {
    loader: FontLoader,
    surface: Arc<MetricsSurface>,
    /// Upper bound on the observer wait for each font.
    timeout: Duration,
}

impl FontPreview {
    pub fn new(loader: FontLoader, surface: Arc<MetricsSurface>, timeout: Duration) -> Self {
        Self {
            loader,
            surface,
            timeout,
        }
    }

    pub async fn prepare(&self, fonts: &FontPair) -> DesignFonts {
        let (primary, secondary) = tokio::join!(
            self.prepare_font(&fonts.primary),
            self.prepare_font(&fonts.secondary)
        );
        info!(
            "Design fonts ready: {} ({:?}), {} ({:?})",
            primary.family, primary.status, secondary.family, secondary.status
        );
        DesignFonts { primary, secondary }
    }

    async fn prepare_font(&self, family: &str) -> FontReadiness {
        let loaded = match self.loader.load(family).await {
            Ok(()) => true,
            Err(e) => {
                warn!("Font '{family}' failed to load: {e}");
                false
            }
        };

        let outcome = FontObserver::new(self.surface.as_ref(), family)
            .load(self.timeout)
            .await;

        FontReadiness {
            family: family.to_string(),
            stylesheet_url: self.loader.stylesheet_url(family),
            loaded,
            status: outcome.into(),
            elapsed_ms: outcome.elapsed().as_millis() as u64,
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::{extract::Query, http::StatusCode, response::IntoResponse, routing::get, Router};
    use serde::Deserialize;

    use super::*;
    use crate::fonts::observer::POLL_INTERVAL;
    use crate::test_support::spawn_server;

    #[derive(Deserialize)]
    struct CssQuery {
        family: String,
    }

    /// Serves CSS for every family except ones starting with "Missing".
    async fn font_server() -> String {
        let router = Router::new().route(
            "/css2",
            get(|Query(q): Query<CssQuery>| async move {
                if q.family.starts_with("Missing") {
                    StatusCode::NOT_FOUND.into_response()
                } else {
                    "@font-face {}".into_response()
                }
            }),
        );
        format!("{}/css2", spawn_server(router).await)
    }

    fn preview(css_url: &str, timeout: Duration) -> FontPreview {
        let surface = Arc::new(MetricsSurface::new());
        let loader = FontLoader::new(css_url, surface.clone()).unwrap();
        FontPreview::new(loader, surface, timeout)
    }

    fn pair(primary: &str, secondary: &str) -> FontPair {
        FontPair {
            primary: primary.to_string(),
            secondary: secondary.to_string(),
        }
    }

    #[tokio::test]
    async fn test_both_fonts_confirmed() {
        let css_url = font_server().await;
        let fonts = preview(&css_url, Duration::from_millis(300))
            .prepare(&pair("Playfair Display", "Inter"))
            .await;

        assert_eq!(fonts.primary.family, "Playfair Display");
        assert!(fonts.primary.loaded);
        assert_eq!(fonts.primary.status, FontStatus::Confirmed);
        assert!(fonts.primary.stylesheet_url.contains("family=Playfair+Display:wght@"));
        assert_eq!(fonts.secondary.status, FontStatus::Confirmed);
    }

    #[tokio::test]
    async fn test_failed_load_times_out_softly() {
        let css_url = font_server().await;
        let timeout = Duration::from_millis(200);
        let fonts = preview(&css_url, timeout)
            .prepare(&pair("Missing Face", "Lato"))
            .await;

        assert!(!fonts.primary.loaded);
        assert_eq!(fonts.primary.status, FontStatus::TimedOut);
        assert!(fonts.primary.elapsed_ms >= timeout.as_millis() as u64);
        assert_eq!(fonts.secondary.status, FontStatus::Confirmed);
    }

    #[tokio::test]
    async fn test_waits_run_concurrently() {
        let css_url = font_server().await;
        let timeout = Duration::from_millis(300);
        let started = std::time::Instant::now();
        let fonts = preview(&css_url, timeout)
            .prepare(&pair("Missing One", "Missing Two"))
            .await;

        assert_eq!(fonts.primary.status, FontStatus::TimedOut);
        assert_eq!(fonts.secondary.status, FontStatus::TimedOut);
        // Sequential waits would take at least two full timeouts.
        assert!(started.elapsed() < 2 * timeout + POLL_INTERVAL);
    }

    #[test]
    fn test_status_serializes_snake_case() {
        assert_eq!(
            serde_json::to_value(FontStatus::TimedOut).unwrap(),
            "timed_out"
        );
    }
}
