//! Web-font stylesheet loading.
//!
//! Fetching a family's stylesheet is what makes it renderable; on success the family is
//! registered on the measurement surface so the observer can confirm it.

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use thiserror::Error;
use tracing::debug;

use crate::fonts::metrics::MetricsSurface;

/// Weights requested for every family.
pub const FONT_WEIGHTS: &str = "300;400;500;600;700";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
pub enum FontError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("stylesheet for '{family}' returned status {status}")]
    Status { family: String, status: u16 },
}

/// Builds the stylesheet URL for a display name. Runs of whitespace become `+`; each word
/// is percent-encoded so the name stays inside the `family` parameter.
pub fn stylesheet_url(css_base_url: &str, family: &str) -> String {
    let name = family
        .split_whitespace()
        .map(urlencoding::encode)
        .collect::<Vec<_>>()
        .join("+");
    format!("{css_base_url}?family={name}:wght@{FONT_WEIGHTS}&display=swap")
}

#[derive(Clone)]
pub struct FontLoader {
    client: Client,
    css_base_url: String,
    surface: Arc<MetricsSurface>,
}

impl FontLoader {
    pub fn new(css_base_url: &str, surface: Arc<MetricsSurface>) -> Result<Self, FontError> {
        Ok(Self {
            client: Client::builder().timeout(REQUEST_TIMEOUT).build()?,
            css_base_url: css_base_url.trim_end_matches('/').to_string(),
            surface,
        })
    }

    pub fn stylesheet_url(&self, family: &str) -> String {
        stylesheet_url(&self.css_base_url, family)
    }

    /// Fetches the family's stylesheet and registers the family as loaded.
    ///
    /// Families already registered are not fetched again.
    pub async fn load(&self, family: &str) -> Result<(), FontError> {
        if self.surface.is_loaded(family) {
            debug!("Font '{family}' already loaded");
            return Ok(());
        }

        let response = self.client.get(self.stylesheet_url(family)).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FontError::Status {
                family: family.to_string(),
                status: status.as_u16(),
            });
        }

        let css = response.text().await?;
        debug!("Loaded stylesheet for '{family}' ({} bytes)", css.len());
        self.surface.mark_loaded(family);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use axum::{extract::RawQuery, http::StatusCode, routing::get, Router};

    use super::*;
    use crate::test_support::spawn_server;

    const FONT_CSS: &str = "@font-face { font-family: 'Test'; src: url(test.woff2); }";

    #[test]
    fn test_stylesheet_url_joins_words_with_plus() {
        assert_eq!(
            stylesheet_url("https://fonts.googleapis.com/css2", "Plus Jakarta Sans"),
            "https://fonts.googleapis.com/css2?family=Plus+Jakarta+Sans:wght@300;400;500;600;700&display=swap"
        );
    }

    #[test]
    fn test_stylesheet_url_collapses_whitespace_runs() {
        assert_eq!(
            stylesheet_url("https://f.test/css2", "Playfair   Display"),
            "https://f.test/css2?family=Playfair+Display:wght@300;400;500;600;700&display=swap"
        );
        assert_eq!(
            stylesheet_url("https://f.test/css2", "Inter"),
            "https://f.test/css2?family=Inter:wght@300;400;500;600;700&display=swap"
        );
    }

    #[test]
    fn test_stylesheet_url_encodes_query_delimiters() {
        assert_eq!(
            stylesheet_url("https://f.test/css2", "Evil&display=block #x"),
            "https://f.test/css2?family=Evil%26display%3Dblock+%23x:wght@300;400;500;600;700&display=swap"
        );
        assert_eq!(
            stylesheet_url("https://f.test/css2", "A+B"),
            "https://f.test/css2?family=A%2BB:wght@300;400;500;600;700&display=swap"
        );
    }

    #[tokio::test]
    async fn test_load_registers_family_on_success() {
        let seen_query = Arc::new(std::sync::Mutex::new(None));
        let captured = seen_query.clone();
        let router = Router::new().route(
            "/css2",
            get(move |RawQuery(query): RawQuery| {
                let captured = captured.clone();
                async move {
                    *captured.lock().unwrap() = query;
                    FONT_CSS
                }
            }),
        );
        let base = spawn_server(router).await;
        let surface = Arc::new(MetricsSurface::new());
        let loader = FontLoader::new(&format!("{base}/css2"), surface.clone()).unwrap();

        loader.load("Work Sans").await.unwrap();

        assert!(surface.is_loaded("Work Sans"));
        assert_eq!(
            seen_query.lock().unwrap().as_deref(),
            Some("family=Work+Sans:wght@300;400;500;600;700&display=swap")
        );
    }

    #[tokio::test]
    async fn test_load_failure_leaves_family_unloaded() {
        let router = Router::new().route("/css2", get(|| async { StatusCode::BAD_REQUEST }));
        let base = spawn_server(router).await;
        let surface = Arc::new(MetricsSurface::new());
        let loader = FontLoader::new(&format!("{base}/css2"), surface.clone()).unwrap();

        let err = loader.load("Not A Font").await.unwrap_err();
        assert!(matches!(err, FontError::Status { status: 400, .. }));
        assert!(!surface.is_loaded("Not A Font"));
    }

    #[tokio::test]
    async fn test_already_loaded_family_is_not_refetched() {
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = hits.clone();
        let router = Router::new().route(
            "/css2",
            get(move || {
                let counter = counter.clone();
                async move {
                    counter.fetch_add(1, Ordering::SeqCst);
                    FONT_CSS
                }
            }),
        );
        let base = spawn_server(router).await;
        let surface = Arc::new(MetricsSurface::new());
        let loader = FontLoader::new(&format!("{base}/css2"), surface).unwrap();

        loader.load("Lora").await.unwrap();
        loader.load("Lora").await.unwrap();
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }
}
