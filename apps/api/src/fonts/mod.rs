// Font side of the design path: stylesheet loading, off-screen measurement,
// and the availability observer that waits for a face to render.

pub mod handlers;
pub mod loader;
pub mod metrics;
pub mod observer;
pub mod preview;

// Re-export the public API consumed by state and handlers.
pub use loader::FontLoader;
pub use metrics::MetricsSurface;
pub use preview::FontPreview;
