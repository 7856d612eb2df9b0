//! Font availability detection by width comparison.
//!
//! The probe string is measured once in the fallback face, then repeatedly with the
//! candidate family stacked in front of the fallback. Once the widths diverge the
//! candidate is rendering. Detection never fails: a timeout resolves as `TimedOut`,
//! which callers treat the same as success.
//!
//! A candidate whose probe width equals the fallback's (e.g. another 0.6em monospace
//! face) cannot be told apart and always runs to the timeout.

use std::time::Duration;

use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, warn};

use crate::fonts::metrics::{FontSpec, MeasurementSurface};

pub const PROBE_TEXT: &str = "BESbswy";
pub const PROBE_SIZE_PX: f32 = 100.0;
pub const FALLBACK_FAMILY: &str = "monospace";
pub const POLL_INTERVAL: Duration = Duration::from_millis(100);
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(3000);

/// How a detection call resolved, and how long it took.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontLoadOutcome {
    Confirmed { elapsed: Duration },
    TimedOut { elapsed: Duration },
}

impl FontLoadOutcome {
    pub fn is_confirmed(&self) -> bool {
        matches!(self, FontLoadOutcome::Confirmed { .. })
    }

    pub fn elapsed(&self) -> Duration {
        match self {
            FontLoadOutcome::Confirmed { elapsed } | FontLoadOutcome::TimedOut { elapsed } => {
                *elapsed
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DetectionState {
    Measuring,
    Confirmed,
    TimedOut,
}

/// Watches one font family on a measurement surface.
pub struct FontObserver<'a> {
    surface: &'a dyn MeasurementSurface,
    family: &'a str,
}

impl<'a> FontObserver<'a> {
    pub fn new(surface: &'a dyn MeasurementSurface, family: &'a str) -> Self {
        Self { surface, family }
    }

    fn candidate_width(&self) -> f32 {
        let spec = FontSpec::new(PROBE_SIZE_PX, &[self.family, FALLBACK_FAMILY]);
        self.surface.measure_text(&spec, PROBE_TEXT)
    }

    fn step(&self, fallback_width: f32, started: Instant, timeout: Duration) -> DetectionState {
        if self.candidate_width() != fallback_width {
            DetectionState::Confirmed
        } else if started.elapsed() > timeout {
            DetectionState::TimedOut
        } else {
            DetectionState::Measuring
        }
    }

    /// Resolves once the family renders, or after `timeout` (checked every `POLL_INTERVAL`).
    ///
    /// Resolution happens no later than `timeout + POLL_INTERVAL` after the call.
    pub async fn load(&self, timeout: Duration) -> FontLoadOutcome {
        let started = Instant::now();
        let fallback_width = self
            .surface
            .measure_text(&FontSpec::new(PROBE_SIZE_PX, &[FALLBACK_FAMILY]), PROBE_TEXT);

        // Immediate check has no timeout: a zero timeout still gets one measurement.
        if self.candidate_width() != fallback_width {
            debug!("Font '{}' already rendering", self.family);
            return FontLoadOutcome::Confirmed {
                elapsed: started.elapsed(),
            };
        }

        let mut ticker = time::interval_at(started + POLL_INTERVAL, POLL_INTERVAL);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            match self.step(fallback_width, started, timeout) {
                DetectionState::Measuring => continue,
                DetectionState::Confirmed => {
                    let elapsed = started.elapsed();
                    debug!("Font '{}' confirmed after {:?}", self.family, elapsed);
                    return FontLoadOutcome::Confirmed { elapsed };
                }
                DetectionState::TimedOut => {
                    let elapsed = started.elapsed();
                    warn!(
                        "Font '{}' not confirmed within {:?}; continuing anyway",
                        self.family, timeout
                    );
                    return FontLoadOutcome::TimedOut { elapsed };
                }
            }
        }
    }
}
