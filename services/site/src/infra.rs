use chrono::{Datelike, Local};
use metrics_exporter_prometheus::PrometheusHandle;
use portfolio::config::SiteConfig;
use portfolio::profile::{AudienceTrack, TrackParseError};
use portfolio::render::TrackToggle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) site: SiteConfig,
}

/// Starts from `default` and applies the requested track, if any.
pub(crate) fn resolve_toggle(
    default: AudienceTrack,
    requested: Option<&str>,
) -> Result<TrackToggle, TrackParseError> {
    let mut toggle = TrackToggle::new(default);
    if let Some(raw) = requested.filter(|raw| !raw.trim().is_empty()) {
        toggle.select(raw.parse()?);
    }
    Ok(toggle)
}

pub(crate) fn current_year() -> i32 {
    Local::now().year()
}
