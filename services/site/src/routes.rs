use crate::infra::{current_year, resolve_toggle, AppState};
use axum::extract::rejection::QueryRejection;
use axum::extract::Query;
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse};
use axum::routing::get;
use axum::{Extension, Json, Router};
use portfolio::error::AppError;
use portfolio::profile::{AudienceTrack, Profile};
use portfolio::render::render_page;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::debug;

#[derive(Debug, Default, Deserialize)]
pub(crate) struct TrackQuery {
    #[serde(default)]
    pub(crate) track: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct SkillsResponse {
    pub(crate) track: AudienceTrack,
    pub(crate) label: &'static str,
    pub(crate) skills: &'static [&'static str],
}

pub(crate) fn site_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(page_endpoint))
        .route("/api/v1/profile", get(profile_endpoint))
        .route("/api/v1/skills", get(skills_endpoint))
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .layer(Extension(state))
}

pub(crate) async fn page_endpoint(
    Extension(state): Extension<AppState>,
    query: Result<Query<TrackQuery>, QueryRejection>,
) -> Result<Html<String>, AppError> {
    let Query(query) = query?;
    let toggle = resolve_toggle(state.site.default_track, query.track.as_deref())?;
    debug!(track = %toggle.active(), "serving portfolio page");
    Ok(Html(render_page(Profile::current(), toggle, current_year())))
}

pub(crate) async fn profile_endpoint() -> Json<&'static Profile> {
    Json(Profile::current())
}

pub(crate) async fn skills_endpoint(
    Extension(state): Extension<AppState>,
    query: Result<Query<TrackQuery>, QueryRejection>,
) -> Result<Json<SkillsResponse>, AppError> {
    let Query(query) = query?;
    let track = resolve_toggle(state.site.default_track, query.track.as_deref())?.active();
    Ok(Json(SkillsResponse {
        track,
        label: track.label(),
        skills: Profile::current().skills_for(track),
    }))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}
