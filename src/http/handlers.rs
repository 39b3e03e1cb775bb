//! HTTP handlers for the dashboard API.
//!
//! Each handler delegates to the library: chart updates go through the
//! callback registry, everything else serves data prepared at startup.
//! Every chart request is one synchronous recomputation over the
//! read-only dataset.

use axum::{
    extract::{Path, Query, State},
    response::Html,
    Json,
};

use super::dto::{ChartQuery, HealthResponse, LayoutResponse};
use super::error::AppError;
use super::page;
use super::state::AppState;
use crate::api::{ChartSpec, DatasetSummary, PayloadRange, SiteSelection};
use crate::callbacks::ControlState;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// GET /
///
/// The dashboard page itself: embedded HTML + JS rendering the layout
/// and charts via plotly.js.
pub async fn dashboard_page() -> Html<&'static str> {
    Html(page::dashboard_html())
}

/// GET /assets/dashboard.js
pub async fn dashboard_js() -> ([(axum::http::HeaderName, &'static str); 1], &'static str) {
    (
        [(axum::http::header::CONTENT_TYPE, "application/javascript")],
        page::dashboard_js(),
    )
}

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        dataset_rows: state.dataset.len(),
        dataset_checksum: state.dataset.checksum().to_string(),
    }))
}

/// GET /v1/layout
///
/// The page description plus the callback wiring, so the frontend knows
/// which charts to refresh when a control changes.
pub async fn get_layout(State(state): State<AppState>) -> HandlerResult<LayoutResponse> {
    Ok(Json(LayoutResponse {
        layout: (*state.layout).clone(),
        callbacks: state.registry.bindings(),
    }))
}

/// GET /v1/dataset
pub async fn get_dataset_summary(State(state): State<AppState>) -> HandlerResult<DatasetSummary> {
    Ok(Json(state.dataset.summary()))
}

/// GET /v1/charts/{chart_id}?site=&payload_min=&payload_max=
///
/// Recompute one chart from the supplied control values. Missing
/// parameters fall back to the initial control state; an unknown chart
/// id is a 404; an unknown site value yields an empty chart with 200.
pub async fn get_chart(
    State(state): State<AppState>,
    Path(chart_id): Path<String>,
    Query(query): Query<ChartQuery>,
) -> HandlerResult<ChartSpec> {
    validate_payload_bounds(&query)?;
    let control_state = control_state_from_query(&state, &query);
    let spec = state
        .registry
        .dispatch(&chart_id, &state.dataset, &control_state)?;
    Ok(Json(spec))
}

// The Query extractor accepts "NaN" and "inf" as f64 values; they would
// silently select nothing, so reject them up front.
fn validate_payload_bounds(query: &ChartQuery) -> Result<(), AppError> {
    for (name, value) in [
        ("payload_min", query.payload_min),
        ("payload_max", query.payload_max),
    ] {
        if let Some(bound) = value {
            if !bound.is_finite() {
                return Err(AppError::BadRequest(format!(
                    "{} must be a finite number, got {}",
                    name, bound
                )));
            }
        }
    }
    Ok(())
}

fn control_state_from_query(state: &AppState, query: &ChartQuery) -> ControlState {
    let initial = ControlState::initial(&state.dataset);
    ControlState {
        site: query
            .site
            .as_deref()
            .map(SiteSelection::parse)
            .unwrap_or(initial.site),
        payload_range: PayloadRange::new(
            query.payload_min.unwrap_or(initial.payload_range.min_kg),
            query.payload_max.unwrap_or(initial.payload_range.max_kg),
        ),
    }
}
