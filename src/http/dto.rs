//! Data Transfer Objects for the HTTP API.
//!
//! Most payloads are re-exported from the library modules since they
//! already derive Serialize/Deserialize; this module adds the wrappers
//! specific to the HTTP surface.

use serde::{Deserialize, Serialize};

// Re-export existing DTOs that are already serializable
pub use crate::api::{
    CallbackBinding, ChartSpec, DatasetSummary, PieChart, PieSlice, ScatterChart, ScatterPoint,
};
pub use crate::layout::DashboardLayout;

/// Response for the health check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// Number of launch records the server loaded.
    pub dataset_rows: usize,
    /// Checksum identifying the loaded dataset.
    pub dataset_checksum: String,
}

/// Response for the layout endpoint: the page description plus the
/// output -> inputs callback wiring.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutResponse {
    pub layout: DashboardLayout,
    pub callbacks: Vec<CallbackBinding>,
}

/// Query parameters of the chart-update endpoint.
///
/// Every parameter is optional; missing values fall back to the initial
/// control state (all sites, full observed payload range).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChartQuery {
    /// Dropdown value: `ALL` or a site name.
    #[serde(default)]
    pub site: Option<String>,
    /// Lower payload bound in kilograms, inclusive.
    #[serde(default)]
    pub payload_min: Option<f64>,
    /// Upper payload bound in kilograms, inclusive.
    #[serde(default)]
    pub payload_max: Option<f64>,
}
