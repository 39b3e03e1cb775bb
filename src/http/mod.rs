//! HTTP server module for the dashboard.
//!
//! An axum-based server exposing the interactive page plus the JSON
//! endpoints it is built from: the layout description, the chart-update
//! endpoint (which dispatches through the callback registry), a dataset
//! summary, and a health check.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod page;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;
