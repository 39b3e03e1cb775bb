//! The aggregation service layer.
//!
//! These are the two pure functions behind the dashboard's charts. Each
//! takes the current control values and the full dataset and returns a
//! derived chart specification; no state accumulates between calls.

pub mod pie;
pub mod scatter;

pub use pie::success_pie_chart;
pub use scatter::payload_scatter_chart;
