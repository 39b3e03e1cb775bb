//! The embedded dashboard page.
//!
//! The HTML shell and its JS are compiled into the binary with
//! `include_str!`, so the server ships as a single executable with no
//! asset directory at runtime. The page renders charts with plotly.js
//! loaded from a CDN.

static DASHBOARD_HTML: &str = include_str!("../../assets/html/dashboard.html");
static DASHBOARD_JS: &str = include_str!("../../assets/js/dashboard.js");

/// The HTML shell served at `/`.
pub fn dashboard_html() -> &'static str {
    DASHBOARD_HTML
}

/// The frontend script served at `/assets/dashboard.js`.
pub fn dashboard_js() -> &'static str {
    DASHBOARD_JS
}
