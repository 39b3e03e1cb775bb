//! Public API surface for the dashboard backend.
//!
//! This file consolidates the shared control-state types and re-exports
//! the DTO types used by the HTTP API. All types derive Serialize and
//! Deserialize where they cross the wire.

pub use crate::callbacks::CallbackBinding;
pub use crate::callbacks::ControlInput;
pub use crate::callbacks::ControlState;
pub use crate::charts::ChartSpec;
pub use crate::charts::PieChart;
pub use crate::charts::PieSlice;
pub use crate::charts::ScatterChart;
pub use crate::charts::ScatterPoint;
pub use crate::data::DatasetSummary;
pub use crate::data::LaunchDataset;
pub use crate::data::LaunchRecord;
pub use crate::data::Outcome;
pub use crate::layout::DashboardLayout;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sentinel dropdown value selecting every launch site.
pub const ALL_SITES: &str = "ALL";

/// Dropdown selection: every launch site, or one named site.
///
/// Values outside the enumerated site list are carried through as
/// `Site`; the aggregators answer them with an empty chart.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SiteSelection {
    /// The `ALL` sentinel.
    All,
    /// A single named launch site.
    Site(String),
}

impl SiteSelection {
    /// Parse a raw dropdown value; `"ALL"` is the all-sites sentinel.
    pub fn parse(value: &str) -> Self {
        if value == ALL_SITES {
            SiteSelection::All
        } else {
            SiteSelection::Site(value.to_string())
        }
    }

    /// Whether a record at `site` falls inside this selection.
    pub fn matches(&self, site: &str) -> bool {
        match self {
            SiteSelection::All => true,
            SiteSelection::Site(selected) => selected == site,
        }
    }
}

impl fmt::Display for SiteSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiteSelection::All => write!(f, "{}", ALL_SITES),
            SiteSelection::Site(site) => write!(f, "{}", site),
        }
    }
}

/// Inclusive payload mass range in kilograms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PayloadRange {
    pub min_kg: f64,
    pub max_kg: f64,
}

impl PayloadRange {
    pub fn new(min_kg: f64, max_kg: f64) -> Self {
        PayloadRange { min_kg, max_kg }
    }

    /// Whether `payload` falls within the range, both bounds inclusive.
    ///
    /// An inverted range (`min_kg > max_kg`) contains nothing.
    pub fn contains(&self, payload: f64) -> bool {
        payload >= self.min_kg && payload <= self.max_kg
    }
}

impl fmt::Display for PayloadRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}] kg", self.min_kg, self.max_kg)
    }
}
