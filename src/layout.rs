//! Static dashboard layout description.
//!
//! The layout is built once at startup and served to the page as JSON: a
//! heading, the site dropdown, the payload range slider, and the two
//! chart regions. Only the slider's initial value depends on the dataset
//! (seeded with the observed payload bounds).

use serde::{Deserialize, Serialize};

use crate::api::ALL_SITES;
use crate::charts::{SUCCESS_PAYLOAD_SCATTER_CHART, SUCCESS_PIE_CHART};
use crate::data::LaunchDataset;

/// Component id of the site dropdown.
pub const SITE_DROPDOWN: &str = "site-dropdown";

/// Component id of the payload range slider.
pub const PAYLOAD_SLIDER: &str = "payload-slider";

/// The fixed dropdown site list. Deliberately not derived from the data:
/// the dashboard enumerates these four sites even if a loaded file lacks
/// rows for some of them.
pub const LAUNCH_SITES: [&str; 4] = ["CCAFS LC-40", "CCAFS SLC-40", "VAFB SLC-4E", "KSC LC-39A"];

/// Full page description served at `/v1/layout`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardLayout {
    pub heading: Heading,
    pub dropdown: DropdownControl,
    pub slider: RangeSliderControl,
    pub charts: Vec<ChartRegion>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Heading {
    pub text: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DropdownOption {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DropdownControl {
    pub id: String,
    pub placeholder: String,
    pub searchable: bool,
    pub options: Vec<DropdownOption>,
    pub initial_value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderMark {
    pub position: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeSliderControl {
    pub id: String,
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub marks: Vec<SliderMark>,
    /// `[lo, hi]`, seeded with the dataset's observed payload bounds.
    pub initial_value: [f64; 2],
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartRegion {
    pub id: String,
}

/// Build the dashboard layout for the given dataset.
pub fn build_layout(dataset: &LaunchDataset) -> DashboardLayout {
    let mut options = vec![DropdownOption {
        label: "All Sites".to_string(),
        value: ALL_SITES.to_string(),
    }];
    options.extend(LAUNCH_SITES.iter().map(|site| DropdownOption {
        label: site.to_string(),
        value: site.to_string(),
    }));

    DashboardLayout {
        heading: Heading {
            text: "SpaceX Launch Records Dashboard".to_string(),
            color: "#503D36".to_string(),
        },
        dropdown: DropdownControl {
            id: SITE_DROPDOWN.to_string(),
            placeholder: "Select Launch Site".to_string(),
            searchable: true,
            options,
            initial_value: ALL_SITES.to_string(),
        },
        slider: RangeSliderControl {
            id: PAYLOAD_SLIDER.to_string(),
            label: "Payload range (Kg):".to_string(),
            min: 0.0,
            max: 10000.0,
            step: 1000.0,
            marks: [0.0, 2500.0, 5000.0, 7500.0, 10000.0]
                .iter()
                .map(|&position| SliderMark {
                    position,
                    label: format!("{}", position as i64),
                })
                .collect(),
            initial_value: [dataset.min_payload_kg(), dataset.max_payload_kg()],
        },
        charts: vec![
            ChartRegion {
                id: SUCCESS_PIE_CHART.to_string(),
            },
            ChartRegion {
                id: SUCCESS_PAYLOAD_SCATTER_CHART.to_string(),
            },
        ],
    }
}
