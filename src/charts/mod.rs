//! Chart specification DTOs.
//!
//! A chart specification is the derived data plus metadata the page needs
//! to render one chart. Specs are recomputed from scratch on every control
//! change and never cached; they are pure functions of (control state,
//! dataset).

use serde::{Deserialize, Serialize};

use crate::data::Outcome;

/// Component id of the pie-chart region.
pub const SUCCESS_PIE_CHART: &str = "success-pie-chart";

/// Component id of the scatter-chart region.
pub const SUCCESS_PAYLOAD_SCATTER_CHART: &str = "success-payload-scatter-chart";

/// A chart specification, tagged by kind for the wire format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChartSpec {
    Pie(PieChart),
    Scatter(ScatterChart),
}

/// One pie slice: a category label and its row count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieSlice {
    pub label: String,
    pub value: u64,
}

/// A pie-chart specification: category -> count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieChart {
    pub title: String,
    pub slices: Vec<PieSlice>,
}

impl PieChart {
    /// Sum of all slice values.
    pub fn total(&self) -> u64 {
        self.slices.iter().map(|s| s.value).sum()
    }
}

/// One scatter point: payload on x, outcome on y, booster as the color
/// category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterPoint {
    pub payload_mass_kg: f64,
    pub outcome: Outcome,
    pub booster_category: String,
}

/// A scatter-plot specification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// Outcome axis category order, always `[0, 1]` regardless of data order.
    pub outcome_order: [u8; 2],
    pub points: Vec<ScatterPoint>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pie_total_sums_slices() {
        let pie = PieChart {
            title: "t".to_string(),
            slices: vec![
                PieSlice { label: "a".to_string(), value: 3 },
                PieSlice { label: "b".to_string(), value: 4 },
            ],
        };
        assert_eq!(pie.total(), 7);
    }

    #[test]
    fn test_chart_spec_serializes_with_kind_tag() {
        let spec = ChartSpec::Pie(PieChart {
            title: "t".to_string(),
            slices: vec![],
        });
        let json = serde_json::to_value(&spec).unwrap();
        assert_eq!(json["kind"], "pie");
        assert_eq!(json["title"], "t");
    }

    #[test]
    fn test_scatter_outcome_serializes_as_class_integer() {
        let spec = ChartSpec::Scatter(ScatterChart {
            title: "t".to_string(),
            x_label: "x".to_string(),
            y_label: "y".to_string(),
            outcome_order: [0, 1],
            points: vec![ScatterPoint {
                payload_mass_kg: 2500.0,
                outcome: Outcome::Success,
                booster_category: "FT".to_string(),
            }],
        });
        let json = serde_json::to_value(&spec).unwrap();
        assert_eq!(json["kind"], "scatter");
        assert_eq!(json["points"][0]["outcome"], 1);
    }

    #[test]
    fn test_component_ids() {
        assert_eq!(SUCCESS_PIE_CHART, "success-pie-chart");
        assert_eq!(SUCCESS_PAYLOAD_SCATTER_CHART, "success-payload-scatter-chart");
    }
}
