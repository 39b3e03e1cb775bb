//! Scatter-plot aggregation.

use crate::api::{PayloadRange, SiteSelection};
use crate::charts::{ScatterChart, ScatterPoint};
use crate::data::LaunchDataset;

/// Compute the payload/outcome scatter chart for the current controls.
///
/// Rows are filtered to payloads inside `range` (inclusive both ends),
/// then to the selected site when one is named. Points preserve dataset
/// order; the outcome axis category order is always `[0, 1]`. An inverted
/// range selects nothing.
pub fn payload_scatter_chart(
    dataset: &LaunchDataset,
    site: &SiteSelection,
    range: PayloadRange,
) -> ScatterChart {
    let points: Vec<ScatterPoint> = dataset
        .records()
        .iter()
        .filter(|r| range.contains(r.payload_mass_kg))
        .filter(|r| site.matches(&r.launch_site))
        .map(|r| ScatterPoint {
            payload_mass_kg: r.payload_mass_kg,
            outcome: r.outcome,
            booster_category: r.booster_category.clone(),
        })
        .collect();

    let (title, y_label) = match site {
        SiteSelection::All => (
            "Correlation between Payload and success for All Sites".to_string(),
            "Launch Outcome".to_string(),
        ),
        SiteSelection::Site(selected) => (
            format!("Correlation between Payload and success for {}", selected),
            "Class".to_string(),
        ),
    };

    ScatterChart {
        title,
        x_label: "Payload Mass (kg)".to_string(),
        y_label,
        outcome_order: [0, 1],
        points,
    }
}
