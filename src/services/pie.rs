//! Pie-chart aggregation.

use std::collections::BTreeMap;

use crate::api::SiteSelection;
use crate::charts::{PieChart, PieSlice};
use crate::data::LaunchDataset;

/// Compute the success pie chart for the current site selection.
///
/// With `ALL` selected: successful launches only, one slice per site,
/// sites in ascending name order. With a named site: that site's rows
/// grouped by outcome class, failure slice before success slice.
///
/// A site with no matching rows (including a value outside the dropdown's
/// enumerated list) yields an empty slice list rather than an error.
pub fn success_pie_chart(dataset: &LaunchDataset, site: &SiteSelection) -> PieChart {
    match site {
        SiteSelection::All => {
            let mut counts: BTreeMap<&str, u64> = BTreeMap::new();
            for record in dataset.records() {
                if record.outcome.is_success() {
                    *counts.entry(record.launch_site.as_str()).or_insert(0) += 1;
                }
            }
            PieChart {
                title: "Total Success Launches by Site".to_string(),
                slices: counts
                    .into_iter()
                    .map(|(site, count)| PieSlice {
                        label: site.to_string(),
                        value: count,
                    })
                    .collect(),
            }
        }
        SiteSelection::Site(selected) => {
            let mut counts: BTreeMap<u8, u64> = BTreeMap::new();
            for record in dataset.records() {
                if &record.launch_site == selected {
                    *counts.entry(record.outcome.class()).or_insert(0) += 1;
                }
            }
            PieChart {
                title: format!("Total Success Launches for site {}", selected),
                slices: counts
                    .into_iter()
                    .map(|(class, count)| PieSlice {
                        label: class.to_string(),
                        value: count,
                    })
                    .collect(),
            }
        }
    }
}
