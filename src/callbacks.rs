//! The reactive update engine.
//!
//! An explicit registry maps each output chart region to the controls it
//! depends on and the pure handler that recomputes it. The registry is
//! built once at startup and handed to the HTTP router; every dispatch is
//! an independent, synchronous recomputation with no queueing or batching.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

use crate::api::{PayloadRange, SiteSelection};
use crate::charts::{ChartSpec, SUCCESS_PAYLOAD_SCATTER_CHART, SUCCESS_PIE_CHART};
use crate::data::LaunchDataset;
use crate::services;

/// An interactive control that can trigger a chart update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ControlInput {
    SiteDropdown,
    PayloadSlider,
}

/// Current values of all interactive controls.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlState {
    pub site: SiteSelection,
    pub payload_range: PayloadRange,
}

impl ControlState {
    /// The state the page starts in: all sites, full observed payload range.
    pub fn initial(dataset: &LaunchDataset) -> Self {
        ControlState {
            site: SiteSelection::All,
            payload_range: PayloadRange::new(dataset.min_payload_kg(), dataset.max_payload_kg()),
        }
    }
}

/// Handler recomputing one chart from the controls and the dataset.
///
/// Handlers are plain function pointers: pure, synchronous, and stateless.
pub type ChartHandler = fn(&LaunchDataset, &ControlState) -> ChartSpec;

/// One registered output: its declared inputs and its handler.
struct CallbackRegistration {
    inputs: Vec<ControlInput>,
    handler: ChartHandler,
}

/// The output -> inputs wiring, serialized to the page so it refreshes
/// exactly the charts whose declared inputs changed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallbackBinding {
    pub output: String,
    pub inputs: Vec<ControlInput>,
}

/// Dispatch failures.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("no callback registered for output '{0}'")]
    UnknownOutput(String),
}

/// Registry mapping output component ids to their update callbacks.
#[derive(Default)]
pub struct CallbackRegistry {
    entries: HashMap<String, CallbackRegistration>,
    order: Vec<String>,
}

impl CallbackRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler for an output component. Registering the same
    /// output twice replaces the previous handler.
    pub fn register(
        &mut self,
        output_id: impl Into<String>,
        inputs: Vec<ControlInput>,
        handler: ChartHandler,
    ) {
        let output_id = output_id.into();
        if !self.entries.contains_key(&output_id) {
            self.order.push(output_id.clone());
        }
        self.entries
            .insert(output_id, CallbackRegistration { inputs, handler });
    }

    /// Recompute the chart for `output_id` from the current control state.
    pub fn dispatch(
        &self,
        output_id: &str,
        dataset: &LaunchDataset,
        state: &ControlState,
    ) -> Result<ChartSpec, DispatchError> {
        let entry = self
            .entries
            .get(output_id)
            .ok_or_else(|| DispatchError::UnknownOutput(output_id.to_string()))?;
        Ok((entry.handler)(dataset, state))
    }

    /// The declared wiring, in registration order.
    pub fn bindings(&self) -> Vec<CallbackBinding> {
        self.order
            .iter()
            .map(|output| CallbackBinding {
                output: output.clone(),
                inputs: self.entries[output].inputs.clone(),
            })
            .collect()
    }

    pub fn outputs(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }
}

fn pie_handler(dataset: &LaunchDataset, state: &ControlState) -> ChartSpec {
    ChartSpec::Pie(services::success_pie_chart(dataset, &state.site))
}

fn scatter_handler(dataset: &LaunchDataset, state: &ControlState) -> ChartSpec {
    ChartSpec::Scatter(services::payload_scatter_chart(
        dataset,
        &state.site,
        state.payload_range,
    ))
}

/// Wire up the dashboard's two transitions: the pie chart follows the
/// dropdown; the scatter chart follows the dropdown and the slider.
pub fn default_registry() -> CallbackRegistry {
    let mut registry = CallbackRegistry::new();
    registry.register(
        SUCCESS_PIE_CHART,
        vec![ControlInput::SiteDropdown],
        pie_handler,
    );
    registry.register(
        SUCCESS_PAYLOAD_SCATTER_CHART,
        vec![ControlInput::SiteDropdown, ControlInput::PayloadSlider],
        scatter_handler,
    );
    registry
}
