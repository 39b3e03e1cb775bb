//! The launch-record row type and its CSV schema.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Binary launch outcome, parsed from the `class` column.
///
/// Serializes as the integer the original data uses: `0` for failure,
/// `1` for success. Any other value in the column is malformed input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Outcome {
    Failure,
    Success,
}

impl Outcome {
    pub fn is_success(self) -> bool {
        matches!(self, Outcome::Success)
    }

    /// The integer class value (`0` or `1`).
    pub fn class(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Outcome {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Outcome::Failure),
            1 => Ok(Outcome::Success),
            other => Err(format!("invalid outcome class {} (expected 0 or 1)", other)),
        }
    }
}

impl From<Outcome> for u8 {
    fn from(outcome: Outcome) -> u8 {
        match outcome {
            Outcome::Failure => 0,
            Outcome::Success => 1,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.class())
    }
}

/// One rocket launch attempt.
///
/// Field names map onto the CSV headers of the input file; columns beyond
/// these four are ignored at load time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaunchRecord {
    /// Launch site name, e.g. `KSC LC-39A`.
    #[serde(rename = "Launch Site")]
    pub launch_site: String,

    /// Payload mass in kilograms.
    #[serde(rename = "Payload Mass (kg)")]
    pub payload_mass_kg: f64,

    /// Launch outcome (`class` column, 0 = failure, 1 = success).
    #[serde(rename = "class")]
    pub outcome: Outcome,

    /// Booster version category, e.g. `FT` or `v1.1`.
    #[serde(rename = "Booster Version Category")]
    pub booster_category: String,
}

impl LaunchRecord {
    pub fn new(
        launch_site: impl Into<String>,
        payload_mass_kg: f64,
        outcome: Outcome,
        booster_category: impl Into<String>,
    ) -> Self {
        LaunchRecord {
            launch_site: launch_site.into(),
            payload_mass_kg,
            outcome,
            booster_category: booster_category.into(),
        }
    }
}
