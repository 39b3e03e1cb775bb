//! Dataset loading and the immutable in-memory launch-record table.
//!
//! The dataset is read once at startup and never mutated afterwards; every
//! chart recomputation borrows it immutably.

pub mod checksum;
pub mod dataset;
pub mod error;
pub mod record;

pub use checksum::calculate_checksum;
pub use dataset::{DatasetSummary, LaunchDataset};
pub use error::DatasetError;
pub use record::{LaunchRecord, Outcome};
