//! Error type for dataset loading.

use thiserror::Error;

/// Errors raised while loading the launch-record dataset.
///
/// All of these are fatal at startup: the dashboard has no recovery path
/// for a missing or malformed input file.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The input file could not be read.
    #[error("cannot read dataset file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A row failed to parse, or a required column is missing.
    #[error("malformed dataset: {0}")]
    Parse(#[from] csv::Error),

    /// The file parsed but contained zero data rows.
    ///
    /// An empty dataset would leave the payload bounds undefined, so it is
    /// treated as malformed input.
    #[error("dataset contains no launch records")]
    Empty,
}
