//! The in-memory launch dataset and its derived metadata.

use chrono::{DateTime, Utc};
use csv::ReaderBuilder;
use log::info;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use super::checksum::calculate_checksum;
use super::error::DatasetError;
use super::record::LaunchRecord;

/// The launch-record table plus the scalars derived from it at load time.
///
/// Immutable for the lifetime of the process. The payload bounds seed the
/// range slider's initial value; the checksum and load timestamp identify
/// the loaded content in the dataset summary and health check.
#[derive(Debug, Clone)]
pub struct LaunchDataset {
    records: Vec<LaunchRecord>,
    min_payload_kg: f64,
    max_payload_kg: f64,
    sites: Vec<String>,
    checksum: String,
    loaded_at: DateTime<Utc>,
}

impl LaunchDataset {
    /// Load the dataset from a CSV file.
    ///
    /// Fails on a missing or unreadable file, an unparseable row, an
    /// out-of-range `class` value, or a file with zero data rows. All of
    /// these are fatal in the server binary.
    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| DatasetError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let dataset = Self::from_csv_bytes(&bytes)?;
        info!(
            "loaded {} launch records from '{}' (checksum {})",
            dataset.len(),
            path.display(),
            &dataset.checksum()[..12]
        );
        Ok(dataset)
    }

    /// Parse the dataset from raw CSV bytes.
    ///
    /// The checksum is computed over the bytes as given, before parsing.
    pub fn from_csv_bytes(bytes: &[u8]) -> Result<Self, DatasetError> {
        let checksum = calculate_checksum(bytes);
        let mut reader = ReaderBuilder::new().has_headers(true).from_reader(bytes);
        let records = reader
            .deserialize()
            .collect::<Result<Vec<LaunchRecord>, _>>()?;
        Self::build(records, checksum)
    }

    /// Build a dataset from already-parsed records.
    ///
    /// The checksum is computed over a canonical byte encoding of the
    /// record fields, so two datasets with the same rows share an
    /// identity and any field difference (including a non-finite
    /// payload) yields a different one.
    pub fn from_records(records: Vec<LaunchRecord>) -> Result<Self, DatasetError> {
        // Unit and record separators keep adjacent fields unambiguous.
        let mut canonical = Vec::new();
        for record in &records {
            canonical.extend_from_slice(record.launch_site.as_bytes());
            canonical.push(0x1f);
            canonical.extend_from_slice(&record.payload_mass_kg.to_le_bytes());
            canonical.push(0x1f);
            canonical.push(record.outcome.class());
            canonical.push(0x1f);
            canonical.extend_from_slice(record.booster_category.as_bytes());
            canonical.push(0x1e);
        }
        Self::build(records, calculate_checksum(&canonical))
    }

    fn build(records: Vec<LaunchRecord>, checksum: String) -> Result<Self, DatasetError> {
        if records.is_empty() {
            return Err(DatasetError::Empty);
        }

        let mut min_payload_kg = f64::INFINITY;
        let mut max_payload_kg = f64::NEG_INFINITY;
        let mut sites = BTreeSet::new();
        for record in &records {
            min_payload_kg = min_payload_kg.min(record.payload_mass_kg);
            max_payload_kg = max_payload_kg.max(record.payload_mass_kg);
            sites.insert(record.launch_site.clone());
        }

        Ok(LaunchDataset {
            records,
            min_payload_kg,
            max_payload_kg,
            sites: sites.into_iter().collect(),
            checksum,
            loaded_at: Utc::now(),
        })
    }

    /// All launch records, in file order.
    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Smallest observed payload mass, in kilograms.
    pub fn min_payload_kg(&self) -> f64 {
        self.min_payload_kg
    }

    /// Largest observed payload mass, in kilograms.
    pub fn max_payload_kg(&self) -> f64 {
        self.max_payload_kg
    }

    /// Distinct launch sites present in the data, sorted ascending.
    pub fn sites(&self) -> &[String] {
        &self.sites
    }

    /// SHA-256 checksum of the loaded content, hex-encoded.
    pub fn checksum(&self) -> &str {
        &self.checksum
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    pub fn summary(&self) -> DatasetSummary {
        DatasetSummary {
            rows: self.len(),
            sites: self.sites.clone(),
            min_payload_kg: self.min_payload_kg,
            max_payload_kg: self.max_payload_kg,
            checksum: self.checksum.clone(),
            loaded_at: self.loaded_at,
        }
    }
}

/// Serializable dataset metadata served at `/v1/dataset`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetSummary {
    pub rows: usize,
    pub sites: Vec<String>,
    pub min_payload_kg: f64,
    pub max_payload_kg: f64,
    pub checksum: String,
    pub loaded_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::record::Outcome;

    const SAMPLE_CSV: &str = "\
Launch Site,Payload Mass (kg),class,Booster Version Category
CCAFS LC-40,2500.0,0,v1.0
KSC LC-39A,4200.5,1,FT
VAFB SLC-4E,500.0,1,v1.1
KSC LC-39A,9600.0,0,B4
";

    #[test]
    fn test_from_csv_bytes_parses_all_rows() {
        let dataset = LaunchDataset::from_csv_bytes(SAMPLE_CSV.as_bytes()).unwrap();
        assert_eq!(dataset.len(), 4);
        assert_eq!(dataset.records()[1].launch_site, "KSC LC-39A");
        assert_eq!(dataset.records()[1].outcome, Outcome::Success);
    }

    #[test]
    fn test_payload_bounds_are_observed_min_max() {
        let dataset = LaunchDataset::from_csv_bytes(SAMPLE_CSV.as_bytes()).unwrap();
        assert_eq!(dataset.min_payload_kg(), 500.0);
        assert_eq!(dataset.max_payload_kg(), 9600.0);
    }

    #[test]
    fn test_sites_are_distinct_and_sorted() {
        let dataset = LaunchDataset::from_csv_bytes(SAMPLE_CSV.as_bytes()).unwrap();
        assert_eq!(
            dataset.sites(),
            &["CCAFS LC-40", "KSC LC-39A", "VAFB SLC-4E"]
        );
    }

    #[test]
    fn test_empty_dataset_is_rejected() {
        let header_only = "Launch Site,Payload Mass (kg),class,Booster Version Category\n";
        let err = LaunchDataset::from_csv_bytes(header_only.as_bytes()).unwrap_err();
        assert!(matches!(err, DatasetError::Empty));
    }

    #[test]
    fn test_missing_column_is_rejected() {
        let csv = "Launch Site,class,Booster Version Category\nKSC LC-39A,1,FT\n";
        let err = LaunchDataset::from_csv_bytes(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, DatasetError::Parse(_)));
    }

    #[test]
    fn test_extra_columns_are_ignored() {
        let csv = "\
Flight Number,Launch Site,Payload Mass (kg),class,Booster Version,Booster Version Category
1,CCAFS LC-40,2500.0,0,F9 v1.0 B0003,v1.0
";
        let dataset = LaunchDataset::from_csv_bytes(csv.as_bytes()).unwrap();
        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset.records()[0].booster_category, "v1.0");
    }

    #[test]
    fn test_checksum_matches_raw_bytes() {
        let dataset = LaunchDataset::from_csv_bytes(SAMPLE_CSV.as_bytes()).unwrap();
        assert_eq!(
            dataset.checksum(),
            calculate_checksum(SAMPLE_CSV.as_bytes())
        );
    }

    #[test]
    fn test_from_records_rejects_empty() {
        let err = LaunchDataset::from_records(vec![]).unwrap_err();
        assert!(matches!(err, DatasetError::Empty));
    }

    #[test]
    fn test_from_records_same_rows_same_checksum() {
        let rows = vec![
            LaunchRecord::new("KSC LC-39A", 3000.0, Outcome::Success, "FT"),
            LaunchRecord::new("VAFB SLC-4E", 500.0, Outcome::Failure, "v1.1"),
        ];
        let a = LaunchDataset::from_records(rows.clone()).unwrap();
        let b = LaunchDataset::from_records(rows).unwrap();
        assert_eq!(a.checksum(), b.checksum());
    }

    #[test]
    fn test_from_records_field_difference_changes_checksum() {
        let a = LaunchDataset::from_records(vec![LaunchRecord::new(
            "KSC LC-39A",
            3000.0,
            Outcome::Success,
            "FT",
        )])
        .unwrap();
        let b = LaunchDataset::from_records(vec![LaunchRecord::new(
            "KSC LC-39A",
            3000.5,
            Outcome::Success,
            "FT",
        )])
        .unwrap();
        assert_ne!(a.checksum(), b.checksum());
    }

    #[test]
    fn test_from_records_non_finite_payload_keeps_distinct_identity() {
        let nan = LaunchDataset::from_records(vec![LaunchRecord::new(
            "KSC LC-39A",
            f64::NAN,
            Outcome::Success,
            "FT",
        )])
        .unwrap();
        let finite = LaunchDataset::from_records(vec![LaunchRecord::new(
            "KSC LC-39A",
            3000.0,
            Outcome::Success,
            "FT",
        )])
        .unwrap();
        assert_ne!(nan.checksum(), finite.checksum());
        assert_ne!(nan.checksum(), calculate_checksum(&[]));
    }

    #[test]
    fn test_summary_reflects_dataset() {
        let dataset = LaunchDataset::from_csv_bytes(SAMPLE_CSV.as_bytes()).unwrap();
        let summary = dataset.summary();
        assert_eq!(summary.rows, 4);
        assert_eq!(summary.min_payload_kg, 500.0);
        assert_eq!(summary.max_payload_kg, 9600.0);
        assert_eq!(summary.checksum, dataset.checksum());
    }
}
