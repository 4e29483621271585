//! The loaded observation set and its selector options

use std::path::Path;

use super::csv::parse_csv;
use super::facets::Facets;
use super::filter::{Selection, filter_selection};
use super::record::Record;
use super::series::Series;
use crate::error::{Result, ViewerError};

/// The observation set loaded at startup.
///
/// Built once, then shared read-only as `Arc<Dataset>`. Facets are computed
/// together with the records so every panel sees the same options.
#[derive(Debug)]
pub struct Dataset {
    records: Vec<Record>,
    facets: Facets,
}

impl Dataset {
    /// Parse CSV text into a dataset
    pub fn from_text(text: &str) -> Result<Self> {
        if text.trim().is_empty() {
            return Err(ViewerError::EmptyDataset);
        }
        let parsed = parse_csv(text);
        if parsed.header.is_empty() {
            return Err(ViewerError::EmptyDataset);
        }
        let facets = Facets::build(&parsed.records);
        Ok(Self {
            records: parsed.records,
            facets,
        })
    }

    /// Read and parse a UTF-8 CSV file
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_text(&text)
    }

    pub fn facets(&self) -> &Facets {
        &self.facets
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Filter by selection and project into chart series
    pub fn series_for(&self, selection: &Selection) -> Series {
        Series::project(&filter_selection(&self.records, selection))
    }
}
