//! Projection of filtered records into chart-ready series

use chrono::NaiveDate;

use super::record::Record;
use crate::constants::chart::{DATE_FORMAT, INVALID_DATE};

/// Index-aligned chart data for one panel.
///
/// Every vector has the same length as the record slice it was projected
/// from. Scores are NaN where the cell was absent or non-numeric.
#[derive(Debug, Clone, Default)]
pub struct Series {
    pub labels: Vec<String>,
    pub dates: Vec<Option<NaiveDate>>,
    pub leaf: Vec<f64>,
    pub flower: Vec<f64>,
    pub fruit: Vec<f64>,
}

impl Series {
    /// Project records in the order given, no re-sorting
    pub fn project(records: &[&Record]) -> Self {
        profiling::scope!("Series::project");

        let mut series = Self::with_capacity(records.len());
        for record in records {
            series.labels.push(point_label(record));
            series.dates.push(record.observed_on());
            series.leaf.push(record.leaf_score());
            series.flower.push(record.flower_score());
            series.fruit.push(record.fruit_score());
        }
        series
    }

    fn with_capacity(n: usize) -> Self {
        Self {
            labels: Vec::with_capacity(n),
            dates: Vec::with_capacity(n),
            leaf: Vec::with_capacity(n),
            flower: Vec::with_capacity(n),
            fruit: Vec::with_capacity(n),
        }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// "YYYY/MM/DD - term" for one observation
pub fn point_label(record: &Record) -> String {
    let date = record
        .observed_on()
        .map(|d| d.format(DATE_FORMAT).to_string())
        .unwrap_or_else(|| INVALID_DATE.to_string());
    format!("{} - {}", date, record.solar_term().unwrap_or_default())
}
