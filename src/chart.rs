//! Chart description handed from the panel controller to the renderer

use chrono::{DateTime, NaiveDate, Utc};
use egui::Color32;

use crate::constants::chart::{FLOWER_RGB, FRUIT_RGB, LEAF_RGB, SECONDS_PER_DAY};
use crate::constants::columns;
use crate::data::Series;
use crate::state::PanelId;

/// One named line of a chart
#[derive(Debug, Clone)]
pub struct ChartDataset {
    pub name: &'static str,
    pub rgb: [u8; 3],
    /// NaN marks a gap
    pub values: Vec<f64>,
}

impl ChartDataset {
    pub fn color(&self) -> Color32 {
        let [r, g, b] = self.rgb;
        Color32::from_rgb(r, g, b)
    }
}

/// Everything a renderer needs to draw one panel.
///
/// `labels`, `days` and every dataset's `values` share one index.
#[derive(Debug, Clone, Default)]
pub struct ChartSpec {
    pub labels: Vec<String>,
    /// Observation date as days since the Unix epoch, `None` when unparseable
    pub days: Vec<Option<f64>>,
    pub datasets: Vec<ChartDataset>,
}

impl ChartSpec {
    pub fn from_series(series: &Series) -> Self {
        Self {
            labels: series.labels.clone(),
            days: series.dates.iter().map(|d| d.map(days_since_epoch)).collect(),
            datasets: vec![
                ChartDataset {
                    name: columns::LEAF_SCORE,
                    rgb: LEAF_RGB,
                    values: series.leaf.clone(),
                },
                ChartDataset {
                    name: columns::FLOWER_SCORE,
                    rgb: FLOWER_RGB,
                    values: series.flower.clone(),
                },
                ChartDataset {
                    name: columns::FRUIT_SCORE,
                    rgb: FRUIT_RGB,
                    values: series.fruit.clone(),
                },
            ],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Contiguous runs of drawable points for one dataset.
    ///
    /// A NaN value or a missing date ends the current run, so lines break
    /// at gaps instead of dropping to zero.
    pub fn segments(&self, dataset: usize) -> Vec<Vec<[f64; 2]>> {
        let Some(ds) = self.datasets.get(dataset) else {
            return Vec::new();
        };

        let mut segments = Vec::new();
        let mut current = Vec::new();
        for (day, &value) in self.days.iter().zip(&ds.values) {
            match day {
                Some(x) if value.is_finite() => current.push([*x, value]),
                _ => {
                    if !current.is_empty() {
                        segments.push(std::mem::take(&mut current));
                    }
                }
            }
        }
        if !current.is_empty() {
            segments.push(current);
        }
        segments
    }

    /// Label of the observation nearest to `x` (days), for hover text
    pub fn label_near(&self, x: f64) -> Option<&str> {
        self.days
            .iter()
            .enumerate()
            .filter_map(|(i, d)| d.map(|d| (i, (d - x).abs())))
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .filter(|(_, dist)| *dist <= 0.5)
            .map(|(i, _)| self.labels[i].as_str())
    }
}

/// Days since 1970-01-01, the x coordinate of the time axis
pub fn days_since_epoch(date: NaiveDate) -> f64 {
    let secs = date.and_hms_opt(0, 0, 0).map_or(0, |dt| dt.and_utc().timestamp());
    secs.div_euclid(SECONDS_PER_DAY) as f64
}

/// Inverse of [`days_since_epoch`] for axis labels
pub fn date_from_days(days: f64) -> Option<NaiveDate> {
    if !days.is_finite() {
        return None;
    }
    // Grid marks of a far zoomed-out axis can be arbitrarily large
    let secs = (days.round() as i64).checked_mul(SECONDS_PER_DAY)?;
    DateTime::<Utc>::from_timestamp(secs, 0).map(|dt| dt.date_naive())
}

/// Rendering collaborator: owns the drawn chart of every panel.
///
/// `replace_chart` discards whatever was shown for `panel` before.
pub trait ChartSurface {
    fn replace_chart(&mut self, panel: PanelId, chart: ChartSpec);
}
