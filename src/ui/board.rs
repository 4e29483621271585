//! Per-panel chart storage behind the rendering trait

use std::collections::HashMap;
use std::sync::Arc;

use crate::chart::{ChartSpec, ChartSurface};
use crate::state::PanelId;

/// A chart as drawn on screen: its `ChartSpec` plus precomputed line segments
#[derive(Debug)]
pub struct RenderedChart {
    pub spec: Arc<ChartSpec>,
    /// Per dataset, the runs of points between gaps
    pub segments: Vec<Vec<Vec<[f64; 2]>>>,
    /// Fit the plot bounds to the new data on the next frame
    pub reset_bounds: bool,
}

impl RenderedChart {
    fn new(spec: ChartSpec) -> Self {
        let segments = (0..spec.datasets.len()).map(|i| spec.segments(i)).collect();
        Self {
            spec: Arc::new(spec),
            segments,
            reset_bounds: true,
        }
    }
}

/// egui implementation of the rendering collaborator.
///
/// Holds one rendered chart per panel; a replace drops the old one entirely.
#[derive(Debug, Default)]
pub struct ChartBoard {
    charts: HashMap<PanelId, RenderedChart>,
}

impl ChartBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn chart_mut(&mut self, panel: PanelId) -> Option<&mut RenderedChart> {
        self.charts.get_mut(&panel)
    }
}

impl ChartSurface for ChartBoard {
    fn replace_chart(&mut self, panel: PanelId, chart: ChartSpec) {
        self.charts.insert(panel, RenderedChart::new(chart));
    }
}
