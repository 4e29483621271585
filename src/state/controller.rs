//! Chart panel orchestration
//!
//! UI interactions arrive as [`PanelEvent`] messages. Each one is handled to
//! completion before the next: update the addressed panel's selection, run
//! filter + projection against the shared dataset, and replace that panel's
//! chart on the [`ChartSurface`]. Other panels are never touched.

use std::sync::Arc;

use super::panel::{Panel, PanelId, PanelPhase};
use crate::chart::{ChartSpec, ChartSurface};
use crate::data::Dataset;
use crate::error::{Result, ViewerError};

/// A user interaction addressed to the controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelEvent {
    PlantChanged { panel: PanelId, plant: String },
    YearChanged { panel: PanelId, year: i32 },
    AddPanel,
}

/// Owns every panel and the dataset they read from
#[derive(Debug)]
pub struct ChartPanelController {
    dataset: Option<Arc<Dataset>>,
    panels: Vec<Panel>,
    next_id: PanelId,
}

impl Default for ChartPanelController {
    fn default() -> Self {
        Self::new()
    }
}

impl ChartPanelController {
    /// Start with chart 1 waiting for the dataset
    pub fn new() -> Self {
        Self {
            dataset: None,
            panels: vec![Panel::new(PanelId::FIRST)],
            next_id: PanelId::FIRST.next(),
        }
    }

    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    pub fn panel(&self, id: PanelId) -> Option<&Panel> {
        self.panels.iter().find(|p| p.id() == id)
    }

    pub fn has_dataset(&self) -> bool {
        self.dataset.is_some()
    }

    /// Hand over the loaded dataset and bring every waiting panel up.
    ///
    /// The dataset can be attached once per session.
    pub fn attach_dataset(&mut self, dataset: Arc<Dataset>, surface: &mut dyn ChartSurface) -> Result<()> {
        if self.dataset.is_some() {
            return Err(ViewerError::DatasetAlreadyLoaded);
        }

        for panel in self.panels.iter_mut().filter(|p| !p.is_initialized()) {
            panel.populate(dataset.facets());
            render_panel(&dataset, panel, surface);
        }
        self.dataset = Some(dataset);
        Ok(())
    }

    /// Handle one UI event
    pub fn dispatch(&mut self, event: PanelEvent, surface: &mut dyn ChartSurface) -> Result<()> {
        tracing::debug!(?event, "panel event");
        match event {
            PanelEvent::AddPanel => {
                self.add_panel(surface);
                Ok(())
            }
            PanelEvent::PlantChanged { panel, plant } => self.update(panel, surface, |p| p.select_plant(plant)),
            PanelEvent::YearChanged { panel, year } => self.update(panel, surface, |p| p.select_year(year)),
        }
    }

    /// Allocate the next panel id and, with data present, render it
    pub fn add_panel(&mut self, surface: &mut dyn ChartSurface) -> PanelId {
        let id = self.next_id;
        self.next_id = id.next();

        let mut panel = Panel::new(id);
        if let Some(dataset) = &self.dataset {
            panel.populate(dataset.facets());
            render_panel(dataset, &mut panel, surface);
        }
        self.panels.push(panel);
        id
    }

    fn update<F>(&mut self, id: PanelId, surface: &mut dyn ChartSurface, change: F) -> Result<()>
    where
        F: FnOnce(&mut Panel),
    {
        let panel = self
            .panels
            .iter_mut()
            .find(|p| p.id() == id)
            .ok_or(ViewerError::UnknownPanel { id })?;

        let Some(dataset) = &self.dataset else {
            tracing::debug!(panel = %id, "selection change before dataset load ignored");
            return Ok(());
        };
        if panel.phase() == PanelPhase::Uninitialized {
            tracing::debug!(panel = %id, "selection change on uninitialized panel ignored");
            return Ok(());
        }

        change(panel);
        render_panel(dataset, panel, surface);
        Ok(())
    }
}

/// Filter, project and replace the panel's chart
fn render_panel(dataset: &Dataset, panel: &mut Panel, surface: &mut dyn ChartSurface) {
    profiling::scope!("render_panel");
    let series = dataset.series_for(panel.selection());
    tracing::debug!(
        panel = %panel.id(),
        plant = ?panel.selection().plant,
        year = ?panel.selection().year,
        points = series.len(),
        "rendering chart"
    );
    let points = series.len();
    surface.replace_chart(panel.id(), ChartSpec::from_series(&series));
    panel.mark_rendered(points);
}
