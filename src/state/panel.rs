//! Per-chart panel state

use std::fmt;

use crate::data::{Facets, PlantFacet, Selection, YearFacet};

/// Identifier of one chart panel, starting at 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PanelId(pub u32);

impl PanelId {
    pub const FIRST: PanelId = PanelId(1);

    pub fn next(self) -> PanelId {
        PanelId(self.0 + 1)
    }
}

impl fmt::Display for PanelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lifecycle of a panel. There is no terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelPhase {
    /// Created, selectors still empty
    #[default]
    Uninitialized,
    /// Selectors populated, waiting for the first render
    AwaitingSelection,
    /// A chart for the current selection has been handed to the renderer
    Rendering,
}

/// One chart panel: its selectors, current selection and last render size
#[derive(Debug, Clone)]
pub struct Panel {
    id: PanelId,
    phase: PanelPhase,
    selection: Selection,
    plant_options: Vec<PlantFacet>,
    year_options: Vec<YearFacet>,
    /// Number of points in the last rendered chart
    rendered_points: usize,
}

impl Panel {
    pub fn new(id: PanelId) -> Self {
        Self {
            id,
            phase: PanelPhase::Uninitialized,
            selection: Selection::default(),
            plant_options: Vec::new(),
            year_options: Vec::new(),
            rendered_points: 0,
        }
    }

    pub fn id(&self) -> PanelId {
        self.id
    }

    pub fn phase(&self) -> PanelPhase {
        self.phase
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn plant_options(&self) -> &[PlantFacet] {
        &self.plant_options
    }

    pub fn year_options(&self) -> &[YearFacet] {
        &self.year_options
    }

    pub fn rendered_points(&self) -> usize {
        self.rendered_points
    }

    pub fn is_initialized(&self) -> bool {
        self.phase != PanelPhase::Uninitialized
    }

    /// Fill both selectors and preselect their first options.
    ///
    /// Year options come from the whole dataset, not just the selected plant.
    pub(super) fn populate(&mut self, facets: &Facets) {
        self.plant_options = facets.plants.clone();
        self.year_options = facets.years.clone();
        self.selection = Selection {
            plant: facets.first_plant().map(str::to_string),
            year: facets.first_year(),
        };
        self.phase = PanelPhase::AwaitingSelection;
    }

    pub(super) fn select_plant(&mut self, plant: String) {
        self.selection.plant = Some(plant);
    }

    pub(super) fn select_year(&mut self, year: i32) {
        self.selection.year = Some(year);
    }

    pub(super) fn mark_rendered(&mut self, points: usize) {
        self.rendered_points = points;
        self.phase = PanelPhase::Rendering;
    }

    /// Display text of the current plant selection
    pub fn plant_label(&self) -> &str {
        self.selection
            .plant
            .as_deref()
            .and_then(|id| self.plant_options.iter().find(|f| f.value == id))
            .map(|f| f.label.as_str())
            .unwrap_or("")
    }

    /// Display text of the current year selection
    pub fn year_label(&self) -> String {
        self.selection.year.map(|y| y.to_string()).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::FacetOption;

    fn facets() -> Facets {
        Facets {
            plants: vec![
                FacetOption {
                    value: "P1".into(),
                    label: "P1 - 樟樹".into(),
                },
                FacetOption {
                    value: "P2".into(),
                    label: "P2 - 楓香".into(),
                },
            ],
            years: vec![
                FacetOption {
                    value: 2023,
                    label: "2023".into(),
                },
                FacetOption {
                    value: 2022,
                    label: "2022".into(),
                },
            ],
        }
    }

    #[test]
    fn test_panel_ids() {
        assert_eq!(PanelId::FIRST.0, 1);
        assert_eq!(PanelId::FIRST.next(), PanelId(2));
        assert_eq!(PanelId(12).to_string(), "12");
    }

    #[test]
    fn test_new_panel_is_uninitialized() {
        let panel = Panel::new(PanelId::FIRST);
        assert_eq!(panel.phase(), PanelPhase::Uninitialized);
        assert!(!panel.is_initialized());
        assert!(panel.plant_options().is_empty());
        assert_eq!(panel.plant_label(), "");
        assert_eq!(panel.year_label(), "");
    }

    #[test]
    fn test_populate_selects_first_options() {
        let mut panel = Panel::new(PanelId::FIRST);
        panel.populate(&facets());
        assert_eq!(panel.phase(), PanelPhase::AwaitingSelection);
        assert_eq!(panel.selection().plant.as_deref(), Some("P1"));
        assert_eq!(panel.selection().year, Some(2023));
        assert_eq!(panel.plant_label(), "P1 - 樟樹");
        assert_eq!(panel.year_label(), "2023");
        assert_eq!(panel.year_options().len(), 2);
    }

    #[test]
    fn test_populate_with_no_facets_leaves_selection_empty() {
        let mut panel = Panel::new(PanelId::FIRST);
        panel.populate(&Facets::default());
        assert_eq!(panel.phase(), PanelPhase::AwaitingSelection);
        assert_eq!(panel.selection(), &Selection::default());
    }
}
