//! View and visualization state

use crate::config::ViewerConfig;

/// Display options shared by every chart panel
#[derive(Debug, Clone)]
pub struct ViewState {
    /// Dark mode theme toggle
    pub dark_mode: bool,

    /// Grid visibility
    pub show_grid: bool,

    /// Legend visibility
    pub show_legend: bool,

    /// Height of one chart panel
    pub chart_height: f32,

    /// Show help panel
    pub show_help: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::from_config(&ViewerConfig::default())
    }
}

impl ViewState {
    pub fn from_config(config: &ViewerConfig) -> Self {
        Self {
            dark_mode: config.dark_mode,
            show_grid: config.show_grid,
            show_legend: config.show_legend,
            chart_height: config.chart_height,
            show_help: false,
        }
    }

    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
    }

    pub fn toggle_grid(&mut self) {
        self.show_grid = !self.show_grid;
    }

    pub fn toggle_legend(&mut self) {
        self.show_legend = !self.show_legend;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config_and_toggles() {
        let config = ViewerConfig {
            dark_mode: true,
            show_legend: false,
            ..Default::default()
        };
        let mut view = ViewState::from_config(&config);
        assert!(view.dark_mode);
        assert!(!view.show_legend);
        assert!(view.show_grid);

        view.toggle_dark_mode();
        view.toggle_legend();
        view.toggle_grid();
        assert!(!view.dark_mode);
        assert!(view.show_legend);
        assert!(!view.show_grid);
    }
}
