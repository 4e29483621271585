use crate::state::{LoadStatus, PanelEvent, ViewState};

/// Render the top toolbar.
/// Returns the add-panel event when the button was clicked.
pub fn render_toolbar(ui: &mut egui::Ui, view: &mut ViewState) -> Option<PanelEvent> {
    let mut event = None;

    ui.horizontal(|ui| {
        ui.heading("植物物候");
        ui.separator();

        if ui.button("➕ 新增圖表").on_hover_text("Add chart").clicked() {
            event = Some(PanelEvent::AddPanel);
        }

        ui.separator();
        ui.checkbox(&mut view.show_grid, "Grid");
        ui.checkbox(&mut view.show_legend, "Legend");

        let theme_icon = if view.dark_mode { "☀" } else { "🌙" };
        if ui.button(theme_icon).on_hover_text("Toggle theme (T)").clicked() {
            view.toggle_dark_mode();
        }
    });

    event
}

/// Render the status bar: dataset file, load progress and the last error
pub fn render_status_bar(ui: &mut egui::Ui, source: &str, status: &LoadStatus, error: Option<&str>, panels: usize) {
    ui.horizontal(|ui| {
        ui.label(format!("📁 {}", source));
        ui.separator();
        match status {
            LoadStatus::Loading => {
                ui.spinner();
                ui.label("Loading…");
            }
            LoadStatus::Loaded { records } => {
                ui.label(format!("Rows: {} | Charts: {}", records, panels));
            }
            LoadStatus::Failed => {
                ui.colored_label(egui::Color32::from_rgb(214, 39, 40), "Load failed");
            }
        }
        if let Some(message) = error {
            ui.separator();
            ui.colored_label(egui::Color32::from_rgb(255, 127, 14), message);
        }
    });
}
