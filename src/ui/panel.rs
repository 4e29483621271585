use egui::ComboBox;

use crate::constants::layout::PLANT_SELECTOR_WIDTH;
use crate::state::{Panel, PanelEvent};

/// Render the plant and year selectors of one panel.
///
/// Selection changes are returned as events instead of being applied here,
/// so the controller stays the only writer of panel state.
pub fn render_selectors(ui: &mut egui::Ui, panel: &Panel) -> Option<PanelEvent> {
    let mut event = None;
    let id = panel.id();

    ui.horizontal(|ui| {
        ui.label("選擇植物：");
        ComboBox::from_id_salt(("plant", id.0))
            .selected_text(panel.plant_label())
            .width(PLANT_SELECTOR_WIDTH)
            .show_ui(ui, |ui| {
                for option in panel.plant_options() {
                    let selected = panel.selection().plant.as_deref() == Some(option.value.as_str());
                    if ui.selectable_label(selected, &option.label).clicked() && !selected {
                        event = Some(PanelEvent::PlantChanged {
                            panel: id,
                            plant: option.value.clone(),
                        });
                    }
                }
            });

        ui.label("選擇年份：");
        ComboBox::from_id_salt(("year", id.0))
            .selected_text(panel.year_label())
            .show_ui(ui, |ui| {
                for option in panel.year_options() {
                    let selected = panel.selection().year == Some(option.value);
                    if ui.selectable_label(selected, &option.label).clicked() && !selected {
                        event = Some(PanelEvent::YearChanged {
                            panel: id,
                            year: option.value,
                        });
                    }
                }
            });

        ui.weak(format!("#{} · {} points", id, panel.rendered_points()));
    });

    event
}
