/// Keyboard shortcut reference, toggled with H / F1
pub fn render_help_dialog(ctx: &egui::Context, open: &mut bool) {
    if !*open {
        return;
    }

    let mut close = false;
    egui::Window::new("⌨ Keyboard Shortcuts")
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .collapsible(false)
        .show(ctx, |ui| {
            ui.heading("View");
            ui.label("N - Add chart");
            ui.label("G - Toggle grid");
            ui.label("L - Toggle legend");
            ui.label("T - Toggle dark/light theme");
            ui.label("H / F1 - Toggle help");
            ui.label("ESC - Close help");

            ui.separator();
            ui.heading("Mouse Controls");
            ui.label("Drag - Pan chart");
            ui.label("Ctrl + Scroll - Zoom chart");
            ui.label("Double-click - Reset chart view");
            ui.label("Hover point - Show date and solar term");

            ui.separator();
            if ui.button("Close").clicked() {
                close = true;
            }
        });

    if close {
        *open = false;
    }
}
