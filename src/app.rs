use eframe::egui::{self, CentralPanel, TopBottomPanel};
use egui_extras::{Size, StripBuilder};

use crate::config::ViewerConfig;
use crate::constants::layout::{SELECTOR_ROW_HEIGHT, STANDARD_PADDING};
use crate::loader::DatasetLoader;
use crate::perf;
use crate::state::{AppState, Panel, PanelEvent};
use crate::ui::{self, ChartBoard};

pub struct PhenoPlot {
    pub state: AppState,

    /// Charts handed over by the controller, keyed by panel
    board: ChartBoard,

    /// Present until the startup load reports back
    loader: Option<DatasetLoader>,

    /// Dataset file name shown in the status bar
    source_label: String,
}

impl PhenoPlot {
    pub fn new(cc: &eframe::CreationContext<'_>, config: &ViewerConfig) -> Self {
        ui::install_cjk_font(&cc.egui_ctx, config.font_path.as_deref());

        let ctx = cc.egui_ctx.clone();
        let loader = DatasetLoader::spawn(config.dataset_path.clone(), move || ctx.request_repaint());

        Self {
            state: AppState::from_config(config),
            board: ChartBoard::new(),
            loader: Some(loader),
            source_label: config.dataset_path.display().to_string(),
        }
    }

    /// Hand the loader result to the state exactly once
    fn poll_loader(&mut self) {
        let Some(result) = self.loader.as_mut().and_then(|loader| loader.poll()) else {
            return;
        };
        self.loader = None;
        self.state.on_load_finished(result, &mut self.board);
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) -> Option<PanelEvent> {
        if ctx.wants_keyboard_input() {
            return None;
        }

        let view = &mut self.state.view;
        ctx.input(|i| {
            if i.key_pressed(egui::Key::G) {
                view.toggle_grid();
            }
            if i.key_pressed(egui::Key::L) {
                view.toggle_legend();
            }
            if i.key_pressed(egui::Key::T) {
                view.toggle_dark_mode();
            }
            if i.key_pressed(egui::Key::H) || i.key_pressed(egui::Key::F1) {
                view.show_help = !view.show_help;
            }
            if i.key_pressed(egui::Key::Escape) {
                view.show_help = false;
            }
            i.key_pressed(egui::Key::N).then_some(PanelEvent::AddPanel)
        })
    }

    /// One chart panel: selector row above the chart
    fn render_panel(&mut self, ui: &mut egui::Ui, panel: &Panel, events: &mut Vec<PanelEvent>) {
        let chart_height = self.state.view.chart_height;
        let loading = self.state.ui.is_loading();
        let has_data = self.state.has_data();

        egui::Frame::group(ui.style()).show(ui, |ui| {
            StripBuilder::new(ui)
                .size(Size::exact(SELECTOR_ROW_HEIGHT))
                .size(Size::exact(chart_height))
                .vertical(|mut strip| {
                    strip.cell(|ui| {
                        events.extend(ui::render_selectors(ui, panel));
                    });
                    strip.cell(|ui| match self.board.chart_mut(panel.id()) {
                        Some(chart) => ui::render_chart(ui, panel.id(), chart, &self.state.view),
                        None => {
                            ui.centered_and_justified(|ui| {
                                if loading {
                                    ui.spinner();
                                } else if has_data {
                                    ui.weak("No chart yet");
                                } else {
                                    ui.weak("No data");
                                }
                            });
                        }
                    });
                });
        });
    }
}

impl eframe::App for PhenoPlot {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        perf::finish_frame();
        profiling::scope!("PhenoPlot::update");

        self.poll_loader();

        if self.state.view.dark_mode {
            ctx.set_visuals(egui::Visuals::dark());
        } else {
            ctx.set_visuals(egui::Visuals::light());
        }

        let mut events: Vec<PanelEvent> = self.handle_shortcuts(ctx).into_iter().collect();

        TopBottomPanel::top("toolbar").show(ctx, |ui| {
            events.extend(ui::render_toolbar(ui, &mut self.state.view));
        });

        TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui::render_status_bar(
                ui,
                &self.source_label,
                &self.state.ui.load_status,
                self.state.ui.error_message.as_deref(),
                self.state.panels.panels().len(),
            );
        });

        CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                // Panels are cloned so the board can be borrowed mutably while drawing
                let panels = self.state.panels.panels().to_vec();
                for panel in &panels {
                    self.render_panel(ui, panel, &mut events);
                    ui.add_space(STANDARD_PADDING);
                }
            });
        });

        for event in events {
            self.state.handle_event(event, &mut self.board);
        }

        ui::render_help_dialog(ctx, &mut self.state.view.show_help);
    }
}
