//! egui_plot drawing of one panel's chart

use egui_plot::{Legend, Line, Plot, Points};
use std::sync::Arc;

use super::board::RenderedChart;
use crate::chart::date_from_days;
use crate::constants::chart::DATE_FORMAT;
use crate::state::{PanelId, ViewState};

/// Draw one panel's chart with a day-granular date axis
pub fn render_chart(ui: &mut egui::Ui, panel: PanelId, chart: &mut RenderedChart, view: &ViewState) {
    profiling::scope!("render_chart");

    if chart.spec.is_empty() {
        ui.centered_and_justified(|ui| {
            ui.weak("No observations for this plant and year");
        });
        return;
    }

    let hover_spec = Arc::clone(&chart.spec);

    let mut plot = Plot::new(("chart", panel.0))
        .height(view.chart_height)
        .show_grid(view.show_grid)
        .allow_scroll(false)
        .x_axis_formatter(|mark, _range| {
            date_from_days(mark.value)
                .map(|d| d.format(DATE_FORMAT).to_string())
                .unwrap_or_default()
        })
        .label_formatter(move |name, value| {
            let label = hover_spec.label_near(value.x).unwrap_or_default();
            if name.is_empty() {
                label.to_string()
            } else {
                format!("{}\n{}: {:.2}", label, name, value.y)
            }
        });

    if view.show_legend {
        plot = plot.legend(Legend::default().position(egui_plot::Corner::RightTop));
    }

    if chart.reset_bounds {
        plot = plot.reset();
        chart.reset_bounds = false;
    }

    let spec = &chart.spec;
    let segments = &chart.segments;
    plot.show(ui, |plot_ui| {
        for (dataset, runs) in spec.datasets.iter().zip(segments) {
            let color = dataset.color();
            for run in runs {
                if run.len() > 1 {
                    plot_ui.line(Line::new(dataset.name, run.clone()).color(color));
                }
                plot_ui.points(Points::new(dataset.name, run.clone()).radius(3.0).color(color));
            }
        }
    });
}
