mod board;
mod fonts;
mod help_dialog;
mod panel;
mod plot;
mod toolbar;

pub use board::{ChartBoard, RenderedChart};
pub use fonts::install_cjk_font;
pub use help_dialog::render_help_dialog;
pub use panel::render_selectors;
pub use plot::render_chart;
pub use toolbar::{render_status_bar, render_toolbar};
