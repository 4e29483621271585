#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use pheno_plot::{PhenoPlot, ViewerConfig, perf};
use tracing_subscriber::EnvFilter;

fn main() -> eframe::Result {
    let (config, warning) = ViewerConfig::load_or_default(&ViewerConfig::default_path());

    // RUST_LOG wins over the config file
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    if let Some(warning) = warning {
        tracing::warn!("{}", warning);
    }
    tracing::info!(dataset = %config.dataset_path.display(), "starting pheno-plot");

    // Held until the window closes
    let _profiler = perf::start_profiler();

    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "植物物候 - Phenology Viewer",
        options,
        Box::new(move |cc| Ok(Box::new(PhenoPlot::new(cc, &config)))),
    )
}
