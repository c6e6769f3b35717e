mod app;
mod chart;
mod color;
mod config;
mod data;
mod dispatch;
mod state;
mod ui;

use anyhow::Context;
use app::SunspotApp;
use clap::Parser;
use eframe::egui;

use config::Cli;
use data::loader;
use state::AppState;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    // The dashboard never starts on data it cannot parse.
    let table = loader::load_file(&cli.data, &cli.load_options())
        .with_context(|| format!("loading sunspot data from {}", cli.data.display()))
        .inspect_err(|e| log::error!("{e:#}"))?;

    match table.year_range() {
        Some(range) => log::info!("Year domain {range}"),
        None => log::warn!("{} holds no observations", cli.data.display()),
    }

    let state = AppState::new(table, cli.data.display().to_string(), cli.sun_image.clone());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 900.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Historical Sunspot Activity",
        options,
        Box::new(|cc| {
            // Install image loaders so egui can fetch and decode the sun image.
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(SunspotApp::new(state)))
        }),
    )
    .map_err(|e| anyhow::anyhow!("running dashboard: {e}"))
}
