mod app;
mod color;
mod config;
mod data;
mod state;
mod ui;

use std::path::PathBuf;

use app::FmeaViewerApp;
use config::Config;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = match Config::load_or_default(config_path.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            log::error!("{e:#}");
            eprintln!("Error: {e:#}");
            std::process::exit(1);
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "FMEA Online – PDCA Viewer",
        options,
        Box::new(move |_cc| Ok(Box::new(FmeaViewerApp::new(config)))),
    )
}
