#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use clap::Parser;
use glassboard::{Cli, OverlayApp};

fn main() -> eframe::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_app_id("glassboard")
            .with_transparent(true)
            .with_decorations(false)
            .with_always_on_top()
            .with_fullscreen(true),
        ..Default::default()
    };

    eframe::run_native(
        "glassboard",
        native_options,
        Box::new(move |cc| Ok(Box::new(OverlayApp::new(cc, &cli)))),
    )
}
