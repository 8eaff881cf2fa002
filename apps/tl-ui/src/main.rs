#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod playback;
mod views;

use app::AnalyzerApp;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1500.0, 800.0])
            .with_title("Transformer Losses Analyzer"),
        ..Default::default()
    };

    eframe::run_native(
        "Transformer Losses Analyzer",
        options,
        Box::new(|cc| Ok(Box::new(AnalyzerApp::new(cc)))),
    )
}
