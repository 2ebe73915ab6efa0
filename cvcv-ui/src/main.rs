mod app;
mod state;
mod theme;
mod worker;

use app::CvcvApp;
use eframe::egui;

/// Application entry point.
fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([980.0, 720.0])
            .with_min_inner_size([860.0, 640.0])
            .with_resizable(true),
        ..Default::default()
    };

    eframe::run_native(
        "CVCV Name Generator",
        options,
        Box::new(|cc| Ok(Box::new(CvcvApp::new(cc)))),
    )
}
