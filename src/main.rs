#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([520.0, 660.0])
            .with_min_inner_size([480.0, 620.0]),
        ..Default::default()
    };
    eframe::run_native(
        "On the Line?",
        native_options,
        Box::new(|cc| Ok(Box::new(on_the_line::QuizApp::new(cc)))),
    )
}
