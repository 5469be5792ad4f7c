#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use gantt_view::app::GanttApp;

fn main() -> eframe::Result<()> {
    // Logging failure should not take the demo down with it.
    let _logger = flexi_logger::Logger::try_with_env_or_str("info")
        .ok()
        .and_then(|logger| logger.start().ok());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 720.0])
            .with_min_inner_size([800.0, 400.0])
            .with_title("Gantt View"),
        ..Default::default()
    };

    eframe::run_native(
        "Gantt View",
        options,
        Box::new(|cc| Ok(Box::new(GanttApp::new(cc)))),
    )
}
