//! Native desktop build of the Kumbulink client.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() -> eframe::Result<()> {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([480.0, 860.0])
            .with_min_inner_size([360.0, 600.0])
            .with_title("Kumbulink"),
        ..Default::default()
    };

    eframe::run_native(
        "Kumbulink",
        native_options,
        Box::new(|cc| {
            // This gives us image support:
            egui_extras::install_image_loaders(&cc.egui_ctx);

            Ok(Box::new(kumbulink_ui::app::KumbulinkApp::new(cc)))
        }),
    )
}

// The browser build enters through `kumbulink_ui::start`.
#[cfg(target_arch = "wasm32")]
fn main() {}
