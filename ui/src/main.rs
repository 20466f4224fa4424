#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use qrdesk_ui::state::AppState;

mod alloc {
    #[global_allocator]
    static MALLOC: mimalloc::MiMalloc = mimalloc::MiMalloc;
}

fn main() -> eframe::Result {
    // Log to stderr (if you run with `RUST_LOG=debug`).
    // Filter out egui_winit clipboard errors - they occur when clipboard content
    // is not in a supported text format (e.g., when copying images from browser)
    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_module("egui_winit::clipboard", log::LevelFilter::Off)
        .init();

    let native_options = eframe::NativeOptions {
        hardware_acceleration: eframe::HardwareAcceleration::Preferred,
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([760.0, 560.0])
            .with_min_inner_size([560.0, 420.0])
            .with_icon(
                // Icon is generated at build time (a QR code of the app name)
                eframe::icon_data::from_png_bytes(include_bytes!(concat!(
                    env!("OUT_DIR"),
                    "/icon.png"
                )))
                .expect("Failed to load icon"),
            ),
        ..Default::default()
    };

    eframe::run_native(
        "QR Desk",
        native_options,
        Box::new(|_cc| {
            let state = AppState::default();
            let app = qrdesk_ui::QrDeskApp::new(state);
            Ok(Box::new(app))
        }),
    )
}
