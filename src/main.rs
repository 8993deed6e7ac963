mod app;
mod color;
mod data;
mod state;
mod ui;

use anyhow::{Context, Result};
use app::AlamoEatsApp;
use eframe::egui;

fn main() -> Result<()> {
    env_logger::init();

    let catalog = data::builtin::san_antonio().context("built-in catalog failed validation")?;
    log::info!(
        "catalog ready: {} places across {} neighborhoods",
        catalog.len(),
        data::filter::neighborhood_set(&catalog).len()
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([700.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "San Antonio Restaurants",
        options,
        Box::new(move |cc| {
            // Install image loaders so egui can render the embedded photos.
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(AlamoEatsApp::new(catalog)))
        }),
    )
    .map_err(|e| anyhow::anyhow!("failed to start the UI: {e}"))
}
