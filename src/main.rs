//! Marketing Deck - Slide-deck Marketing Report Viewer
//!
//! Usage: `marketing_deck [deck.json]`. Without an argument the embedded deck
//! is shown.

use anyhow::Context;
use eframe::egui;
use marketing_deck::config::DeckConfig;
use marketing_deck::gui::DeckApp;
use marketing_deck::telemetry;
use std::path::PathBuf;
use tracing::info;

fn main() -> anyhow::Result<()> {
    telemetry::init_tracing();

    let config_path = std::env::args_os().nth(1).map(PathBuf::from);
    let config = DeckConfig::load(config_path.as_deref()).context("failed to load deck config")?;
    info!(title = %config.title, pages = config.pages.len(), "starting deck");

    let title = config.title.clone();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_min_inner_size([800.0, 600.0])
            .with_title(&title),
        ..Default::default()
    };

    eframe::run_native(
        &title,
        options,
        Box::new(|cc| Ok(Box::new(DeckApp::new(cc, config)))),
    )
    .map_err(|e| anyhow::anyhow!("eframe error: {e}"))
}
