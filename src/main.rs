mod app;
mod composer;
mod config;
mod constants;
mod error;
mod focus;
mod parse_input;
mod state;
mod store;
mod text_input;
mod types;

use constants::*;
use eframe::{NativeOptions, Result, run_native};
use eframe::egui::{Vec2, ViewportBuilder};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use app::App;
use config::MixerConfig;

fn main() -> Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Optional JSON config as the first argument.
    let config = match std::env::args().nth(1) {
        Some(path) => MixerConfig::load(&path).unwrap_or_else(|e| {
            warn!(%path, "{e}, using default config");
            MixerConfig::default()
        }),
        None => MixerConfig::default(),
    };
    info!(?config, "starting color mixer");

    let title = "Color Mixer";

    let options = NativeOptions {
        viewport: ViewportBuilder {
            inner_size: Some(Vec2::new(GUI_WINDOW_WIDTH, GUI_WINDOW_HEIGHT)),
            resizable: Some(false),
            maximize_button: Some(false),
            ..Default::default()
        },
        ..Default::default()
    };

    run_native(
        title,
        options,
        Box::new(|cc| Ok(Box::new(App::new(cc, config)))),
    )
}
