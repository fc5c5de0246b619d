mod app;
mod channel_input;
mod swatch;

pub use app::App;
