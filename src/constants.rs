pub const CHANNEL_MIN: f64 = 0.0;
pub const CHANNEL_MAX: f64 = 255.0;

pub const GUI_WINDOW_WIDTH: f32 = 360.0;
pub const GUI_WINDOW_HEIGHT: f32 = 520.0;
pub const GUI_PADDING: f32 = 16.0;
pub const GUI_ROW_SPACING: f32 = 40.0;

pub const GUI_SWATCH_HEIGHT: f32 = 150.0;
pub const GUI_SWATCH_CORNER_RADIUS: f32 = 15.0;
pub const GUI_SWATCH_STROKE_WIDTH: f32 = 5.0;

pub const GUI_VALUE_LABEL_WIDTH: f32 = 40.0;
pub const GUI_TEXT_INPUT_WIDTH: f32 = 50.0;

pub const GUI_BACKGROUND_GRAY: u8 = 178;

pub const INVALID_INPUT_TITLE: &str = "Invalid color value";
pub const INVALID_INPUT_MESSAGE: &str = "Please enter a value from 0 to 255";
