use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use rand::Rng;
use crate::constants::*;
use crate::error::ConfigError;
use crate::store::ChannelStore;
use crate::types::ChannelValue;

/// Which optional behaviors a mixer screen enables.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MixerConfig {
    pub initial: InitialValues,
    pub keyboard_accessory: bool,
    pub focus_navigation: bool,
    pub input_mode: InputMode,
    pub invalid_input: InvalidInputPolicy,
    pub trim_whitespace: bool,
    pub slider_step: f64,
}

impl Default for MixerConfig {
    fn default() -> Self {
        Self {
            initial: InitialValues::Random,
            keyboard_accessory: true,
            focus_navigation: true,
            input_mode: InputMode::ValidateOnCommit,
            invalid_input: InvalidInputPolicy::ResetToZero,
            trim_whitespace: false,
            slider_step: 1.0,
        }
    }
}

impl MixerConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum InitialValues {
    Random,
    Fixed { red: f64, green: f64, blue: f64 },
}

impl InitialValues {
    pub fn seed<R: Rng>(&self, rng: &mut R) -> ChannelStore {
        match *self {
            InitialValues::Random => {
                let mut roll = || ChannelValue::clamped(rng.gen_range(CHANNEL_MIN..=CHANNEL_MAX));
                ChannelStore::new(roll(), roll(), roll())
            }
            InitialValues::Fixed { red, green, blue } => ChannelStore::new(
                ChannelValue::clamped(red),
                ChannelValue::clamped(green),
                ChannelValue::clamped(blue),
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputMode {
    /// Text only reaches the value when committed, and bad text raises an alert.
    ValidateOnCommit,
    /// Every parseable keystroke updates the value, clamped into range.
    LiveClamp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvalidInputPolicy {
    ResetToZero,
    RestoreLastValid,
}
