use crate::types::{Channel, ChannelValue};

/// The three independently owned channel values of one screen.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ChannelStore {
    values: [ChannelValue; 3],
}

impl ChannelStore {
    pub fn new(red: ChannelValue, green: ChannelValue, blue: ChannelValue) -> Self {
        Self {
            values: [red, green, blue],
        }
    }

    pub fn get(&self, channel: Channel) -> ChannelValue {
        self.values[channel.index()]
    }

    pub fn set(&mut self, channel: Channel, value: ChannelValue) {
        self.values[channel.index()] = value;
    }

    /// Slider path only; text input goes through validation instead.
    pub fn set_clamped(&mut self, channel: Channel, value: f64) -> ChannelValue {
        let value = ChannelValue::clamped(value);
        self.set(channel, value);
        value
    }

    pub fn rgb(&self) -> (f64, f64, f64) {
        let [r, g, b] = self.values;
        (r.get(), g.get(), b.get())
    }
}
