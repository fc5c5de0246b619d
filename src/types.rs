use crate::constants::*;
use crate::error::InvalidChannelInput;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    #[inline(always)]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Unknown indices map to `None`, so a stale focus reference reads as "no focus".
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn next(self) -> Self {
        Self::from_index(self.index() + 1).unwrap_or(Channel::Blue)
    }

    pub fn previous(self) -> Self {
        self.index()
            .checked_sub(1)
            .and_then(Self::from_index)
            .unwrap_or(Channel::Red)
    }

    pub fn is_first(self) -> bool {
        self == Channel::Red
    }

    pub fn is_last(self) -> bool {
        self == Channel::Blue
    }

    pub fn label(self) -> &'static str {
        match self {
            Channel::Red => "Red",
            Channel::Green => "Green",
            Channel::Blue => "Blue",
        }
    }
}

/// A channel intensity, always within `[0, 255]`.
///
/// Values are stored unrounded: text such as `"12.5"` is kept as given and
/// only the display form rounds.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct ChannelValue(f64);

impl ChannelValue {
    pub const ZERO: ChannelValue = ChannelValue(CHANNEL_MIN);

    /// Trusted path (slider drag, configuration). Out of range input is pulled
    /// back into bounds.
    pub fn clamped(value: f64) -> Self {
        if value.is_nan() {
            return Self::ZERO;
        }
        Self(value.clamp(CHANNEL_MIN, CHANNEL_MAX))
    }

    /// Free-text path. Never clamps.
    pub fn try_new(value: f64) -> Result<Self, InvalidChannelInput> {
        if (CHANNEL_MIN..=CHANNEL_MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(InvalidChannelInput::OutOfRange(value))
        }
    }

    #[inline(always)]
    pub fn get(self) -> f64 {
        self.0
    }

    /// Rounded half away from zero.
    pub fn rounded(self) -> u8 {
        self.0.round() as u8
    }
}
