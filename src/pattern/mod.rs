//! Pattern system with compile-time known variants
//!
//! All patterns live in [`PatternSlot`] so the active set can be held in a
//! fixed array without heap allocation. Each pattern implements [`Pattern`].
//!
//! # Shared buffer contract
//!
//! There is one pixel buffer for all channels. Every tick the renderer
//! calls the active pattern once per channel, strictly in ascending channel
//! order, always handing over the full shared buffer. On entry the buffer
//! holds whatever the pattern itself wrote earlier in the same tick (or
//! during the previous tick, for channel 0), never a specific channel's
//! data.
//!
//! A pattern with [`Pattern::WARM_START`] set does its work on channel 0,
//! filling the entire buffer, and leaves it untouched on later channels.
//! Other patterns recompute the channel's prefix every time. In both cases
//! `channel.index == 0` may gate once-per-tick state changes.

mod blink;
mod color_temperature;
mod rainbow;
mod single_color;

pub use blink::{BlinkPattern, RgbBlinkPattern};
pub use color_temperature::ColorTemperaturePattern;
pub use rainbow::RainbowPattern;
pub use single_color::SingleColorPattern;

use crate::color::Rgb;

/// Exclusive upper bound of brightness levels handed to patterns
pub const MAX_BRIGHTNESS: u16 = 1 << 10;
/// Exclusive upper bound of speed levels handed to patterns
pub const MAX_SPEED: u16 = 1 << 10;

const PATTERN_NAME_BLINK: &str = "blink";
const PATTERN_NAME_RGB_BLINK: &str = "rgb_blink";
const PATTERN_NAME_SINGLE_COLOR: &str = "single_color";
const PATTERN_NAME_COLOR_TEMPERATURE: &str = "color_temperature";
const PATTERN_NAME_RAINBOW: &str = "rainbow";

const PATTERN_ID_BLINK: u8 = 0;
const PATTERN_ID_RGB_BLINK: u8 = 1;
const PATTERN_ID_SINGLE_COLOR: u8 = 2;
const PATTERN_ID_COLOR_TEMPERATURE: u8 = 3;
const PATTERN_ID_RAINBOW: u8 = 4;

/// Control levels for one tick, both in `0..MAX_*`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Levels {
    pub brightness: u16,
    pub speed: u16,
}

/// The channel a pattern is being asked to fill
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelInfo {
    /// Position in the fixed channel order, starting at 0
    pub index: usize,
    /// Number of pixels that will be transmitted for this channel
    pub pixels: usize,
}

pub trait Pattern {
    /// The pattern renders everything on channel 0 and relies on ascending
    /// channel order to replay that buffer for the remaining channels.
    ///
    /// Warm-start patterns must produce the same output as if each channel
    /// were rendered on its own.
    const WARM_START: bool = false;

    /// Fill `frame` for `channel`
    ///
    /// `frame` is the whole shared buffer; only the first `channel.pixels`
    /// entries are transmitted.
    fn update_channel(&mut self, frame: &mut [Rgb], channel: ChannelInfo, levels: Levels);
}

/// Pattern slot - enum containing all possible patterns
#[derive(Debug, Clone)]
pub enum PatternSlot {
    /// White / black blink
    Blink(BlinkPattern),
    /// Red, green, blue blink
    RgbBlink(RgbBlinkPattern),
    /// Color wheel position set by speed
    SingleColor(SingleColorPattern),
    /// Color temperature set by speed
    ColorTemperature(ColorTemperaturePattern),
    /// Scrolling rainbow
    Rainbow(RainbowPattern),
}

/// Known pattern ids that can be enumerated at startup
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum PatternId {
    Blink = PATTERN_ID_BLINK,
    RgbBlink = PATTERN_ID_RGB_BLINK,
    SingleColor = PATTERN_ID_SINGLE_COLOR,
    ColorTemperature = PATTERN_ID_COLOR_TEMPERATURE,
    Rainbow = PATTERN_ID_RAINBOW,
}

impl PatternId {
    /// Every known pattern, in id order
    pub const ALL: [Self; 5] = [
        Self::Blink,
        Self::RgbBlink,
        Self::SingleColor,
        Self::ColorTemperature,
        Self::Rainbow,
    ];

    pub const fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            PATTERN_ID_BLINK => Self::Blink,
            PATTERN_ID_RGB_BLINK => Self::RgbBlink,
            PATTERN_ID_SINGLE_COLOR => Self::SingleColor,
            PATTERN_ID_COLOR_TEMPERATURE => Self::ColorTemperature,
            PATTERN_ID_RAINBOW => Self::Rainbow,
            _ => return None,
        })
    }

    pub fn to_slot(self) -> PatternSlot {
        match self {
            Self::Blink => PatternSlot::Blink(BlinkPattern::new()),
            Self::RgbBlink => PatternSlot::RgbBlink(RgbBlinkPattern::new()),
            Self::SingleColor => PatternSlot::SingleColor(SingleColorPattern),
            Self::ColorTemperature => PatternSlot::ColorTemperature(ColorTemperaturePattern),
            Self::Rainbow => PatternSlot::Rainbow(RainbowPattern::new()),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Blink => PATTERN_NAME_BLINK,
            Self::RgbBlink => PATTERN_NAME_RGB_BLINK,
            Self::SingleColor => PATTERN_NAME_SINGLE_COLOR,
            Self::ColorTemperature => PATTERN_NAME_COLOR_TEMPERATURE,
            Self::Rainbow => PATTERN_NAME_RAINBOW,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            PATTERN_NAME_BLINK => Some(Self::Blink),
            PATTERN_NAME_RGB_BLINK => Some(Self::RgbBlink),
            PATTERN_NAME_SINGLE_COLOR => Some(Self::SingleColor),
            PATTERN_NAME_COLOR_TEMPERATURE => Some(Self::ColorTemperature),
            PATTERN_NAME_RAINBOW => Some(Self::Rainbow),
            _ => None,
        }
    }
}

impl From<PatternId> for PatternSlot {
    fn from(id: PatternId) -> Self {
        id.to_slot()
    }
}

impl PatternSlot {
    /// Whether the slot's pattern replays channel 0 for later channels
    pub const fn warm_start(&self) -> bool {
        match self {
            Self::Blink(_) => BlinkPattern::WARM_START,
            Self::RgbBlink(_) => RgbBlinkPattern::WARM_START,
            Self::SingleColor(_) => SingleColorPattern::WARM_START,
            Self::ColorTemperature(_) => ColorTemperaturePattern::WARM_START,
            Self::Rainbow(_) => RainbowPattern::WARM_START,
        }
    }

    /// Fill the shared buffer for one channel
    pub fn update_channel(&mut self, frame: &mut [Rgb], channel: ChannelInfo, levels: Levels) {
        match self {
            Self::Blink(pattern) => pattern.update_channel(frame, channel, levels),
            Self::RgbBlink(pattern) => pattern.update_channel(frame, channel, levels),
            Self::SingleColor(pattern) => pattern.update_channel(frame, channel, levels),
            Self::ColorTemperature(pattern) => pattern.update_channel(frame, channel, levels),
            Self::Rainbow(pattern) => pattern.update_channel(frame, channel, levels),
        }
    }

    /// Get the pattern ID for external observation
    pub const fn id(&self) -> PatternId {
        match self {
            Self::Blink(_) => PatternId::Blink,
            Self::RgbBlink(_) => PatternId::RgbBlink,
            Self::SingleColor(_) => PatternId::SingleColor,
            Self::ColorTemperature(_) => PatternId::ColorTemperature,
            Self::Rainbow(_) => PatternId::Rainbow,
        }
    }
}
