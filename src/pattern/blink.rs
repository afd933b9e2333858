//! Whole-strip blink patterns
//!
//! Both patterns flip their on/off state once per tick, on channel 0, and
//! paint the entire shared buffer there. Later channels replay it.

use super::{ChannelInfo, Levels, Pattern};
use crate::color::{BLACK, Rgb, WHITE};

const RGB_CYCLE: [Rgb; 3] = [
    Rgb { r: 255, g: 0, b: 0 },
    Rgb { r: 0, g: 255, b: 0 },
    Rgb { r: 0, g: 0, b: 255 },
];

/// White / black blinker
#[derive(Debug, Clone, Default)]
pub struct BlinkPattern {
    on: bool,
}

impl BlinkPattern {
    pub const fn new() -> Self {
        Self { on: false }
    }

    pub const fn is_on(&self) -> bool {
        self.on
    }
}

impl Pattern for BlinkPattern {
    const WARM_START: bool = true;

    fn update_channel(&mut self, frame: &mut [Rgb], channel: ChannelInfo, _levels: Levels) {
        if channel.index != 0 {
            return;
        }

        self.on = !self.on;
        frame.fill(if self.on { WHITE } else { BLACK });
    }
}

/// Blinker that steps red -> green -> blue on every "on" phase
#[derive(Debug, Clone)]
pub struct RgbBlinkPattern {
    on: bool,
    color: usize,
}

impl RgbBlinkPattern {
    pub const fn new() -> Self {
        Self {
            on: false,
            color: RGB_CYCLE.len() - 1,
        }
    }

    /// Color used for the current (or next) "on" phase
    pub const fn color(&self) -> Rgb {
        RGB_CYCLE[self.color]
    }
}

impl Default for RgbBlinkPattern {
    fn default() -> Self {
        Self::new()
    }
}

impl Pattern for RgbBlinkPattern {
    const WARM_START: bool = true;

    fn update_channel(&mut self, frame: &mut [Rgb], channel: ChannelInfo, _levels: Levels) {
        if channel.index != 0 {
            return;
        }

        self.on = !self.on;
        if self.on {
            self.color = (self.color + 1) % RGB_CYCLE.len();
        }

        frame.fill(if self.on { self.color() } else { BLACK });
    }
}
