//! Scrolling rainbow
//!
//! Every channel gets the full hue circle spread over its own length, so
//! strips of different sizes all show one complete rainbow. The phase moves
//! once per tick.

use super::{ChannelInfo, Levels, MAX_SPEED, Pattern};
use crate::color::{Hsv, Rgb, hsv2rgb};

/// Largest hue advance per tick, reached at full speed
const MAX_HUE_STEP: u16 = 32;

#[derive(Debug, Clone, Default)]
pub struct RainbowPattern {
    phase: u8,
}

impl RainbowPattern {
    pub const fn new() -> Self {
        Self { phase: 0 }
    }

    pub const fn phase(&self) -> u8 {
        self.phase
    }

    #[allow(clippy::cast_possible_truncation)]
    fn hue_step(speed: u16) -> u8 {
        (1 + u32::from(speed.min(MAX_SPEED - 1)) * u32::from(MAX_HUE_STEP - 1)
            / u32::from(MAX_SPEED - 1)) as u8
    }
}

impl Pattern for RainbowPattern {
    #[allow(clippy::cast_possible_truncation)]
    fn update_channel(&mut self, frame: &mut [Rgb], channel: ChannelInfo, levels: Levels) {
        if channel.index == 0 {
            self.phase = self.phase.wrapping_add(Self::hue_step(levels.speed));
        }

        let pixels = channel.pixels.min(frame.len());
        for (i, led) in frame[..pixels].iter_mut().enumerate() {
            let offset = (i * 256 / pixels) as u8;
            *led = hsv2rgb(Hsv {
                hue: self.phase.wrapping_add(offset),
                sat: 255,
                val: 255,
            });
        }
    }
}
