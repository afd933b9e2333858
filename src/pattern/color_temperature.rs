//! Solid white whose color temperature follows the speed knob

use super::{ChannelInfo, Levels, MAX_SPEED, Pattern};
use crate::color::{Rgb, kelvin_to_rgb};

/// Coldest temperature the knob reaches
const BASE_KELVIN: u32 = 1_000;
/// Kelvin per speed step, full range ends a little above 9000 K
const KELVIN_PER_STEP: u32 = 8;

#[derive(Debug, Clone, Default)]
pub struct ColorTemperaturePattern;

impl ColorTemperaturePattern {
    /// Temperature selected by a speed level
    pub fn kelvin_for(speed: u16) -> u32 {
        KELVIN_PER_STEP * u32::from(speed.min(MAX_SPEED - 1)) + BASE_KELVIN
    }
}

impl Pattern for ColorTemperaturePattern {
    const WARM_START: bool = true;

    fn update_channel(&mut self, frame: &mut [Rgb], channel: ChannelInfo, levels: Levels) {
        if channel.index != 0 {
            return;
        }
        frame.fill(kelvin_to_rgb(Self::kelvin_for(levels.speed)));
    }
}
