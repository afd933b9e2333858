//! Solid color picked from the color wheel by the speed knob

use super::{ChannelInfo, Levels, MAX_SPEED, Pattern};
use crate::color::{Rgb, wheel};

#[derive(Debug, Clone, Default)]
pub struct SingleColorPattern;

impl SingleColorPattern {
    /// Wheel color for a speed level
    pub fn color_for(speed: u16) -> Rgb {
        let position = speed.min(MAX_SPEED - 1) / (MAX_SPEED / 256);
        wheel(u8::try_from(position).unwrap_or(u8::MAX))
    }
}

impl Pattern for SingleColorPattern {
    const WARM_START: bool = true;

    fn update_channel(&mut self, frame: &mut [Rgb], channel: ChannelInfo, levels: Levels) {
        if channel.index != 0 {
            return;
        }
        frame.fill(Self::color_for(levels.speed));
    }
}
