//! Single buffer, multi channel rendering
//!
//! Memory only allows one frame buffer, so every channel is rendered into
//! the same buffer and transmitted before the next channel is rendered.
//! See the [`pattern`](crate::pattern) module for the contract patterns
//! rely on.

use crate::color::Rgb;
use crate::error::Error;
use crate::output::ChannelOutput;
use crate::pattern::{ChannelInfo, Levels, MAX_BRIGHTNESS, PatternSlot};

/// Map a brightness level (`0..MAX_BRIGHTNESS`) to the transport's 8-bit
/// brightness
#[allow(clippy::cast_possible_truncation)]
pub fn brightness8(level: u16) -> u8 {
    let level = u32::from(level.min(MAX_BRIGHTNESS - 1));
    (level * 256 / u32::from(MAX_BRIGHTNESS)) as u8
}

/// Owner of the shared frame buffer and the fixed channel layout
///
/// `MAX_LEDS` is the buffer capacity, `CHANNELS` the number of outputs.
pub struct ChannelRenderer<const MAX_LEDS: usize, const CHANNELS: usize> {
    frame_buffer: [Rgb; MAX_LEDS],
    channels: [usize; CHANNELS],
}

impl<const MAX_LEDS: usize, const CHANNELS: usize> ChannelRenderer<MAX_LEDS, CHANNELS> {
    /// Create a renderer for channels with the given pixel counts
    ///
    /// Channel `i` is rendered `i`-th on every tick.
    pub fn new(channels: [usize; CHANNELS]) -> Result<Self, Error> {
        if CHANNELS == 0 {
            return Err(Error::NoChannels);
        }
        if let Some((channel, &pixels)) = channels
            .iter()
            .enumerate()
            .find(|(_, pixels)| **pixels > MAX_LEDS)
        {
            return Err(Error::ChannelTooLong {
                channel,
                pixels,
                capacity: MAX_LEDS,
            });
        }

        Ok(Self {
            frame_buffer: [Rgb::default(); MAX_LEDS],
            channels,
        })
    }

    /// Pixel count of every channel, in render order
    pub const fn channels(&self) -> &[usize; CHANNELS] {
        &self.channels
    }

    /// Contents of the shared buffer
    ///
    /// Between ticks this is whatever the last channel's render left.
    pub fn frame(&self) -> &[Rgb] {
        &self.frame_buffer
    }

    /// Render and transmit every channel for one tick
    ///
    /// Channels are visited in ascending order. Each one is rendered into
    /// the shared buffer and written out before the next one starts.
    pub fn render<O: ChannelOutput>(
        &mut self,
        pattern: &mut PatternSlot,
        levels: Levels,
        output: &mut O,
    ) {
        let brightness = brightness8(levels.brightness);

        for (index, &pixels) in self.channels.iter().enumerate() {
            let channel = ChannelInfo { index, pixels };
            pattern.update_channel(&mut self.frame_buffer, channel, levels);
            output.write_channel(index, &self.frame_buffer[..pixels], brightness);
        }
    }
}
