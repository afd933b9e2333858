//! Channel addressed pixel output
//!
//! The strips are not simultaneously addressable: the transport is pointed
//! at one channel, written, then pointed at the next.

#[cfg(feature = "esp32-log")]
use esp_println::println;
use smart_leds::SmartLedsWrite;

use crate::color::Rgb;

/// Abstract channel-addressed LED driver
///
/// Implement this trait to support different transports. The control loop
/// is generic over it.
pub trait ChannelOutput {
    /// Push `colors` to `channel`, scaled by `brightness` (0-255)
    fn write_channel(&mut self, channel: usize, colors: &[Rgb], brightness: u8);
}

/// [`ChannelOutput`] over a single `smart-leds` transport
///
/// `select` reconfigures the transport for a channel (chip select, pin
/// mux, clock line) before each write. Transport errors are counted and
/// otherwise ignored; the next tick simply writes again.
pub struct SmartLedsOutput<W, S> {
    writer: W,
    select: S,
    failed_writes: u32,
}

impl<W, S> SmartLedsOutput<W, S>
where
    W: SmartLedsWrite<Color = Rgb>,
    S: FnMut(&mut W, usize),
{
    pub const fn new(writer: W, select: S) -> Self {
        Self {
            writer,
            select,
            failed_writes: 0,
        }
    }

    /// Number of writes the transport rejected so far
    pub const fn failed_writes(&self) -> u32 {
        self.failed_writes
    }

    pub const fn writer(&self) -> &W {
        &self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W, S> ChannelOutput for SmartLedsOutput<W, S>
where
    W: SmartLedsWrite<Color = Rgb>,
    S: FnMut(&mut W, usize),
{
    fn write_channel(&mut self, channel: usize, colors: &[Rgb], brightness: u8) {
        (self.select)(&mut self.writer, channel);

        let scaled = smart_leds::brightness(colors.iter().copied(), brightness);
        if self.writer.write(scaled).is_err() {
            self.failed_writes = self.failed_writes.wrapping_add(1);
            #[cfg(feature = "esp32-log")]
            println!(
                "[SmartLedsOutput.write_channel] transport rejected channel {}",
                channel
            );
        }
    }
}
