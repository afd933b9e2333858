#![no_std]

pub mod analog;
pub mod color;
pub mod control_loop;
pub mod encoder;
pub mod error;
pub mod gamma;
pub mod output;
pub mod pattern;
pub mod renderer;

pub use analog::{AnalogControl, AnalogInput, HysteresisSampler, Sample, SamplerConfig};
pub use control_loop::{ControlLoop, Controls, PacingConfig, TickReport};
pub use encoder::{EncoderConfig, NumericDisplay, PinState, PositionSource, RotaryEncoder};
pub use error::Error;
pub use output::{ChannelOutput, SmartLedsOutput};
pub use pattern::{ChannelInfo, Levels, Pattern, PatternId, PatternSlot};
pub use renderer::ChannelRenderer;

pub use color::{Hsv, Rgb};
pub use embassy_time::{Duration, Instant};
