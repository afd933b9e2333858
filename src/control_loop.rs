//! The cooperative main loop
//!
//! One tick samples the controls, picks the pattern selected by the rotary
//! encoder, renders every channel and then idles until the speed dependent
//! tick interval is over. There is no catch-up: a tick that overruns its
//! interval is followed immediately by the next one.

use embassy_time::{Duration, Instant};
#[cfg(feature = "esp32-log")]
use esp_println::println;
use heapless::Vec;

use crate::analog::{AnalogControl, AnalogInput};
use crate::encoder::PositionSource;
use crate::error::Error;
use crate::output::ChannelOutput;
use crate::pattern::{Levels, MAX_BRIGHTNESS, MAX_SPEED, PatternId, PatternSlot};
use crate::renderer::ChannelRenderer;

/// Maximum number of patterns the selector can cycle through
pub const MAX_PATTERNS: usize = 8;

/// Tick interval at the lowest speed settings
pub const DEFAULT_BASE_INTERVAL: Duration = Duration::from_millis(500);

/// The patterns enumerated at startup, in selector order
pub type PatternSet = Vec<PatternSlot, MAX_PATTERNS>;

/// Tick pacing configuration
#[derive(Debug, Clone, Copy)]
pub struct PacingConfig {
    /// Interval used while the speed divisor is one
    pub base_interval: Duration,
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            base_interval: DEFAULT_BASE_INTERVAL,
        }
    }
}

impl PacingConfig {
    /// Target tick interval for a speed level
    ///
    /// The base interval is divided by `log2(speed)`. Speeds of zero and
    /// one have no usable logarithm and divide by one.
    pub fn interval_for(&self, speed: u16) -> Duration {
        let divisor = speed.checked_ilog2().unwrap_or(0).max(1);
        self.base_interval / divisor
    }
}

/// Time left to idle after a tick that took `elapsed`
///
/// `None` when the tick used up its whole interval.
pub fn remaining(elapsed: Duration, interval: Duration) -> Option<Duration> {
    interval
        .checked_sub(elapsed)
        .filter(|rest| rest.as_ticks() > 0)
}

/// What a tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickReport {
    /// Index of the rendered pattern in the pattern set
    pub pattern: usize,
    /// Levels handed to the pattern
    pub levels: Levels,
    /// Target interval until the next tick
    pub interval: Duration,
}

/// The rotary selector and both potentiometers
pub struct Controls<E, A> {
    pub selector: E,
    pub brightness: AnalogControl<A>,
    pub speed: AnalogControl<A>,
}

/// Main loop: controls in, pixels out
pub struct ControlLoop<E, A, O, const MAX_LEDS: usize, const CHANNELS: usize> {
    controls: Controls<E, A>,
    output: O,
    renderer: ChannelRenderer<MAX_LEDS, CHANNELS>,
    patterns: PatternSet,
    pacing: PacingConfig,
    active: Option<usize>,
}

impl<E, A, O, const MAX_LEDS: usize, const CHANNELS: usize> ControlLoop<E, A, O, MAX_LEDS, CHANNELS>
where
    E: PositionSource,
    A: AnalogInput,
    O: ChannelOutput,
{
    /// Create the loop with the patterns the selector cycles through
    pub fn new(
        controls: Controls<E, A>,
        output: O,
        renderer: ChannelRenderer<MAX_LEDS, CHANNELS>,
        patterns: &[PatternId],
        pacing: PacingConfig,
    ) -> Result<Self, Error> {
        if patterns.is_empty() {
            return Err(Error::NoPatterns);
        }
        let mut set = PatternSet::new();
        for id in patterns {
            set.push(id.to_slot()).map_err(|_| Error::TooManyPatterns {
                count: patterns.len(),
                capacity: MAX_PATTERNS,
            })?;
        }

        Ok(Self {
            controls,
            output,
            renderer,
            patterns: set,
            pacing,
            active: None,
        })
    }

    /// Run forever, idling between ticks
    pub fn run(&mut self) -> ! {
        loop {
            let started = Instant::now();
            let report = self.tick();
            if let Some(rest) = remaining(started.elapsed(), report.interval) {
                embassy_time::block_for(rest);
            }
        }
    }

    /// Sample, select, render and transmit once
    pub fn tick(&mut self) -> TickReport {
        let levels = self.sample_levels();
        let pattern = self.select_pattern();

        self.renderer
            .render(&mut self.patterns[pattern], levels, &mut self.output);

        TickReport {
            pattern,
            levels,
            interval: self.pacing.interval_for(levels.speed),
        }
    }

    /// Index of the pattern rendered by the last tick
    pub const fn active_pattern(&self) -> Option<usize> {
        self.active
    }

    pub fn patterns(&self) -> &[PatternSlot] {
        &self.patterns
    }

    pub const fn output(&self) -> &O {
        &self.output
    }

    pub const fn renderer(&self) -> &ChannelRenderer<MAX_LEDS, CHANNELS> {
        &self.renderer
    }

    pub const fn controls(&self) -> &Controls<E, A> {
        &self.controls
    }

    fn sample_levels(&mut self) -> Levels {
        let brightness = self.controls.brightness.sample();
        let speed = self.controls.speed.sample();
        Levels {
            brightness: to_domain(brightness, self.controls.brightness.max_level(), MAX_BRIGHTNESS),
            speed: to_domain(speed, self.controls.speed.max_level(), MAX_SPEED),
        }
    }

    fn select_pattern(&mut self) -> usize {
        let position = usize::from(self.controls.selector.snapshot_position());
        let pattern = position % self.patterns.len();

        if self.active != Some(pattern) {
            #[cfg(feature = "esp32-log")]
            println!(
                "[ControlLoop.select_pattern] switching to {} ({})",
                pattern,
                self.patterns[pattern].id().as_str()
            );
            self.active = Some(pattern);
        }

        pattern
    }
}

/// Rescale a level in `0..=max_level` to `0..domain`
#[allow(clippy::cast_possible_truncation)]
fn to_domain(level: u16, max_level: u16, domain: u16) -> u16 {
    let level = u32::from(level.min(max_level));
    (level * u32::from(domain) / (u32::from(max_level) + 1)) as u16
}
