//! Analog control inputs
//!
//! Brightness and speed come from potentiometers read through the ADC.
//! Each control is either filtered through a [`HysteresisSampler`] or used
//! raw, and always reports a level in the ADC's code point range.

mod hysteresis;

#[cfg(feature = "esp32-log")]
use esp_println::println;

pub use hysteresis::{HysteresisSampler, Sample, SamplerConfig};

use crate::error::Error;

/// One ADC channel
pub trait AnalogInput {
    /// Take a reading; values above the configured ADC range are clamped
    fn read(&mut self) -> u16;
}

/// A potentiometer and its optional noise filter
#[derive(Debug, Clone)]
pub struct AnalogControl<A> {
    input: A,
    filter: Option<HysteresisSampler>,
    config: SamplerConfig,
    level: u16,
}

impl<A: AnalogInput> AnalogControl<A> {
    /// Control whose readings pass through a hysteresis filter
    pub fn filtered(input: A, config: SamplerConfig) -> Result<Self, Error> {
        Ok(Self {
            input,
            filter: Some(HysteresisSampler::new(config)?),
            config,
            level: 0,
        })
    }

    /// Control whose readings are used as-is
    ///
    /// Only `config.adc_bits` is relevant here.
    pub fn raw(input: A, config: SamplerConfig) -> Result<Self, Error> {
        // Validated through a throwaway sampler so both variants accept the
        // same configurations.
        HysteresisSampler::new(config)?;
        Ok(Self {
            input,
            filter: None,
            config,
            level: 0,
        })
    }

    pub const fn is_filtered(&self) -> bool {
        self.filter.is_some()
    }

    /// Level reported by the last [`sample`](Self::sample)
    pub const fn level(&self) -> u16 {
        self.level
    }

    /// Largest level this control reports
    pub const fn max_level(&self) -> u16 {
        self.config.max_reading()
    }

    /// Read the input and return the control's level
    ///
    /// A filtered control reports its bin spread over the full range, so
    /// the lowest bin is 0 and the highest bin is the ADC maximum.
    pub fn sample(&mut self) -> u16 {
        let reading = self.input.read().min(self.config.max_reading());

        let Some(filter) = self.filter.as_mut() else {
            self.level = reading;
            return self.level;
        };

        if let Sample::Changed(bin) = filter.sample(reading) {
            self.level = bin_level(bin, &self.config);
            #[cfg(feature = "esp32-log")]
            println!(
                "[AnalogControl.sample] bin changed to {} (level {})",
                bin, self.level
            );
        }

        self.level
    }
}

#[allow(clippy::cast_possible_truncation)]
fn bin_level(bin: u16, config: &SamplerConfig) -> u16 {
    let top_bin = config.bin_count() - 1;
    (u32::from(bin) * u32::from(config.max_reading()) / top_bin) as u16
}
