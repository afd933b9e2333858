//! Potentiometer bin filter with hysteresis
//!
//! Splits the ADC range into equal bins and only moves to a new bin once
//! the reading is clearly inside it. A reading that hovers on a boundary
//! keeps reporting the old bin.

use crate::error::Error;

/// Configuration for a [`HysteresisSampler`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SamplerConfig {
    /// Resolution of the ADC
    pub adc_bits: u8,
    /// Number of bits kept from a reading to form the bin index
    pub log_bin_size: u8,
    /// Code points a reading must clear past a bin edge before it counts
    pub hysteresis: u16,
}

impl SamplerConfig {
    pub const fn new(adc_bits: u8, log_bin_size: u8, hysteresis: u16) -> Self {
        Self {
            adc_bits,
            log_bin_size,
            hysteresis,
        }
    }

    /// Right shift turning a reading into a bin index
    pub const fn shift(&self) -> u8 {
        self.adc_bits - self.log_bin_size
    }

    /// Width of one bin in code points
    pub const fn bin_width(&self) -> u32 {
        1 << self.shift()
    }

    /// Largest reading the ADC can produce
    #[allow(clippy::cast_possible_truncation)]
    pub const fn max_reading(&self) -> u16 {
        ((1u32 << self.adc_bits) - 1) as u16
    }

    /// Number of distinct bins
    pub const fn bin_count(&self) -> u32 {
        1 << self.log_bin_size
    }

    fn validate(&self) -> Result<(), Error> {
        if self.adc_bits > 16 || self.log_bin_size == 0 || self.log_bin_size > self.adc_bits {
            return Err(Error::InvalidSamplerConfig {
                adc_bits: self.adc_bits,
                log_bin_size: self.log_bin_size,
            });
        }
        Ok(())
    }
}

impl Default for SamplerConfig {
    /// 10-bit ADC, 32 bins, 8 code points of hysteresis
    fn default() -> Self {
        Self::new(10, 5, 8)
    }
}

/// Outcome of feeding one reading to the sampler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sample {
    /// The sampler settled on a new bin (or was just initialized)
    Changed(u16),
    /// The reported bin is the same as before
    Unchanged,
}

impl Sample {
    pub const fn changed(self) -> Option<u16> {
        match self {
            Self::Changed(bin) => Some(bin),
            Self::Unchanged => None,
        }
    }
}

/// Noise rejecting quantizer for a single analog input
#[derive(Debug, Clone)]
pub struct HysteresisSampler {
    config: SamplerConfig,
    current_bin: Option<u16>,
}

impl HysteresisSampler {
    /// Create an uninitialized sampler
    pub fn new(config: SamplerConfig) -> Result<Self, Error> {
        config.validate()?;
        Ok(Self {
            config,
            current_bin: None,
        })
    }

    pub const fn config(&self) -> &SamplerConfig {
        &self.config
    }

    /// Bin the sampler currently reports, `None` before the first reading
    pub const fn current_bin(&self) -> Option<u16> {
        self.current_bin
    }

    /// Lowest code point of the current bin
    pub fn level(&self) -> Option<u16> {
        self.current_bin.map(|bin| bin << self.config.shift())
    }

    /// Feed a raw reading
    ///
    /// Readings above the ADC range are clamped to its top.
    #[allow(clippy::cast_possible_wrap)]
    pub fn sample(&mut self, reading: u16) -> Sample {
        let reading = reading.min(self.config.max_reading());
        let raw_bin = reading >> self.config.shift();

        let Some(current) = self.current_bin else {
            self.current_bin = Some(raw_bin);
            return Sample::Changed(raw_bin);
        };

        if raw_bin == current {
            return Sample::Unchanged;
        }

        let bin_start = i32::from(current) << self.config.shift();
        let bin_end = bin_start + self.config.bin_width() as i32 - 1;
        let margin = i32::from(self.config.hysteresis);
        let reading = i32::from(reading);

        if reading < bin_start - margin || reading > bin_end + margin {
            self.current_bin = Some(raw_bin);
            return Sample::Changed(raw_bin);
        }

        Sample::Unchanged
    }
}
