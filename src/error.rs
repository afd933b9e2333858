use core::fmt;

/// Startup configuration errors
///
/// Everything past construction is infallible: inputs are clamped and
/// indices are reduced modulo their range, so these only surface while the
/// firmware is wiring itself together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A rotary encoder is already bound to the quadrature interrupts
    EncoderClaimed,
    /// The encoder index modulus must be at least one
    ZeroModulus,
    /// A channel declares more pixels than the shared buffer holds
    ChannelTooLong {
        channel: usize,
        pixels: usize,
        capacity: usize,
    },
    /// The renderer needs at least one output channel
    NoChannels,
    /// The control loop needs at least one pattern
    NoPatterns,
    /// More patterns than the pattern set can hold
    TooManyPatterns { count: usize, capacity: usize },
    /// Sampler bit widths are inconsistent (`log_bin_size` zero or above
    /// `adc_bits`, or `adc_bits > 16`)
    InvalidSamplerConfig { adc_bits: u8, log_bin_size: u8 },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EncoderClaimed => f.write_str("rotary encoder interrupts are already claimed"),
            Self::ZeroModulus => f.write_str("encoder index modulus must be non-zero"),
            Self::ChannelTooLong {
                channel,
                pixels,
                capacity,
            } => write!(
                f,
                "channel {channel} has {pixels} pixels, buffer holds {capacity}"
            ),
            Self::NoChannels => f.write_str("at least one output channel is required"),
            Self::NoPatterns => f.write_str("at least one pattern is required"),
            Self::TooManyPatterns { count, capacity } => {
                write!(f, "{count} patterns requested, capacity is {capacity}")
            }
            Self::InvalidSamplerConfig {
                adc_bits,
                log_bin_size,
            } => write!(
                f,
                "invalid sampler config: adc_bits={adc_bits}, log_bin_size={log_bin_size}"
            ),
        }
    }
}

impl core::error::Error for Error {}
