use super::Rgb;
use crate::gamma::gamma8;

/// Coldest temperature [`kelvin_to_rgb`] converts
pub const KELVIN_MIN: u32 = 1_000;
/// Hottest temperature [`kelvin_to_rgb`] converts
pub const KELVIN_MAX: u32 = 40_000;

/// Returned for temperatures outside `KELVIN_MIN..=KELVIN_MAX`
///
/// Deliberately not a plausible white, so a bad input is visible.
pub const KELVIN_FALLBACK: Rgb = Rgb { r: 0, g: 255, b: 0 };

/// Convert a black body temperature to a gamma corrected RGB color
///
/// Curve fit in steps of 100 K. Out of range temperatures yield
/// [`KELVIN_FALLBACK`].
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]
pub fn kelvin_to_rgb(kelvin: u32) -> Rgb {
    if !(KELVIN_MIN..=KELVIN_MAX).contains(&kelvin) {
        return KELVIN_FALLBACK;
    }

    let temp = (kelvin / 100) as f32;

    let (red, green, blue) = if temp <= 66.0 {
        let green = 99.470_8 * libm::logf(temp) - 161.119_57;
        let blue = if temp <= 19.0 {
            0.0
        } else {
            138.517_73 * libm::logf(temp - 10.0) - 305.044_8
        };
        (255.0, green, blue)
    } else {
        let red = 329.698_73 * libm::powf(temp - 60.0, -0.133_204_76);
        let green = 288.122_17 * libm::powf(temp - 60.0, -0.075_514_85);
        (red, green, 255.0)
    };

    let component = |value: f32| gamma8(value.clamp(0.0, 255.0) as u8);

    Rgb {
        r: component(red),
        g: component(green),
        b: component(blue),
    }
}
