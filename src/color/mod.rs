mod kelvin;
mod wheel;

use smart_leds::{RGB8, hsv::Hsv as HSV};

pub use kelvin::{KELVIN_FALLBACK, KELVIN_MAX, KELVIN_MIN, kelvin_to_rgb};
pub use smart_leds::hsv::hsv2rgb;
pub use wheel::wheel;

pub type Rgb = RGB8;
pub type Hsv = HSV;

pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
pub const WHITE: Rgb = Rgb {
    r: 255,
    g: 255,
    b: 255,
};
