use super::Rgb;

/// Position on a red -> green -> blue -> red color wheel
///
/// `0` and `255` are both pure red.
pub const fn wheel(position: u8) -> Rgb {
    let pos = 255 - position;
    if pos < 85 {
        return Rgb {
            r: 255 - pos * 3,
            g: 0,
            b: pos * 3,
        };
    }
    if pos < 170 {
        let pos = pos - 85;
        return Rgb {
            r: 0,
            g: pos * 3,
            b: 255 - pos * 3,
        };
    }
    let pos = pos - 170;
    Rgb {
        r: pos * 3,
        g: 255 - pos * 3,
        b: 0,
    }
}
