#![allow(clippy::excessive_precision)]

use super::Rgb;

/// Temperature (in hundreds of Kelvin) where the curve switches branches
const PIVOT: f64 = 66.0;

/// Below this point (in hundreds of Kelvin) the blue channel is off
const BLUE_CUTOFF: f64 = 19.0;

#[inline]
/// Convert a Kelvin temperature to an RGB color
///
/// Uses Tanner Helland's empirical curve. Every channel is rounded and clamped,
/// so any input (including NaN and infinities) yields a valid color.
pub fn kelvin_to_rgb(kelvin: f32) -> Rgb {
    let temp = f64::from(kelvin) / 100.0;

    let (red, green, blue) = if temp <= PIVOT {
        let green = 99.470_802_586_1 * libm::log(temp) - 161.119_568_166_1;
        let blue = if temp <= BLUE_CUTOFF {
            0.0
        } else {
            138.517_731_223_1 * libm::log(temp - 10.0) - 305.044_792_730_7
        };
        (255.0, green, blue)
    } else {
        let shifted = temp - 60.0;
        let red = 329.698_727_446 * libm::pow(shifted, -0.133_204_759_2);
        let green = 288.122_169_528_3 * libm::pow(shifted, -0.075_514_849_2);
        (red, green, 255.0)
    };

    Rgb {
        r: to_channel(red),
        g: to_channel(green),
        b: to_channel(blue),
    }
}

/// Round and clamp a curve value into a color channel
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_channel(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    libm::round(value).clamp(0.0, 255.0) as u8
}
