use crate::{
    color::{ColorFormatError, HexColor, Rgb, kelvin_to_rgb},
    math8::{avg8, scale8, unit_to_u8},
};

/// Mix a base color with the color of a temperature
///
/// Channels are averaged, halves round up.
#[inline]
pub fn compose(base: Rgb, kelvin: f32) -> Rgb {
    let temp = kelvin_to_rgb(kelvin);
    Rgb {
        r: avg8(base.r, temp.r),
        g: avg8(base.g, temp.g),
        b: avg8(base.b, temp.b),
    }
}

/// Mix a `#RRGGBB` base color with the color of a temperature
///
/// The base color must carry the `#` prefix; malformed input is rejected
/// instead of producing a garbage color.
pub fn final_color(base_hex: &str, kelvin: f32) -> Result<HexColor, ColorFormatError> {
    let base = HexColor::parse(base_hex)?;
    Ok(HexColor::from_rgb(compose(base.rgb(), kelvin)))
}

/// Color of the glow at the given intensity over the black backdrop
///
/// # Arguments
/// * `color` - Displayed color
/// * `intensity` - Opacity (0.0 = black, 1.0 = full color), clamped
#[inline]
pub fn apply_intensity(color: Rgb, intensity: f32) -> Rgb {
    let scale = unit_to_u8(intensity);
    Rgb {
        r: scale8(color.r, scale),
        g: scale8(color.g, scale),
        b: scale8(color.b, scale),
    }
}

/// Create an RGB color from a u32 value (0xRRGGBB format)
pub const fn rgb_from_u32(color: u32) -> Rgb {
    Rgb {
        r: ((color >> 16) & 0xFF) as u8,
        g: ((color >> 8) & 0xFF) as u8,
        b: (color & 0xFF) as u8,
    }
}
