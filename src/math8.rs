/// Scale an 8-bit value by a factor (0-255 = 0.0-1.0)
///
/// Uses integer math, `scale8(v, 255) == v`.
#[inline]
#[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
pub const fn scale8(value: u8, scale: u8) -> u8 {
    ((value as u16 * (1 + scale as u16)) >> 8) as u8
}

/// Average two 8-bit values, rounding halves up
#[inline]
#[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
pub const fn avg8(a: u8, b: u8) -> u8 {
    ((a as u16 + b as u16 + 1) >> 1) as u8
}

/// Convert a unit value (0.0-1.0) to the 0-255 scale
///
/// Out of range values are clamped, NaN maps to 0.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn unit_to_u8(value: f32) -> u8 {
    if value.is_nan() {
        return 0;
    }
    libm::roundf(value.clamp(0.0, 1.0) * 255.0) as u8
}

/// Round a unit value to two decimal places
///
/// Matches the resolution of the panel sliders.
#[inline]
pub fn round_hundredths(value: f32) -> f32 {
    libm::roundf(value * 100.0) / 100.0
}
