mod hex;
mod kelvin;
mod utils;

pub use hex::{ColorFormatError, HexColor, hex_to_rgb, rgb_to_hex};
pub use kelvin::kelvin_to_rgb;
use smart_leds::RGB8;
pub use utils::{apply_intensity, compose, final_color, rgb_from_u32};

pub type Rgb = RGB8;

/// Fallback color for unparsable user input
pub const WHITE: Rgb = Rgb {
    r: 255,
    g: 255,
    b: 255,
};

/// Backdrop behind the glow
pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
