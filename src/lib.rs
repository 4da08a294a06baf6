#![no_std]

pub mod brightness;
pub mod color;
pub mod math8;
pub mod panel;
pub mod preset;
pub mod temperature;

pub use brightness::{BrightnessError, LevelRange, PermissionStatus, ScreenBrightness};
pub use color::{
    ColorFormatError, HexColor, Rgb, compose, final_color, hex_to_rgb, kelvin_to_rgb, rgb_to_hex,
};
pub use panel::{LightPanel, LightPanelConfig, PanelError, PanelIntent, Selection};
pub use preset::{PRESET_COLORS, PresetColor};
pub use temperature::{TemperatureRange, TemperatureTone};
