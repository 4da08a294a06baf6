//! Preset catalog
//!
//! A fixed, read-only list of one-tap light setups.

use crate::color::{HexColor, Rgb, rgb_from_u32};

/// Named combination of color, intensity and temperature
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PresetColor {
    pub name: &'static str,
    pub color: Rgb,
    /// Glow opacity (0.0-1.0)
    pub intensity: Option<f32>,
    /// Color temperature in Kelvin
    pub temperature: Option<u16>,
    pub description: Option<&'static str>,
}

impl PresetColor {
    const fn new(
        name: &'static str,
        color: u32,
        intensity: f32,
        temperature: u16,
        description: &'static str,
    ) -> Self {
        Self {
            name,
            color: rgb_from_u32(color),
            intensity: Some(intensity),
            temperature: Some(temperature),
            description: Some(description),
        }
    }

    /// Base color as a hex string
    pub fn hex(&self) -> HexColor {
        HexColor::from_rgb(self.color)
    }
}

pub static PRESET_COLORS: &[PresetColor] = &[
    PresetColor::new("Natural", 0xFF_FF_FF, 0.8, 5500, "Everyday shooting"),
    PresetColor::new("Soft", 0xFF_F5_E6, 0.65, 3000, "Gentle look"),
    PresetColor::new("Warm Skin", 0xFF_E4_C4, 0.7, 2700, "Makeup and contouring"),
    PresetColor::new("Cool White", 0xF5_F5_F5, 0.9, 6500, "Clean and clear"),
    PresetColor::new("Sunset", 0xFF_B6_C1, 0.5, 2000, "Golden hour"),
    PresetColor::new("Pearl", 0xFA_FA_FA, 0.75, 4200, "Premium feel"),
    PresetColor::new("Cream", 0xFF_F8_DC, 0.6, 2800, "Warm and soft"),
    PresetColor::new("Moonlight", 0xF0_F8_FF, 0.7, 6800, "Cold and calm"),
    PresetColor::new("Dawn", 0xFF_F0_E6, 0.7, 3500, "Early morning mood"),
    PresetColor::new("Neon", 0xFF_69_B4, 0.6, 4000, "City nights"),
    PresetColor::new("Warm Sun", 0xFF_D7_00, 0.75, 2500, "Warm atmosphere"),
    PresetColor::new("Silver", 0xF8_F8_FF, 0.85, 7000, "Cool metallic tone"),
    PresetColor::new("Peach", 0xFF_E4_E1, 0.65, 2900, "Youthful glow"),
    PresetColor::new("Dusk", 0xDD_A0_DD, 0.55, 3200, "Romantic evening"),
    PresetColor::new("Aurora", 0xE0_FF_FF, 0.8, 6200, "Dreamy"),
    PresetColor::new("Champagne", 0xFF_E5_B4, 0.7, 3100, "Elegant texture"),
];

/// Get a preset by its position in the catalog
pub fn preset(index: usize) -> Option<&'static PresetColor> {
    PRESET_COLORS.get(index)
}

/// Find a preset by name (ASCII case-insensitive)
///
/// Returns the index and the preset.
pub fn find_preset(name: &str) -> Option<(usize, &'static PresetColor)> {
    PRESET_COLORS
        .iter()
        .enumerate()
        .find(|(_, preset)| preset.name.eq_ignore_ascii_case(name))
}
