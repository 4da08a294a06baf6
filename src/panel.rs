//! Light panel state
//!
//! Holds everything the UI shows and edits: the selected color, temperature,
//! intensity, screen brightness and fullscreen mode. The UI forwards user
//! events as [`PanelIntent`]s and reads back the colors to display.

use core::fmt;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::brightness::{BrightnessError, LevelRange, ScreenBrightness, validate_level};
use crate::color::{HexColor, Rgb, WHITE, apply_intensity, compose, hex_to_rgb};
use crate::math8::round_hundredths;
use crate::preset::{PRESET_COLORS, preset};
use crate::temperature::{TemperatureRange, TemperatureTone};

/// Which color source is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Preset at the given catalog index
    Preset(usize),
    /// Color picked by hand
    Custom,
}

/// User intent to change the panel state
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PanelIntent {
    /// Apply a preset from the catalog
    SelectPreset(usize),
    /// Use a hand-picked color
    SetCustomColor(Rgb),
    /// Change the color temperature (Kelvin)
    SetTemperature(u16),
    /// Change the glow intensity (0.0-1.0)
    SetIntensity(f32),
    /// Change the screen brightness (0.0-1.0)
    SetBrightness(f32),
    /// Enter or leave fullscreen
    ToggleFullscreen,
}

/// Error from a panel operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelError {
    /// No preset at this index
    UnknownPreset(usize),
    /// The brightness service failed
    Brightness(BrightnessError),
}

impl fmt::Display for PanelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownPreset(index) => write!(f, "unknown preset {index}"),
            Self::Brightness(err) => write!(f, "failed to set brightness: {err}"),
        }
    }
}

impl core::error::Error for PanelError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Brightness(err) => Some(err),
            Self::UnknownPreset(_) => None,
        }
    }
}

impl From<BrightnessError> for PanelError {
    fn from(err: BrightnessError) -> Self {
        Self::Brightness(err)
    }
}

/// Configuration for the light panel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightPanelConfig {
    /// Preset selected on start
    pub preset: usize,
    /// Screen brightness used until the device reports its own
    pub brightness: f32,
    /// Initial color temperature
    pub temperature: u16,
    /// Initial glow intensity
    pub intensity: f32,
    /// Selectable temperatures
    pub temperature_range: TemperatureRange,
    /// Selectable intensity and brightness levels
    pub level_range: LevelRange,
}

impl LightPanelConfig {
    pub const DEFAULT: Self = Self {
        preset: 0,
        brightness: 0.8,
        temperature: 5500,
        intensity: 0.8,
        temperature_range: TemperatureRange::SLIDER,
        level_range: LevelRange::SLIDER,
    };
}

impl Default for LightPanelConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Light panel - the state behind the screen light
pub struct LightPanel<D: ScreenBrightness> {
    // External dependencies and configuration
    display: D,
    temperature_range: TemperatureRange,
    level_range: LevelRange,

    // Internal state
    color: Rgb,
    selection: Selection,
    temperature: u16,
    intensity: f32,
    brightness: f32,
    fullscreen: bool,
}

impl<D: ScreenBrightness> LightPanel<D> {
    /// Create a new light panel
    ///
    /// Asks the display for brightness permission and, when granted, adopts
    /// the current device brightness. An unknown preset in the config falls
    /// back to a white custom color. Configured levels are clamped to the
    /// slider range.
    pub fn new(mut display: D, config: &LightPanelConfig) -> Self {
        let (color, selection) = match preset(config.preset) {
            Some(preset) => (preset.color, Selection::Preset(config.preset)),
            None => (WHITE, Selection::Custom),
        };

        let brightness = if display.request_permission().is_granted() {
            display
                .brightness()
                .and_then(validate_level)
                .unwrap_or_else(|_| config.level_range.clamp(config.brightness))
        } else {
            #[cfg(feature = "esp32-log")]
            println!("[LightPanel.new] brightness permission not granted");
            config.level_range.clamp(config.brightness)
        };

        Self {
            display,
            temperature_range: config.temperature_range,
            level_range: config.level_range,
            color,
            selection,
            temperature: config.temperature_range.clamp(config.temperature),
            intensity: config.level_range.clamp(config.intensity),
            brightness,
            fullscreen: false,
        }
    }

    /// Apply a single user intent
    pub fn apply(&mut self, intent: PanelIntent) -> Result<(), PanelError> {
        match intent {
            PanelIntent::SelectPreset(index) => self.select_preset(index)?,
            PanelIntent::SetCustomColor(color) => self.set_custom_color(color),
            PanelIntent::SetTemperature(kelvin) => self.set_temperature(kelvin),
            PanelIntent::SetIntensity(intensity) => self.set_intensity(intensity),
            PanelIntent::SetBrightness(level) => self.set_brightness(level)?,
            PanelIntent::ToggleFullscreen => self.toggle_fullscreen(),
        }
        Ok(())
    }

    /// Select a preset by catalog index
    ///
    /// Takes over the preset color, and its intensity and temperature when set.
    pub fn select_preset(&mut self, index: usize) -> Result<(), PanelError> {
        let preset = preset(index).ok_or(PanelError::UnknownPreset(index))?;
        #[cfg(feature = "esp32-log")]
        println!("[LightPanel.select_preset] selecting {:?}", preset.name);

        self.color = preset.color;
        self.selection = Selection::Preset(index);
        // Zero counts as unset
        if let Some(intensity) = preset.intensity.filter(|i| *i > 0.0) {
            self.intensity = self.level_range.clamp(intensity);
        }
        if let Some(temperature) = preset.temperature.filter(|t| *t > 0) {
            self.temperature = self.temperature_range.clamp(temperature);
        }
        Ok(())
    }

    /// Use a hand-picked color
    pub fn set_custom_color(&mut self, color: Rgb) {
        self.color = color;
        self.selection = Selection::Custom;
    }

    /// Use a hand-picked hex color
    ///
    /// Unparsable input falls back to white.
    pub fn set_custom_hex(&mut self, hex: &str) {
        self.set_custom_color(hex_to_rgb(hex).unwrap_or(WHITE));
    }

    /// Set the color temperature, clamped to the slider range
    pub fn set_temperature(&mut self, kelvin: u16) {
        self.temperature = self.temperature_range.clamp(kelvin);
    }

    /// Set the glow intensity, clamped and rounded to slider resolution
    pub fn set_intensity(&mut self, intensity: f32) {
        self.intensity = round_hundredths(self.level_range.clamp(intensity));
    }

    /// Set the screen brightness
    ///
    /// The level is clamped to the slider range. The stored level only
    /// changes when the display accepts it.
    pub fn set_brightness(&mut self, level: f32) -> Result<(), PanelError> {
        let level = round_hundredths(self.level_range.clamp(level));
        if let Err(err) = self.display.set_brightness(level) {
            #[cfg(feature = "esp32-log")]
            println!("[LightPanel.set_brightness] failed to set {:?}: {}", level, err);
            return Err(err.into());
        }
        self.brightness = level;
        Ok(())
    }

    /// Enter or leave fullscreen
    pub fn toggle_fullscreen(&mut self) {
        self.fullscreen = !self.fullscreen;
    }

    /// Base color, before temperature is applied
    pub const fn color(&self) -> Rgb {
        self.color
    }

    pub const fn selection(&self) -> Selection {
        self.selection
    }

    /// Selected preset, if any
    pub fn selected_preset(&self) -> Option<usize> {
        match self.selection {
            Selection::Preset(index) if index < PRESET_COLORS.len() => Some(index),
            _ => None,
        }
    }

    pub const fn temperature(&self) -> u16 {
        self.temperature
    }

    pub const fn tone(&self) -> TemperatureTone {
        TemperatureTone::from_kelvin(self.temperature)
    }

    pub const fn intensity(&self) -> f32 {
        self.intensity
    }

    pub const fn brightness(&self) -> f32 {
        self.brightness
    }

    pub const fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    /// Displayed color: base color mixed with the temperature
    pub fn preview_color(&self) -> Rgb {
        compose(self.color, f32::from(self.temperature))
    }

    pub fn preview_hex(&self) -> HexColor {
        HexColor::from_rgb(self.preview_color())
    }

    /// Displayed color at the current intensity over the black backdrop
    pub fn glow(&self) -> Rgb {
        apply_intensity(self.preview_color(), self.intensity)
    }

    /// Get the brightness service back
    pub fn into_display(self) -> D {
        self.display
    }
}
