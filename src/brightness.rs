//! Device screen brightness
//!
//! The panel does not talk to the platform directly. The host implements
//! [`ScreenBrightness`] on top of its display API and hands it to the panel.

use core::fmt;

/// Result of a brightness permission request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionStatus {
    Granted,
    Denied,
    Undetermined,
}

impl PermissionStatus {
    pub const fn is_granted(self) -> bool {
        matches!(self, Self::Granted)
    }
}

/// Error reported by a brightness service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrightnessError {
    /// The user did not allow brightness changes
    PermissionDenied,
    /// The platform could not read or write the brightness
    Unavailable,
    /// Requested level is outside 0.0-1.0
    OutOfRange,
}

impl fmt::Display for BrightnessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::PermissionDenied => "brightness permission denied",
            Self::Unavailable => "screen brightness unavailable",
            Self::OutOfRange => "brightness level out of range",
        };
        f.write_str(msg)
    }
}

impl core::error::Error for BrightnessError {}

/// Abstract screen brightness service
///
/// Implement this trait to support different platforms.
/// Levels are in the 0.0-1.0 range.
pub trait ScreenBrightness {
    /// Ask the platform for permission to change the brightness
    fn request_permission(&mut self) -> PermissionStatus {
        PermissionStatus::Granted
    }

    /// Read the current screen brightness
    fn brightness(&mut self) -> Result<f32, BrightnessError>;

    /// Write the screen brightness
    fn set_brightness(&mut self, level: f32) -> Result<(), BrightnessError>;
}

/// Check that a level is a valid brightness
pub fn validate_level(level: f32) -> Result<f32, BrightnessError> {
    if (0.0..=1.0).contains(&level) {
        Ok(level)
    } else {
        Err(BrightnessError::OutOfRange)
    }
}

/// Inclusive range of selectable levels (intensity, screen brightness)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelRange {
    pub min: f32,
    pub max: f32,
}

impl LevelRange {
    /// Range offered by the intensity and brightness sliders
    ///
    /// The floor keeps the light from being turned fully dark.
    pub const SLIDER: Self = Self { min: 0.1, max: 1.0 };

    /// Clamp a level into the range, NaN maps to the minimum
    pub fn clamp(self, level: f32) -> f32 {
        if level.is_nan() {
            return self.min;
        }
        level.max(self.min).min(self.max)
    }

    pub fn contains(self, level: f32) -> bool {
        (self.min..=self.max).contains(&level)
    }
}

impl Default for LevelRange {
    fn default() -> Self {
        Self::SLIDER
    }
}
