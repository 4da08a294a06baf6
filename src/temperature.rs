//! Color temperature slider semantics

const TONE_NAME_WARM: &str = "warm";
const TONE_NAME_NEUTRAL: &str = "neutral";
const TONE_NAME_COOL: &str = "cool";

/// Temperatures at or below this value are labeled warm
const WARM_MAX: u16 = 3500;
/// Temperatures at or above this value are labeled cool
const COOL_MIN: u16 = 6500;

/// Inclusive range of selectable temperatures, in Kelvin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemperatureRange {
    pub min: u16,
    pub max: u16,
}

impl TemperatureRange {
    /// Range offered by the temperature slider
    pub const SLIDER: Self = Self {
        min: 2000,
        max: 7500,
    };

    /// Clamp a temperature into the range
    pub const fn clamp(self, kelvin: u16) -> u16 {
        if kelvin < self.min {
            self.min
        } else if kelvin > self.max {
            self.max
        } else {
            kelvin
        }
    }

    pub const fn contains(self, kelvin: u16) -> bool {
        kelvin >= self.min && kelvin <= self.max
    }
}

impl Default for TemperatureRange {
    fn default() -> Self {
        Self::SLIDER
    }
}

/// Perceived tone of a temperature, shown next to the slider
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemperatureTone {
    Warm,
    Neutral,
    Cool,
}

impl TemperatureTone {
    pub const fn from_kelvin(kelvin: u16) -> Self {
        if kelvin <= WARM_MAX {
            Self::Warm
        } else if kelvin >= COOL_MIN {
            Self::Cool
        } else {
            Self::Neutral
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Warm => TONE_NAME_WARM,
            Self::Neutral => TONE_NAME_NEUTRAL,
            Self::Cool => TONE_NAME_COOL,
        }
    }
}
