use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// A weather condition on the battlefield.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum Weather {
    #[string = "Sun"]
    #[alias = "Harsh Sunlight"]
    Sun,
    #[string = "Rain"]
    Rain,
    #[string = "Sandstorm"]
    Sandstorm,
    #[string = "Hail"]
    Hail,
    #[string = "Extreme Sun"]
    ExtremeSun,
    #[string = "Heavy Rain"]
    HeavyRain,
    #[string = "Strong Winds"]
    StrongWinds,
}

impl Weather {
    /// Whether this weather can only be replaced by another immutable
    /// weather or explicitly cleared by its source.
    pub fn is_immutable(&self) -> bool {
        matches!(self, Self::ExtremeSun | Self::HeavyRain | Self::StrongWinds)
    }

    /// Whether this weather counts as rain.
    pub fn is_raining(&self) -> bool {
        matches!(self, Self::Rain | Self::HeavyRain)
    }

    /// Whether this weather counts as harsh sunlight.
    pub fn is_sunny(&self) -> bool {
        matches!(self, Self::Sun | Self::ExtremeSun)
    }
}
