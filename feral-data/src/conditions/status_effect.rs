use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// A non-volatile status effect, which persists on a combatant until cured.
///
/// A combatant can have at most one status effect at a time.
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
pub enum StatusEffect {
    #[string = "Poison"]
    #[alias = "psn"]
    Poison,
    #[string = "Bad Poison"]
    #[alias = "tox"]
    BadPoison,
    #[string = "Paralysis"]
    #[alias = "par"]
    Paralysis,
    #[string = "Sleep"]
    #[alias = "slp"]
    Sleep,
    #[string = "Freeze"]
    #[alias = "frz"]
    Freeze,
    #[string = "Burn"]
    #[alias = "brn"]
    Burn,
}

impl StatusEffect {
    /// A human-readable description of the status, for trigger messages.
    pub fn describe(&self) -> &'static str {
        match self {
            Self::Poison | Self::BadPoison => "poisoning",
            Self::Paralysis => "paralysis",
            Self::Sleep => "sleep",
            Self::Freeze => "freezing",
            Self::Burn => "burns",
        }
    }
}
