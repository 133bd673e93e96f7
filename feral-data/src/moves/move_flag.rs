use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// Move flags, which categorize moves for miscellaneous behavior (such as
/// contact counter-effects).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, SerializeLabeledStringEnum, DeserializeLabeledStringEnum,
)]
pub enum MoveFlag {
    /// Makes contact with the target.
    #[string = "Contact"]
    Contact,
    /// A dance move.
    #[string = "Dance"]
    Dance,
    /// A powder or spore move.
    #[string = "Powder"]
    Powder,
    /// A sound-based move.
    #[string = "Sound"]
    Sound,
    /// A multi-hit move.
    #[string = "MultiHit"]
    MultiHit,
}
