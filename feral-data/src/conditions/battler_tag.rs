use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// An ephemeral, battle-scoped modifier attached to a combatant.
///
/// Tags are created and removed by effects and are cleared when the combatant
/// leaves the field or the battle ends.
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
pub enum BattlerTag {
    /// The combatant is confused and may hurt itself.
    #[string = "Confusion"]
    Confusion,
    /// The combatant flinches and loses its action this turn.
    #[string = "Flinch"]
    Flinch,
    /// The combatant is disguised as another team member.
    #[string = "Illusion"]
    Illusion,
    /// The combatant's speed is doubled after losing its held item.
    #[string = "Unburden"]
    Unburden,
}
