use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// The target(s) of a move.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum MoveTarget {
    /// A single adjacent combatant.
    #[string = "Normal"]
    #[default]
    Normal,
    /// The user itself.
    #[string = "User"]
    User,
    /// The user's side of the field.
    #[string = "UserSide"]
    UserSide,
    /// The opposing side of the field.
    #[string = "FoeSide"]
    FoeSide,
    /// The entire field.
    #[string = "Field"]
    Field,
}

impl MoveTarget {
    /// Whether the move targets a side or the whole field rather than any
    /// particular combatant.
    ///
    /// Field-targeting moves bypass single-target immunities.
    pub fn is_field_target(&self) -> bool {
        matches!(self, Self::UserSide | Self::FoeSide | Self::Field)
    }
}
