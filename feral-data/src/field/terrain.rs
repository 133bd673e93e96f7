use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// A terrain condition on the battlefield, affecting grounded combatants.
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
pub enum Terrain {
    #[string = "Electric"]
    Electric,
    #[string = "Grassy"]
    Grassy,
    #[string = "Misty"]
    Misty,
    #[string = "Psychic"]
    Psychic,
}
