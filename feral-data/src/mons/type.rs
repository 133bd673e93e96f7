use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// The elemental type of a combatant or move, which determines weaknesses and
/// resistances.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum Type {
    #[string = "Normal"]
    #[default]
    Normal,
    #[string = "Fighting"]
    Fighting,
    #[string = "Flying"]
    Flying,
    #[string = "Poison"]
    Poison,
    #[string = "Ground"]
    Ground,
    #[string = "Rock"]
    Rock,
    #[string = "Bug"]
    Bug,
    #[string = "Ghost"]
    Ghost,
    #[string = "Steel"]
    Steel,
    #[string = "Fire"]
    Fire,
    #[string = "Water"]
    Water,
    #[string = "Grass"]
    Grass,
    #[string = "Electric"]
    Electric,
    #[string = "Psychic"]
    Psychic,
    #[string = "Ice"]
    Ice,
    #[string = "Dragon"]
    Dragon,
    #[string = "Dark"]
    Dark,
    #[string = "Fairy"]
    Fairy,
}
