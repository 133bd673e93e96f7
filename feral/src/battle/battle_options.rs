use serde::{
    Deserialize,
    Serialize,
};

/// The type of a battle, which determines how many combatants fight on each
/// side at once.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattleType {
    #[default]
    Singles,
    Doubles,
}

impl BattleType {
    /// The number of active positions per side.
    pub fn active_per_side(&self) -> usize {
        match self {
            Self::Singles => 1,
            Self::Doubles => 2,
        }
    }
}

/// Options for creating a new [`Battle`][`crate::battle::Battle`], consumed
/// once at construction.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct BattleOptions {
    /// The battle type.
    #[serde(default)]
    pub battle_type: BattleType,
    /// Seed for the battle's RNG stream.
    ///
    /// Battles created with the same seed and the same sequence of inputs
    /// produce identical results.
    #[serde(default)]
    pub seed: Option<u64>,
}
