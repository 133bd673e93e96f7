use serde::{
    Deserialize,
    Serialize,
};

/// Declarative flags on an ability, controlling how the ability interacts
/// with the engine's cross-cutting rules.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityFlags {
    /// The ability's attributes still run while the owner is fainted.
    #[serde(default)]
    pub bypass_faint: bool,
    /// The ability is negated by ignore-ability effects.
    #[serde(default)]
    pub ignorable: bool,
    /// The ability cannot be suppressed by field-wide suppression.
    #[serde(default)]
    pub unsuppressible: bool,
    /// The ability cannot be copied onto another combatant.
    #[serde(default)]
    pub uncopiable: bool,
    /// The ability cannot be overwritten on its owner.
    #[serde(default)]
    pub unreplaceable: bool,
}

impl AbilityFlags {
    /// Whether the ability can be exchanged between two combatants.
    ///
    /// An ability is swappable only if it can be copied off its owner and
    /// replaced on its owner.
    pub fn swappable(&self) -> bool {
        !self.uncopiable && !self.unreplaceable
    }
}
