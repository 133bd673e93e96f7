mod battle;
mod battle_options;
mod combatant;
mod field;
mod queue;

pub use battle::Battle;
pub use battle_options::{
    BattleOptions,
    BattleType,
};
pub use combatant::{
    Combatant,
    CombatantData,
    CombatantHandle,
};
pub use field::Field;
pub use queue::{
    Phase,
    PhaseQueue,
};
