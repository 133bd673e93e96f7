mod battler_tag;
mod status_effect;

pub use battler_tag::BattlerTag;
pub use status_effect::StatusEffect;
