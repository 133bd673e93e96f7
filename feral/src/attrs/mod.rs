//! The engine's library of attribute effects.
//!
//! Each type here is one parameterized effect, implementing the
//! [`HookEffect`][`crate::effect::HookEffect`] contract for its hook
//! category. Ability definitions in the
//! [`dex`][`crate::dex`] module compose these into named abilities.

mod attack;
mod defend;
mod faint;
mod misc;
mod residual;
mod stat_change;
mod summon;
mod switch;

use std::sync::Arc;

use feral_data::MoveData;

use crate::battle::{
    Battle,
    CombatantHandle,
};

pub use attack::{
    MovePowerBoost,
    MoveTypeChange,
    StatusEffectOnHit,
    StealHeldItem,
};
pub use defend::{
    AbilitySwapOnContact,
    ContactDamage,
    ContactStatusEffect,
    ReceivedMoveDamageMultiplier,
    TypeImmunity,
    TypeImmunityHeal,
    WeatherChangeOnHit,
};
pub use faint::{
    ContactDamageOnFaint,
    CopyAllyAbilityOnKnockOut,
    ForceSwitchAtHpThreshold,
    LootAfterBattle,
    StatStageChangeOnVictory,
};
pub use misc::{
    CopyDanceMove,
    RedirectTypedMoves,
    StatusImmunity,
    TagImmunity,
    TagOnItemLoss,
    TrapOpponents,
};
pub use residual::{
    FormChangeByWeather,
    StatStageChangeAfterTurn,
    StatusHealAfterTurn,
    TypeChangeByTerrain,
    WeatherLapseHeal,
};
pub use stat_change::{
    IntimidateImmunity,
    IntimidateReaction,
    ProtectStat,
    StatStageChangeReaction,
};
pub use summon::{
    CopyAbilityOnSummon,
    FormChangeAtBattleInit,
    FormChangeByWeatherOnSummon,
    MessageOnSummon,
    StatStageChangeOnSummon,
    SuppressFieldAbilities,
    TagBeforeSummon,
    TerrainChangeOnSummon,
    WeatherChangeOnSummon,
};
pub use switch::{
    BreakIllusion,
    ClearWeatherBeforeSwitch,
    CureStatusBeforeSwitch,
    HealBeforeSwitch,
    LiftFieldSuppression,
};

/// A stored predicate over an incoming hit, evaluated against the defender,
/// the attacker, and the move.
pub type DefendPredicate =
    Arc<dyn Fn(&Battle, CombatantHandle, CombatantHandle, &MoveData) -> bool + Send + Sync>;

/// A stored predicate over an outgoing hit, evaluated against the user and
/// the in-flight attack payload.
pub type AttackPredicate =
    Arc<dyn Fn(&Battle, CombatantHandle, &crate::effect::hook::PreAttack) -> bool + Send + Sync>;

macro_rules! hook_attr {
    ($ty:ty, $hook:ident, $kind:ident) => {
        impl $ty {
            /// Wraps the effect into an [`Attribute`][`crate::effect::Attribute`].
            pub fn attr(self) -> $crate::effect::Attribute {
                $crate::effect::Attribute::new(
                    $crate::effect::AttributeKind::$kind,
                    $crate::effect::AttributeEffect::$hook(Box::new(self)),
                )
            }
        }
    };
}
pub(crate) use hook_attr;

/// A fraction of a maximum value, never rounded below one point.
pub(crate) fn fraction_of(value: u16, numerator: u16, denominator: u16) -> u16 {
    let scaled = u32::from(value) * u32::from(numerator) / u32::from(denominator);
    (scaled as u16).max(1)
}
