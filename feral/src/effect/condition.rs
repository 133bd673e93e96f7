use std::{
    fmt,
    sync::Arc,
};

use feral_data::{
    AbilityId,
    StatusEffect,
    Weather,
};

use crate::battle::{
    Battle,
    CombatantHandle,
};

/// A reusable gating predicate over a combatant.
///
/// Conditions are pure: they may read battle state but never mutate it. A
/// condition evaluated against a missing combatant is false, never an
/// error.
#[derive(Clone)]
pub struct Condition(Arc<dyn Fn(&Battle, CombatantHandle) -> bool + Send + Sync>);

impl Condition {
    /// Creates a condition from a predicate.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&Battle, CombatantHandle) -> bool + Send + Sync + 'static,
    {
        Self(Arc::new(predicate))
    }

    /// Evaluates the condition.
    pub fn check(&self, battle: &Battle, combatant: CombatantHandle) -> bool {
        (self.0)(battle, combatant)
    }

    /// A condition that fails once the given ability has applied an effect
    /// this battle.
    ///
    /// Combined with an ability-level condition, this implements
    /// once-per-battle abilities with no dedicated engine feature: the
    /// dispatcher's applied-set bookkeeping does the rest.
    pub fn once_per_battle(ability: AbilityId) -> Self {
        Self::new(move |battle, combatant| {
            battle
                .combatant(combatant)
                .map(|combatant| !combatant.ability_applied(ability))
                .unwrap_or(false)
        })
    }

    /// A condition requiring the combatant to be at full HP.
    pub fn full_hp() -> Self {
        Self::new(|battle, combatant| {
            battle
                .combatant(combatant)
                .map(|combatant| combatant.is_full_hp())
                .unwrap_or(false)
        })
    }

    /// A condition requiring the combatant to have a non-volatile status.
    pub fn has_status() -> Self {
        Self::new(|battle, combatant| {
            battle
                .combatant(combatant)
                .map(|combatant| combatant.status().is_some())
                .unwrap_or(false)
        })
    }

    /// A condition requiring the combatant to have the given status.
    pub fn status_is(status: StatusEffect) -> Self {
        Self::new(move |battle, combatant| {
            battle
                .combatant(combatant)
                .map(|combatant| combatant.status() == Some(status))
                .unwrap_or(false)
        })
    }

    /// A condition requiring one of the given weathers to be active.
    pub fn weather_one_of(weathers: &'static [Weather]) -> Self {
        Self::new(move |battle, _| {
            battle
                .field()
                .weather()
                .is_some_and(|weather| weathers.contains(&weather))
        })
    }

    /// A condition requiring the combatant's HP to be at or below the given
    /// fraction of its maximum.
    pub fn hp_at_most(numerator: u16, denominator: u16) -> Self {
        Self::new(move |battle, combatant| {
            battle
                .combatant(combatant)
                .map(|combatant| {
                    u32::from(combatant.hp()) * u32::from(denominator)
                        <= u32::from(combatant.max_hp()) * u32::from(numerator)
                })
                .unwrap_or(false)
        })
    }
}

impl fmt::Debug for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Condition")
    }
}
