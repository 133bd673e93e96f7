use anyhow::{
    Error,
    Result,
};
use feral_data::{
    StatusEffect,
    Type,
    Weather,
};
use feral_prng::rand_util;

use crate::{
    abilities::AbilitySlot,
    attrs::{
        DefendPredicate,
        fraction_of,
        hook_attr,
    },
    battle::{
        Battle,
        Phase,
    },
    effect::{
        ability_gained,
        hook,
        try_set_status,
        HookContext,
        HookEffect,
    },
};

/// Grants immunity to single-target moves of one type.
///
/// Forces the incoming damage multiplier to zero. Field-targeting moves
/// bypass single-target immunities.
pub struct TypeImmunity {
    immune_type: Type,
}

hook_attr!(TypeImmunity, PreDefend, TypeImmunity);

impl TypeImmunity {
    pub fn new(immune_type: Type) -> Self {
        Self { immune_type }
    }

    pub(crate) fn applies(&self, ctx: &HookContext, data: &hook::PreDefend) -> bool {
        !data.mov.target.is_field_target()
            && data.attacker != ctx.owner
            && data.move_type == self.immune_type
    }
}

impl HookEffect<hook::PreDefend> for TypeImmunity {
    fn eligible(&self, _battle: &Battle, ctx: &HookContext, data: &hook::PreDefend) -> bool {
        self.applies(ctx, data)
    }

    fn commit(
        &self,
        _battle: &mut Battle,
        _ctx: &HookContext,
        data: &mut hook::PreDefend,
    ) -> Result<(), Error> {
        data.damage_multiplier = 0.0;
        Ok(())
    }
}

/// Grants immunity to one type and heals a quarter of max HP when hit by
/// it.
///
/// The heal is enqueued as a phase and only happens below full HP; the
/// advisory cancellation flag is set alongside it so the caller skips its
/// own "no effect" handling.
pub struct TypeImmunityHeal {
    immunity: TypeImmunity,
}

hook_attr!(TypeImmunityHeal, PreDefend, TypeImmunityHeal);

impl TypeImmunityHeal {
    pub fn new(immune_type: Type) -> Self {
        Self {
            immunity: TypeImmunity::new(immune_type),
        }
    }
}

impl HookEffect<hook::PreDefend> for TypeImmunityHeal {
    fn eligible(&self, _battle: &Battle, ctx: &HookContext, data: &hook::PreDefend) -> bool {
        self.immunity.applies(ctx, data)
    }

    fn commit(
        &self,
        battle: &mut Battle,
        ctx: &HookContext,
        data: &mut hook::PreDefend,
    ) -> Result<(), Error> {
        data.damage_multiplier = 0.0;
        if ctx.simulated {
            return Ok(());
        }
        let (full_hp, max_hp, name) = {
            let combatant = battle.combatant(ctx.owner)?;
            (
                combatant.is_full_hp(),
                combatant.max_hp(),
                combatant.name.clone(),
            )
        };
        if !full_hp {
            battle.queue_mut().push_next(Phase::Heal {
                target: ctx.owner,
                amount: fraction_of(max_hp, 1, 4),
                message: Some(format!(
                    "{name} restored HP using its {}!",
                    ctx.ability_name()
                )),
            });
            data.cancelled = true;
        }
        Ok(())
    }
}

/// Multiplies incoming damage while a stored predicate over the hit holds.
///
/// The predicate is re-evaluated against current battle state on every hit,
/// so a full-HP gate stops applying the moment the first hit of a multi-hit
/// move lands.
pub struct ReceivedMoveDamageMultiplier {
    condition: DefendPredicate,
    multiplier: f64,
}

hook_attr!(
    ReceivedMoveDamageMultiplier,
    PreDefend,
    ReceivedMoveDamageMultiplier
);

impl ReceivedMoveDamageMultiplier {
    pub fn new(condition: DefendPredicate, multiplier: f64) -> Self {
        Self {
            condition,
            multiplier,
        }
    }

    /// Multiplies damage from moves of one type.
    pub fn from_move_type(move_type: Type, multiplier: f64) -> Self {
        Self::new(
            std::sync::Arc::new(move |_, _, _, mov| mov.primary_type == move_type),
            multiplier,
        )
    }
}

impl HookEffect<hook::PreDefend> for ReceivedMoveDamageMultiplier {
    fn eligible(&self, battle: &Battle, ctx: &HookContext, data: &hook::PreDefend) -> bool {
        (self.condition)(battle, ctx.owner, data.attacker, &data.mov)
    }

    fn commit(
        &self,
        _battle: &mut Battle,
        _ctx: &HookContext,
        data: &mut hook::PreDefend,
    ) -> Result<(), Error> {
        data.damage_multiplier *= self.multiplier;
        Ok(())
    }
}

/// Chance to inflict a status on an attacker that made contact.
///
/// With multiple candidate statuses, the inflicted one is drawn uniformly
/// from the battle's RNG stream.
pub struct ContactStatusEffect {
    chance: u32,
    effects: Vec<StatusEffect>,
    exempt_types: Vec<Type>,
}

hook_attr!(ContactStatusEffect, PostDefend, ContactStatusEffect);

impl ContactStatusEffect {
    pub fn new(chance: u32, effects: &[StatusEffect]) -> Self {
        Self {
            chance,
            effects: effects.to_vec(),
            exempt_types: Vec::new(),
        }
    }

    /// Exempts attackers of the given types (spore-proof types for Effect
    /// Spore).
    pub fn exempt_types(mut self, types: &[Type]) -> Self {
        self.exempt_types = types.to_vec();
        self
    }
}

impl HookEffect<hook::PostDefend> for ContactStatusEffect {
    fn eligible(&self, battle: &Battle, _ctx: &HookContext, data: &hook::PostDefend) -> bool {
        if !data.mov.makes_contact() || !data.outcome.dealt_damage() {
            return false;
        }
        let Ok(attacker) = battle.combatant(data.attacker) else {
            return false;
        };
        if attacker.fainted() || attacker.status().is_some() {
            return false;
        }
        !self
            .exempt_types
            .iter()
            .any(|&exempt| attacker.has_type(exempt))
    }

    fn commit(
        &self,
        battle: &mut Battle,
        ctx: &HookContext,
        data: &mut hook::PostDefend,
    ) -> Result<(), Error> {
        if ctx.simulated {
            return Ok(());
        }
        if !rand_util::chance(battle.rng_mut(), u64::from(self.chance), 100) {
            return Ok(());
        }
        let effect = if self.effects.len() == 1 {
            self.effects[0]
        } else {
            match rand_util::sample_slice(battle.rng_mut(), &self.effects) {
                Some(&effect) => effect,
                None => return Ok(()),
            }
        };
        try_set_status(
            battle,
            ctx.dex,
            data.attacker,
            effect,
            Some(ctx.owner),
            false,
        );
        Ok(())
    }
}

/// Damages an attacker that made contact.
pub struct ContactDamage {
    numerator: u16,
    denominator: u16,
}

hook_attr!(ContactDamage, PostDefend, ContactDamage);

impl ContactDamage {
    /// Damages the attacker by the given fraction of its max HP.
    pub fn new(numerator: u16, denominator: u16) -> Self {
        Self {
            numerator,
            denominator,
        }
    }
}

impl HookEffect<hook::PostDefend> for ContactDamage {
    fn eligible(&self, battle: &Battle, _ctx: &HookContext, data: &hook::PostDefend) -> bool {
        if !data.mov.makes_contact() || !data.outcome.dealt_damage() {
            return false;
        }
        battle
            .combatant(data.attacker)
            .map(|attacker| !attacker.fainted())
            .unwrap_or(false)
    }

    fn commit(
        &self,
        battle: &mut Battle,
        ctx: &HookContext,
        data: &mut hook::PostDefend,
    ) -> Result<(), Error> {
        if ctx.simulated {
            return Ok(());
        }
        let max_hp = battle.combatant(data.attacker)?.max_hp();
        battle.deal_damage(data.attacker, fraction_of(max_hp, self.numerator, self.denominator))?;
        Ok(())
    }

    fn trigger_message(
        &self,
        battle: &Battle,
        ctx: &HookContext,
        data: &hook::PostDefend,
    ) -> Option<String> {
        Some(format!(
            "{} was hurt by {}'s {}!",
            battle.combatant_name(data.attacker),
            battle.combatant_name(ctx.owner),
            ctx.ability_name(),
        ))
    }
}

/// Sets the weather after the owner is hit.
pub struct WeatherChangeOnHit {
    weather: Weather,
}

hook_attr!(WeatherChangeOnHit, PostDefend, WeatherChangeOnHit);

impl WeatherChangeOnHit {
    pub fn new(weather: Weather) -> Self {
        Self { weather }
    }
}

impl HookEffect<hook::PostDefend> for WeatherChangeOnHit {
    fn eligible(&self, battle: &Battle, _ctx: &HookContext, data: &hook::PostDefend) -> bool {
        data.outcome.dealt_damage() && battle.field().can_set_weather(self.weather)
    }

    fn commit(
        &self,
        battle: &mut Battle,
        ctx: &HookContext,
        _data: &mut hook::PostDefend,
    ) -> Result<(), Error> {
        if ctx.simulated {
            return Ok(());
        }
        battle.set_weather(self.weather);
        Ok(())
    }
}

/// Swaps abilities with an attacker that made contact.
///
/// Both abilities must be swappable: copiable off their owner and
/// replaceable on their owner.
pub struct AbilitySwapOnContact;

hook_attr!(AbilitySwapOnContact, PostDefend, AbilitySwapOnContact);

impl HookEffect<hook::PostDefend> for AbilitySwapOnContact {
    fn eligible(&self, battle: &Battle, ctx: &HookContext, data: &hook::PostDefend) -> bool {
        if !data.mov.makes_contact() || !data.outcome.dealt_damage() {
            return false;
        }
        let Ok(attacker) = battle.combatant(data.attacker) else {
            return false;
        };
        let Ok(owner) = battle.combatant(ctx.owner) else {
            return false;
        };
        if attacker.fainted() {
            return false;
        }
        ctx.dex
            .ability(attacker.active_ability())
            .flags()
            .swappable()
            && ctx.dex.ability(owner.active_ability()).flags().swappable()
    }

    fn commit(
        &self,
        battle: &mut Battle,
        ctx: &HookContext,
        data: &mut hook::PostDefend,
    ) -> Result<(), Error> {
        if ctx.simulated {
            return Ok(());
        }
        let own_ability = battle.combatant(ctx.owner)?.active_ability();
        let their_ability = battle.combatant(data.attacker)?.active_ability();
        battle
            .combatant_mut(ctx.owner)?
            .set_override_ability(their_ability);
        battle
            .combatant_mut(data.attacker)?
            .set_override_ability(own_ability);
        let message = format!(
            "{} swapped abilities with {}!",
            battle.combatant_name(ctx.owner),
            battle.combatant_name(data.attacker),
        );
        battle.log_message(&message);
        ability_gained(battle, ctx.dex, ctx.owner, AbilitySlot::Active);
        ability_gained(battle, ctx.dex, data.attacker, AbilitySlot::Active);
        Ok(())
    }
}
