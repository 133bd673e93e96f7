use anyhow::{
    Error,
    Result,
};
use feral_data::{
    StatusEffect,
    Type,
};
use feral_prng::rand_util;

use crate::{
    abilities::AbilitySlot,
    attrs::{
        AttackPredicate,
        hook_attr,
    },
    battle::{
        Battle,
        CombatantHandle,
    },
    effect::{
        can_apply_ability,
        hook,
        run_hook,
        try_set_status,
        AttributeKind,
        HookContext,
        HookEffect,
        Payload,
    },
};

/// Multiplies outgoing move power while a stored predicate holds.
pub struct MovePowerBoost {
    condition: AttackPredicate,
    multiplier: f64,
}

hook_attr!(MovePowerBoost, PreAttack, MovePowerBoost);

impl MovePowerBoost {
    pub fn new(condition: AttackPredicate, multiplier: f64) -> Self {
        Self {
            condition,
            multiplier,
        }
    }
}

impl HookEffect<hook::PreAttack> for MovePowerBoost {
    fn eligible(&self, battle: &Battle, ctx: &HookContext, data: &hook::PreAttack) -> bool {
        data.mov.is_damaging() && (self.condition)(battle, ctx.owner, data)
    }

    fn commit(
        &self,
        _battle: &mut Battle,
        _ctx: &HookContext,
        data: &mut hook::PreAttack,
    ) -> Result<(), Error> {
        data.power = (data.power as f64 * self.multiplier) as u32;
        Ok(())
    }
}

/// Converts outgoing moves of one type into another, with a power bonus.
pub struct MoveTypeChange {
    from: Type,
    to: Type,
    power_multiplier: f64,
}

hook_attr!(MoveTypeChange, PreAttack, MoveTypeChange);

impl MoveTypeChange {
    pub fn new(from: Type, to: Type, power_multiplier: f64) -> Self {
        Self {
            from,
            to,
            power_multiplier,
        }
    }
}

impl HookEffect<hook::PreAttack> for MoveTypeChange {
    fn eligible(&self, _battle: &Battle, _ctx: &HookContext, data: &hook::PreAttack) -> bool {
        data.mov.is_damaging() && data.move_type == self.from
    }

    fn commit(
        &self,
        _battle: &mut Battle,
        _ctx: &HookContext,
        data: &mut hook::PreAttack,
    ) -> Result<(), Error> {
        data.move_type = self.to;
        data.power = (data.power as f64 * self.power_multiplier) as u32;
        Ok(())
    }
}

/// Steals the defender's held item after a damaging hit.
///
/// Fails silently against item-theft-blocking abilities
/// ([`AttributeKind::BlockItemTheft`] markers).
pub struct StealHeldItem;

hook_attr!(StealHeldItem, PostAttack, StealHeldItem);

fn blocks_item_theft(battle: &Battle, ctx: &HookContext, holder: CombatantHandle) -> bool {
    for slot in [AbilitySlot::Active, AbilitySlot::Passive] {
        if !can_apply_ability(battle, ctx.dex, holder, slot) {
            continue;
        }
        let Ok(combatant) = battle.combatant(holder) else {
            return false;
        };
        let Some(ability) = combatant.ability_in_slot(slot) else {
            continue;
        };
        if ctx
            .dex
            .ability(ability)
            .has_attr_kind(AttributeKind::BlockItemTheft)
        {
            return true;
        }
    }
    false
}

impl HookEffect<hook::PostAttack> for StealHeldItem {
    fn eligible(&self, battle: &Battle, ctx: &HookContext, data: &hook::PostAttack) -> bool {
        if !data.outcome.dealt_damage() {
            return false;
        }
        let Ok(owner) = battle.combatant(ctx.owner) else {
            return false;
        };
        let Ok(defender) = battle.combatant(data.defender) else {
            return false;
        };
        owner.item().is_none()
            && defender.item().is_some()
            && !blocks_item_theft(battle, ctx, data.defender)
    }

    fn commit(
        &self,
        battle: &mut Battle,
        ctx: &HookContext,
        data: &mut hook::PostAttack,
    ) -> Result<(), Error> {
        if ctx.simulated {
            return Ok(());
        }
        let Some(item) = battle.combatant_mut(data.defender)?.take_item() else {
            return Ok(());
        };
        battle.combatant_mut(ctx.owner)?.give_item(item.clone());
        let message = format!(
            "{} stole {}'s {}!",
            battle.combatant_name(ctx.owner),
            battle.combatant_name(data.defender),
            item,
        );
        battle.log_message(&message);
        let mut payload = Payload::new(data.defender, hook::PostItemLost);
        run_hook(battle, ctx.dex, &mut payload);
        Ok(())
    }
}

/// Chance to inflict a status on the defender after a damaging hit.
pub struct StatusEffectOnHit {
    chance: u32,
    effects: Vec<StatusEffect>,
    contact_only: bool,
}

hook_attr!(StatusEffectOnHit, PostAttack, StatusEffectOnHit);

impl StatusEffectOnHit {
    pub fn new(chance: u32, effects: &[StatusEffect]) -> Self {
        Self {
            chance,
            effects: effects.to_vec(),
            contact_only: false,
        }
    }

    /// Restricts the effect to contact moves.
    pub fn contact_only(mut self) -> Self {
        self.contact_only = true;
        self
    }
}

impl HookEffect<hook::PostAttack> for StatusEffectOnHit {
    fn eligible(&self, battle: &Battle, _ctx: &HookContext, data: &hook::PostAttack) -> bool {
        if !data.outcome.dealt_damage() {
            return false;
        }
        if self.contact_only && !data.mov.makes_contact() {
            return false;
        }
        battle
            .combatant(data.defender)
            .map(|defender| !defender.fainted() && defender.status().is_none())
            .unwrap_or(false)
    }

    fn commit(
        &self,
        battle: &mut Battle,
        ctx: &HookContext,
        data: &mut hook::PostAttack,
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
            data.defender,
            effect,
            Some(ctx.owner),
            false,
        );
        Ok(())
    }
}
