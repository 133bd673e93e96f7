use anyhow::{
    Error,
    Result,
};
use feral_data::{
    AbilityId,
    Boost,
    Id,
};
use feral_prng::rand_util;

use crate::{
    abilities::AbilitySlot,
    attrs::{
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
        HookContext,
        HookEffect,
    },
};

/// Damages the combatant whose contact move knocked the owner out.
pub struct ContactDamageOnFaint {
    numerator: u16,
    denominator: u16,
}

hook_attr!(ContactDamageOnFaint, PostFaint, ContactDamageOnFaint);

impl ContactDamageOnFaint {
    pub fn new(numerator: u16, denominator: u16) -> Self {
        Self {
            numerator,
            denominator,
        }
    }
}

impl HookEffect<hook::PostFaint> for ContactDamageOnFaint {
    fn eligible(&self, battle: &Battle, _ctx: &HookContext, data: &hook::PostFaint) -> bool {
        let Some(attacker) = data.attacker else {
            return false;
        };
        let Some(mov) = data.mov.as_ref() else {
            return false;
        };
        if !mov.makes_contact() {
            return false;
        }
        battle
            .combatant(attacker)
            .map(|attacker| !attacker.fainted())
            .unwrap_or(false)
    }

    fn commit(
        &self,
        battle: &mut Battle,
        ctx: &HookContext,
        data: &mut hook::PostFaint,
    ) -> Result<(), Error> {
        if ctx.simulated {
            return Ok(());
        }
        let Some(attacker) = data.attacker else {
            return Ok(());
        };
        let max_hp = battle.combatant(attacker)?.max_hp();
        battle.deal_damage(attacker, fraction_of(max_hp, self.numerator, self.denominator))?;
        Ok(())
    }

    fn trigger_message(
        &self,
        battle: &Battle,
        ctx: &HookContext,
        data: &hook::PostFaint,
    ) -> Option<String> {
        data.attacker.map(|attacker| {
            format!(
                "{} was caught in {}'s {}!",
                battle.combatant_name(attacker),
                battle.combatant_name(ctx.owner),
                ctx.ability_name(),
            )
        })
    }
}

/// Boosts the owner's stats after it knocks out an opponent.
pub struct StatStageChangeOnVictory {
    stats: Vec<Boost>,
    stages: i8,
}

hook_attr!(StatStageChangeOnVictory, PostVictory, StatStageChangeOnVictory);

impl StatStageChangeOnVictory {
    pub fn new(stats: &[Boost], stages: i8) -> Self {
        Self {
            stats: stats.to_vec(),
            stages,
        }
    }
}

impl HookEffect<hook::PostVictory> for StatStageChangeOnVictory {
    fn commit(
        &self,
        battle: &mut Battle,
        ctx: &HookContext,
        _data: &mut hook::PostVictory,
    ) -> Result<(), Error> {
        if ctx.simulated {
            return Ok(());
        }
        battle.queue_mut().push_next(Phase::StatStageChange {
            target: ctx.owner,
            self_inflicted: true,
            stats: self.stats.clone(),
            stages: self.stages,
        });
        Ok(())
    }
}

/// Takes over a fainted ally's ability.
pub struct CopyAllyAbilityOnKnockOut;

hook_attr!(
    CopyAllyAbilityOnKnockOut,
    PostKnockOut,
    CopyAllyAbilityOnKnockOut
);

impl HookEffect<hook::PostKnockOut> for CopyAllyAbilityOnKnockOut {
    fn eligible(&self, battle: &Battle, ctx: &HookContext, data: &hook::PostKnockOut) -> bool {
        let Ok(owner) = battle.combatant(ctx.owner) else {
            return false;
        };
        let Ok(fainted) = battle.combatant(data.fainted) else {
            return false;
        };
        if data.fainted == ctx.owner || fainted.side() != owner.side() {
            return false;
        }
        let ability = fainted.active_ability();
        ability != AbilityId::NoAbility && !ctx.dex.ability(ability).flags().uncopiable
    }

    fn commit(
        &self,
        battle: &mut Battle,
        ctx: &HookContext,
        data: &mut hook::PostKnockOut,
    ) -> Result<(), Error> {
        if ctx.simulated {
            return Ok(());
        }
        let ability = battle.combatant(data.fainted)?.active_ability();
        battle
            .combatant_mut(ctx.owner)?
            .set_override_ability(ability);
        let message = format!(
            "{}'s {} was taken over by {}!",
            battle.combatant_name(data.fainted),
            ability.name(),
            battle.combatant_name(ctx.owner),
        );
        battle.log_message(&message);
        ability_gained(battle, ctx.dex, ctx.owner, AbilitySlot::Active);
        Ok(())
    }
}

/// Chance to pick up an item after the battle ends.
pub struct LootAfterBattle {
    chance: u32,
    item: &'static str,
}

hook_attr!(LootAfterBattle, PostBattle, LootAfterBattle);

impl LootAfterBattle {
    pub fn new(chance: u32, item: &'static str) -> Self {
        Self { chance, item }
    }
}

impl HookEffect<hook::PostBattle> for LootAfterBattle {
    fn eligible(&self, battle: &Battle, ctx: &HookContext, _data: &hook::PostBattle) -> bool {
        battle
            .combatant(ctx.owner)
            .map(|combatant| combatant.item().is_none())
            .unwrap_or(false)
    }

    fn commit(
        &self,
        battle: &mut Battle,
        ctx: &HookContext,
        _data: &mut hook::PostBattle,
    ) -> Result<(), Error> {
        if ctx.simulated {
            return Ok(());
        }
        if !rand_util::chance(battle.rng_mut(), u64::from(self.chance), 100) {
            return Ok(());
        }
        let item = Id::from(self.item);
        battle.combatant_mut(ctx.owner)?.give_item(item);
        let message = format!(
            "{} picked up a {}!",
            battle.combatant_name(ctx.owner),
            self.item,
        );
        battle.log_message(&message);
        Ok(())
    }
}

/// Forces the owner out when damage drops it across an HP threshold.
///
/// Eligibility compares the owner's HP before and after the damage in the
/// payload, so only the hit that crosses the threshold triggers the
/// switch.
pub struct ForceSwitchAtHpThreshold {
    numerator: u32,
    denominator: u32,
}

hook_attr!(ForceSwitchAtHpThreshold, PostDamage, ForceSwitchAtHpThreshold);

impl ForceSwitchAtHpThreshold {
    pub fn new(numerator: u32, denominator: u32) -> Self {
        Self {
            numerator,
            denominator,
        }
    }
}

impl HookEffect<hook::PostDamage> for ForceSwitchAtHpThreshold {
    fn eligible(&self, battle: &Battle, ctx: &HookContext, data: &hook::PostDamage) -> bool {
        let Ok(combatant) = battle.combatant(ctx.owner) else {
            return false;
        };
        if combatant.fainted() {
            return false;
        }
        let hp = u32::from(combatant.hp());
        let hp_before = hp + u32::from(data.damage);
        let max_hp = u32::from(combatant.max_hp());
        let threshold = max_hp * self.numerator / self.denominator;
        hp <= threshold && hp_before > threshold
    }

    fn commit(
        &self,
        battle: &mut Battle,
        ctx: &HookContext,
        _data: &mut hook::PostDamage,
    ) -> Result<(), Error> {
        if ctx.simulated {
            return Ok(());
        }
        battle.queue_mut().push_next(Phase::SwitchOut {
            target: ctx.owner,
            forced: true,
        });
        Ok(())
    }
}
