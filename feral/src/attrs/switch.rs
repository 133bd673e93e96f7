use anyhow::{
    Error,
    Result,
};
use feral_data::{
    BattlerTag,
    Weather,
};

use crate::{
    abilities::AbilitySlot,
    attrs::{
        fraction_of,
        hook_attr,
    },
    battle::Battle,
    effect::{
        ability_gained,
        hook,
        HookContext,
        HookEffect,
    },
};

/// Heals the owner as it leaves the field.
pub struct HealBeforeSwitch {
    numerator: u16,
    denominator: u16,
}

hook_attr!(HealBeforeSwitch, PreSwitchOut, HealBeforeSwitch);

impl HealBeforeSwitch {
    pub fn new(numerator: u16, denominator: u16) -> Self {
        Self {
            numerator,
            denominator,
        }
    }
}

impl HookEffect<hook::PreSwitchOut> for HealBeforeSwitch {
    fn eligible(&self, battle: &Battle, ctx: &HookContext, _data: &hook::PreSwitchOut) -> bool {
        battle
            .combatant(ctx.owner)
            .map(|combatant| !combatant.is_full_hp() && !combatant.fainted())
            .unwrap_or(false)
    }

    fn commit(
        &self,
        battle: &mut Battle,
        ctx: &HookContext,
        _data: &mut hook::PreSwitchOut,
    ) -> Result<(), Error> {
        if ctx.simulated {
            return Ok(());
        }
        let max_hp = battle.combatant(ctx.owner)?.max_hp();
        battle.heal(ctx.owner, fraction_of(max_hp, self.numerator, self.denominator))?;
        Ok(())
    }
}

/// Cures the owner's status as it leaves the field.
pub struct CureStatusBeforeSwitch;

hook_attr!(CureStatusBeforeSwitch, PreSwitchOut, CureStatusBeforeSwitch);

impl HookEffect<hook::PreSwitchOut> for CureStatusBeforeSwitch {
    fn eligible(&self, battle: &Battle, ctx: &HookContext, _data: &hook::PreSwitchOut) -> bool {
        battle
            .combatant(ctx.owner)
            .map(|combatant| combatant.status().is_some())
            .unwrap_or(false)
    }

    fn commit(
        &self,
        battle: &mut Battle,
        ctx: &HookContext,
        _data: &mut hook::PreSwitchOut,
    ) -> Result<(), Error> {
        if ctx.simulated {
            return Ok(());
        }
        battle.cure_status(ctx.owner)?;
        Ok(())
    }
}

/// Clears the weather the owner's ability set, as the owner leaves the
/// field.
pub struct ClearWeatherBeforeSwitch {
    weather: Weather,
}

hook_attr!(
    ClearWeatherBeforeSwitch,
    PreLeaveField,
    ClearWeatherBeforeSwitch
);

impl ClearWeatherBeforeSwitch {
    pub fn new(weather: Weather) -> Self {
        Self { weather }
    }
}

impl HookEffect<hook::PreLeaveField> for ClearWeatherBeforeSwitch {
    fn eligible(&self, battle: &Battle, _ctx: &HookContext, _data: &hook::PreLeaveField) -> bool {
        battle.field().weather() == Some(self.weather)
    }

    fn commit(
        &self,
        battle: &mut Battle,
        ctx: &HookContext,
        _data: &mut hook::PreLeaveField,
    ) -> Result<(), Error> {
        if ctx.simulated {
            return Ok(());
        }
        battle.clear_weather(Some(self.weather));
        Ok(())
    }
}

/// Lifts field-wide ability suppression as the owner leaves the field,
/// re-firing on-gain effects for the combatants that get their abilities
/// back.
pub struct LiftFieldSuppression;

hook_attr!(LiftFieldSuppression, PreLeaveField, LiftFieldSuppression);

impl HookEffect<hook::PreLeaveField> for LiftFieldSuppression {
    fn commit(
        &self,
        battle: &mut Battle,
        ctx: &HookContext,
        _data: &mut hook::PreLeaveField,
    ) -> Result<(), Error> {
        if ctx.simulated {
            return Ok(());
        }
        for other in battle.all_active() {
            if other == ctx.owner {
                continue;
            }
            let suppressed = battle.combatant(other)?.ability_suppressed();
            if !suppressed {
                continue;
            }
            battle.combatant_mut(other)?.set_ability_suppressed(false);
            ability_gained(battle, ctx.dex, other, AbilitySlot::Active);
            ability_gained(battle, ctx.dex, other, AbilitySlot::Passive);
        }
        Ok(())
    }

    fn trigger_message(
        &self,
        _battle: &Battle,
        _ctx: &HookContext,
        _data: &hook::PreLeaveField,
    ) -> Option<String> {
        Some("The effects of the neutralizing gas wore off!".to_owned())
    }
}

/// Drops the owner's illusion.
///
/// Marked as illusion-breaking in the registry, so it also fires when the
/// owner's ability is suppressed without leaving the field.
pub struct BreakIllusion;

hook_attr!(BreakIllusion, PreLeaveField, BreakIllusion);

impl HookEffect<hook::PreLeaveField> for BreakIllusion {
    fn eligible(&self, battle: &Battle, ctx: &HookContext, _data: &hook::PreLeaveField) -> bool {
        battle
            .combatant(ctx.owner)
            .map(|combatant| combatant.has_tag(BattlerTag::Illusion))
            .unwrap_or(false)
    }

    fn commit(
        &self,
        battle: &mut Battle,
        ctx: &HookContext,
        _data: &mut hook::PreLeaveField,
    ) -> Result<(), Error> {
        if ctx.simulated {
            return Ok(());
        }
        battle
            .combatant_mut(ctx.owner)?
            .remove_tag(BattlerTag::Illusion);
        let message = format!("{}'s illusion wore off!", battle.combatant_name(ctx.owner));
        battle.log_message(&message);
        Ok(())
    }
}
