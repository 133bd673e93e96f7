use anyhow::{
    Error,
    Result,
};
use feral_data::{
    AbilityId,
    BattlerTag,
    Boost,
    Terrain,
    Weather,
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
        CombatantHandle,
        Phase,
    },
    effect::{
        ability_gained,
        ability_suppressed,
        hook,
        run_hook,
        HookContext,
        HookEffect,
        Payload,
    },
};

/// Changes stat stages when the owner enters the field.
///
/// With `intimidate` set, each opposing target first gets an
/// [`Intimidate`][`hook::Intimidate`] immunity/reaction pass, and targets
/// that cancel the drop are skipped.
pub struct StatStageChangeOnSummon {
    stats: Vec<Boost>,
    stages: i8,
    self_target: bool,
    intimidate: bool,
}

hook_attr!(StatStageChangeOnSummon, PostSummon, StatStageChangeOnSummon);

impl StatStageChangeOnSummon {
    pub fn new(stats: &[Boost], stages: i8) -> Self {
        Self {
            stats: stats.to_vec(),
            stages,
            self_target: false,
            intimidate: false,
        }
    }

    /// Targets the owner instead of its opponents.
    pub fn self_target(mut self) -> Self {
        self.self_target = true;
        self
    }

    /// Marks the drop as an intimidation, subject to the immunity pass.
    pub fn intimidate(mut self) -> Self {
        self.intimidate = true;
        self
    }
}

impl HookEffect<hook::PostSummon> for StatStageChangeOnSummon {
    fn commit(
        &self,
        battle: &mut Battle,
        ctx: &HookContext,
        _data: &mut hook::PostSummon,
    ) -> Result<(), Error> {
        if ctx.simulated {
            return Ok(());
        }
        if self.self_target {
            battle.queue_mut().push_next(Phase::StatStageChange {
                target: ctx.owner,
                self_inflicted: true,
                stats: self.stats.clone(),
                stages: self.stages,
            });
            return Ok(());
        }
        for opponent in battle.active_foes(ctx.owner) {
            let mut cancelled = false;
            if self.intimidate {
                let mut payload = Payload::new(
                    opponent,
                    hook::Intimidate {
                        source: ctx.owner,
                        cancelled: false,
                    },
                );
                run_hook(battle, ctx.dex, &mut payload);
                cancelled = payload.data.cancelled;
            }
            if !cancelled {
                battle.queue_mut().push_next(Phase::StatStageChange {
                    target: opponent,
                    self_inflicted: false,
                    stats: self.stats.clone(),
                    stages: self.stages,
                });
            }
        }
        Ok(())
    }
}

/// Sets the weather when the owner enters the field.
pub struct WeatherChangeOnSummon {
    weather: Weather,
}

hook_attr!(WeatherChangeOnSummon, PostSummon, WeatherChangeOnSummon);

impl WeatherChangeOnSummon {
    pub fn new(weather: Weather) -> Self {
        Self { weather }
    }
}

impl HookEffect<hook::PostSummon> for WeatherChangeOnSummon {
    fn eligible(&self, battle: &Battle, _ctx: &HookContext, _data: &hook::PostSummon) -> bool {
        battle.field().can_set_weather(self.weather)
    }

    fn commit(
        &self,
        battle: &mut Battle,
        ctx: &HookContext,
        _data: &mut hook::PostSummon,
    ) -> Result<(), Error> {
        if ctx.simulated {
            return Ok(());
        }
        battle.set_weather(self.weather);
        Ok(())
    }
}

/// Sets the terrain when the owner enters the field.
pub struct TerrainChangeOnSummon {
    terrain: Terrain,
}

hook_attr!(TerrainChangeOnSummon, PostSummon, TerrainChangeOnSummon);

impl TerrainChangeOnSummon {
    pub fn new(terrain: Terrain) -> Self {
        Self { terrain }
    }
}

impl HookEffect<hook::PostSummon> for TerrainChangeOnSummon {
    fn eligible(&self, battle: &Battle, _ctx: &HookContext, _data: &hook::PostSummon) -> bool {
        battle.field().terrain() != Some(self.terrain)
    }

    fn commit(
        &self,
        battle: &mut Battle,
        ctx: &HookContext,
        _data: &mut hook::PostSummon,
    ) -> Result<(), Error> {
        if ctx.simulated {
            return Ok(());
        }
        battle.set_terrain(self.terrain);
        Ok(())
    }
}

/// Announces a message when the owner enters the field.
pub struct MessageOnSummon {
    message: &'static str,
}

hook_attr!(MessageOnSummon, PostSummon, MessageOnSummon);

impl MessageOnSummon {
    pub fn new(message: &'static str) -> Self {
        Self { message }
    }
}

impl HookEffect<hook::PostSummon> for MessageOnSummon {
    fn commit(
        &self,
        _battle: &mut Battle,
        _ctx: &HookContext,
        _data: &mut hook::PostSummon,
    ) -> Result<(), Error> {
        Ok(())
    }

    fn trigger_message(
        &self,
        battle: &Battle,
        ctx: &HookContext,
        _data: &hook::PostSummon,
    ) -> Option<String> {
        Some(format!(
            "{} {}",
            battle.combatant_name(ctx.owner),
            self.message
        ))
    }
}

/// Copies a random opponent's ability onto the owner when it enters the
/// field.
pub struct CopyAbilityOnSummon;

hook_attr!(CopyAbilityOnSummon, PostSummon, CopyAbilityOnSummon);

impl CopyAbilityOnSummon {
    fn candidates(&self, battle: &Battle, ctx: &HookContext) -> Vec<(CombatantHandle, AbilityId)> {
        battle
            .active_foes(ctx.owner)
            .into_iter()
            .filter_map(|foe| {
                let ability = battle.combatant(foe).ok()?.active_ability();
                if ability == AbilityId::NoAbility {
                    return None;
                }
                if ctx.dex.ability(ability).flags().uncopiable {
                    return None;
                }
                Some((foe, ability))
            })
            .collect()
    }
}

impl HookEffect<hook::PostSummon> for CopyAbilityOnSummon {
    fn eligible(&self, battle: &Battle, ctx: &HookContext, _data: &hook::PostSummon) -> bool {
        !self.candidates(battle, ctx).is_empty()
    }

    fn commit(
        &self,
        battle: &mut Battle,
        ctx: &HookContext,
        _data: &mut hook::PostSummon,
    ) -> Result<(), Error> {
        if ctx.simulated {
            return Ok(());
        }
        let candidates = self.candidates(battle, ctx);
        let Some(&(target, ability)) = rand_util::sample_slice(battle.rng_mut(), &candidates)
        else {
            return Ok(());
        };
        battle.combatant_mut(ctx.owner)?.set_override_ability(ability);
        let message = format!(
            "{} copied {}'s {}!",
            battle.combatant_name(ctx.owner),
            battle.combatant_name(target),
            ability.name(),
        );
        battle.log_message(&message);
        ability_gained(battle, ctx.dex, ctx.owner, AbilitySlot::Active);
        Ok(())
    }
}

/// Suppresses every other combatant's abilities while the owner is on the
/// field.
///
/// The matching [`LiftFieldSuppression`][`crate::attrs::LiftFieldSuppression`]
/// attribute undoes this when the owner leaves the field.
pub struct SuppressFieldAbilities;

hook_attr!(SuppressFieldAbilities, PostSummon, SuppressFieldAbilities);

impl HookEffect<hook::PostSummon> for SuppressFieldAbilities {
    fn commit(
        &self,
        battle: &mut Battle,
        ctx: &HookContext,
        _data: &mut hook::PostSummon,
    ) -> Result<(), Error> {
        if ctx.simulated {
            return Ok(());
        }
        for other in battle.all_active() {
            if other == ctx.owner {
                continue;
            }
            // Teardown runs while the ability still applies.
            ability_suppressed(battle, ctx.dex, other, AbilitySlot::Active);
            battle.combatant_mut(other)?.set_ability_suppressed(true);
        }
        Ok(())
    }

    fn trigger_message(
        &self,
        _battle: &Battle,
        _ctx: &HookContext,
        _data: &hook::PostSummon,
    ) -> Option<String> {
        Some("A neutralizing gas filled the area!".to_owned())
    }
}

/// Changes the owner's form based on the current weather when it enters the
/// field.
pub struct FormChangeByWeatherOnSummon {
    form_for_weather: fn(Option<Weather>) -> u8,
}

hook_attr!(
    FormChangeByWeatherOnSummon,
    PostSummon,
    FormChangeByWeatherOnSummon
);

impl FormChangeByWeatherOnSummon {
    pub fn new(form_for_weather: fn(Option<Weather>) -> u8) -> Self {
        Self { form_for_weather }
    }
}

impl HookEffect<hook::PostSummon> for FormChangeByWeatherOnSummon {
    fn eligible(&self, battle: &Battle, ctx: &HookContext, _data: &hook::PostSummon) -> bool {
        let form = (self.form_for_weather)(battle.field().weather());
        battle
            .combatant(ctx.owner)
            .map(|combatant| combatant.form() != form)
            .unwrap_or(false)
    }

    fn commit(
        &self,
        battle: &mut Battle,
        ctx: &HookContext,
        _data: &mut hook::PostSummon,
    ) -> Result<(), Error> {
        if ctx.simulated {
            return Ok(());
        }
        let form = (self.form_for_weather)(battle.field().weather());
        battle.queue_mut().push_next(Phase::FormChange {
            target: ctx.owner,
            form,
        });
        Ok(())
    }
}

/// Attaches a battler tag before the owner is revealed on the field.
pub struct TagBeforeSummon {
    tag: BattlerTag,
}

hook_attr!(TagBeforeSummon, PreSummon, TagBeforeSummon);

impl TagBeforeSummon {
    pub fn new(tag: BattlerTag) -> Self {
        Self { tag }
    }
}

impl HookEffect<hook::PreSummon> for TagBeforeSummon {
    fn eligible(&self, battle: &Battle, ctx: &HookContext, _data: &hook::PreSummon) -> bool {
        battle
            .combatant(ctx.owner)
            .map(|combatant| !combatant.has_tag(self.tag))
            .unwrap_or(false)
    }

    fn commit(
        &self,
        battle: &mut Battle,
        ctx: &HookContext,
        _data: &mut hook::PreSummon,
    ) -> Result<(), Error> {
        if ctx.simulated {
            return Ok(());
        }
        battle.combatant_mut(ctx.owner)?.add_tag(self.tag);
        Ok(())
    }
}

/// Picks the owner's form from its HP when the battle is initialized.
pub struct FormChangeAtBattleInit {
    hp_numerator: u16,
    hp_denominator: u16,
    form_above: u8,
    form_below: u8,
}

hook_attr!(FormChangeAtBattleInit, PostBattleInit, FormChangeAtBattleInit);

impl FormChangeAtBattleInit {
    /// The owner takes `form_above` while its HP is strictly above the
    /// given fraction of its maximum, and `form_below` otherwise.
    pub fn new(hp_numerator: u16, hp_denominator: u16, form_above: u8, form_below: u8) -> Self {
        Self {
            hp_numerator,
            hp_denominator,
            form_above,
            form_below,
        }
    }

    fn target_form(&self, battle: &Battle, owner: CombatantHandle) -> Option<u8> {
        let combatant = battle.combatant(owner).ok()?;
        let threshold = fraction_of(combatant.max_hp(), self.hp_numerator, self.hp_denominator);
        Some(if combatant.hp() > threshold {
            self.form_above
        } else {
            self.form_below
        })
    }
}

impl HookEffect<hook::PostBattleInit> for FormChangeAtBattleInit {
    fn eligible(&self, battle: &Battle, ctx: &HookContext, _data: &hook::PostBattleInit) -> bool {
        match self.target_form(battle, ctx.owner) {
            Some(form) => battle
                .combatant(ctx.owner)
                .map(|combatant| combatant.form() != form)
                .unwrap_or(false),
            None => false,
        }
    }

    fn commit(
        &self,
        battle: &mut Battle,
        ctx: &HookContext,
        _data: &mut hook::PostBattleInit,
    ) -> Result<(), Error> {
        if ctx.simulated {
            return Ok(());
        }
        if let Some(form) = self.target_form(battle, ctx.owner) {
            battle.queue_mut().push_next(Phase::FormChange {
                target: ctx.owner,
                form,
            });
        }
        Ok(())
    }
}
