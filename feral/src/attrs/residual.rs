use anyhow::{
    Error,
    Result,
};
use feral_data::{
    Boost,
    Terrain,
    Type,
    Weather,
};
use feral_prng::rand_util;

use crate::{
    attrs::{
        fraction_of,
        hook_attr,
    },
    battle::{
        Battle,
        Phase,
    },
    effect::{
        hook,
        HookContext,
        HookEffect,
    },
};

/// Changes the owner's stat stages at the end of every turn.
pub struct StatStageChangeAfterTurn {
    stats: Vec<Boost>,
    stages: i8,
}

hook_attr!(StatStageChangeAfterTurn, PostTurn, StatStageChangeAfterTurn);

impl StatStageChangeAfterTurn {
    pub fn new(stats: &[Boost], stages: i8) -> Self {
        Self {
            stats: stats.to_vec(),
            stages,
        }
    }
}

impl HookEffect<hook::PostTurn> for StatStageChangeAfterTurn {
    fn commit(
        &self,
        battle: &mut Battle,
        ctx: &HookContext,
        _data: &mut hook::PostTurn,
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

/// Chance to cure the owner's status at the end of every turn.
pub struct StatusHealAfterTurn {
    chance_numerator: u64,
    chance_denominator: u64,
}

hook_attr!(StatusHealAfterTurn, PostTurn, StatusHealAfterTurn);

impl StatusHealAfterTurn {
    pub fn new(chance_numerator: u64, chance_denominator: u64) -> Self {
        Self {
            chance_numerator,
            chance_denominator,
        }
    }

    /// Always cures, consuming no RNG.
    pub fn certain() -> Self {
        Self::new(1, 1)
    }
}

impl HookEffect<hook::PostTurn> for StatusHealAfterTurn {
    fn eligible(&self, battle: &Battle, ctx: &HookContext, _data: &hook::PostTurn) -> bool {
        battle
            .combatant(ctx.owner)
            .map(|combatant| combatant.status().is_some())
            .unwrap_or(false)
    }

    fn commit(
        &self,
        battle: &mut Battle,
        ctx: &HookContext,
        _data: &mut hook::PostTurn,
    ) -> Result<(), Error> {
        if ctx.simulated {
            return Ok(());
        }
        if self.chance_numerator < self.chance_denominator
            && !rand_util::chance(
                battle.rng_mut(),
                self.chance_numerator,
                self.chance_denominator,
            )
        {
            return Ok(());
        }
        if battle.cure_status(ctx.owner)?.is_some() {
            let message = format!(
                "{}'s {} cured its status!",
                battle.combatant_name(ctx.owner),
                ctx.ability_name(),
            );
            battle.log_message(&message);
        }
        Ok(())
    }
}

/// Heals the owner on each weather tick while one of the given weathers is
/// active.
pub struct WeatherLapseHeal {
    weathers: Vec<Weather>,
    numerator: u16,
    denominator: u16,
}

hook_attr!(WeatherLapseHeal, PostWeatherLapse, WeatherLapseHeal);

impl WeatherLapseHeal {
    pub fn new(weathers: &[Weather], numerator: u16, denominator: u16) -> Self {
        Self {
            weathers: weathers.to_vec(),
            numerator,
            denominator,
        }
    }
}

impl HookEffect<hook::PostWeatherLapse> for WeatherLapseHeal {
    fn eligible(&self, battle: &Battle, ctx: &HookContext, data: &hook::PostWeatherLapse) -> bool {
        if !self.weathers.contains(&data.weather) {
            return false;
        }
        battle
            .combatant(ctx.owner)
            .map(|combatant| !combatant.is_full_hp() && !combatant.fainted())
            .unwrap_or(false)
    }

    fn commit(
        &self,
        battle: &mut Battle,
        ctx: &HookContext,
        _data: &mut hook::PostWeatherLapse,
    ) -> Result<(), Error> {
        if ctx.simulated {
            return Ok(());
        }
        let (max_hp, name) = {
            let combatant = battle.combatant(ctx.owner)?;
            (combatant.max_hp(), combatant.name.clone())
        };
        battle.queue_mut().push_next(Phase::Heal {
            target: ctx.owner,
            amount: fraction_of(max_hp, self.numerator, self.denominator),
            message: Some(format!(
                "{name}'s {} restored its HP a little!",
                ctx.ability_name()
            )),
        });
        Ok(())
    }
}

/// Changes the owner's form whenever the weather changes.
pub struct FormChangeByWeather {
    form_for_weather: fn(Option<Weather>) -> u8,
}

hook_attr!(FormChangeByWeather, PostWeatherChange, FormChangeByWeather);

impl FormChangeByWeather {
    pub fn new(form_for_weather: fn(Option<Weather>) -> u8) -> Self {
        Self { form_for_weather }
    }
}

impl HookEffect<hook::PostWeatherChange> for FormChangeByWeather {
    fn eligible(&self, battle: &Battle, ctx: &HookContext, data: &hook::PostWeatherChange) -> bool {
        let form = (self.form_for_weather)(data.weather);
        battle
            .combatant(ctx.owner)
            .map(|combatant| combatant.form() != form)
            .unwrap_or(false)
    }

    fn commit(
        &self,
        battle: &mut Battle,
        ctx: &HookContext,
        data: &mut hook::PostWeatherChange,
    ) -> Result<(), Error> {
        if ctx.simulated {
            return Ok(());
        }
        battle.queue_mut().push_next(Phase::FormChange {
            target: ctx.owner,
            form: (self.form_for_weather)(data.weather),
        });
        Ok(())
    }
}

/// Changes the owner's type to match the active terrain, restoring it when
/// the terrain clears.
pub struct TypeChangeByTerrain;

hook_attr!(TypeChangeByTerrain, PostTerrainChange, TypeChangeByTerrain);

fn terrain_type(terrain: Terrain) -> Type {
    match terrain {
        Terrain::Electric => Type::Electric,
        Terrain::Grassy => Type::Grass,
        Terrain::Misty => Type::Fairy,
        Terrain::Psychic => Type::Psychic,
    }
}

impl HookEffect<hook::PostTerrainChange> for TypeChangeByTerrain {
    fn commit(
        &self,
        battle: &mut Battle,
        ctx: &HookContext,
        data: &mut hook::PostTerrainChange,
    ) -> Result<(), Error> {
        if ctx.simulated {
            return Ok(());
        }
        let name = battle.combatant_name(ctx.owner);
        match data.terrain {
            Some(terrain) => {
                let new_type = terrain_type(terrain);
                battle
                    .combatant_mut(ctx.owner)?
                    .set_types(vec![new_type]);
                battle.log_message(&format!("{name} transformed into the {new_type} type!"));
            }
            None => {
                battle.combatant_mut(ctx.owner)?.restore_types();
                battle.log_message(&format!("{name} returned to its original type!"));
            }
        }
        Ok(())
    }
}
