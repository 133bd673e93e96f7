use std::sync::Arc;

use feral_data::{
    AbilityId,
    BattlerTag,
    Boost,
    StatusEffect,
    Terrain,
    Type,
    Weather,
};

use crate::{
    abilities::Ability,
    attrs::{
        AbilitySwapOnContact,
        BreakIllusion,
        ClearWeatherBeforeSwitch,
        ContactDamage,
        ContactDamageOnFaint,
        ContactStatusEffect,
        CopyAbilityOnSummon,
        CopyAllyAbilityOnKnockOut,
        CopyDanceMove,
        CureStatusBeforeSwitch,
        ForceSwitchAtHpThreshold,
        FormChangeAtBattleInit,
        FormChangeByWeather,
        FormChangeByWeatherOnSummon,
        HealBeforeSwitch,
        IntimidateImmunity,
        IntimidateReaction,
        LiftFieldSuppression,
        LootAfterBattle,
        MessageOnSummon,
        MovePowerBoost,
        MoveTypeChange,
        ProtectStat,
        ReceivedMoveDamageMultiplier,
        RedirectTypedMoves,
        StatStageChangeAfterTurn,
        StatStageChangeOnSummon,
        StatStageChangeOnVictory,
        StatStageChangeReaction,
        StatusEffectOnHit,
        StatusHealAfterTurn,
        StatusImmunity,
        StealHeldItem,
        SuppressFieldAbilities,
        TagBeforeSummon,
        TagImmunity,
        TagOnItemLoss,
        TerrainChangeOnSummon,
        TrapOpponents,
        TypeChangeByTerrain,
        TypeImmunityHeal,
        WeatherChangeOnHit,
        WeatherChangeOnSummon,
        WeatherLapseHeal,
    },
    effect::{
        Attribute,
        AttributeKind,
        Condition,
    },
};

/// The ability registry: a dense table mapping every
/// [`AbilityId`] to its [`Ability`] definition.
///
/// Built once at startup and read-only thereafter.
pub struct AbilityDex {
    abilities: Vec<Ability>,
}

impl AbilityDex {
    /// Builds the registry.
    pub fn new() -> Self {
        Self {
            abilities: AbilityId::ALL.iter().map(|&id| build_ability(id)).collect(),
        }
    }

    /// Looks up an ability definition.
    pub fn ability(&self, id: AbilityId) -> &Ability {
        &self.abilities[id.index()]
    }

    /// The number of registered abilities.
    pub fn len(&self) -> usize {
        self.abilities.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.abilities.is_empty()
    }
}

impl Default for AbilityDex {
    fn default() -> Self {
        Self::new()
    }
}

fn forecast_form(weather: Option<Weather>) -> u8 {
    match weather {
        Some(weather) if weather.is_sunny() => 1,
        Some(weather) if weather.is_raining() => 2,
        Some(Weather::Hail) => 3,
        _ => 0,
    }
}

fn build_ability(id: AbilityId) -> Ability {
    match id {
        AbilityId::NoAbility => Ability::new(id),
        AbilityId::Aftermath => Ability::new(id)
            .attr(ContactDamageOnFaint::new(1, 4).attr())
            .bypass_faint(),
        AbilityId::ArenaTrap => Ability::new(id).attr(TrapOpponents.attr()),
        AbilityId::ClearBody => Ability::new(id).attr(ProtectStat::all().attr()).ignorable(),
        AbilityId::Dancer => Ability::new(id).attr(CopyDanceMove.attr()),
        AbilityId::Defiant => Ability::new(id).attr(
            StatStageChangeReaction::new(&[Boost::Atk], 2).attr(),
        ),
        AbilityId::Drizzle => Ability::new(id).attr(
            WeatherChangeOnSummon::new(Weather::Rain).attr().on_gain(),
        ),
        AbilityId::Drought => Ability::new(id).attr(
            WeatherChangeOnSummon::new(Weather::Sun).attr().on_gain(),
        ),
        AbilityId::EffectSpore => Ability::new(id).attr(
            ContactStatusEffect::new(
                10,
                &[
                    StatusEffect::Poison,
                    StatusEffect::Paralysis,
                    StatusEffect::Sleep,
                ],
            )
            .exempt_types(&[Type::Grass])
            .attr(),
        ),
        AbilityId::ElectricSurge => Ability::new(id).attr(
            TerrainChangeOnSummon::new(Terrain::Electric)
                .attr()
                .on_gain(),
        ),
        AbilityId::Forecast => Ability::new(id)
            .attr(
                FormChangeByWeatherOnSummon::new(forecast_form)
                    .attr()
                    .form_trigger(),
            )
            .attr(
                FormChangeByWeather::new(forecast_form)
                    .attr()
                    .form_trigger(),
            )
            .uncopiable(),
        AbilityId::Galvanize => Ability::new(id).attr(
            MoveTypeChange::new(Type::Normal, Type::Electric, 1.2)
                .attr()
                .hidden(),
        ),
        AbilityId::GuardDog => Ability::new(id).attr(
            IntimidateReaction::new(&[Boost::Atk], 1).overwrites().attr(),
        ),
        AbilityId::Hydration => Ability::new(id).conditional_attr(
            Condition::weather_one_of(&[Weather::Rain, Weather::HeavyRain]),
            StatusHealAfterTurn::certain().attr(),
        ),
        AbilityId::Illusion => Ability::new(id)
            .attr(TagBeforeSummon::new(BattlerTag::Illusion).attr().hidden())
            .attr(BreakIllusion.attr().breaks_illusion())
            .uncopiable()
            .unreplaceable()
            .bypass_faint(),
        AbilityId::Insomnia => Ability::new(id)
            .attr(StatusImmunity::new(&[StatusEffect::Sleep]).attr())
            .ignorable(),
        AbilityId::Intimidate => Ability::new(id).attr(
            StatStageChangeOnSummon::new(&[Boost::Atk], -1)
                .intimidate()
                .attr()
                .on_gain(),
        ),
        AbilityId::IntrepidSword => Ability::new(id)
            .attr(
                StatStageChangeOnSummon::new(&[Boost::Atk], 1)
                    .self_target()
                    .attr()
                    .on_gain(),
            )
            .condition(Condition::once_per_battle(AbilityId::IntrepidSword)),
        AbilityId::LightningRod => Ability::new(id).attr(
            RedirectTypedMoves::new(Type::Electric).attr().hidden(),
        ),
        AbilityId::Limber => Ability::new(id)
            .attr(StatusImmunity::new(&[StatusEffect::Paralysis]).attr())
            .ignorable(),
        AbilityId::Magician => Ability::new(id).attr(StealHeldItem.attr()),
        AbilityId::Mimicry => Ability::new(id).attr(TypeChangeByTerrain.attr()),
        AbilityId::MoldBreaker => Ability::new(id).attr(
            MessageOnSummon::new("breaks the mold!").attr(),
        ),
        AbilityId::Moxie => Ability::new(id).attr(
            StatStageChangeOnVictory::new(&[Boost::Atk], 1).attr(),
        ),
        AbilityId::Multiscale => Ability::new(id)
            .attr(
                ReceivedMoveDamageMultiplier::new(
                    Arc::new(|battle, target, _, _| {
                        battle
                            .combatant(target)
                            .map(|combatant| combatant.is_full_hp())
                            .unwrap_or(false)
                    }),
                    0.5,
                )
                .attr(),
            )
            .ignorable(),
        AbilityId::NaturalCure => Ability::new(id).attr(CureStatusBeforeSwitch.attr()),
        AbilityId::NeutralizingGas => Ability::new(id)
            .attr(SuppressFieldAbilities.attr().on_gain())
            .attr(LiftFieldSuppression.attr())
            .unsuppressible()
            .uncopiable()
            .unreplaceable(),
        AbilityId::Oblivious => Ability::new(id)
            .attr(IntimidateImmunity.attr())
            .ignorable(),
        AbilityId::OwnTempo => Ability::new(id)
            .attr(TagImmunity::new(&[BattlerTag::Confusion]).attr())
            .attr(IntimidateImmunity.attr())
            .ignorable(),
        AbilityId::Pickup => Ability::new(id).attr(LootAfterBattle::new(10, "Berry").attr()),
        AbilityId::PoisonTouch => Ability::new(id).attr(
            StatusEffectOnHit::new(30, &[StatusEffect::Poison])
                .contact_only()
                .attr(),
        ),
        AbilityId::PrimordialSea => Ability::new(id)
            .attr(
                WeatherChangeOnSummon::new(Weather::HeavyRain)
                    .attr()
                    .on_gain(),
            )
            .attr(ClearWeatherBeforeSwitch::new(Weather::HeavyRain).attr()),
        AbilityId::RainDish => Ability::new(id).attr(
            WeatherLapseHeal::new(&[Weather::Rain, Weather::HeavyRain], 1, 16).attr(),
        ),
        AbilityId::Rattled => Ability::new(id).attr(
            IntimidateReaction::new(&[Boost::Spe], 1).attr(),
        ),
        AbilityId::Receiver => Ability::new(id)
            .attr(CopyAllyAbilityOnKnockOut.attr())
            .uncopiable(),
        AbilityId::Regenerator => Ability::new(id).attr(HealBeforeSwitch::new(1, 3).attr()),
        AbilityId::RoughSkin => Ability::new(id).attr(ContactDamage::new(1, 8).attr()),
        AbilityId::SandSpit => Ability::new(id).attr(
            WeatherChangeOnHit::new(Weather::Sandstorm).attr(),
        ),
        AbilityId::Schooling => Ability::new(id).attr(
            FormChangeAtBattleInit::new(1, 4, 1, 0).attr().form_trigger(),
        ),
        AbilityId::ShedSkin => Ability::new(id).attr(StatusHealAfterTurn::new(1, 3).attr()),
        AbilityId::SpeedBoost => Ability::new(id).attr(
            StatStageChangeAfterTurn::new(&[Boost::Spe], 1).attr(),
        ),
        AbilityId::Static => Ability::new(id).attr(
            ContactStatusEffect::new(30, &[StatusEffect::Paralysis]).attr(),
        ),
        AbilityId::StickyHold => {
            Ability::new(id).attr(Attribute::marker(AttributeKind::BlockItemTheft))
        }
        AbilityId::Technician => Ability::new(id).attr(
            MovePowerBoost::new(Arc::new(|_, _, data| data.power <= 60), 1.5)
                .attr()
                .hidden(),
        ),
        AbilityId::Torrent => Ability::new(id).attr(
            MovePowerBoost::new(
                Arc::new(|battle, owner, data| {
                    data.move_type == Type::Water
                        && battle
                            .combatant(owner)
                            .map(|combatant| {
                                u32::from(combatant.hp()) * 3 <= u32::from(combatant.max_hp())
                            })
                            .unwrap_or(false)
                }),
                1.5,
            )
            .attr()
            .hidden(),
        ),
        AbilityId::Trace => Ability::new(id)
            .attr(CopyAbilityOnSummon.attr())
            .uncopiable(),
        AbilityId::Unburden => Ability::new(id).attr(
            TagOnItemLoss::new(BattlerTag::Unburden).attr().hidden(),
        ),
        AbilityId::VoltAbsorb => Ability::new(id)
            .attr(TypeImmunityHeal::new(Type::Electric).attr())
            .ignorable(),
        AbilityId::WanderingSpirit => Ability::new(id).attr(AbilitySwapOnContact.attr()),
        AbilityId::WaterAbsorb => Ability::new(id)
            .attr(TypeImmunityHeal::new(Type::Water).attr())
            .ignorable(),
        AbilityId::WimpOut => Ability::new(id).attr(ForceSwitchAtHpThreshold::new(1, 2).attr()),
    }
}
