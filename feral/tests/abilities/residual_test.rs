use feral::{
    battle::Phase,
    dex::AbilityDex,
    effect::{
        Payload,
        hook,
        run_hook,
    },
};
use feral_data::{
    AbilityId,
    Boost,
    MoveCategory,
    MoveData,
    MoveFlag,
    StatusEffect,
    Terrain,
    Type,
    Weather,
};
use feral_test_utils::{
    ControlledBattleRng,
    TestBattleBuilder,
    test_combatant,
};

#[test]
fn speed_boost_raises_speed_each_turn() {
    let dex = AbilityDex::new();
    let (mut battle, handles) = TestBattleBuilder::new()
        .add_combatant(
            0,
            test_combatant("Yanma", &[Type::Bug], 100, AbilityId::SpeedBoost),
        )
        .build();
    let yanma = handles[0];

    let mut payload = Payload::new(yanma, hook::PostTurn);
    run_hook(&mut battle, &dex, &mut payload);

    assert!(battle.queue().phases().any(|phase| matches!(
        phase,
        Phase::StatStageChange { target, self_inflicted: true, stages: 1, stats }
            if *target == yanma && stats == &vec![Boost::Spe]
    )));
}

#[test]
fn shed_skin_cures_status_on_a_successful_roll() {
    let dex = AbilityDex::new();
    let mut rng = ControlledBattleRng::new(Some(3));
    rng.insert_fake_value(1, 0);
    let (mut battle, handles) = TestBattleBuilder::new()
        .with_rng(Box::new(rng))
        .add_combatant(
            0,
            test_combatant("Arbok", &[Type::Poison], 100, AbilityId::ShedSkin),
        )
        .build();
    let arbok = handles[0];
    battle.set_status(arbok, StatusEffect::Burn).unwrap();

    let mut payload = Payload::new(arbok, hook::PostTurn);
    run_hook(&mut battle, &dex, &mut payload);

    assert_eq!(battle.combatant(arbok).unwrap().status(), None);
    assert!(
        battle
            .log()
            .since_start()
            .any(|entry| entry == "message|Arbok's Shed Skin cured its status!")
    );
}

#[test]
fn hydration_extra_condition_gates_commit_entirely() {
    let dex = AbilityDex::new();
    let (mut battle, handles) = TestBattleBuilder::new()
        .add_combatant(
            0,
            test_combatant("Vaporeon", &[Type::Water], 100, AbilityId::Hydration),
        )
        .build();
    let vaporeon = handles[0];
    battle.set_status(vaporeon, StatusEffect::Burn).unwrap();

    // No rain: the attribute's extra condition fails, so nothing runs, no
    // message is produced, and nothing is recorded as applied.
    let mut payload = Payload::new(vaporeon, hook::PostTurn);
    run_hook(&mut battle, &dex, &mut payload);
    assert_eq!(
        battle.combatant(vaporeon).unwrap().status(),
        Some(StatusEffect::Burn),
    );
    assert!(
        !battle
            .combatant(vaporeon)
            .unwrap()
            .ability_applied(AbilityId::Hydration)
    );

    battle.set_weather(Weather::Rain);
    let mut payload = Payload::new(vaporeon, hook::PostTurn);
    run_hook(&mut battle, &dex, &mut payload);
    assert_eq!(battle.combatant(vaporeon).unwrap().status(), None);
    assert!(
        battle
            .combatant(vaporeon)
            .unwrap()
            .ability_applied(AbilityId::Hydration)
    );
}

#[test]
fn rain_dish_heals_on_rain_ticks_when_damaged() {
    let dex = AbilityDex::new();
    let (mut battle, handles) = TestBattleBuilder::new()
        .add_combatant(
            0,
            test_combatant("Lotad", &[Type::Grass], 100, AbilityId::RainDish),
        )
        .build();
    let lotad = handles[0];
    battle.set_weather(Weather::Rain);

    // At full HP, nothing to heal.
    let mut payload = Payload::new(
        lotad,
        hook::PostWeatherLapse {
            weather: Weather::Rain,
        },
    );
    run_hook(&mut battle, &dex, &mut payload);
    assert!(battle.queue().is_empty());

    battle.combatant_mut(lotad).unwrap().apply_damage(50);
    let mut payload = Payload::new(
        lotad,
        hook::PostWeatherLapse {
            weather: Weather::Rain,
        },
    );
    run_hook(&mut battle, &dex, &mut payload);
    assert!(battle.queue().phases().any(|phase| matches!(
        phase,
        Phase::Heal { target, amount: 6, .. } if *target == lotad
    )));
}

#[test]
fn wimp_out_triggers_only_on_the_hit_that_crosses_half_hp() {
    let dex = AbilityDex::new();
    let (mut battle, handles) = TestBattleBuilder::new()
        .add_combatant(
            0,
            test_combatant("Wimpod", &[Type::Bug], 100, AbilityId::WimpOut),
        )
        .build();
    let wimpod = handles[0];

    // 100 -> 51: still above half.
    battle.combatant_mut(wimpod).unwrap().apply_damage(49);
    let mut payload = Payload::new(
        wimpod,
        hook::PostDamage {
            damage: 49,
            source: None,
        },
    );
    run_hook(&mut battle, &dex, &mut payload);
    assert!(battle.queue().is_empty());

    // 51 -> 50: crosses the threshold.
    battle.combatant_mut(wimpod).unwrap().apply_damage(1);
    let mut payload = Payload::new(
        wimpod,
        hook::PostDamage {
            damage: 1,
            source: None,
        },
    );
    run_hook(&mut battle, &dex, &mut payload);
    assert!(battle.queue().phases().any(|phase| matches!(
        phase,
        Phase::SwitchOut { target, forced: true } if *target == wimpod
    )));

    // Further damage below the threshold does not re-trigger.
    let queue_len = battle.queue().len();
    battle.combatant_mut(wimpod).unwrap().apply_damage(10);
    let mut payload = Payload::new(
        wimpod,
        hook::PostDamage {
            damage: 10,
            source: None,
        },
    );
    run_hook(&mut battle, &dex, &mut payload);
    assert_eq!(battle.queue().len(), queue_len);
}

#[test]
fn moxie_boosts_attack_after_a_knock_out() {
    let dex = AbilityDex::new();
    let (mut battle, handles) = TestBattleBuilder::new()
        .add_combatant(
            0,
            test_combatant("Krookodile", &[Type::Ground], 100, AbilityId::Moxie),
        )
        .build();
    let krookodile = handles[0];

    let mut payload = Payload::new(krookodile, hook::PostVictory);
    run_hook(&mut battle, &dex, &mut payload);

    assert!(battle.queue().phases().any(|phase| matches!(
        phase,
        Phase::StatStageChange { target, stages: 1, stats, .. }
            if *target == krookodile && stats == &vec![Boost::Atk]
    )));
}

#[test]
fn defiant_reacts_to_foe_inflicted_drops_only() {
    let dex = AbilityDex::new();
    let (mut battle, handles) = TestBattleBuilder::new()
        .add_combatant(
            0,
            test_combatant("Pawniard", &[Type::Dark], 100, AbilityId::Defiant),
        )
        .build();
    let pawniard = handles[0];

    let mut payload = Payload::new(
        pawniard,
        hook::PostStatStageChange {
            stats: vec![Boost::Atk],
            stages: -1,
            self_inflicted: false,
        },
    );
    run_hook(&mut battle, &dex, &mut payload);
    assert!(battle.queue().phases().any(|phase| matches!(
        phase,
        Phase::StatStageChange { target, stages: 2, .. } if *target == pawniard
    )));

    let queue_len = battle.queue().len();
    let mut payload = Payload::new(
        pawniard,
        hook::PostStatStageChange {
            stats: vec![Boost::Def],
            stages: -1,
            self_inflicted: true,
        },
    );
    run_hook(&mut battle, &dex, &mut payload);
    assert_eq!(battle.queue().len(), queue_len);
}

#[test]
fn clear_body_cancels_incoming_drops() {
    let dex = AbilityDex::new();
    let (mut battle, handles) = TestBattleBuilder::new()
        .add_combatant(
            0,
            test_combatant("Metang", &[Type::Steel], 100, AbilityId::ClearBody),
        )
        .build();
    let metang = handles[0];

    let mut payload = Payload::new(
        metang,
        hook::PreStatStageChange {
            stat: Some(Boost::Atk),
            stages: -1,
            self_inflicted: false,
            cancelled: false,
        },
    );
    run_hook(&mut battle, &dex, &mut payload);
    assert!(payload.data.cancelled);

    let mut payload = Payload::new(
        metang,
        hook::PreStatStageChange {
            stat: Some(Boost::Atk),
            stages: 1,
            self_inflicted: false,
            cancelled: false,
        },
    );
    run_hook(&mut battle, &dex, &mut payload);
    assert!(!payload.data.cancelled);
}

#[test]
fn pickup_finds_an_item_after_the_battle() {
    let dex = AbilityDex::new();
    let mut rng = ControlledBattleRng::new(Some(4));
    rng.insert_fake_value(1, 0);
    let (mut battle, handles) = TestBattleBuilder::new()
        .with_rng(Box::new(rng))
        .add_combatant(
            0,
            test_combatant("Zigzagoon", &[Type::Normal], 100, AbilityId::Pickup),
        )
        .build();
    let zigzagoon = handles[0];

    let mut payload = Payload::new(zigzagoon, hook::PostBattle);
    run_hook(&mut battle, &dex, &mut payload);

    assert!(battle.combatant(zigzagoon).unwrap().item().is_some());
}

#[test]
fn primordial_sea_weather_resists_ordinary_setters_until_its_source_leaves() {
    let dex = AbilityDex::new();
    let (mut battle, handles) = TestBattleBuilder::new()
        .add_combatant(
            0,
            test_combatant("Kyogre", &[Type::Water], 100, AbilityId::PrimordialSea),
        )
        .add_combatant(
            1,
            test_combatant("Politoed", &[Type::Water], 100, AbilityId::Drizzle),
        )
        .build();
    let (kyogre, politoed) = (handles[0], handles[1]);

    let mut payload = Payload::new(kyogre, hook::PostSummon);
    run_hook(&mut battle, &dex, &mut payload);
    assert_eq!(battle.field().weather(), Some(Weather::HeavyRain));

    // Ordinary rain cannot replace the primal weather; Drizzle is not even
    // eligible, so it does not announce or record itself.
    let mut payload = Payload::new(politoed, hook::PostSummon);
    run_hook(&mut battle, &dex, &mut payload);
    assert_eq!(battle.field().weather(), Some(Weather::HeavyRain));
    assert!(
        !battle
            .combatant(politoed)
            .unwrap()
            .ability_applied(AbilityId::Drizzle)
    );

    let mut payload = Payload::new(kyogre, hook::PreLeaveField);
    run_hook(&mut battle, &dex, &mut payload);
    assert_eq!(battle.field().weather(), None);
}

#[test]
fn forecast_queues_a_form_change_when_the_weather_shifts() {
    let dex = AbilityDex::new();
    let (mut battle, handles) = TestBattleBuilder::new()
        .add_combatant(
            0,
            test_combatant("Castform", &[Type::Normal], 100, AbilityId::Forecast),
        )
        .build();
    let castform = handles[0];

    let mut payload = Payload::new(
        castform,
        hook::PostWeatherChange {
            weather: Some(Weather::Rain),
        },
    );
    run_hook(&mut battle, &dex, &mut payload);
    assert!(battle.queue().phases().any(|phase| matches!(
        phase,
        Phase::FormChange { target, form: 2 } if *target == castform
    )));

    // Already in the matching form: no further change.
    battle.combatant_mut(castform).unwrap().set_form(2);
    let queue_len = battle.queue().len();
    let mut payload = Payload::new(
        castform,
        hook::PostWeatherChange {
            weather: Some(Weather::Rain),
        },
    );
    run_hook(&mut battle, &dex, &mut payload);
    assert_eq!(battle.queue().len(), queue_len);
}

#[test]
fn mimicry_tracks_the_terrain_and_restores_on_clear() {
    let dex = AbilityDex::new();
    let (mut battle, handles) = TestBattleBuilder::new()
        .add_combatant(
            0,
            test_combatant("Stunfisk", &[Type::Ground], 100, AbilityId::Mimicry),
        )
        .build();
    let stunfisk = handles[0];

    let mut payload = Payload::new(
        stunfisk,
        hook::PostTerrainChange {
            terrain: Some(Terrain::Electric),
        },
    );
    run_hook(&mut battle, &dex, &mut payload);
    assert_eq!(battle.combatant(stunfisk).unwrap().types(), &[Type::Electric]);

    let mut payload = Payload::new(stunfisk, hook::PostTerrainChange { terrain: None });
    run_hook(&mut battle, &dex, &mut payload);
    assert_eq!(battle.combatant(stunfisk).unwrap().types(), &[Type::Ground]);
}

#[test]
fn schooling_picks_its_form_at_battle_init() {
    let dex = AbilityDex::new();
    let (mut battle, handles) = TestBattleBuilder::new()
        .add_combatant(
            0,
            test_combatant("Wishiwashi", &[Type::Water], 100, AbilityId::Schooling),
        )
        .build();
    let wishiwashi = handles[0];

    let mut payload = Payload::new(wishiwashi, hook::PostBattleInit);
    run_hook(&mut battle, &dex, &mut payload);
    assert!(battle.queue().phases().any(|phase| matches!(
        phase,
        Phase::FormChange { target, form: 1 } if *target == wishiwashi
    )));
}

#[test]
fn natural_cure_and_regenerator_fire_before_switching_out() {
    let dex = AbilityDex::new();
    let (mut battle, handles) = TestBattleBuilder::new()
        .with_battle_type(feral::battle::BattleType::Doubles)
        .add_combatant(
            0,
            test_combatant("Starmie", &[Type::Water], 100, AbilityId::NaturalCure),
        )
        .add_combatant(
            0,
            test_combatant("Slowbro", &[Type::Water], 100, AbilityId::Regenerator),
        )
        .build();
    let (starmie, slowbro) = (handles[0], handles[1]);

    battle.set_status(starmie, StatusEffect::Paralysis).unwrap();
    let mut payload = Payload::new(starmie, hook::PreSwitchOut);
    run_hook(&mut battle, &dex, &mut payload);
    assert_eq!(battle.combatant(starmie).unwrap().status(), None);

    battle.combatant_mut(slowbro).unwrap().apply_damage(60);
    let mut payload = Payload::new(slowbro, hook::PreSwitchOut);
    run_hook(&mut battle, &dex, &mut payload);
    assert_eq!(battle.combatant(slowbro).unwrap().hp(), 73);
}

#[test]
fn dancer_copies_dance_moves_of_others() {
    let dex = AbilityDex::new();
    let (mut battle, handles) = TestBattleBuilder::new()
        .add_combatant(
            0,
            test_combatant("Oricorio", &[Type::Fire], 100, AbilityId::Dancer),
        )
        .add_combatant(
            1,
            test_combatant("Bellossom", &[Type::Grass], 100, AbilityId::NoAbility),
        )
        .build();
    let (oricorio, bellossom) = (handles[0], handles[1]);

    let dance = MoveData::new("Quiver Dance", Type::Bug, MoveCategory::Status, 0)
        .with_flag(MoveFlag::Dance);
    let mut payload = Payload::new(
        oricorio,
        hook::PostMoveUsed {
            user: bellossom,
            mov: dance.clone(),
            targets: vec![bellossom],
        },
    );
    run_hook(&mut battle, &dex, &mut payload);
    assert!(battle.queue().phases().any(|phase| matches!(
        phase,
        Phase::UseMove { user, mov, .. } if *user == oricorio && mov.name == "Quiver Dance"
    )));

    // The dancer does not copy its own dance.
    let queue_len = battle.queue().len();
    let mut payload = Payload::new(
        oricorio,
        hook::PostMoveUsed {
            user: oricorio,
            mov: dance,
            targets: vec![bellossom],
        },
    );
    run_hook(&mut battle, &dex, &mut payload);
    assert_eq!(battle.queue().len(), queue_len);
}
