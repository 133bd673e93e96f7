use feral::{
    dex::AbilityDex,
    effect::{
        HitOutcome,
        Payload,
        hook,
        run_hook,
    },
};
use feral_data::{
    AbilityId,
    MoveCategory,
    MoveData,
    MoveFlag,
    StatusEffect,
    Type,
    Weather,
};
use feral_test_utils::{
    ControlledBattleRng,
    TestBattleBuilder,
    test_combatant,
};

fn tackle() -> MoveData {
    MoveData::new("Tackle", Type::Normal, MoveCategory::Physical, 40).with_flag(MoveFlag::Contact)
}

#[test]
fn galvanize_converts_normal_moves_to_electric_with_a_power_bonus() {
    let dex = AbilityDex::new();
    let (mut battle, handles) = TestBattleBuilder::new()
        .add_combatant(
            0,
            test_combatant("Geodude", &[Type::Rock], 100, AbilityId::Galvanize),
        )
        .add_combatant(
            1,
            test_combatant("Rattata", &[Type::Normal], 100, AbilityId::NoAbility),
        )
        .build();
    let (geodude, rattata) = (handles[0], handles[1]);

    let mut payload = Payload::new(geodude, hook::PreAttack::new(Some(rattata), tackle()));
    run_hook(&mut battle, &dex, &mut payload);
    assert_eq!(payload.data.move_type, Type::Electric);
    assert_eq!(payload.data.power, 48);

    let ember = MoveData::new("Ember", Type::Fire, MoveCategory::Special, 40);
    let mut payload = Payload::new(geodude, hook::PreAttack::new(Some(rattata), ember));
    run_hook(&mut battle, &dex, &mut payload);
    assert_eq!(payload.data.move_type, Type::Fire);
    assert_eq!(payload.data.power, 40);
}

#[test]
fn technician_boosts_weak_moves_only() {
    let dex = AbilityDex::new();
    let (mut battle, handles) = TestBattleBuilder::new()
        .add_combatant(
            0,
            test_combatant("Scyther", &[Type::Bug], 100, AbilityId::Technician),
        )
        .add_combatant(
            1,
            test_combatant("Rattata", &[Type::Normal], 100, AbilityId::NoAbility),
        )
        .build();
    let (scyther, rattata) = (handles[0], handles[1]);

    let mut payload = Payload::new(scyther, hook::PreAttack::new(Some(rattata), tackle()));
    run_hook(&mut battle, &dex, &mut payload);
    assert_eq!(payload.data.power, 60);

    let slash = MoveData::new("Slash", Type::Normal, MoveCategory::Physical, 70);
    let mut payload = Payload::new(scyther, hook::PreAttack::new(Some(rattata), slash));
    run_hook(&mut battle, &dex, &mut payload);
    assert_eq!(payload.data.power, 70);
}

#[test]
fn torrent_boosts_water_moves_in_a_pinch() {
    let dex = AbilityDex::new();
    let (mut battle, handles) = TestBattleBuilder::new()
        .add_combatant(
            0,
            test_combatant("Mudkip", &[Type::Water], 100, AbilityId::Torrent),
        )
        .add_combatant(
            1,
            test_combatant("Rattata", &[Type::Normal], 100, AbilityId::NoAbility),
        )
        .build();
    let (mudkip, rattata) = (handles[0], handles[1]);
    let water_gun = MoveData::new("Water Gun", Type::Water, MoveCategory::Special, 40);

    // Healthy: no boost.
    let mut payload = Payload::new(mudkip, hook::PreAttack::new(Some(rattata), water_gun.clone()));
    run_hook(&mut battle, &dex, &mut payload);
    assert_eq!(payload.data.power, 40);

    // Below a third of max HP: boosted.
    battle.combatant_mut(mudkip).unwrap().apply_damage(70);
    let mut payload = Payload::new(mudkip, hook::PreAttack::new(Some(rattata), water_gun));
    run_hook(&mut battle, &dex, &mut payload);
    assert_eq!(payload.data.power, 60);
}

#[test]
fn rough_skin_hurts_contact_attackers() {
    let dex = AbilityDex::new();
    let (mut battle, handles) = TestBattleBuilder::new()
        .add_combatant(
            0,
            test_combatant("Rattata", &[Type::Normal], 100, AbilityId::NoAbility),
        )
        .add_combatant(
            1,
            test_combatant("Garchomp", &[Type::Dragon], 100, AbilityId::RoughSkin),
        )
        .build();
    let (rattata, garchomp) = (handles[0], handles[1]);

    let mut payload = Payload::new(
        garchomp,
        hook::PostDefend::new(rattata, tackle(), HitOutcome::Hit),
    );
    run_hook(&mut battle, &dex, &mut payload);
    assert_eq!(battle.combatant(rattata).unwrap().hp(), 88);
    assert!(
        battle
            .log()
            .since_start()
            .any(|entry| entry == "message|Rattata was hurt by Garchomp's Rough Skin!")
    );

    // Non-contact hits are safe.
    let swift = MoveData::new("Swift", Type::Normal, MoveCategory::Special, 60);
    let mut payload = Payload::new(
        garchomp,
        hook::PostDefend::new(rattata, swift, HitOutcome::Hit),
    );
    run_hook(&mut battle, &dex, &mut payload);
    assert_eq!(battle.combatant(rattata).unwrap().hp(), 88);
}

#[test]
fn sand_spit_kicks_up_a_sandstorm_when_hit() {
    let dex = AbilityDex::new();
    let (mut battle, handles) = TestBattleBuilder::new()
        .add_combatant(
            0,
            test_combatant("Rattata", &[Type::Normal], 100, AbilityId::NoAbility),
        )
        .add_combatant(
            1,
            test_combatant("Silicobra", &[Type::Ground], 100, AbilityId::SandSpit),
        )
        .build();
    let (rattata, silicobra) = (handles[0], handles[1]);

    let mut payload = Payload::new(
        silicobra,
        hook::PostDefend::new(rattata, tackle(), HitOutcome::Hit),
    );
    run_hook(&mut battle, &dex, &mut payload);
    assert_eq!(battle.field().weather(), Some(Weather::Sandstorm));
}

#[test]
fn poison_touch_poisons_through_contact_moves_only() {
    let dex = AbilityDex::new();
    let mut rng = ControlledBattleRng::new(Some(9));
    rng.insert_fake_value(1, 0);
    let (mut battle, handles) = TestBattleBuilder::new()
        .with_rng(Box::new(rng))
        .add_combatant(
            0,
            test_combatant("Muk", &[Type::Poison], 100, AbilityId::PoisonTouch),
        )
        .add_combatant(
            1,
            test_combatant("Rattata", &[Type::Normal], 100, AbilityId::NoAbility),
        )
        .build();
    let (muk, rattata) = (handles[0], handles[1]);

    // Non-contact: nothing happens, no RNG consumed.
    let swift = MoveData::new("Swift", Type::Normal, MoveCategory::Special, 60);
    let mut payload = Payload::new(
        muk,
        hook::PostAttack {
            defender: rattata,
            mov: swift,
            outcome: HitOutcome::Hit,
        },
    );
    run_hook(&mut battle, &dex, &mut payload);
    assert_eq!(battle.combatant(rattata).unwrap().status(), None);

    let mut payload = Payload::new(
        muk,
        hook::PostAttack {
            defender: rattata,
            mov: tackle(),
            outcome: HitOutcome::Hit,
        },
    );
    run_hook(&mut battle, &dex, &mut payload);
    assert_eq!(
        battle.combatant(rattata).unwrap().status(),
        Some(StatusEffect::Poison),
    );
}
