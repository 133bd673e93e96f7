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
};
use feral_test_utils::{
    ControlledBattleRng,
    TestBattleBuilder,
    test_combatant,
};

fn tackle() -> MoveData {
    MoveData::new("Tackle", Type::Normal, MoveCategory::Physical, 40).with_flag(MoveFlag::Contact)
}

fn effect_spore_battle(seed: u64) -> (
    feral::battle::Battle,
    feral::battle::CombatantHandle,
    feral::battle::CombatantHandle,
) {
    let mut rng = ControlledBattleRng::new(Some(seed));
    // Force the 10% activation roll to pass; the 3-way status choice stays
    // on the seeded stream.
    rng.insert_fake_value(1, 0);
    let (battle, handles) = TestBattleBuilder::new()
        .with_rng(Box::new(rng))
        .add_combatant(
            0,
            test_combatant("Rattata", &[Type::Normal], 100, AbilityId::NoAbility),
        )
        .add_combatant(
            1,
            test_combatant("Breloom", &[Type::Fighting], 100, AbilityId::EffectSpore),
        )
        .build();
    (battle, handles[0], handles[1])
}

fn run_contact_hit(
    battle: &mut feral::battle::Battle,
    dex: &AbilityDex,
    attacker: feral::battle::CombatantHandle,
    defender: feral::battle::CombatantHandle,
    simulated: bool,
) {
    let mut payload = Payload::new(
        defender,
        hook::PostDefend::new(attacker, tackle(), HitOutcome::Hit),
    );
    if simulated {
        payload = payload.simulated();
    }
    run_hook(battle, dex, &mut payload);
}

#[test]
fn same_seed_chooses_the_same_status_every_run() {
    let dex = AbilityDex::new();
    let mut statuses = Vec::new();
    for _ in 0..3 {
        let (mut battle, rattata, breloom) = effect_spore_battle(571);
        run_contact_hit(&mut battle, &dex, rattata, breloom, false);
        let status = battle.combatant(rattata).unwrap().status();
        assert!(status.is_some());
        statuses.push(status);
    }
    assert_eq!(statuses[0], statuses[1]);
    assert_eq!(statuses[1], statuses[2]);
}

#[test]
fn simulated_dispatch_does_not_advance_the_stream() {
    let dex = AbilityDex::new();

    // Canonical run: one real dispatch.
    let (mut canonical, rattata, breloom) = effect_spore_battle(571);
    run_contact_hit(&mut canonical, &dex, rattata, breloom, false);
    let canonical_status = canonical.combatant(rattata).unwrap().status();

    // Probed run: simulated dispatches first, then the real one. The real
    // dispatch must still see the seed's canonical draws.
    let (mut probed, rattata, breloom) = effect_spore_battle(571);
    run_contact_hit(&mut probed, &dex, rattata, breloom, true);
    run_contact_hit(&mut probed, &dex, rattata, breloom, true);
    assert_eq!(probed.combatant(rattata).unwrap().status(), None);
    run_contact_hit(&mut probed, &dex, rattata, breloom, false);
    assert_eq!(probed.combatant(rattata).unwrap().status(), canonical_status);
}

#[test]
fn static_paralyzes_on_contact() {
    let dex = AbilityDex::new();
    let mut rng = ControlledBattleRng::new(Some(1));
    rng.insert_fake_value(1, 0);
    let (mut battle, handles) = TestBattleBuilder::new()
        .with_rng(Box::new(rng))
        .add_combatant(
            0,
            test_combatant("Rattata", &[Type::Normal], 100, AbilityId::NoAbility),
        )
        .add_combatant(
            1,
            test_combatant("Pikachu", &[Type::Electric], 100, AbilityId::Static),
        )
        .build();
    let (rattata, pikachu) = (handles[0], handles[1]);

    run_contact_hit(&mut battle, &dex, rattata, pikachu, false);
    assert_eq!(
        battle.combatant(rattata).unwrap().status(),
        Some(StatusEffect::Paralysis),
    );
}

#[test]
fn does_not_trigger_on_non_contact_moves() {
    let dex = AbilityDex::new();
    let mut rng = ControlledBattleRng::new(Some(1));
    rng.insert_fake_value(1, 0);
    let (mut battle, handles) = TestBattleBuilder::new()
        .with_rng(Box::new(rng))
        .add_combatant(
            0,
            test_combatant("Rattata", &[Type::Normal], 100, AbilityId::NoAbility),
        )
        .add_combatant(
            1,
            test_combatant("Pikachu", &[Type::Electric], 100, AbilityId::Static),
        )
        .build();
    let (rattata, pikachu) = (handles[0], handles[1]);

    let swift = MoveData::new("Swift", Type::Normal, MoveCategory::Special, 60);
    let mut payload = Payload::new(
        pikachu,
        hook::PostDefend::new(rattata, swift, HitOutcome::Hit),
    );
    run_hook(&mut battle, &dex, &mut payload);
    assert_eq!(battle.combatant(rattata).unwrap().status(), None);
    assert!(
        !battle
            .combatant(pikachu)
            .unwrap()
            .ability_applied(AbilityId::Static)
    );
}

#[test]
fn grass_types_are_exempt_from_effect_spore() {
    let dex = AbilityDex::new();
    let mut rng = ControlledBattleRng::new(Some(1));
    rng.insert_fake_value(1, 0);
    let (mut battle, handles) = TestBattleBuilder::new()
        .with_rng(Box::new(rng))
        .add_combatant(
            0,
            test_combatant("Tangela", &[Type::Grass], 100, AbilityId::NoAbility),
        )
        .add_combatant(
            1,
            test_combatant("Breloom", &[Type::Fighting], 100, AbilityId::EffectSpore),
        )
        .build();
    let (tangela, breloom) = (handles[0], handles[1]);

    run_contact_hit(&mut battle, &dex, tangela, breloom, false);
    assert_eq!(battle.combatant(tangela).unwrap().status(), None);
}
