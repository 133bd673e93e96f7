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
    MoveCategory,
    MoveData,
    MoveTarget,
    Type,
};
use feral_test_utils::{
    TestBattleBuilder,
    test_combatant,
};

fn thunderbolt() -> MoveData {
    MoveData::new("Thunderbolt", Type::Electric, MoveCategory::Special, 90)
}

fn setup() -> (
    feral::battle::Battle,
    feral::battle::CombatantHandle,
    feral::battle::CombatantHandle,
) {
    let (battle, handles) = TestBattleBuilder::new()
        .add_combatant(
            0,
            test_combatant("Pikachu", &[Type::Electric], 100, AbilityId::NoAbility),
        )
        .add_combatant(
            1,
            test_combatant("Lanturn", &[Type::Water], 100, AbilityId::VoltAbsorb),
        )
        .build();
    (battle, handles[0], handles[1])
}

#[test]
fn absorbs_the_hit_and_heals_a_quarter_when_damaged() {
    let dex = AbilityDex::new();
    let (mut battle, pikachu, lanturn) = setup();
    battle.combatant_mut(lanturn).unwrap().apply_damage(40);

    let mut payload = Payload::new(lanturn, hook::PreDefend::new(pikachu, thunderbolt()));
    run_hook(&mut battle, &dex, &mut payload);

    assert_eq!(payload.data.damage_multiplier, 0.0);
    assert!(payload.data.cancelled);
    let heals = battle
        .queue()
        .phases()
        .filter(|phase| matches!(phase, Phase::Heal { .. }))
        .cloned()
        .collect::<Vec<_>>();
    assert_eq!(
        heals,
        vec![Phase::Heal {
            target: lanturn,
            amount: 25,
            message: Some("Lanturn restored HP using its Volt Absorb!".to_owned()),
        }],
    );
}

#[test]
fn does_not_heal_at_full_hp() {
    let dex = AbilityDex::new();
    let (mut battle, pikachu, lanturn) = setup();

    let mut payload = Payload::new(lanturn, hook::PreDefend::new(pikachu, thunderbolt()));
    run_hook(&mut battle, &dex, &mut payload);

    assert_eq!(payload.data.damage_multiplier, 0.0);
    assert!(!payload.data.cancelled);
    assert!(
        battle
            .queue()
            .phases()
            .all(|phase| !matches!(phase, Phase::Heal { .. }))
    );
}

#[test]
fn field_targeting_moves_bypass_the_immunity() {
    let dex = AbilityDex::new();
    let (mut battle, pikachu, lanturn) = setup();

    let field_move = MoveData::new("Ion Deluge", Type::Electric, MoveCategory::Status, 0)
        .with_target(MoveTarget::Field);
    let mut payload = Payload::new(lanturn, hook::PreDefend::new(pikachu, field_move));
    run_hook(&mut battle, &dex, &mut payload);

    assert_eq!(payload.data.damage_multiplier, 1.0);
}

#[test]
fn other_move_types_are_unaffected() {
    let dex = AbilityDex::new();
    let (mut battle, pikachu, lanturn) = setup();

    let tackle = MoveData::new("Tackle", Type::Normal, MoveCategory::Physical, 40);
    let mut payload = Payload::new(lanturn, hook::PreDefend::new(pikachu, tackle));
    run_hook(&mut battle, &dex, &mut payload);

    assert_eq!(payload.data.damage_multiplier, 1.0);
    assert!(!payload.data.cancelled);
}
