use feral::{
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
    MoveFlag,
    Type,
};
use feral_test_utils::{
    TestBattleBuilder,
    test_combatant,
};

fn dual_chop() -> MoveData {
    MoveData::new("Dual Chop", Type::Dragon, MoveCategory::Physical, 40)
        .with_flag(MoveFlag::Contact)
        .with_flag(MoveFlag::MultiHit)
}

#[test]
fn halves_damage_only_while_at_full_hp() {
    let dex = AbilityDex::new();
    let (mut battle, handles) = TestBattleBuilder::new()
        .add_combatant(
            0,
            test_combatant("Fraxure", &[Type::Dragon], 100, AbilityId::NoAbility),
        )
        .add_combatant(
            1,
            test_combatant("Dragonite", &[Type::Dragon], 100, AbilityId::Multiscale),
        )
        .build();
    let (fraxure, dragonite) = (handles[0], handles[1]);

    // First hit of the move: full HP, so the halving applies.
    let mut first_hit = Payload::new(dragonite, hook::PreDefend::new(fraxure, dual_chop()));
    run_hook(&mut battle, &dex, &mut first_hit);
    assert_eq!(first_hit.data.damage_multiplier, 0.5);

    assert_matches::assert_matches!(battle.deal_damage(dragonite, 30), Ok(30));

    // Second hit of the same move: eligibility is re-evaluated against
    // current HP, so the halving no longer applies.
    let mut second_hit = Payload::new(dragonite, hook::PreDefend::new(fraxure, dual_chop()));
    run_hook(&mut battle, &dex, &mut second_hit);
    assert_eq!(second_hit.data.damage_multiplier, 1.0);
}

#[test]
fn negated_while_abilities_are_ignored_field_wide() {
    let dex = AbilityDex::new();
    let (mut battle, handles) = TestBattleBuilder::new()
        .add_combatant(
            0,
            test_combatant("Fraxure", &[Type::Dragon], 100, AbilityId::NoAbility),
        )
        .add_combatant(
            1,
            test_combatant("Dragonite", &[Type::Dragon], 100, AbilityId::Multiscale),
        )
        .build();
    let (fraxure, dragonite) = (handles[0], handles[1]);
    battle.field_mut().set_abilities_ignored(true);

    let mut payload = Payload::new(dragonite, hook::PreDefend::new(fraxure, dual_chop()));
    run_hook(&mut battle, &dex, &mut payload);
    assert_eq!(payload.data.damage_multiplier, 1.0);
}
