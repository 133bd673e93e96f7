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
    Type,
};
use feral_test_utils::{
    TestBattleBuilder,
    test_combatant,
};

fn stat_change_count(battle: &feral::battle::Battle) -> usize {
    battle
        .queue()
        .phases()
        .filter(|phase| matches!(phase, Phase::StatStageChange { .. }))
        .count()
}

#[test]
fn fires_at_most_once_per_battle_and_resets_with_the_battle() {
    let dex = AbilityDex::new();
    let (mut battle, handles) = TestBattleBuilder::new()
        .add_combatant(
            0,
            test_combatant("Zacian", &[Type::Fairy], 100, AbilityId::IntrepidSword),
        )
        .build();
    let zacian = handles[0];

    let mut payload = Payload::new(zacian, hook::PostSummon);
    run_hook(&mut battle, &dex, &mut payload);
    assert_eq!(stat_change_count(&battle), 1);
    assert!(
        battle
            .combatant(zacian)
            .unwrap()
            .ability_applied(AbilityId::IntrepidSword)
    );

    // Any number of further dispatches within the same battle do nothing.
    for _ in 0..3 {
        let mut payload = Payload::new(zacian, hook::PostSummon);
        run_hook(&mut battle, &dex, &mut payload);
    }
    assert_eq!(stat_change_count(&battle), 1);

    // A new battle clears the applied set, so the ability is eligible
    // again.
    battle.start_battle();
    let mut payload = Payload::new(zacian, hook::PostSummon);
    run_hook(&mut battle, &dex, &mut payload);
    assert_eq!(stat_change_count(&battle), 2);
}

#[test]
fn simulated_dispatch_does_not_consume_the_once_per_battle_charge() {
    let dex = AbilityDex::new();
    let (mut battle, handles) = TestBattleBuilder::new()
        .add_combatant(
            0,
            test_combatant("Zacian", &[Type::Fairy], 100, AbilityId::IntrepidSword),
        )
        .build();
    let zacian = handles[0];

    let mut payload = Payload::new(zacian, hook::PostSummon).simulated();
    run_hook(&mut battle, &dex, &mut payload);
    assert!(
        !battle
            .combatant(zacian)
            .unwrap()
            .ability_applied(AbilityId::IntrepidSword)
    );

    let mut payload = Payload::new(zacian, hook::PostSummon);
    run_hook(&mut battle, &dex, &mut payload);
    assert_eq!(stat_change_count(&battle), 1);
}
