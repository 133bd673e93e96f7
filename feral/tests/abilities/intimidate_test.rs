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
    Type,
};
use feral_test_utils::{
    TestBattleBuilder,
    assert_logs_since_start_eq,
    test_combatant,
};
use pretty_assertions::assert_eq;

fn stat_changes(battle: &feral::battle::Battle) -> Vec<Phase> {
    battle
        .queue()
        .phases()
        .filter(|phase| matches!(phase, Phase::StatStageChange { .. }))
        .cloned()
        .collect()
}

#[test]
fn intimidate_lowers_foe_attack_on_appearance() {
    let dex = AbilityDex::new();
    let (mut battle, handles) = TestBattleBuilder::new()
        .add_combatant(
            0,
            test_combatant("Growlithe", &[Type::Fire], 100, AbilityId::Intimidate),
        )
        .add_combatant(
            1,
            test_combatant("Rattata", &[Type::Normal], 100, AbilityId::NoAbility),
        )
        .build();
    let (growlithe, rattata) = (handles[0], handles[1]);

    let mut payload = Payload::new(growlithe, hook::PostSummon);
    run_hook(&mut battle, &dex, &mut payload);

    assert_eq!(
        stat_changes(&battle),
        vec![Phase::StatStageChange {
            target: rattata,
            self_inflicted: false,
            stats: vec![Boost::Atk],
            stages: -1,
        }],
    );
}

#[test]
fn intimidate_immunity_cancels_drop_and_announces() {
    let dex = AbilityDex::new();
    let (mut battle, handles) = TestBattleBuilder::new()
        .add_combatant(
            0,
            test_combatant("Growlithe", &[Type::Fire], 100, AbilityId::Intimidate),
        )
        .add_combatant(
            1,
            test_combatant("Slowpoke", &[Type::Water], 100, AbilityId::Oblivious),
        )
        .build();
    let growlithe = handles[0];

    let mut payload = Payload::new(growlithe, hook::PostSummon);
    run_hook(&mut battle, &dex, &mut payload);

    assert_eq!(stat_changes(&battle), Vec::<Phase>::new());
    assert_logs_since_start_eq(
        &battle,
        &[
            "battlestart",
            "activate|mon:Growlithe|ability:Intimidate",
            "activate|mon:Slowpoke|ability:Oblivious",
            "message|Slowpoke's Oblivious prevented it from being intimidated!",
            "abilityend|mon:Slowpoke",
            "abilityend|mon:Growlithe",
        ],
    );
}

#[test]
fn rattled_reacts_without_preventing_the_drop() {
    let dex = AbilityDex::new();
    let (mut battle, handles) = TestBattleBuilder::new()
        .add_combatant(
            0,
            test_combatant("Growlithe", &[Type::Fire], 100, AbilityId::Intimidate),
        )
        .add_combatant(
            1,
            test_combatant("Sudowoodo", &[Type::Rock], 100, AbilityId::Rattled),
        )
        .build();
    let (growlithe, sudowoodo) = (handles[0], handles[1]);

    let mut payload = Payload::new(growlithe, hook::PostSummon);
    run_hook(&mut battle, &dex, &mut payload);

    assert_eq!(
        stat_changes(&battle),
        vec![
            Phase::StatStageChange {
                target: sudowoodo,
                self_inflicted: true,
                stats: vec![Boost::Spe],
                stages: 1,
            },
            Phase::StatStageChange {
                target: sudowoodo,
                self_inflicted: false,
                stats: vec![Boost::Atk],
                stages: -1,
            },
        ],
    );
}

#[test]
fn guard_dog_overwrites_the_drop_with_a_boost() {
    let dex = AbilityDex::new();
    let (mut battle, handles) = TestBattleBuilder::new()
        .add_combatant(
            0,
            test_combatant("Growlithe", &[Type::Fire], 100, AbilityId::Intimidate),
        )
        .add_combatant(
            1,
            test_combatant("Mabosstiff", &[Type::Dark], 100, AbilityId::GuardDog),
        )
        .build();
    let (growlithe, mabosstiff) = (handles[0], handles[1]);

    let mut payload = Payload::new(growlithe, hook::PostSummon);
    run_hook(&mut battle, &dex, &mut payload);

    assert_eq!(
        stat_changes(&battle),
        vec![Phase::StatStageChange {
            target: mabosstiff,
            self_inflicted: true,
            stats: vec![Boost::Atk],
            stages: 1,
        }],
    );
}

#[test]
fn intimidate_hits_every_opposing_combatant_in_doubles() {
    let dex = AbilityDex::new();
    let (mut battle, handles) = TestBattleBuilder::new()
        .with_battle_type(feral::battle::BattleType::Doubles)
        .add_combatant(
            0,
            test_combatant("Growlithe", &[Type::Fire], 100, AbilityId::Intimidate),
        )
        .add_combatant(
            1,
            test_combatant("Rattata", &[Type::Normal], 100, AbilityId::NoAbility),
        )
        .add_combatant(
            1,
            test_combatant("Zigzagoon", &[Type::Normal], 100, AbilityId::NoAbility),
        )
        .build();
    let growlithe = handles[0];

    let mut payload = Payload::new(growlithe, hook::PostSummon);
    run_hook(&mut battle, &dex, &mut payload);

    let targets = stat_changes(&battle)
        .into_iter()
        .map(|phase| match phase {
            Phase::StatStageChange { target, .. } => target,
            _ => unreachable!(),
        })
        .collect::<Vec<_>>();
    assert_eq!(targets, vec![handles[1], handles[2]]);
}
