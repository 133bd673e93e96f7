use feral::battle::Battle;
use pretty_assertions::assert_eq;

/// Asserts that the battle's event log, since the start of the battle,
/// matches the expected entries exactly.
#[track_caller]
pub fn assert_logs_since_start_eq(battle: &Battle, expected: &[&str]) {
    let got = battle.log().since_start().collect::<Vec<_>>();
    assert_eq!(got, expected);
}

/// Asserts that the battle's event log, starting at the given index,
/// matches the expected entries exactly.
#[track_caller]
pub fn assert_logs_since_eq(battle: &Battle, index: usize, expected: &[&str]) {
    let got = battle.log().since(index).collect::<Vec<_>>();
    assert_eq!(got, expected);
}
