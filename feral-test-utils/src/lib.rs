mod battle_builder;
mod log_assert;
mod rng;

pub use battle_builder::{
    TestBattleBuilder,
    test_combatant,
};
pub use log_assert::{
    assert_logs_since_eq,
    assert_logs_since_start_eq,
};
pub use rng::ControlledBattleRng;
