use feral::battle::{
    Battle,
    BattleOptions,
    BattleType,
    CombatantData,
    CombatantHandle,
};
use feral_data::{
    AbilityId,
    PartialStatTable,
    Stat,
    Type,
};
use feral_prng::BattleRng;

/// Constructs [`CombatantData`] with sensible defaults for tests.
pub fn test_combatant(name: &str, types: &[Type], hp: u16, ability: AbilityId) -> CombatantData {
    let mut stats = PartialStatTable::default();
    stats.insert(Stat::HP, hp);
    stats.insert(Stat::Atk, 100);
    stats.insert(Stat::Def, 100);
    stats.insert(Stat::SpAtk, 100);
    stats.insert(Stat::SpDef, 100);
    stats.insert(Stat::Spe, 100);
    CombatantData {
        name: name.to_owned(),
        types: types.to_vec(),
        stats,
        ability,
        passive_ability: None,
        item: None,
        form: 0,
    }
}

/// A fluent builder for battles in tests.
///
/// Every combatant added to the builder is marked active when the battle is
/// built, and the battle's per-battle state is reset as if a new battle had
/// started.
pub struct TestBattleBuilder {
    options: BattleOptions,
    rng: Option<Box<dyn BattleRng>>,
    combatants: Vec<(usize, CombatantData)>,
}

impl TestBattleBuilder {
    pub fn new() -> Self {
        Self {
            options: BattleOptions::default(),
            rng: None,
            combatants: Vec::new(),
        }
    }

    pub fn with_battle_type(mut self, battle_type: BattleType) -> Self {
        self.options.battle_type = battle_type;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.options.seed = Some(seed);
        self
    }

    /// Replaces the battle's RNG stream entirely.
    pub fn with_rng(mut self, rng: Box<dyn BattleRng>) -> Self {
        self.rng = Some(rng);
        self
    }

    /// Adds an active combatant to the given side.
    pub fn add_combatant(mut self, side: usize, data: CombatantData) -> Self {
        self.combatants.push((side, data));
        self
    }

    /// Builds the battle, returning it along with the combatant handles in
    /// the order they were added.
    pub fn build(self) -> (Battle, Vec<CombatantHandle>) {
        let mut battle = match self.rng {
            Some(rng) => Battle::new_with_rng(self.options, rng),
            None => Battle::new(self.options),
        };
        let mut handles = Vec::new();
        for (side, data) in self.combatants {
            let handle = battle.join(side, data);
            handles.push(handle);
        }
        battle.start_battle();
        for &handle in &handles {
            battle
                .combatant_mut(handle)
                .expect("combatant was just registered")
                .set_active(true);
        }
        (battle, handles)
    }
}

impl Default for TestBattleBuilder {
    fn default() -> Self {
        Self::new()
    }
}
