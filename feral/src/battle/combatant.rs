use std::fmt;

use feral_data::{
    AbilityId,
    BattlerTag,
    Boost,
    FastHashSet,
    Id,
    PartialBoostTable,
    PartialStatTable,
    Stat,
    StatusEffect,
    Type,
};
use serde::{
    Deserialize,
    Serialize,
};

use crate::abilities::AbilitySlot;

/// A handle to a combatant registered in a
/// [`Battle`][`crate::battle::Battle`].
///
/// Handles stay valid for the lifetime of the battle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CombatantHandle(pub(crate) usize);

impl fmt::Display for CombatantHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Static data for constructing a [`Combatant`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CombatantData {
    /// Name of the combatant.
    pub name: String,
    /// The combatant's elemental types.
    pub types: Vec<Type>,
    /// Calculated stats, including HP.
    pub stats: PartialStatTable,
    /// The combatant's primary ability.
    pub ability: AbilityId,
    /// The combatant's passive ability, layered beneath the primary.
    #[serde(default)]
    pub passive_ability: Option<AbilityId>,
    /// Held item.
    #[serde(default)]
    pub item: Option<Id>,
    /// Form index, for species with multiple forms.
    #[serde(default)]
    pub form: u8,
}

/// An individual combatant in a battle.
///
/// Owns the combatant's battle state, including the small slice of ability
/// state this engine cares about: the primary and passive ability, a
/// temporary override from copy/swap/transform effects, a suppression flag,
/// and the per-battle applied-abilities set used for once-per-battle gating.
pub struct Combatant {
    /// Name of the combatant.
    pub name: String,

    base_types: Vec<Type>,
    types: Vec<Type>,
    stats: PartialStatTable,
    boosts: PartialBoostTable,
    hp: u16,
    max_hp: u16,
    status: Option<StatusEffect>,
    tags: FastHashSet<BattlerTag>,
    item: Option<Id>,
    form: u8,

    ability: AbilityId,
    passive_ability: Option<AbilityId>,
    override_ability: Option<AbilityId>,
    ability_suppressed: bool,
    applied_abilities: FastHashSet<AbilityId>,

    side: usize,
    active: bool,
}

impl Combatant {
    /// Creates a new combatant on the given side.
    pub fn new(data: CombatantData, side: usize) -> Self {
        let max_hp = data.stats.get(&Stat::HP).copied().unwrap_or(1);
        Self {
            name: data.name,
            base_types: data.types.clone(),
            types: data.types,
            stats: data.stats,
            boosts: PartialBoostTable::default(),
            hp: max_hp,
            max_hp,
            status: None,
            tags: FastHashSet::default(),
            item: data.item,
            form: data.form,
            ability: data.ability,
            passive_ability: data.passive_ability,
            override_ability: None,
            ability_suppressed: false,
            applied_abilities: FastHashSet::default(),
            side,
            active: false,
        }
    }

    /// The side the combatant fights on.
    pub fn side(&self) -> usize {
        self.side
    }

    /// Whether the combatant is on the field.
    pub fn active(&self) -> bool {
        self.active
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    /// Current HP.
    pub fn hp(&self) -> u16 {
        self.hp
    }

    /// Maximum HP.
    pub fn max_hp(&self) -> u16 {
        self.max_hp
    }

    /// Whether the combatant is at full HP.
    pub fn is_full_hp(&self) -> bool {
        self.hp == self.max_hp
    }

    /// Whether the combatant has fainted.
    pub fn fainted(&self) -> bool {
        self.hp == 0
    }

    /// Applies damage, returning the amount actually dealt.
    pub fn apply_damage(&mut self, amount: u16) -> u16 {
        let dealt = amount.min(self.hp);
        self.hp -= dealt;
        dealt
    }

    /// Restores HP, returning the amount actually healed.
    pub fn apply_heal(&mut self, amount: u16) -> u16 {
        let healed = amount.min(self.max_hp - self.hp);
        self.hp += healed;
        healed
    }

    /// The combatant's current elemental types.
    pub fn types(&self) -> &[Type] {
        &self.types
    }

    /// Whether the combatant is of the given type.
    pub fn has_type(&self, typ: Type) -> bool {
        self.types.contains(&typ)
    }

    /// Overwrites the combatant's types (terrain mimicry, type-changing
    /// effects).
    pub fn set_types(&mut self, types: Vec<Type>) {
        self.types = types;
    }

    /// Restores the combatant's original types.
    pub fn restore_types(&mut self) {
        self.types = self.base_types.clone();
    }

    /// Whether the combatant touches the ground.
    pub fn is_grounded(&self) -> bool {
        !self.has_type(Type::Flying)
    }

    /// A calculated stat value.
    pub fn stat(&self, stat: Stat) -> u16 {
        self.stats.get(&stat).copied().unwrap_or(0)
    }

    /// The stage of a boostable stat, in `[-6, 6]`.
    pub fn boost_stage(&self, boost: Boost) -> i8 {
        self.boosts.get(&boost).copied().unwrap_or(0)
    }

    /// Applies a stat stage delta, clamping to `[-6, 6]`.
    pub fn apply_boost(&mut self, boost: Boost, stages: i8) -> i8 {
        let current = self.boost_stage(boost);
        let new = (current + stages).clamp(-6, 6);
        self.boosts.insert(boost, new);
        new - current
    }

    /// The combatant's non-volatile status.
    pub fn status(&self) -> Option<StatusEffect> {
        self.status
    }

    pub fn set_status(&mut self, status: StatusEffect) {
        self.status = Some(status);
    }

    pub fn cure_status(&mut self) -> Option<StatusEffect> {
        self.status.take()
    }

    /// Whether the combatant has the given battler tag.
    pub fn has_tag(&self, tag: BattlerTag) -> bool {
        self.tags.contains(&tag)
    }

    /// Adds a battler tag, returning whether it was newly added.
    pub fn add_tag(&mut self, tag: BattlerTag) -> bool {
        self.tags.insert(tag)
    }

    /// Removes a battler tag, returning whether it was present.
    pub fn remove_tag(&mut self, tag: BattlerTag) -> bool {
        self.tags.remove(&tag)
    }

    /// The held item, if any.
    pub fn item(&self) -> Option<&Id> {
        self.item.as_ref()
    }

    /// Removes and returns the held item.
    pub fn take_item(&mut self) -> Option<Id> {
        self.item.take()
    }

    /// Gives the combatant an item. Fails if it already holds one.
    pub fn give_item(&mut self, item: Id) -> bool {
        if self.item.is_some() {
            return false;
        }
        self.item = Some(item);
        true
    }

    /// The combatant's current form index.
    pub fn form(&self) -> u8 {
        self.form
    }

    pub fn set_form(&mut self, form: u8) {
        self.form = form;
    }

    /// The ability backing the given slot, if the slot is filled.
    ///
    /// The active slot reflects a temporary override (copy/swap/transform)
    /// when one is present.
    pub fn ability_in_slot(&self, slot: AbilitySlot) -> Option<AbilityId> {
        match slot {
            AbilitySlot::Active => Some(self.active_ability()),
            AbilitySlot::Passive => self.passive_ability,
        }
    }

    /// The effective primary ability.
    pub fn active_ability(&self) -> AbilityId {
        self.override_ability.unwrap_or(self.ability)
    }

    /// The primary ability, ignoring any override.
    pub fn base_ability(&self) -> AbilityId {
        self.ability
    }

    /// The passive ability, if the combatant has one.
    pub fn passive_ability(&self) -> Option<AbilityId> {
        self.passive_ability
    }

    /// Temporarily overrides the primary ability.
    pub fn set_override_ability(&mut self, ability: AbilityId) {
        self.override_ability = Some(ability);
    }

    /// Clears a temporary ability override.
    pub fn clear_override_ability(&mut self) {
        self.override_ability = None;
    }

    /// Whether the combatant's abilities are suppressed.
    pub fn ability_suppressed(&self) -> bool {
        self.ability_suppressed
    }

    pub fn set_ability_suppressed(&mut self, suppressed: bool) {
        self.ability_suppressed = suppressed;
    }

    /// Records that the given ability applied an effect this battle.
    pub fn record_applied_ability(&mut self, ability: AbilityId) {
        self.applied_abilities.insert(ability);
    }

    /// Whether the given ability has applied an effect this battle.
    pub fn ability_applied(&self, ability: AbilityId) -> bool {
        self.applied_abilities.contains(&ability)
    }

    /// Resets all per-battle state, as happens when a new battle starts.
    pub fn reset_battle_data(&mut self) {
        self.applied_abilities.clear();
        self.boosts.clear();
        self.tags.clear();
        self.override_ability = None;
        self.ability_suppressed = false;
        self.types = self.base_types.clone();
        self.hp = self.max_hp;
        self.status = None;
    }
}
