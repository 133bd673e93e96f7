use std::fmt;

use feral_data::{
    AbilityId,
    BattlerTag,
    Boost,
    MoveData,
    StatusEffect,
    Terrain,
    Type,
    Weather,
};

use crate::{
    abilities::AbilitySlot,
    battle::CombatantHandle,
    dex::AbilityDex,
};

/// A hook category: a named point in battle resolution at which the
/// dispatcher queries matching attributes.
///
/// Every attribute is bound to exactly one hook category, and every category
/// has exactly one payload type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hook {
    PostBattleInit,
    PreSummon,
    PostSummon,
    PreDefend,
    PostDefend,
    PreAttack,
    PostAttack,
    PreStatStageChange,
    PostStatStageChange,
    PostWeatherChange,
    PostWeatherLapse,
    PostTerrainChange,
    PostTurn,
    PreSwitchOut,
    PreLeaveField,
    PostFaint,
    PostKnockOut,
    PostVictory,
    PostBattle,
    PostDamage,
    PostMoveUsed,
    PostItemLost,
    CheckTrapped,
    RedirectMove,
    PreSetStatus,
    PreApplyBattlerTag,
    Intimidate,
}

impl fmt::Display for Hook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// The outcome of a single hit, as seen by post-hit hooks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitOutcome {
    Hit,
    SuperEffective,
    NotVeryEffective,
    NoEffect,
}

impl HitOutcome {
    /// Whether the hit dealt damage.
    pub fn dealt_damage(&self) -> bool {
        !matches!(self, Self::NoEffect)
    }
}

/// A hook event payload.
///
/// Carries the dispatch header (designated combatant, passive-selector,
/// simulated flag) plus the hook-specific `data`. A payload lives for
/// exactly one dispatch call, but callers may reuse one payload instance
/// across many calls: the dispatcher restores the passive-selector to
/// "unset" before returning.
pub struct Payload<T> {
    /// The acting/affected combatant. A payload with no combatant is
    /// silently skipped; the effect source may have already left the field.
    pub combatant: Option<CombatantHandle>,
    /// The passive-selector. When unset, the dispatcher runs the full
    /// algorithm once per slot.
    pub slot: Option<AbilitySlot>,
    /// Simulated mode: no state mutation, no RNG consumption, no messages.
    /// Output fields in `data` may still be set, for AI scoring.
    pub simulated: bool,
    /// Trigger messages produced during the dispatch, in order, whether or
    /// not the dispatch was simulated.
    pub messages: Vec<String>,
    /// Hook-specific payload fields.
    pub data: T,
}

impl<T> Payload<T> {
    /// Creates a payload targeting the given combatant.
    pub fn new(combatant: CombatantHandle, data: T) -> Self {
        Self {
            combatant: Some(combatant),
            slot: None,
            simulated: false,
            messages: Vec::new(),
            data,
        }
    }

    /// Creates a payload with no designated combatant.
    pub fn detached(data: T) -> Self {
        Self {
            combatant: None,
            slot: None,
            simulated: false,
            messages: Vec::new(),
            data,
        }
    }

    /// Marks the payload as simulated.
    pub fn simulated(mut self) -> Self {
        self.simulated = true;
        self
    }

    /// Pins the payload to a single ability slot.
    pub fn for_slot(mut self, slot: AbilitySlot) -> Self {
        self.slot = Some(slot);
        self
    }
}

/// Per-attribute dispatch context handed to eligibility and commit calls.
///
/// Carries the registry reference so that committing attributes can run
/// nested dispatches (immunity passes, on-gain re-evaluation).
pub struct HookContext<'d> {
    /// The ability registry.
    pub dex: &'d AbilityDex,
    /// The combatant that owns the running attribute.
    pub owner: CombatantHandle,
    /// The ability the attribute belongs to.
    pub ability: AbilityId,
    /// The slot the ability occupies on the owner.
    pub slot: AbilitySlot,
    /// Whether the dispatch is simulated.
    pub simulated: bool,
}

impl HookContext<'_> {
    /// The display name of the running ability.
    pub fn ability_name(&self) -> &'static str {
        self.ability.name()
    }
}

/// Payload data for [`Hook::PostBattleInit`].
#[derive(Debug, Default, Clone)]
pub struct PostBattleInit;

/// Payload data for [`Hook::PreSummon`].
#[derive(Debug, Default, Clone)]
pub struct PreSummon;

/// Payload data for [`Hook::PostSummon`].
#[derive(Debug, Default, Clone)]
pub struct PostSummon;

/// Payload data for [`Hook::PreDefend`]: an incoming hit about to be
/// applied.
#[derive(Debug, Clone)]
pub struct PreDefend {
    /// The attacking combatant.
    pub attacker: CombatantHandle,
    /// The incoming move.
    pub mov: MoveData,
    /// The effective type of the incoming move.
    pub move_type: Type,
    /// Output: multiplier applied to the incoming damage. Initialized by
    /// the caller (typically to 1.0); immunities force it to 0.
    pub damage_multiplier: f64,
    /// Output: advisory cancellation. Set by immunities to suppress the
    /// caller's "no effect" handling. The dispatcher never acts on this
    /// flag itself.
    pub cancelled: bool,
}

impl PreDefend {
    pub fn new(attacker: CombatantHandle, mov: MoveData) -> Self {
        let move_type = mov.primary_type;
        Self {
            attacker,
            mov,
            move_type,
            damage_multiplier: 1.0,
            cancelled: false,
        }
    }
}

/// Payload data for [`Hook::PostDefend`]: a hit that has been applied.
#[derive(Debug, Clone)]
pub struct PostDefend {
    /// The attacking combatant.
    pub attacker: CombatantHandle,
    /// The move that hit.
    pub mov: MoveData,
    /// The outcome of the hit.
    pub outcome: HitOutcome,
    /// Whether the hit was a critical hit.
    pub critical: bool,
}

impl PostDefend {
    pub fn new(attacker: CombatantHandle, mov: MoveData, outcome: HitOutcome) -> Self {
        Self {
            attacker,
            mov,
            outcome,
            critical: false,
        }
    }
}

/// Payload data for [`Hook::PreAttack`]: an outgoing hit being computed.
#[derive(Debug, Clone)]
pub struct PreAttack {
    /// The defending combatant, when the move has one.
    pub defender: Option<CombatantHandle>,
    /// The outgoing move.
    pub mov: MoveData,
    /// In/out: the effective type of the outgoing move.
    pub move_type: Type,
    /// In/out: the effective power of the outgoing move.
    pub power: u32,
}

impl PreAttack {
    pub fn new(defender: Option<CombatantHandle>, mov: MoveData) -> Self {
        let move_type = mov.primary_type;
        let power = mov.base_power;
        Self {
            defender,
            mov,
            move_type,
            power,
        }
    }
}

/// Payload data for [`Hook::PostAttack`]: an outgoing hit that landed.
#[derive(Debug, Clone)]
pub struct PostAttack {
    /// The defending combatant.
    pub defender: CombatantHandle,
    /// The move that hit.
    pub mov: MoveData,
    /// The outcome of the hit.
    pub outcome: HitOutcome,
}

/// Payload data for [`Hook::PreStatStageChange`]: a stat stage delta about
/// to be applied to the owner.
#[derive(Debug, Clone)]
pub struct PreStatStageChange {
    /// The stat being changed, or `None` for an all-stat change.
    pub stat: Option<Boost>,
    /// The stage delta.
    pub stages: i8,
    /// Whether the owner inflicted the change on itself.
    pub self_inflicted: bool,
    /// Output: advisory cancellation of the stat change.
    pub cancelled: bool,
}

/// Payload data for [`Hook::PostStatStageChange`]: stat stage deltas that
/// were applied to the owner.
#[derive(Debug, Clone)]
pub struct PostStatStageChange {
    /// The stats that changed.
    pub stats: Vec<Boost>,
    /// The stage delta applied to each.
    pub stages: i8,
    /// Whether the owner inflicted the change on itself.
    pub self_inflicted: bool,
}

/// Payload data for [`Hook::PostWeatherChange`].
#[derive(Debug, Clone)]
pub struct PostWeatherChange {
    /// The new weather, or `None` if the weather was cleared.
    pub weather: Option<Weather>,
}

/// Payload data for [`Hook::PostWeatherLapse`]: an end-of-turn weather
/// tick.
#[derive(Debug, Clone)]
pub struct PostWeatherLapse {
    /// The active weather.
    pub weather: Weather,
}

/// Payload data for [`Hook::PostTerrainChange`].
#[derive(Debug, Clone)]
pub struct PostTerrainChange {
    /// The new terrain, or `None` if the terrain was cleared.
    pub terrain: Option<Terrain>,
}

/// Payload data for [`Hook::PostTurn`].
#[derive(Debug, Default, Clone)]
pub struct PostTurn;

/// Payload data for [`Hook::PreSwitchOut`].
#[derive(Debug, Default, Clone)]
pub struct PreSwitchOut;

/// Payload data for [`Hook::PreLeaveField`].
#[derive(Debug, Default, Clone)]
pub struct PreLeaveField;

/// Payload data for [`Hook::PostFaint`]: the owner has fainted.
#[derive(Debug, Clone)]
pub struct PostFaint {
    /// The combatant that dealt the fatal hit, if any.
    pub attacker: Option<CombatantHandle>,
    /// The move that dealt the fatal hit, if any.
    pub mov: Option<MoveData>,
}

/// Payload data for [`Hook::PostKnockOut`]: another combatant fainted while
/// the owner was on the field.
#[derive(Debug, Clone)]
pub struct PostKnockOut {
    /// The combatant that fainted.
    pub fainted: CombatantHandle,
}

/// Payload data for [`Hook::PostVictory`]: the owner knocked out an
/// opponent.
#[derive(Debug, Default, Clone)]
pub struct PostVictory;

/// Payload data for [`Hook::PostBattle`].
#[derive(Debug, Default, Clone)]
pub struct PostBattle;

/// Payload data for [`Hook::PostDamage`]: the owner took damage.
#[derive(Debug, Clone)]
pub struct PostDamage {
    /// The amount of damage taken.
    pub damage: u16,
    /// The combatant that dealt the damage, if any.
    pub source: Option<CombatantHandle>,
}

/// Payload data for [`Hook::PostMoveUsed`]: any combatant used a move while
/// the owner was on the field.
#[derive(Debug, Clone)]
pub struct PostMoveUsed {
    /// The combatant that used the move.
    pub user: CombatantHandle,
    /// The move that was used.
    pub mov: MoveData,
    /// The move's targets.
    pub targets: Vec<CombatantHandle>,
}

/// Payload data for [`Hook::PostItemLost`]: the owner lost its held item.
#[derive(Debug, Default, Clone)]
pub struct PostItemLost;

/// Payload data for [`Hook::CheckTrapped`]: a query for whether the owner
/// traps the given target.
#[derive(Debug, Clone)]
pub struct CheckTrapped {
    /// The combatant attempting to switch or flee.
    pub target: CombatantHandle,
    /// Output: whether the target is trapped.
    pub trapped: bool,
}

/// Payload data for [`Hook::RedirectMove`]: a query for whether the owner
/// redirects an incoming move.
#[derive(Debug, Clone)]
pub struct RedirectMove {
    /// The move being used.
    pub mov: MoveData,
    /// The combatant using the move.
    pub source: CombatantHandle,
    /// In/out: the move's current target.
    pub target: CombatantHandle,
}

/// Payload data for [`Hook::PreSetStatus`]: a status effect about to be
/// applied to the owner.
#[derive(Debug, Clone)]
pub struct PreSetStatus {
    /// The status being applied.
    pub status: StatusEffect,
    /// The combatant applying the status, if any.
    pub source: Option<CombatantHandle>,
    /// Output: advisory cancellation of the status.
    pub cancelled: bool,
}

/// Payload data for [`Hook::PreApplyBattlerTag`]: a battler tag about to be
/// applied to the owner.
#[derive(Debug, Clone)]
pub struct PreApplyBattlerTag {
    /// The tag being applied.
    pub tag: BattlerTag,
    /// Output: advisory cancellation of the tag.
    pub cancelled: bool,
}

/// Payload data for [`Hook::Intimidate`]: the owner is the target of an
/// intimidate-style stat drop.
#[derive(Debug, Clone)]
pub struct Intimidate {
    /// The combatant doing the intimidating.
    pub source: CombatantHandle,
    /// Output: whether the stat drop is prevented.
    pub cancelled: bool,
}
