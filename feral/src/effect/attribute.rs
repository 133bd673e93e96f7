use anyhow::{
    Error,
    Result,
};

use crate::{
    battle::Battle,
    effect::{
        Condition,
        hook,
        hook::{
            Hook,
            HookContext,
        },
    },
};

/// The capability contract for one hook category.
///
/// `T` is the category's payload data type. Implementations must keep
/// `eligible` pure: it is called speculatively, possibly many times, and
/// must not consume RNG or mutate any state (the immutable [`Battle`]
/// borrow enforces the latter statically). Everything an effect decides,
/// including random choices, happens in `commit`, so attribute instances
/// carry no per-dispatch scratch state.
pub trait HookEffect<T>: Send + Sync {
    /// Whether the effect applies to the given payload.
    ///
    /// Defaults to always eligible.
    fn eligible(&self, _battle: &Battle, _ctx: &HookContext, _data: &T) -> bool {
        true
    }

    /// Applies the effect.
    ///
    /// Only called after `eligible` returned true. When `ctx.simulated` is
    /// set, the implementation must not mutate battle state, consume RNG,
    /// or emit messages; it may only set output fields on `data`.
    fn commit(&self, battle: &mut Battle, ctx: &HookContext, data: &mut T) -> Result<(), Error>;

    /// An optional human-readable trigger message.
    ///
    /// Computed before `commit` runs; displayed unless the dispatch is
    /// simulated, and accumulated on the payload either way.
    fn trigger_message(&self, _battle: &Battle, _ctx: &HookContext, _data: &T) -> Option<String> {
        None
    }
}

/// The concrete kind of an attribute, for introspection.
///
/// Effects that need to ask "does this ability carry an attribute of kind
/// K" match on this tag instead of downcasting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeKind {
    // Battle-init and switch-in effects.
    FormChangeAtBattleInit,
    TagBeforeSummon,
    StatStageChangeOnSummon,
    WeatherChangeOnSummon,
    TerrainChangeOnSummon,
    MessageOnSummon,
    CopyAbilityOnSummon,
    SuppressFieldAbilities,
    FormChangeByWeatherOnSummon,
    // Incoming-hit effects.
    TypeImmunity,
    TypeImmunityHeal,
    ReceivedMoveDamageMultiplier,
    ContactStatusEffect,
    ContactDamage,
    WeatherChangeOnHit,
    AbilitySwapOnContact,
    // Outgoing-hit effects.
    MovePowerBoost,
    MoveTypeChange,
    StealHeldItem,
    StatusEffectOnHit,
    // Stat stage interactions.
    ProtectStat,
    StatStageChangeReaction,
    IntimidateImmunity,
    IntimidateReaction,
    // Residual effects.
    StatStageChangeAfterTurn,
    StatusHealAfterTurn,
    WeatherLapseHeal,
    FormChangeByWeather,
    TypeChangeByTerrain,
    // Leaving-field effects.
    HealBeforeSwitch,
    CureStatusBeforeSwitch,
    ClearWeatherBeforeSwitch,
    LiftFieldSuppression,
    BreakIllusion,
    // Death, kill, and end-of-battle effects.
    ContactDamageOnFaint,
    StatStageChangeOnVictory,
    CopyAllyAbilityOnKnockOut,
    LootAfterBattle,
    ForceSwitchAtHpThreshold,
    // Queries and reactions.
    TrapOpponents,
    RedirectTypedMoves,
    StatusImmunity,
    TagImmunity,
    CopyDanceMove,
    TagOnItemLoss,
    // Pure markers, never dispatched.
    BlockItemTheft,
}

macro_rules! attribute_hooks {
    ($($hook:ident),* $(,)?) => {
        /// The effect object of an attribute, tagged by hook category.
        ///
        /// The enum discriminant is the attribute's hook binding; the
        /// dispatcher filters attributes by this tag rather than guessing
        /// structurally. `Marker` attributes carry no effect and are never
        /// dispatched; they exist purely for introspection by kind.
        pub enum AttributeEffect {
            Marker,
            $($hook(Box<dyn HookEffect<hook::$hook>>),)*
        }

        impl AttributeEffect {
            /// The hook category this effect is bound to, if any.
            pub fn hook(&self) -> Option<Hook> {
                match self {
                    Self::Marker => None,
                    $(Self::$hook(_) => Some(Hook::$hook),)*
                }
            }
        }

        $(impl HookData for hook::$hook {
            const HOOK: Hook = Hook::$hook;

            fn effect_of(effect: &AttributeEffect) -> Option<&dyn HookEffect<Self>> {
                match effect {
                    AttributeEffect::$hook(effect) => Some(effect.as_ref()),
                    _ => None,
                }
            }
        })*
    };
}

/// Links a payload data type to its hook category and its effect variant.
pub trait HookData: Sized {
    /// The hook category the payload belongs to.
    const HOOK: Hook;

    /// Extracts this category's effect from an attribute effect, if the
    /// attribute is bound to this category.
    fn effect_of(effect: &AttributeEffect) -> Option<&dyn HookEffect<Self>>;
}

attribute_hooks!(
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
);

/// One discrete effect unit on an ability, bound to exactly one hook
/// category.
///
/// Attributes are created once at registry construction and are stateless
/// templates thereafter.
pub struct Attribute {
    kind: AttributeKind,
    effect: AttributeEffect,
    show_ability: bool,
    condition: Option<Condition>,
    activates_on_gain: bool,
    form_trigger: bool,
    breaks_illusion: bool,
}

impl Attribute {
    /// Creates a new attribute with the given kind tag and effect.
    pub fn new(kind: AttributeKind, effect: AttributeEffect) -> Self {
        Self {
            kind,
            effect,
            show_ability: true,
            condition: None,
            activates_on_gain: false,
            form_trigger: false,
            breaks_illusion: false,
        }
    }

    /// Creates a marker attribute: introspectable by kind, never
    /// dispatched.
    pub fn marker(kind: AttributeKind) -> Self {
        let mut attribute = Self::new(kind, AttributeEffect::Marker);
        attribute.show_ability = false;
        attribute
    }

    /// Suppresses the "ability activating" UI signal for this attribute.
    pub fn hidden(mut self) -> Self {
        self.show_ability = false;
        self
    }

    /// Attaches an extra gating condition, distinct from any ability-level
    /// condition.
    pub fn when(mut self, condition: Condition) -> Self {
        self.condition = Some(condition);
        self
    }

    /// Marks the attribute to re-fire when the ability is gained
    /// mid-battle.
    pub fn on_gain(mut self) -> Self {
        self.activates_on_gain = true;
        self
    }

    /// Marks the attribute as a form-change trigger, excluded from on-gain
    /// re-firing.
    pub fn form_trigger(mut self) -> Self {
        self.form_trigger = true;
        self
    }

    /// Marks the attribute to fire when the ability is suppressed.
    pub fn breaks_illusion(mut self) -> Self {
        self.breaks_illusion = true;
        self
    }

    /// The attribute's kind tag.
    pub fn kind(&self) -> AttributeKind {
        self.kind
    }

    /// The attribute's effect.
    pub fn effect(&self) -> &AttributeEffect {
        &self.effect
    }

    /// The hook category the attribute is bound to, if any.
    pub fn hook(&self) -> Option<Hook> {
        self.effect.hook()
    }

    /// Whether the attribute signals the ability in the UI when it runs.
    pub fn shows_ability(&self) -> bool {
        self.show_ability
    }

    /// The attribute's extra gating condition, if any.
    pub fn condition(&self) -> Option<&Condition> {
        self.condition.as_ref()
    }

    /// Whether the attribute re-fires when the ability is gained
    /// mid-battle.
    pub fn activates_on_gain(&self) -> bool {
        self.activates_on_gain
    }

    /// Whether the attribute is a form-change trigger.
    pub fn is_form_trigger(&self) -> bool {
        self.form_trigger
    }

    /// Whether the attribute fires when the ability is suppressed.
    pub fn does_break_illusion(&self) -> bool {
        self.breaks_illusion
    }
}
