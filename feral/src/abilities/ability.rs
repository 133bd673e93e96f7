use feral_data::{
    AbilityFlags,
    AbilityId,
};
use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

use crate::effect::{
    Attribute,
    AttributeKind,
    Condition,
};

/// The slot an ability occupies on a combatant.
///
/// Every combatant has an active ability; some also carry a passive ability
/// layered beneath it. The two slots are dispatched as separate sequential
/// passes.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum AbilitySlot {
    #[string = "Active"]
    Active,
    #[string = "Passive"]
    Passive,
}

/// A named bundle of [`Attribute`]s plus gating conditions and declarative
/// flags.
///
/// Abilities are assembled once at startup by the
/// [`AbilityDex`][`crate::dex::AbilityDex`] builder and are immutable
/// thereafter. Ability-level conditions gate every attribute on the ability
/// uniformly; a per-attribute condition gates only that attribute.
pub struct Ability {
    id: AbilityId,
    attributes: Vec<Attribute>,
    conditions: Vec<Condition>,
    flags: AbilityFlags,
}

impl Ability {
    /// Creates a new, empty ability.
    pub fn new(id: AbilityId) -> Self {
        Self {
            id,
            attributes: Vec::new(),
            conditions: Vec::new(),
            flags: AbilityFlags::default(),
        }
    }

    /// Appends an attribute. Attribute order is application order.
    pub fn attr(mut self, attribute: Attribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    /// Appends an attribute wrapped in an extra gating condition.
    pub fn conditional_attr(mut self, condition: Condition, attribute: Attribute) -> Self {
        self.attributes.push(attribute.when(condition));
        self
    }

    /// Appends an ability-level condition, gating all attributes uniformly.
    pub fn condition(mut self, condition: Condition) -> Self {
        self.conditions.push(condition);
        self
    }

    /// The ability's attributes still run while the owner is fainted.
    pub fn bypass_faint(mut self) -> Self {
        self.flags.bypass_faint = true;
        self
    }

    /// The ability is negated by ignore-ability effects.
    pub fn ignorable(mut self) -> Self {
        self.flags.ignorable = true;
        self
    }

    /// The ability cannot be suppressed by field-wide suppression.
    pub fn unsuppressible(mut self) -> Self {
        self.flags.unsuppressible = true;
        self
    }

    /// The ability cannot be copied onto another combatant.
    pub fn uncopiable(mut self) -> Self {
        self.flags.uncopiable = true;
        self
    }

    /// The ability cannot be overwritten on its owner.
    pub fn unreplaceable(mut self) -> Self {
        self.flags.unreplaceable = true;
        self
    }

    /// The ability's identifier.
    pub fn id(&self) -> AbilityId {
        self.id
    }

    /// The ability's display name.
    pub fn name(&self) -> &'static str {
        self.id.name()
    }

    /// The ability's flags.
    pub fn flags(&self) -> &AbilityFlags {
        &self.flags
    }

    /// The ability's attributes, in application order.
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    /// The ability-level gating conditions.
    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    /// Whether the ability carries an attribute of the given kind.
    pub fn has_attr_kind(&self, kind: AttributeKind) -> bool {
        self.attributes
            .iter()
            .any(|attribute| attribute.kind() == kind)
    }
}
