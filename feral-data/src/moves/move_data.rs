use serde::{
    Deserialize,
    Serialize,
};
use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

use crate::{
    common::{
        FastHashSet,
        Id,
    },
    mons::Type,
    moves::{
        MoveFlag,
        MoveTarget,
    },
};

/// The category of a move, which determines which stats are used for damage
/// calculation.
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
pub enum MoveCategory {
    #[string = "Physical"]
    Physical,
    #[string = "Special"]
    Special,
    #[string = "Status"]
    Status,
}

/// Data about a single move, as seen by ability effects.
///
/// Move resolution itself lives outside this engine; effects only inspect a
/// move's identity, type, category, power, target, and flags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveData {
    /// Name of the move.
    pub name: String,
    /// The move's elemental type.
    pub primary_type: Type,
    /// The move's category.
    pub category: MoveCategory,
    /// Base power, or 0 for status moves.
    #[serde(default)]
    pub base_power: u32,
    /// The move's target.
    #[serde(default)]
    pub target: MoveTarget,
    /// Move flags.
    #[serde(default)]
    pub flags: FastHashSet<MoveFlag>,
}

impl MoveData {
    /// Creates new move data.
    pub fn new(name: &str, primary_type: Type, category: MoveCategory, base_power: u32) -> Self {
        Self {
            name: name.to_owned(),
            primary_type,
            category,
            base_power,
            target: MoveTarget::default(),
            flags: FastHashSet::default(),
        }
    }

    /// The move's normalized ID.
    pub fn id(&self) -> Id {
        Id::from(self.name.as_str())
    }

    /// Adds a flag to the move.
    pub fn with_flag(mut self, flag: MoveFlag) -> Self {
        self.flags.insert(flag);
        self
    }

    /// Sets the move's target.
    pub fn with_target(mut self, target: MoveTarget) -> Self {
        self.target = target;
        self
    }

    /// Whether the move has the given flag.
    pub fn has_flag(&self, flag: MoveFlag) -> bool {
        self.flags.contains(&flag)
    }

    /// Whether the move makes contact with its target.
    pub fn makes_contact(&self) -> bool {
        self.has_flag(MoveFlag::Contact)
    }

    /// Whether the move deals damage.
    pub fn is_damaging(&self) -> bool {
        !matches!(self.category, MoveCategory::Status)
    }
}
