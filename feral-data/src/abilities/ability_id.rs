use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// A stable identifier for an ability.
///
/// Discriminants are dense so that the ability registry can be a plain array
/// indexed by `AbilityId as usize`.
#[repr(u16)]
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum AbilityId {
    #[string = "No Ability"]
    #[default]
    NoAbility = 0,
    #[string = "Aftermath"]
    Aftermath,
    #[string = "Arena Trap"]
    ArenaTrap,
    #[string = "Clear Body"]
    ClearBody,
    #[string = "Dancer"]
    Dancer,
    #[string = "Defiant"]
    Defiant,
    #[string = "Drizzle"]
    Drizzle,
    #[string = "Drought"]
    Drought,
    #[string = "Effect Spore"]
    EffectSpore,
    #[string = "Electric Surge"]
    ElectricSurge,
    #[string = "Forecast"]
    Forecast,
    #[string = "Galvanize"]
    Galvanize,
    #[string = "Guard Dog"]
    GuardDog,
    #[string = "Hydration"]
    Hydration,
    #[string = "Illusion"]
    Illusion,
    #[string = "Insomnia"]
    Insomnia,
    #[string = "Intimidate"]
    Intimidate,
    #[string = "Intrepid Sword"]
    IntrepidSword,
    #[string = "Lightning Rod"]
    LightningRod,
    #[string = "Limber"]
    Limber,
    #[string = "Magician"]
    Magician,
    #[string = "Mimicry"]
    Mimicry,
    #[string = "Mold Breaker"]
    MoldBreaker,
    #[string = "Moxie"]
    Moxie,
    #[string = "Multiscale"]
    Multiscale,
    #[string = "Natural Cure"]
    NaturalCure,
    #[string = "Neutralizing Gas"]
    NeutralizingGas,
    #[string = "Oblivious"]
    Oblivious,
    #[string = "Own Tempo"]
    OwnTempo,
    #[string = "Pickup"]
    Pickup,
    #[string = "Poison Touch"]
    PoisonTouch,
    #[string = "Primordial Sea"]
    PrimordialSea,
    #[string = "Rain Dish"]
    RainDish,
    #[string = "Rattled"]
    Rattled,
    #[string = "Receiver"]
    Receiver,
    #[string = "Regenerator"]
    Regenerator,
    #[string = "Rough Skin"]
    RoughSkin,
    #[string = "Sand Spit"]
    SandSpit,
    #[string = "Schooling"]
    Schooling,
    #[string = "Shed Skin"]
    ShedSkin,
    #[string = "Speed Boost"]
    SpeedBoost,
    #[string = "Static"]
    Static,
    #[string = "Sticky Hold"]
    StickyHold,
    #[string = "Technician"]
    Technician,
    #[string = "Torrent"]
    Torrent,
    #[string = "Trace"]
    Trace,
    #[string = "Unburden"]
    Unburden,
    #[string = "Volt Absorb"]
    VoltAbsorb,
    #[string = "Wandering Spirit"]
    WanderingSpirit,
    #[string = "Water Absorb"]
    WaterAbsorb,
    #[string = "Wimp Out"]
    WimpOut,
}

impl AbilityId {
    /// All ability identifiers, in registry order.
    pub const ALL: &'static [AbilityId] = &[
        AbilityId::NoAbility,
        AbilityId::Aftermath,
        AbilityId::ArenaTrap,
        AbilityId::ClearBody,
        AbilityId::Dancer,
        AbilityId::Defiant,
        AbilityId::Drizzle,
        AbilityId::Drought,
        AbilityId::EffectSpore,
        AbilityId::ElectricSurge,
        AbilityId::Forecast,
        AbilityId::Galvanize,
        AbilityId::GuardDog,
        AbilityId::Hydration,
        AbilityId::Illusion,
        AbilityId::Insomnia,
        AbilityId::Intimidate,
        AbilityId::IntrepidSword,
        AbilityId::LightningRod,
        AbilityId::Limber,
        AbilityId::Magician,
        AbilityId::Mimicry,
        AbilityId::MoldBreaker,
        AbilityId::Moxie,
        AbilityId::Multiscale,
        AbilityId::NaturalCure,
        AbilityId::NeutralizingGas,
        AbilityId::Oblivious,
        AbilityId::OwnTempo,
        AbilityId::Pickup,
        AbilityId::PoisonTouch,
        AbilityId::PrimordialSea,
        AbilityId::RainDish,
        AbilityId::Rattled,
        AbilityId::Receiver,
        AbilityId::Regenerator,
        AbilityId::RoughSkin,
        AbilityId::SandSpit,
        AbilityId::Schooling,
        AbilityId::ShedSkin,
        AbilityId::SpeedBoost,
        AbilityId::Static,
        AbilityId::StickyHold,
        AbilityId::Technician,
        AbilityId::Torrent,
        AbilityId::Trace,
        AbilityId::Unburden,
        AbilityId::VoltAbsorb,
        AbilityId::WanderingSpirit,
        AbilityId::WaterAbsorb,
        AbilityId::WimpOut,
    ];

    /// The dense registry index of this identifier.
    pub fn index(self) -> usize {
        self as usize
    }

    /// The display name of the ability.
    pub fn name(self) -> &'static str {
        match self {
            Self::NoAbility => "No Ability",
            Self::Aftermath => "Aftermath",
            Self::ArenaTrap => "Arena Trap",
            Self::ClearBody => "Clear Body",
            Self::Dancer => "Dancer",
            Self::Defiant => "Defiant",
            Self::Drizzle => "Drizzle",
            Self::Drought => "Drought",
            Self::EffectSpore => "Effect Spore",
            Self::ElectricSurge => "Electric Surge",
            Self::Forecast => "Forecast",
            Self::Galvanize => "Galvanize",
            Self::GuardDog => "Guard Dog",
            Self::Hydration => "Hydration",
            Self::Illusion => "Illusion",
            Self::Insomnia => "Insomnia",
            Self::Intimidate => "Intimidate",
            Self::IntrepidSword => "Intrepid Sword",
            Self::LightningRod => "Lightning Rod",
            Self::Limber => "Limber",
            Self::Magician => "Magician",
            Self::Mimicry => "Mimicry",
            Self::MoldBreaker => "Mold Breaker",
            Self::Moxie => "Moxie",
            Self::Multiscale => "Multiscale",
            Self::NaturalCure => "Natural Cure",
            Self::NeutralizingGas => "Neutralizing Gas",
            Self::Oblivious => "Oblivious",
            Self::OwnTempo => "Own Tempo",
            Self::Pickup => "Pickup",
            Self::PoisonTouch => "Poison Touch",
            Self::PrimordialSea => "Primordial Sea",
            Self::RainDish => "Rain Dish",
            Self::Rattled => "Rattled",
            Self::Receiver => "Receiver",
            Self::Regenerator => "Regenerator",
            Self::RoughSkin => "Rough Skin",
            Self::SandSpit => "Sand Spit",
            Self::Schooling => "Schooling",
            Self::ShedSkin => "Shed Skin",
            Self::SpeedBoost => "Speed Boost",
            Self::Static => "Static",
            Self::StickyHold => "Sticky Hold",
            Self::Technician => "Technician",
            Self::Torrent => "Torrent",
            Self::Trace => "Trace",
            Self::Unburden => "Unburden",
            Self::VoltAbsorb => "Volt Absorb",
            Self::WanderingSpirit => "Wandering Spirit",
            Self::WaterAbsorb => "Water Absorb",
            Self::WimpOut => "Wimp Out",
        }
    }
}
