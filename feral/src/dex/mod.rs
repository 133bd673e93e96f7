mod ability_dex;

pub use ability_dex::AbilityDex;
