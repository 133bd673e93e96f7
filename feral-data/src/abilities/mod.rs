mod ability_flags;
mod ability_id;

pub use ability_flags::AbilityFlags;
pub use ability_id::AbilityId;
