mod attribute;
mod condition;
mod dispatcher;
pub mod hook;

pub use attribute::{
    Attribute,
    AttributeEffect,
    AttributeKind,
    HookData,
    HookEffect,
};
pub use condition::Condition;
pub use dispatcher::{
    AttributeFilter,
    ability_changed,
    ability_gained,
    ability_lost,
    ability_suppressed,
    can_apply_ability,
    run_hook,
    run_hook_filtered,
    try_add_tag,
    try_set_status,
};
pub use hook::{
    HitOutcome,
    Hook,
    HookContext,
    Payload,
};
