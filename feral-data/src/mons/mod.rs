mod stat;
mod r#type;

pub use stat::{
    Boost,
    BoostMap,
    PartialBoostTable,
    PartialStatTable,
    Stat,
    StatMap,
};
pub use r#type::Type;
