pub use feral_data::{
    FastHashMap,
    FastHashSet,
    Id,
    Identifiable,
};
