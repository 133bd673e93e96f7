extern crate alloc;

pub mod abilities;
pub mod attrs;
pub mod battle;
pub mod common;
pub mod dex;
pub mod effect;
pub mod error;
pub mod log;
