extern crate alloc;

mod abilities;
mod common;
mod conditions;
mod field;
mod mons;
mod moves;

#[cfg(test)]
pub mod test_util;

pub use abilities::*;
pub use common::*;
pub use conditions::*;
pub use field::*;
pub use mons::*;
pub use moves::*;
