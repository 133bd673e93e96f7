mod move_data;
mod move_flag;
mod move_target;

pub use move_data::{
    MoveCategory,
    MoveData,
};
pub use move_flag::MoveFlag;
pub use move_target::MoveTarget;
