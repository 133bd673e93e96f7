mod feral_error;
mod wrap;

pub use feral_error::{
    GeneralError,
    NotFoundError,
    general_error,
    not_found_error,
};
pub use wrap::{
    WrapOptionError,
    WrapResultError,
};
