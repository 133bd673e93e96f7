use std::fmt::Display;

use anyhow::Error;
use thiserror::Error;

/// A general error, consisting of only a message.
#[derive(Error, Debug)]
#[error("{message}")]
pub struct GeneralError {
    message: String,
}

impl GeneralError {
    /// Constructs a new general error.
    pub fn new<M>(message: M) -> Self
    where
        M: Display,
    {
        Self {
            message: message.to_string(),
        }
    }
}

/// A not found error.
#[derive(Error, Debug)]
#[error("{target} not found")]
pub struct NotFoundError {
    target: String,
}

impl NotFoundError {
    /// Constructs a new not found error.
    pub fn new<M>(target: M) -> Self
    where
        M: Display,
    {
        Self {
            target: target.to_string(),
        }
    }
}

/// Helper for an [`Error`] wrapping a [`GeneralError`].
#[track_caller]
pub fn general_error<M>(message: M) -> Error
where
    M: Display,
{
    GeneralError::new(message).into()
}

/// Helper for an [`Error`] wrapping a [`NotFoundError`].
#[track_caller]
pub fn not_found_error<M>(target: M) -> Error
where
    M: Display,
{
    NotFoundError::new(target).into()
}
