use std::fmt::Display;

use anyhow::{
    Context,
    Error,
};

use crate::error::not_found_error;

/// Wraps a result into a [`Result<T, Error>`], optionally providing
/// additional context.
pub trait WrapResultError<T> {
    /// Wraps the error into an [`Error`].
    #[track_caller]
    fn wrap_error(self) -> Result<T, Error>;

    /// Wraps the error into an [`Error`], with an additional message.
    #[track_caller]
    fn wrap_error_with_message<M>(self, message: M) -> Result<T, Error>
    where
        M: Display + Send + Sync + 'static;
}

impl<T, E> WrapResultError<T> for Result<T, E>
where
    E: Into<Error>,
{
    #[track_caller]
    fn wrap_error(self) -> Result<T, Error> {
        self.map_err(Into::into)
    }

    #[track_caller]
    fn wrap_error_with_message<M>(self, message: M) -> Result<T, Error>
    where
        M: Display + Send + Sync + 'static,
    {
        self.map_err(Into::into).context(message)
    }
}

/// Wraps an [`Option`] into a result producing an [`Error`].
pub trait WrapOptionError<T> {
    /// Wraps the object into a [`Result<T, Error>`], with the given message
    /// when the value is absent.
    #[track_caller]
    fn wrap_expectation<M>(self, message: M) -> Result<T, Error>
    where
        M: Display;

    /// Wraps the object into a [`Result<T, Error>`], with a
    /// [`NotFoundError`][`crate::error::NotFoundError`] behind the scenes.
    #[track_caller]
    fn wrap_not_found_error<M>(self, target: M) -> Result<T, Error>
    where
        M: Display;
}

impl<T> WrapOptionError<T> for Option<T> {
    #[track_caller]
    fn wrap_expectation<M>(self, message: M) -> Result<T, Error>
    where
        M: Display,
    {
        self.ok_or_else(|| crate::error::general_error(message))
    }

    #[track_caller]
    fn wrap_not_found_error<M>(self, target: M) -> Result<T, Error>
    where
        M: Display,
    {
        self.ok_or_else(|| not_found_error(target))
    }
}
