// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::error::Error as StdError;
use std::sync::Arc;

use crate::chain::share;
use crate::{Stack, WithMessage, WithStack};

/// Wrapping and annotation methods for `Result`.
///
/// `Ok` values pass through untouched; only an `Err` is wrapped. Stacks are captured at the
/// call site of the method.
///
/// # Examples
///
/// ```rust
/// use whoops::{ResultExt, WithStack};
///
/// fn read_config(path: &str) -> Result<String, WithStack> {
///     std::fs::read_to_string(path).wrap_with(|| format!("failed to read {path}"))
/// }
///
/// let error = read_config("/does/not/exist").unwrap_err();
/// assert!(error.to_string().starts_with("failed to read /does/not/exist: "));
/// ```
pub trait ResultExt<T> {
    /// Wraps the error with the current stack.
    ///
    /// # Errors
    ///
    /// Returns the original error wrapped in a [`WithStack`].
    fn with_stack(self) -> Result<T, WithStack>;

    /// Annotates the error with `message`.
    ///
    /// # Errors
    ///
    /// Returns the original error wrapped in a [`WithMessage`].
    fn with_message(self, message: impl Into<String>) -> Result<T, WithMessage>;

    /// Annotates the error with a message computed only when there is an error.
    ///
    /// # Errors
    ///
    /// Returns the original error wrapped in a [`WithMessage`].
    fn with_message_with<F, M>(self, message_fn: F) -> Result<T, WithMessage>
    where
        F: FnOnce() -> M,
        M: Into<String>;

    /// Annotates the error with `message`, then wraps it with the current stack.
    ///
    /// # Errors
    ///
    /// Returns the original error wrapped in a [`WithMessage`] inside a [`WithStack`].
    fn wrap(self, message: impl Into<String>) -> Result<T, WithStack>;

    /// Like [`wrap`](Self::wrap), with a message computed only when there is an error.
    ///
    /// # Errors
    ///
    /// Returns the original error wrapped in a [`WithMessage`] inside a [`WithStack`].
    fn wrap_with<F, M>(self, message_fn: F) -> Result<T, WithStack>
    where
        F: FnOnce() -> M,
        M: Into<String>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Into<Box<dyn StdError + Send + Sync + 'static>>,
{
    #[inline(never)]
    fn with_stack(self) -> Result<T, WithStack> {
        match self {
            Ok(value) => Ok(value),
            Err(error) => Err(WithStack::from_parts(share(error), Stack::capture())),
        }
    }

    fn with_message(self, message: impl Into<String>) -> Result<T, WithMessage> {
        self.map_err(|error| WithMessage::new(error, message))
    }

    fn with_message_with<F, M>(self, message_fn: F) -> Result<T, WithMessage>
    where
        F: FnOnce() -> M,
        M: Into<String>,
    {
        self.map_err(|error| WithMessage::new(error, message_fn()))
    }

    #[inline(never)]
    fn wrap(self, message: impl Into<String>) -> Result<T, WithStack> {
        match self {
            Ok(value) => Ok(value),
            Err(error) => Err(WithStack::from_parts(
                Arc::new(WithMessage::new(error, message)),
                Stack::capture(),
            )),
        }
    }

    #[inline(never)]
    fn wrap_with<F, M>(self, message_fn: F) -> Result<T, WithStack>
    where
        F: FnOnce() -> M,
        M: Into<String>,
    {
        match self {
            Ok(value) => Ok(value),
            Err(error) => Err(WithStack::from_parts(
                Arc::new(WithMessage::new(error, message_fn())),
                Stack::capture(),
            )),
        }
    }
}
