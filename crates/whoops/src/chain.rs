// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::error::Error as StdError;
use std::sync::Arc;

use crate::{BaseError, Stack, WithMessage, WithStack};

/// A cause shared between every wrapper that refers to it.
pub type SharedError = Arc<dyn StdError + Send + Sync + 'static>;

pub(crate) fn share<E>(error: E) -> SharedError
where
    E: Into<Box<dyn StdError + Send + Sync + 'static>>,
{
    Arc::from(error.into())
}

/// Implemented by errors that wrap exactly one cause.
///
/// Only [`WithStack`] and [`WithMessage`] implement it; [`BaseError`] is terminal.
/// [`cause`] follows these links and nothing else.
pub trait Causer: StdError {
    /// The wrapped error, one level down.
    fn wrapped(&self) -> &(dyn StdError + Send + Sync + 'static);
}

fn as_causer<'a>(error: &'a (dyn StdError + 'static)) -> Option<&'a dyn Causer> {
    if let Some(with_stack) = error.downcast_ref::<WithStack>() {
        return Some(with_stack);
    }
    error.downcast_ref::<WithMessage>().map(|with_message| with_message as &dyn Causer)
}

/// Returns the innermost error reachable through [`Causer`] links.
///
/// Stops at the first error that is neither a [`WithStack`] nor a [`WithMessage`]: a
/// [`BaseError`] or any error from outside this crate, even one with a
/// [`source`](StdError::source). For an `Option<&dyn Error>`, use `error.map(whoops::cause)`.
///
/// # Examples
///
/// ```rust
/// use whoops::BaseError;
///
/// let error = whoops::wrap(Some(whoops::wrap(Some(whoops::new("a")), "b").unwrap()), "c").unwrap();
/// let root = whoops::cause(&error);
/// assert_eq!(root.to_string(), "a");
/// assert!(root.is::<BaseError>());
/// ```
#[must_use]
pub fn cause<'a>(mut error: &'a (dyn StdError + 'static)) -> &'a (dyn StdError + 'static) {
    while let Some(causer) = as_causer(error) {
        error = causer.wrapped();
    }
    error
}

/// Creates a [`BaseError`] with the given message, capturing the current stack.
///
/// # Examples
///
/// ```rust
/// let error = whoops::new("whoops");
/// assert_eq!(error.to_string(), "whoops");
/// ```
#[must_use]
#[inline(never)]
pub fn new(message: impl Into<String>) -> BaseError {
    BaseError::from_parts(message, Stack::capture())
}

/// Wraps `error` with the current stack. Returns `None` when there is no error.
///
/// # Examples
///
/// ```rust
/// let error = whoops::with_stack(Some(std::io::Error::other("reset"))).unwrap();
/// assert_eq!(error.to_string(), "reset");
/// assert!(whoops::with_stack(None::<std::io::Error>).is_none());
/// ```
#[must_use]
#[inline(never)]
pub fn with_stack<E>(error: Option<E>) -> Option<WithStack>
where
    E: Into<Box<dyn StdError + Send + Sync + 'static>>,
{
    let error = error?;
    Some(WithStack::from_parts(share(error), Stack::capture()))
}

/// Annotates `error` with `message`. Returns `None` when there is no error.
///
/// No stack is captured.
///
/// # Examples
///
/// ```rust
/// let error = whoops::with_message(Some(whoops::new("root")), "context").unwrap();
/// assert_eq!(error.to_string(), "context: root");
/// ```
#[must_use]
pub fn with_message<E>(error: Option<E>, message: impl Into<String>) -> Option<WithMessage>
where
    E: Into<Box<dyn StdError + Send + Sync + 'static>>,
{
    error.map(|error| WithMessage::new(error, message))
}

/// Annotates `error` with `message` and wraps the result with the current stack.
/// Returns `None` when there is no error.
///
/// # Examples
///
/// ```rust
/// let error = whoops::wrap(Some(whoops::new("whoops")), "oh no").unwrap();
/// assert_eq!(error.to_string(), "oh no: whoops");
/// assert!(whoops::wrap(None::<std::io::Error>, "oh no").is_none());
/// ```
#[must_use]
#[inline(never)]
pub fn wrap<E>(error: Option<E>, message: impl Into<String>) -> Option<WithStack>
where
    E: Into<Box<dyn StdError + Send + Sync + 'static>>,
{
    let annotated = WithMessage::new(error?, message);
    Some(WithStack::from_parts(Arc::new(annotated), Stack::capture()))
}
