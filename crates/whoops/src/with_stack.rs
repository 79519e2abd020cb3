// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::error::Error as StdError;
use std::fmt;

use crate::chain::{Causer, SharedError, share};
use crate::render::write_detailed;
use crate::{Stack, WithMessage};

/// Wraps an error together with the stack captured where it was wrapped.
///
/// Adds no text of its own: it displays exactly as its cause. The stack only shows up in the
/// detailed (`{:#}`) rendering, after the cause's.
///
/// # Examples
///
/// ```rust
/// use whoops::{Causer, WithStack};
///
/// let io_error = std::io::Error::other("connection reset");
/// let error = WithStack::new(io_error);
/// assert_eq!(error.to_string(), "connection reset");
/// assert!(error.wrapped().downcast_ref::<std::io::Error>().is_some());
/// ```
#[derive(Clone)]
pub struct WithStack {
    cause: SharedError,
    stack: Stack,
}

impl WithStack {
    /// Wraps `cause`, capturing the current stack.
    #[must_use]
    #[inline(never)]
    pub fn new<E>(cause: E) -> Self
    where
        E: Into<Box<dyn StdError + Send + Sync + 'static>>,
    {
        Self {
            cause: share(cause),
            stack: Stack::capture(),
        }
    }

    /// Wraps an already shared `cause` with an explicit stack instead of capturing one.
    #[must_use]
    pub fn from_parts(cause: SharedError, stack: Stack) -> Self {
        Self { cause, stack }
    }

    /// Wraps `cause` in a [`WithMessage`] carrying `message`, then wraps that with the current stack.
    #[must_use]
    #[inline(never)]
    pub fn wrap<E>(cause: E, message: impl Into<String>) -> Self
    where
        E: Into<Box<dyn StdError + Send + Sync + 'static>>,
    {
        Self::from_parts(WithMessage::new(cause, message).into_shared(), Stack::capture())
    }

    /// The stack captured when this wrapper was created.
    #[must_use]
    pub fn stack(&self) -> &Stack {
        &self.stack
    }
}

impl Causer for WithStack {
    fn wrapped(&self) -> &(dyn StdError + Send + Sync + 'static) {
        &*self.cause
    }
}

impl fmt::Display for WithStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write_detailed(self, f)
        } else {
            write!(f, "{}", self.cause)
        }
    }
}

impl fmt::Debug for WithStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_detailed(self, f)
    }
}

impl StdError for WithStack {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(&*self.cause)
    }
}
