// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::error::Error as StdError;
use std::fmt;

use crate::{BaseError, Causer, WithMessage, WithStack};

/// How much of an error chain to render.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verbosity {
    /// The error message, identical to [`Display`](fmt::Display).
    #[default]
    Plain,
    /// The error message as a double-quoted, escaped string.
    Quoted,
    /// Every message in the chain together with every captured stack.
    Detailed,
}

/// Renders any error at the given [`Verbosity`].
///
/// Errors created by this crate render their messages and stacks; any other error renders as
/// its [`Display`](fmt::Display) output.
///
/// # Examples
///
/// ```rust
/// use whoops::Verbosity;
///
/// let error = whoops::wrap(Some("connection reset"), "fetch failed").unwrap();
/// assert_eq!(whoops::render(&error, Verbosity::Plain).to_string(), "fetch failed: connection reset");
/// assert_eq!(whoops::render(&error, Verbosity::Quoted).to_string(), "\"fetch failed: connection reset\"");
/// ```
#[must_use]
pub fn render<'a>(error: &'a (dyn StdError + 'static), verbosity: Verbosity) -> Rendered<'a> {
    Rendered { error, verbosity }
}

/// Renders an error at a given [`Verbosity`]. Created by [`render`].
#[derive(Debug, Clone, Copy)]
pub struct Rendered<'a> {
    error: &'a (dyn StdError + 'static),
    verbosity: Verbosity,
}

impl fmt::Display for Rendered<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.verbosity {
            Verbosity::Plain => write!(f, "{}", self.error),
            Verbosity::Quoted => write!(f, "{:?}", self.error.to_string()),
            Verbosity::Detailed => write_detailed(self.error, f),
        }
    }
}

/// Writes the detailed form of `error`, descending into the chain when it is one of ours.
pub(crate) fn write_detailed(error: &(dyn StdError + 'static), f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if let Some(base) = error.downcast_ref::<BaseError>() {
        write!(f, "{}{}", base.message(), base.stack().render(Verbosity::Detailed))
    } else if let Some(with_stack) = error.downcast_ref::<WithStack>() {
        write_detailed(with_stack.wrapped(), f)?;
        write!(f, "{}", with_stack.stack().render(Verbosity::Detailed))
    } else if let Some(with_message) = error.downcast_ref::<WithMessage>() {
        write_detailed(with_message.wrapped(), f)?;
        write!(f, "\n{}", with_message.message())
    } else {
        write!(f, "{error}")
    }
}
