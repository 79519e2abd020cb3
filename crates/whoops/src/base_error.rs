// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::error::Error as StdError;
use std::fmt;

use crate::Stack;
use crate::render::write_detailed;

/// The root of an error chain: a message plus the stack captured where it was created.
///
/// `BaseError` has no cause; [`source`](StdError::source) returns `None` and
/// [`cause`](crate::cause) stops here.
///
/// # Examples
///
/// ```rust
/// use whoops::BaseError;
///
/// let error = BaseError::new("whoops");
/// assert_eq!(error.to_string(), "whoops");
///
/// // `{:#}` adds the stack
/// let detailed = format!("{error:#}");
/// assert!(detailed.starts_with("whoops\n"));
/// ```
#[derive(Clone)]
pub struct BaseError {
    message: String,
    stack: Stack,
}

impl BaseError {
    /// Creates an error with the given message, capturing the current stack.
    #[must_use]
    #[inline(never)]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            stack: Stack::capture(),
        }
    }

    /// Creates an error with an explicit stack instead of capturing one.
    #[must_use]
    pub fn from_parts(message: impl Into<String>, stack: Stack) -> Self {
        Self {
            message: message.into(),
            stack,
        }
    }

    /// The message this error was created with.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The stack captured at creation.
    #[must_use]
    pub fn stack(&self) -> &Stack {
        &self.stack
    }
}

/// `{}` renders the message, `{:#}` renders the message followed by the stack.
impl fmt::Display for BaseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write_detailed(self, f)
        } else {
            f.write_str(&self.message)
        }
    }
}

impl fmt::Debug for BaseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // the detailed form gives better output when `main` returns `Result<T, BaseError>`
        write_detailed(self, f)
    }
}

impl StdError for BaseError {}
