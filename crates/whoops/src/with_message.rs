// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

use crate::chain::{Causer, SharedError, share};
use crate::render::write_detailed;

/// Annotates an error with a context message. Captures no stack.
///
/// Displays as `"{message}: {cause}"`.
///
/// # Examples
///
/// ```rust
/// use whoops::WithMessage;
///
/// let root = whoops::new("root");
/// let error = WithMessage::new(root, "context");
/// assert_eq!(error.to_string(), "context: root");
/// ```
#[derive(Clone)]
pub struct WithMessage {
    cause: SharedError,
    message: String,
}

impl WithMessage {
    /// Annotates `cause` with `message`.
    #[must_use]
    pub fn new<E>(cause: E, message: impl Into<String>) -> Self
    where
        E: Into<Box<dyn StdError + Send + Sync + 'static>>,
    {
        Self {
            cause: share(cause),
            message: message.into(),
        }
    }

    /// The annotation, without the cause's message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    pub(crate) fn into_shared(self) -> SharedError {
        Arc::new(self)
    }
}

impl Causer for WithMessage {
    fn wrapped(&self) -> &(dyn StdError + Send + Sync + 'static) {
        &*self.cause
    }
}

impl fmt::Display for WithMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write_detailed(self, f)
        } else {
            write!(f, "{}: {}", self.message, self.cause)
        }
    }
}

impl fmt::Debug for WithMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_detailed(self, f)
    }
}

impl StdError for WithMessage {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(&*self.cause)
    }
}
