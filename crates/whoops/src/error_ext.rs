// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::error::Error as StdError;

use crate::render::{Rendered, render};
use crate::{BaseError, Stack, Verbosity, WithStack};

/// Extension trait for inspecting error chains.
///
/// Implemented for every `std::error::Error + 'static` type and for `dyn Error` trait objects.
/// Unlike [`cause`](crate::cause), these methods follow [`source`](StdError::source), so they
/// see through errors from any crate.
///
/// # Examples
///
/// ```rust
/// use whoops::{ErrorExt, ResultExt};
///
/// let error = "80x".parse::<u16>().wrap("invalid port").unwrap_err();
/// assert!(error.find_source::<std::num::ParseIntError>().is_some());
/// assert!(error.stack_trace().is_some());
/// ```
pub trait ErrorExt: StdError + sealed::AsStdError + 'static {
    /// Iterates over this error and then each of its sources, outermost first.
    fn chain(&self) -> Chain<'_> {
        Chain::new(self.as_std_error())
    }

    /// Returns the last error of the source chain, which is `self` when there is no source.
    fn root_cause(&self) -> &(dyn StdError + 'static) {
        let mut current = self.as_std_error();
        while let Some(source) = current.source() {
            current = source;
        }
        current
    }

    /// Finds the first source error of the specified type in the error chain.
    ///
    /// Only searches the **source chain**, not the current error itself.
    fn find_source<T: StdError + 'static>(&self) -> Option<&T> {
        self.find_source_with(|_| true)
    }

    /// Finds the first source error of the specified type that matches the given predicate.
    ///
    /// Only searches the **source chain**, not the current error itself.
    fn find_source_with<T: StdError + 'static>(&self, search: impl Fn(&T) -> bool) -> Option<&T> {
        self.chain().skip(1).filter_map(|err| err.downcast_ref::<T>()).find(|target| search(target))
    }

    /// Returns the outermost stack captured anywhere in the chain.
    fn stack_trace(&self) -> Option<&Stack> {
        self.chain().find_map(|err| {
            err.downcast_ref::<WithStack>()
                .map(WithStack::stack)
                .or_else(|| err.downcast_ref::<BaseError>().map(BaseError::stack))
        })
    }

    /// Renders this error at the given [`Verbosity`].
    fn render(&self, verbosity: Verbosity) -> Rendered<'_> {
        render(self.as_std_error(), verbosity)
    }
}

impl<E: StdError + 'static> ErrorExt for E {}

impl ErrorExt for dyn StdError + 'static {}

impl ErrorExt for dyn StdError + Send + Sync + 'static {}

mod sealed {
    use std::error::Error as StdError;

    /// Upcast used by [`ErrorExt`](super::ErrorExt). Sealed: not nameable outside this crate.
    pub trait AsStdError {
        fn as_std_error(&self) -> &(dyn StdError + 'static);
    }

    impl<E: StdError + 'static> AsStdError for E {
        fn as_std_error(&self) -> &(dyn StdError + 'static) {
            self
        }
    }

    impl AsStdError for dyn StdError + 'static {
        fn as_std_error(&self) -> &(dyn StdError + 'static) {
            self
        }
    }

    impl AsStdError for dyn StdError + Send + Sync + 'static {
        fn as_std_error(&self) -> &(dyn StdError + 'static) {
            self
        }
    }
}

/// Iterator over an error and its sources. Created by [`ErrorExt::chain`].
#[derive(Debug, Clone)]
pub struct Chain<'a> {
    next: Option<&'a (dyn StdError + 'static)>,
}

impl<'a> Chain<'a> {
    /// Starts a chain at `error`.
    #[must_use]
    pub fn new(error: &'a (dyn StdError + 'static)) -> Self {
        Self { next: Some(error) }
    }
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a (dyn StdError + 'static);

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.source();
        Some(current)
    }
}
