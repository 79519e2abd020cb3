// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! Errors with captured call stacks and context messages.
//!
//! Whoops builds errors as a chain of small immutable nodes. A node either starts a chain with
//! a message, records the call stack at the point where an error was passed along, or prepends
//! a context message. The chain can later be walked back to its origin and rendered with or
//! without the captured stacks.
//!
//! # Key Features
//!
//! - [**`BaseError`**](BaseError): a message plus the stack captured where it was created
//! - [**`WithStack`**](WithStack): wraps an existing error with the stack captured where it was wrapped
//! - [**`WithMessage`**](WithMessage): prepends a context message to an existing error
//! - [**`cause`**](cause): walks wrappers back to the error that started the chain
//! - [**`Verbosity`**](Verbosity): plain, quoted, or detailed rendering with every stack
//! - [**`ResultExt`**](ResultExt) and [**`ErrorExt`**](ErrorExt): the same operations as methods
//!
//! # Quick Start
//!
//! ```rust
//! use whoops::{ResultExt, WithStack};
//!
//! fn load(path: &str) -> Result<String, WithStack> {
//!     std::fs::read_to_string(path).wrap(format!("failed to load {path}"))
//! }
//!
//! let error = load("/missing.toml").unwrap_err();
//!
//! // `{}` renders the messages only
//! assert!(error.to_string().starts_with("failed to load /missing.toml: "));
//!
//! // `{:#}` adds every captured stack, innermost call first
//! println!("{error:#}");
//! ```
//!
//! # Constructors
//!
//! | Function | Macro | Result |
//! |---|---|---|
//! | [`new`] | [`errorf!`] | [`BaseError`] with a fresh stack |
//! | [`with_stack`] | | [`WithStack`] around the error |
//! | [`with_message`] | [`with_messagef!`] | [`WithMessage`] around the error |
//! | [`wrap`] | [`wrapf!`] | [`WithStack`] around a [`WithMessage`] around the error |
//!
//! The wrapping functions take an `Option` and return `None` for `None`, so a possibly absent
//! error can be wrapped without checking first. [`ResultExt`] offers the same for `Result`:
//! an `Ok` value passes through untouched.
//!
//! ```rust
//! let none: Option<std::io::Error> = None;
//! assert!(whoops::wrap(none, "never shown").is_none());
//! ```
//!
//! # Rendering
//!
//! | Format | Output |
//! |---|---|
//! | `{}` / [`Verbosity::Plain`] | `"outer: inner: root"` |
//! | [`Verbosity::Quoted`] | `"\"outer: inner: root\""` |
//! | `{:#}`, `{:?}` / [`Verbosity::Detailed`] | messages from the root outwards, each followed by its stack |
//!
//! In the detailed form every frame is printed as the function name on one line and the
//! tab-indented `file:line` on the next:
//!
//! ```text
//! disk full
//! app::storage::save
//!     /src/storage.rs:41
//! app::main
//!     /src/main.rs:12
//! saving settings
//! ```
//!
//! # Walking the chain
//!
//! [`WithStack`] and [`WithMessage`] implement [`Causer`] and report their cause through
//! [`source`](std::error::Error::source). [`cause`] follows only [`Causer`] links and stops at
//! the first error that is not a wrapper; [`ErrorExt::root_cause`] and
//! [`ErrorExt::find_source`] follow `source` through errors of any crate.
//!
//! ```rust
//! use whoops::{BaseError, ErrorExt};
//!
//! let root = whoops::new("root");
//! let error = whoops::with_message(Some(root), "context").unwrap();
//! assert_eq!(error.to_string(), "context: root");
//! assert!(whoops::cause(&error).is::<BaseError>());
//! assert!(error.find_source::<BaseError>().is_some());
//! ```

mod macros;

mod base_error;
mod chain;
mod error_ext;
mod frame;
mod render;
mod result_ext;
mod stack;
mod with_message;
mod with_stack;

#[cfg(any(feature = "test-util", test))]
pub mod test_util;

pub use base_error::BaseError;
pub use chain::{Causer, SharedError, cause, new, with_message, with_stack, wrap};
pub use error_ext::{Chain, ErrorExt};
pub use frame::{Frame, FrameDisplay, FrameFormat};
pub use render::{Rendered, Verbosity, render};
pub use result_ext::ResultExt;
pub use stack::{MAX_DEPTH, Stack, StackDisplay};
pub use with_message::WithMessage;
pub use with_stack::WithStack;
