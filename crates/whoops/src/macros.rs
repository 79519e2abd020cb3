// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Formatting constructors.

/// Creates a [`BaseError`](crate::BaseError) from a format string, capturing the current stack.
///
/// # Examples
///
/// ```rust
/// let code = 42;
/// let error = whoops::errorf!("request failed with code {code}");
/// assert_eq!(error.to_string(), "request failed with code 42");
/// ```
#[macro_export]
macro_rules! errorf {
    ($($arg:tt)+) => {
        $crate::BaseError::new(::std::format!($($arg)+))
    };
}

/// Annotates an `Option` of an error with a formatted message, like
/// [`with_message`](crate::with_message).
///
/// The message is only formatted when there is an error.
///
/// # Examples
///
/// ```rust
/// let attempt = 3;
/// let error = whoops::with_messagef!(Some(whoops::new("timeout")), "attempt {attempt}").unwrap();
/// assert_eq!(error.to_string(), "attempt 3: timeout");
/// ```
#[macro_export]
macro_rules! with_messagef {
    ($error:expr, $($arg:tt)+) => {
        match $error {
            ::std::option::Option::Some(error) => {
                $crate::with_message(::std::option::Option::Some(error), ::std::format!($($arg)+))
            }
            ::std::option::Option::None => ::std::option::Option::None,
        }
    };
}

/// Annotates an `Option` of an error with a formatted message and wraps it with the current
/// stack, like [`wrap`](crate::wrap).
///
/// The message is only formatted when there is an error.
///
/// # Examples
///
/// ```rust
/// let path = "/etc/app.toml";
/// let error = whoops::wrapf!(Some(whoops::new("not found")), "loading {path}").unwrap();
/// assert_eq!(error.to_string(), "loading /etc/app.toml: not found");
/// ```
#[macro_export]
macro_rules! wrapf {
    ($error:expr, $($arg:tt)+) => {
        match $error {
            ::std::option::Option::Some(error) => $crate::wrap(::std::option::Option::Some(error), ::std::format!($($arg)+)),
            ::std::option::Option::None => ::std::option::Option::None,
        }
    };
}

/// Returns early with a [`BaseError`](crate::BaseError) built from a format string.
///
/// The error is converted with [`From`] into the function's error type.
///
/// # Examples
///
/// ```rust
/// use whoops::{BaseError, bail};
///
/// fn check(value: i32) -> Result<i32, BaseError> {
///     if value < 0 {
///         bail!("value must be non-negative, got {value}");
///     }
///     Ok(value)
/// }
///
/// assert_eq!(check(-1).unwrap_err().to_string(), "value must be non-negative, got -1");
/// ```
#[macro_export]
macro_rules! bail {
    ($($arg:tt)+) => {
        return ::std::result::Result::Err(::std::convert::From::from($crate::errorf!($($arg)+)))
    };
}
