// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Message and cause-chain behavior of the public constructors.

use std::error::Error as StdError;

use whoops::{BaseError, Causer, ErrorExt, ResultExt, WithMessage, WithStack};

#[derive(Debug, thiserror::Error)]
enum StorageError {
    #[error("disk full")]
    DiskFull,
    #[error("io failure")]
    Io(#[from] std::io::Error),
}

#[test]
fn new_displays_message() {
    for message in ["", "whoops", "multi\nline", "ünïcödé"] {
        assert_eq!(whoops::new(message).to_string(), message);
    }
}

#[test]
fn with_message_prefixes() {
    let cases: [Box<dyn StdError + Send + Sync>; 3] = [
        Box::new(whoops::new("root")),
        Box::new(StorageError::DiskFull),
        Box::new(std::io::Error::other("reset")),
    ];
    for error in cases {
        let expected = format!("context: {error}");
        let annotated = WithMessage::new(error, "context");
        assert_eq!(annotated.to_string(), expected);
    }
}

#[test]
fn with_stack_keeps_message() {
    let error = whoops::with_stack(Some(StorageError::DiskFull)).unwrap();
    assert_eq!(error.to_string(), "disk full");

    let twice = whoops::with_stack(Some(error)).unwrap();
    assert_eq!(twice.to_string(), "disk full");
}

#[test]
fn absorbing_none() {
    let none = || None::<StorageError>;
    assert!(whoops::with_stack(none()).is_none());
    assert!(whoops::with_message(none(), "m").is_none());
    assert!(whoops::wrap(none(), "m").is_none());
    assert!(whoops::with_messagef!(none(), "{}", 1).is_none());
    assert!(whoops::wrapf!(none(), "{}", 1).is_none());
}

#[test]
fn wrap_example() {
    let error = whoops::wrap(Some(whoops::new("whoops")), "oh no").unwrap();
    assert_eq!(error.to_string(), "oh no: whoops");
}

#[test]
fn cause_of_nested_wraps() {
    let inner = whoops::wrap(Some(whoops::new("a")), "b").unwrap();
    let outer = whoops::wrap(Some(inner), "c").unwrap();
    assert_eq!(outer.to_string(), "c: b: a");
    assert_eq!(whoops::cause(&outer).to_string(), "a");
}

#[test]
fn cause_is_the_original_error() {
    let e1 = whoops::new("root");
    let e2 = whoops::with_message(Some(e1.clone()), "context").unwrap();
    assert_eq!(e2.to_string(), "context: root");

    let found = whoops::cause(&e2).downcast_ref::<BaseError>().unwrap();
    assert!(found.stack().ptr_eq(e1.stack()));
}

#[test]
fn cause_of_optional_error() {
    let none: Option<&WithStack> = None;
    assert!(none.map(|error| whoops::cause(error)).is_none());
}

#[test]
fn single_step_cause() {
    let error = whoops::wrap(Some(whoops::new("a")), "b").unwrap();
    let annotated = error.wrapped().downcast_ref::<WithMessage>().unwrap();
    assert_eq!(annotated.message(), "b");
    let base = annotated.wrapped().downcast_ref::<BaseError>().unwrap();
    assert_eq!(base.message(), "a");
}

#[test]
fn single_step_cause_agrees_with_source() {
    // `std::error::Error` is in scope here, alongside its deprecated `cause` method
    let error = whoops::with_stack(Some(StorageError::DiskFull)).unwrap();
    let wrapped: &(dyn StdError + 'static) = error.wrapped();
    let source = error.source().unwrap();
    assert!(std::ptr::addr_eq(wrapped, source));
    assert!(wrapped.is::<StorageError>());
}

#[test]
fn source_chain_matches_cause_chain() {
    let error = whoops::wrap(Some(whoops::new("a")), "b").unwrap();
    let kinds: Vec<&str> = error
        .chain()
        .map(|err| {
            if err.is::<WithStack>() {
                "stack"
            } else if err.is::<WithMessage>() {
                "message"
            } else {
                "base"
            }
        })
        .collect();
    assert_eq!(kinds, ["stack", "message", "base"]);
}

#[test]
fn foreign_sources_are_found() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "settings.toml");
    let error = Err::<(), _>(StorageError::from(io)).wrap("loading settings").unwrap_err();

    assert!(whoops::cause(&error).is::<StorageError>());
    let io = error.find_source::<std::io::Error>().unwrap();
    assert_eq!(io.kind(), std::io::ErrorKind::NotFound);
    assert!(error.root_cause().is::<std::io::Error>());
}

#[test]
fn errorf_formats() {
    let attempt = 3;
    let error = whoops::errorf!("gave up after {attempt} attempts");
    assert_eq!(error.to_string(), "gave up after 3 attempts");
    assert!(error.source().is_none());
}
