// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Rendering of error chains with real captured stacks.

#![cfg(feature = "test-util")]

use std::sync::Arc;
use std::thread;

use regex::Regex;
use whoops::{BaseError, ErrorExt, ResultExt, Verbosity, WithStack, assert_detailed};

fn frame_line() -> Regex {
    Regex::new(r"\n[^\n\t]+\n\t[^\n]+:\d+").unwrap()
}

#[inline(never)]
fn load() -> Result<(), BaseError> {
    Err(BaseError::new("file not found"))
}

#[inline(never)]
fn start() -> Result<(), WithStack> {
    load().wrap("loading config")
}

#[test]
#[cfg_attr(miri, ignore)] // stack walking is not supported under miri
fn base_error_detailed_has_frames() {
    let error = whoops::new("whoops");
    let detailed = format!("{error:#}");
    assert!(detailed.starts_with("whoops\n"), "{detailed}");
    assert!(frame_line().is_match(&detailed), "{detailed}");
}

#[test]
fn plain_and_quoted() {
    let error = start().unwrap_err();
    assert_eq!(error.render(Verbosity::Plain).to_string(), "loading config: file not found");
    assert_eq!(format!("{error}"), "loading config: file not found");
    assert_eq!(error.render(Verbosity::Quoted).to_string(), "\"loading config: file not found\"");
}

#[test]
#[cfg_attr(miri, ignore)] // stack walking is not supported under miri
fn detailed_orders_messages_and_stacks() {
    let error = start().unwrap_err();
    let detailed = error.render(Verbosity::Detailed).to_string();

    // root message, its stack, the context message, then the outer stack
    assert_detailed!(error, ["file not found", "loading config"]);
    assert!(detailed.starts_with("file not found\n"), "{detailed}");

    let message_at = detailed.find("\nloading config\n").unwrap();
    let (before, after) = detailed.split_at(message_at);
    assert!(before.contains("load"), "{detailed}");
    assert!(frame_line().is_match(before), "{detailed}");
    assert!(frame_line().is_match(after), "{detailed}");
}

#[test]
#[cfg_attr(miri, ignore)] // stack walking is not supported under miri
fn stacks_start_at_call_site() {
    let error = start().unwrap_err();
    let outer = error.stack().frames().next().unwrap();
    assert!(outer.function().ends_with("start"), "{outer:#}");

    let base = whoops::cause(&error).downcast_ref::<BaseError>().unwrap();
    let inner = base.stack().frames().next().unwrap();
    assert!(inner.function().ends_with("load"), "{inner:#}");
}

#[test]
fn debug_is_detailed() {
    let error = start().unwrap_err();
    assert_eq!(format!("{error:?}"), format!("{error:#}"));
}

#[test]
#[cfg_attr(miri, ignore)] // stack walking is not supported under miri
fn rendering_from_many_threads() {
    let error = Arc::new(start().unwrap_err());
    let expected = format!("{error:#}");

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let error = Arc::clone(&error);
            thread::spawn(move || format!("{error:#}"))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
