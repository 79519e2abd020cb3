// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Demonstrates finding the error that started a chain.

#![expect(clippy::unwrap_used, reason = "example code")]

use std::io::Error as IoError;

use whoops::ErrorExt;

fn main() {
    let io_err = IoError::other("network unreachable");
    let err = whoops::wrap(Some(io_err), "connecting to database").unwrap();
    let err = whoops::with_message(Some(err), "starting service").unwrap();

    // `cause` stops at the first error that is not a wrapper
    let origin = whoops::cause(&err);
    println!("Origin: {origin}");

    let io_err = err.find_source::<IoError>().unwrap();
    println!("Found IO error: {io_err}");

    if let Some(stack) = err.stack_trace() {
        for frame in stack.frames() {
            println!("  at {frame}");
        }
    }
}
