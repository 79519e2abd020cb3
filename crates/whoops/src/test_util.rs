// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Test utilities for the whoops crate.
//!
//! This module is only available when the `test-util` feature is enabled.

/// Returns the message lines of a detailed rendering, dropping every frame.
///
/// A frame is rendered as a function line followed by a tab-indented `file:line` line; both
/// lines are removed.
#[must_use]
pub fn message_lines(detailed: &str) -> Vec<&str> {
    let mut lines = detailed.lines().peekable();
    let mut messages = Vec::new();
    while let Some(line) = lines.next() {
        if lines.peek().is_some_and(|next| next.starts_with('\t')) {
            lines.next();
        } else {
            messages.push(line);
        }
    }
    messages
}

/// Assert that the detailed (`{:#}`) rendering of an error has the expected message lines,
/// ignoring the stack frames, which depend on where the test runs.
///
/// # Examples
///
/// ```
/// # #[cfg(feature = "test-util")]
/// # {
/// use whoops::assert_detailed;
///
/// let error = whoops::wrap(Some(whoops::new("disk full")), "saving failed").unwrap();
/// assert_detailed!(error, ["disk full", "saving failed"]);
/// # }
/// ```
#[macro_export]
#[cfg_attr(coverage_nightly, coverage(off))] // coverage doesn't handle panics well
macro_rules! assert_detailed {
    ($error:expr, [$($line:expr),* $(,)?]) => {{
        let rendered = ::std::format!("{:#}", $error);
        let expected: ::std::vec::Vec<&str> = ::std::vec![$($line),*];
        let actual = $crate::test_util::message_lines(&rendered);
        assert!(actual == expected, "left : {expected:?}\nright: {actual:?}\nrendered:\n{rendered}");
    }};
}
