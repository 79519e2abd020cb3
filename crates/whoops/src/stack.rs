// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Call stack capture.

use std::ffi::c_void;
use std::fmt;
use std::sync::{Arc, OnceLock};

use crate::{Frame, Verbosity};

/// Maximum number of frames recorded per stack.
pub const MAX_DEPTH: usize = 64;

/// Public constructors call [`Stack::capture`] directly; their frame is skipped as well.
const INTERNAL_CALLERS: usize = 1;

/// An immutable snapshot of the call stack, taken when an error was created or wrapped.
///
/// Instruction pointers are recorded at capture time; symbols are resolved once, the first
/// time the frames are inspected. Clones share the same snapshot.
///
/// # Examples
///
/// ```rust
/// use whoops::Verbosity;
///
/// let error = whoops::new("disk full");
/// let stack = error.stack();
/// for frame in stack.frames() {
///     println!("{frame}");
/// }
/// println!("{}", stack.render(Verbosity::Detailed));
/// ```
#[derive(Clone)]
pub struct Stack {
    inner: Arc<Inner>,
}

struct Inner {
    ips: Vec<usize>,
    frames: OnceLock<Vec<Frame>>,
}

impl Stack {
    /// Captures the stack of the calling thread.
    ///
    /// Frames up to and including this function are dropped, as is the frame of the
    /// constructor that called it, so the first frame is the constructor's call site.
    #[inline(never)]
    pub(crate) fn capture() -> Self {
        let anchor: fn() -> Self = Self::capture;
        let anchor = (anchor as *const ()).addr();

        let mut raw = Vec::new();
        let mut ips = Vec::with_capacity(MAX_DEPTH);
        let mut to_skip: Option<usize> = None;

        backtrace::trace(|frame| match to_skip {
            None => {
                if frame.symbol_address().addr() == anchor {
                    to_skip = Some(INTERNAL_CALLERS);
                } else if raw.len() < MAX_DEPTH {
                    raw.push(frame.ip().addr());
                }
                true
            }
            Some(0) => {
                ips.push(frame.ip().addr());
                ips.len() < MAX_DEPTH
            }
            Some(remaining) => {
                to_skip = Some(remaining - 1);
                true
            }
        });

        if to_skip.is_none() {
            ips = unanchored(raw);
        }

        Self::from_ips(ips)
    }

    fn from_ips(ips: Vec<usize>) -> Self {
        Self {
            inner: Arc::new(Inner {
                ips,
                frames: OnceLock::new(),
            }),
        }
    }

    /// Creates a stack from frames that are already resolved.
    ///
    /// Useful for errors that originate outside the current process.
    #[must_use]
    pub fn from_frames(frames: impl IntoIterator<Item = Frame>) -> Self {
        let frames: Vec<Frame> = frames.into_iter().take(MAX_DEPTH).collect();
        Self {
            inner: Arc::new(Inner {
                ips: Vec::new(),
                frames: OnceLock::from(frames),
            }),
        }
    }

    /// Returns the frames, innermost call first.
    pub fn frames(&self) -> impl ExactSizeIterator<Item = &Frame> {
        self.resolved().iter()
    }

    /// Returns the number of frames.
    #[must_use]
    pub fn len(&self) -> usize {
        self.resolved().len()
    }

    /// Returns `true` if no frame was captured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.resolved().is_empty()
    }

    /// Returns `true` if both stacks are the same snapshot.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Returns a [`Display`](fmt::Display) adapter rendering this stack.
    ///
    /// Only [`Verbosity::Detailed`] produces output: one `"\n"` plus the long form of each frame.
    /// Other verbosities render nothing.
    #[must_use]
    pub fn render(&self, verbosity: Verbosity) -> StackDisplay<'_> {
        StackDisplay { stack: self, verbosity }
    }

    fn resolved(&self) -> &[Frame] {
        self.inner.frames.get_or_init(|| resolve(&self.inner.ips))
    }
}

#[cfg_attr(test, mutants::skip)] // the capture routine is always found on the platforms tests run on
fn unanchored(raw: Vec<usize>) -> Vec<usize> {
    tracing::debug!(frames = raw.len(), "capture routine not found on the stack, keeping unskipped frames");
    raw
}

fn resolve(ips: &[usize]) -> Vec<Frame> {
    tracing::trace!(frames = ips.len(), "resolving stack symbols");

    let mut frames = Vec::with_capacity(ips.len());
    for &ip in ips {
        let before = frames.len();
        backtrace::resolve(std::ptr::without_provenance_mut::<c_void>(ip), |symbol| {
            frames.push(Frame::from_symbol(symbol));
        });
        if frames.len() == before {
            frames.push(Frame::default());
        }
    }
    frames
}

impl fmt::Debug for Stack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stack").field("frames", &self.resolved()).finish()
    }
}

/// Renders a [`Stack`] at a given [`Verbosity`]. Created by [`Stack::render`].
#[derive(Debug, Clone, Copy)]
pub struct StackDisplay<'a> {
    stack: &'a Stack,
    verbosity: Verbosity,
}

impl fmt::Display for StackDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.verbosity != Verbosity::Detailed {
            return Ok(());
        }
        for frame in self.stack.frames() {
            write!(f, "\n{frame:#}")?;
        }
        Ok(())
    }
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[cfg(test)]
mod tests {
    use super::*;

    #[inline(never)]
    fn capture_here() -> Stack {
        Stack::capture()
    }

    #[test]
    fn cloning_shares_snapshot() {
        let stack = capture_here();
        let clone = stack.clone();
        assert!(stack.ptr_eq(&clone));
        assert_eq!(stack.len(), clone.len());
    }

    #[test]
    fn separate_captures_are_distinct_snapshots() {
        assert!(!capture_here().ptr_eq(&capture_here()));
    }

    #[test]
    #[cfg_attr(miri, ignore)] // stack walking is not supported under miri
    fn depth_is_bounded() {
        fn recurse(depth: usize) -> Stack {
            if depth == 0 { capture_here() } else { recurse(depth - 1) }
        }

        let stack = recurse(MAX_DEPTH * 2);
        assert!(stack.inner.ips.len() <= MAX_DEPTH);
    }

    #[test]
    #[cfg_attr(miri, ignore)] // stack walking is not supported under miri
    fn first_frame_is_the_call_site() {
        let (stack, line) = (capture_here(), line!());
        let first = stack.frames().next().unwrap();
        assert_eq!(first.file_name(), "stack.rs", "unexpected first frame: {first:#}");
        assert_eq!(first.line(), line, "unexpected first frame: {first:#}");
    }

    #[test]
    fn detailed_rendering() {
        let stack = Stack::from_frames([Frame::new("app::a", "src/a.rs", 1), Frame::new("app::b", "src/b.rs", 2)]);
        assert_eq!(
            stack.render(Verbosity::Detailed).to_string(),
            "\napp::a\n\tsrc/a.rs:1\napp::b\n\tsrc/b.rs:2"
        );
    }

    #[test]
    fn non_detailed_rendering_is_empty() {
        let stack = Stack::from_frames([Frame::new("app::a", "src/a.rs", 1)]);
        assert_eq!(stack.render(Verbosity::Plain).to_string(), "");
        assert_eq!(stack.render(Verbosity::Quoted).to_string(), "");
    }

    #[test]
    fn from_frames_truncates() {
        let stack = Stack::from_frames(std::iter::repeat_n(Frame::default(), MAX_DEPTH + 5));
        assert_eq!(stack.len(), MAX_DEPTH);
        assert!(!stack.is_empty());
        assert!(Stack::from_frames([]).is_empty());
    }

    #[test]
    fn debug_lists_frames() {
        let stack = Stack::from_frames([Frame::new("app::a", "src/a.rs", 1)]);
        let debug = format!("{stack:?}");
        assert!(debug.starts_with("Stack"));
        assert!(debug.contains("app::a"));
    }
}
