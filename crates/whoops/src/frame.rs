// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::fmt;
use std::path::Path;

const UNKNOWN_FILE: &str = "unknown file";
const UNKNOWN_FUNCTION: &str = "unknown";

/// A single entry of a captured [`Stack`](crate::Stack).
///
/// Any field the platform could not resolve is left empty and the accessors substitute a
/// placeholder, so rendering a frame never fails.
///
/// # Examples
///
/// ```rust
/// use whoops::{Frame, FrameFormat};
///
/// let frame = Frame::new("app::config::load", "/src/app/config.rs", 42);
/// assert_eq!(frame.to_string(), "config.rs:42");
/// assert_eq!(frame.render(FrameFormat::Long).to_string(), "app::config::load\n\t/src/app/config.rs:42");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Frame {
    function: String,
    file: String,
    line: u32,
}

impl Frame {
    /// Creates a frame from its raw parts. Empty strings and a zero line mean "unknown".
    #[must_use]
    pub fn new(function: impl Into<String>, file: impl Into<String>, line: u32) -> Self {
        Self {
            function: function.into(),
            file: file.into(),
            line,
        }
    }

    pub(crate) fn from_symbol(symbol: &backtrace::Symbol) -> Self {
        Self {
            function: symbol.name().map(|name| format!("{name:#}")).unwrap_or_default(),
            file: symbol.filename().map(|path| path.display().to_string()).unwrap_or_default(),
            line: symbol.lineno().unwrap_or_default(),
        }
    }

    /// Full path of the source file, or `"unknown file"`.
    #[must_use]
    pub fn file(&self) -> &str {
        if self.file.is_empty() { UNKNOWN_FILE } else { &self.file }
    }

    /// Source line, zero when unknown.
    #[must_use]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Fully qualified function name, or `"unknown"`.
    #[must_use]
    pub fn function(&self) -> &str {
        if self.function.is_empty() {
            UNKNOWN_FUNCTION
        } else {
            &self.function
        }
    }

    /// Base name of the source file, without any directory.
    #[must_use]
    pub fn file_name(&self) -> &str {
        let file = self.file();
        Path::new(file).file_name().and_then(|name| name.to_str()).unwrap_or(file)
    }

    /// Function name with its package qualifier stripped.
    ///
    /// Keeps what follows the last `/`, then what follows the first `.` of that.
    /// This is a textual rule, not a parse of the symbol.
    #[must_use]
    pub fn short_function(&self) -> &str {
        let name = self.function();
        let name = name.rsplit_once('/').map_or(name, |(_, tail)| tail);
        name.split_once('.').map_or(name, |(_, tail)| tail)
    }

    /// Returns a [`Display`](fmt::Display) adapter rendering this frame in the given format.
    #[must_use]
    pub fn render(&self, format: FrameFormat) -> FrameDisplay<'_> {
        FrameDisplay { frame: self, format }
    }
}

/// `{}` renders [`FrameFormat::Short`], `{:#}` renders [`FrameFormat::Long`].
impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let format = if f.alternate() { FrameFormat::Long } else { FrameFormat::Short };
        fmt::Display::fmt(&self.render(format), f)
    }
}

/// The tokens a [`Frame`] can be rendered as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum FrameFormat {
    /// Base name of the source file.
    File,
    /// Function name, a newline, a tab, then the full file path.
    FileDetailed,
    /// Decimal line number.
    Line,
    /// Function name without its package qualifier.
    Function,
    /// `File:Line`.
    Short,
    /// `FileDetailed:Line`.
    Long,
}

/// Renders a [`Frame`] in a fixed [`FrameFormat`]. Created by [`Frame::render`].
#[derive(Debug, Clone, Copy)]
pub struct FrameDisplay<'a> {
    frame: &'a Frame,
    format: FrameFormat,
}

impl fmt::Display for FrameDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let frame = self.frame;
        match self.format {
            FrameFormat::File => f.write_str(frame.file_name()),
            FrameFormat::FileDetailed => write!(f, "{}\n\t{}", frame.function(), frame.file()),
            FrameFormat::Line => write!(f, "{}", frame.line()),
            FrameFormat::Function => f.write_str(frame.short_function()),
            FrameFormat::Short => write!(f, "{}:{}", frame.file_name(), frame.line()),
            FrameFormat::Long => write!(f, "{}\n\t{}:{}", frame.function(), frame.file(), frame.line()),
        }
    }
}
