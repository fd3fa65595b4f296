// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use crate::Mode;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// A single recognized call frame.
///
/// `mode` is always set. At least one of `function`, `location`, `offset`
/// is set too: a line that yields none of the three is not a frame and is
/// dropped by the recognizer that produced it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StackFrame {
    pub mode: Mode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stack_line: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub function: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<String>,
}

impl StackFrame {
    pub(crate) fn new(mode: Mode) -> Self {
        StackFrame {
            mode,
            stack_line: None,
            function: None,
            location: None,
            offset: None,
        }
    }

    /// Recognize a single line of text (guaranteed to contain no line
    /// terminators). Returns `None` if the line is not a frame in the
    /// hinted format, or in any format when no hint is given.
    pub fn from_line(line: &str, hint: Option<Mode>) -> Option<StackFrame> {
        crate::recognizer::recognize(line, hint)
    }

    pub(crate) fn has_identity(&self) -> bool {
        self.function.is_some() || self.location.is_some() || self.offset.is_some()
    }
}

lazy_static! {
    /// Shared by the gdb, sanitizer, and tsan recognizers. Greedy-minimal
    /// match up to the first `(`, `<`, or whitespace, trimming argument
    /// lists, template parameters, and trailing address annotations from a
    /// symbol string.
    static ref FUNCTION_NAME_RE: Regex = Regex::new(r"(?P<func>.+?)[(<\s]").unwrap();
}

/// Extract a bare function name from a symbolized fragment, or `None` if
/// the fragment has no `(`, `<`, or whitespace to anchor on.
pub(crate) fn extract_function_name(text: &str) -> Option<String> {
    FUNCTION_NAME_RE
        .captures(text)
        .map(|caps| caps["func"].to_string())
}

/// Basename of a path, splitting on both `/` and `\` so Windows-style
/// module paths (e.g. from minidump or sanitizer frames captured on
/// Windows) are handled the same as POSIX ones.
pub(crate) fn basename(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}
