// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use crate::frame::basename;
use crate::{Mode, StackFrame};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref FRAME_RE: Regex = Regex::new(
        r"^==\d+==\s+(?:at|by)\s+0x[0-9a-fA-F]+:\s+(?P<func>.+?)\s+\((?P<line>.+)\)"
    )
    .unwrap();
}

pub(crate) fn prefilter(line: &str) -> bool {
    line.contains("== ")
}

pub(crate) fn recognize(line: &str) -> Option<StackFrame> {
    let caps = FRAME_RE.captures(line)?;
    let remainder = &caps["line"];

    let mut frame = StackFrame::new(Mode::Valgrind);
    frame.function = Some(caps["func"].trim().to_string());

    if remainder.matches(':').count() == 1 {
        let (file, offset) = remainder.split_once(':').unwrap();
        frame.location = Some(file.trim().to_string());
        frame.offset = Some(offset.trim().to_string());
    } else {
        // Peel off a leading "in " from the pre-split remainder, not from
        // the result of the rsplit below (the two coincide unless the
        // remainder itself contains a nested `(`).
        let trimmed = remainder.rsplit('(').next().unwrap_or(remainder);
        let location = if trimmed.starts_with("in ") {
            &remainder[3..]
        } else {
            trimmed
        };
        frame.location = Some(basename(location).to_string());
    }

    if frame.location.as_deref().map_or(true, str::is_empty) {
        return None;
    }

    Some(frame)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn recognizes_file_and_line() {
        let frame = recognize("==1234==    at 0xDEADBEEF: foo::bar (foo.cc:42)").unwrap();
        assert_eq!(frame.mode, Mode::Valgrind);
        assert_eq!(frame.stack_line, None);
        assert_eq!(frame.function.as_deref(), Some("foo::bar"));
        assert_eq!(frame.location.as_deref(), Some("foo.cc"));
        assert_eq!(frame.offset.as_deref(), Some("42"));
    }

    #[test]
    fn module_only_frame_falls_back_to_basename() {
        let frame = recognize("==1234==    by 0xDEADBEEF: foo::bar (in /path/to/lib.so)").unwrap();
        assert_eq!(frame.function.as_deref(), Some("foo::bar"));
        assert_eq!(frame.location.as_deref(), Some("lib.so"));
        assert_eq!(frame.offset, None);
    }

    #[test]
    fn rejects_non_valgrind_lines() {
        assert!(recognize("plain text").is_none());
    }
}
