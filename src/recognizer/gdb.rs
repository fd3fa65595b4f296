// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use crate::frame::{basename, extract_function_name};
use crate::{Mode, StackFrame};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref FRAME_RE: Regex =
        Regex::new(r"^#(?P<num>\d+)\s+(?:0x[0-9a-fA-F]+\s+in\s+)?(?P<line>.+)$").unwrap();
}

const AT_MARKER: &str = ") at ";

pub(crate) fn prefilter(line: &str) -> bool {
    line.contains('#')
}

pub(crate) fn recognize(line: &str) -> Option<StackFrame> {
    let caps = FRAME_RE.captures(line)?;
    let remainder = caps["line"].trim();
    if remainder.is_empty() {
        return None;
    }

    let mut frame = StackFrame::new(Mode::Gdb);
    frame.stack_line = caps["num"].parse().ok();
    frame.function = extract_function_name(remainder);

    if let Some(pos) = remainder.rfind(AT_MARKER) {
        let after = &remainder[pos + AT_MARKER.len()..];
        let (file, offset) = match after.split_once(':') {
            Some((file, line_no)) => (file, Some(line_no.to_string())),
            None => (after, None),
        };
        frame.offset = offset;
        frame.location = basename(file).split_whitespace().next().map(String::from);
    }

    Some(frame)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn s3_two_frames() {
        let f0 = recognize("#0  0x7ff in do_work (x=1) at util.c:88").unwrap();
        assert_eq!(f0.mode, Mode::Gdb);
        assert_eq!(f0.function.as_deref(), Some("do_work"));
        assert_eq!(f0.location.as_deref(), Some("util.c"));
        assert_eq!(f0.offset.as_deref(), Some("88"));

        let f1 = recognize("#1  0x800 in main () at main.c:12").unwrap();
        assert_eq!(f1.function.as_deref(), Some("main"));
        assert_eq!(f1.location.as_deref(), Some("main.c"));
        assert_eq!(f1.offset.as_deref(), Some("12"));
    }

    #[test]
    fn without_address_prefix() {
        let frame = recognize("#2  do_other () at other.c:5").unwrap();
        assert_eq!(frame.function.as_deref(), Some("do_other"));
        assert_eq!(frame.location.as_deref(), Some("other.c"));
        assert_eq!(frame.offset.as_deref(), Some("5"));
    }

    #[test]
    fn empty_remainder_is_rejected() {
        assert!(recognize("#0      ").is_none());
    }
}
