// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use crate::frame::{basename, extract_function_name};
use crate::{Mode, StackFrame};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref FRAME_RE: Regex =
        Regex::new(r"^\s*#(?P<num>\d+)\s+0x[0-9a-fA-F]+(?P<in>\s+in)?\s+(?P<line>.+)$").unwrap();
    static ref LOCATION_RE: Regex =
        Regex::new(r"^(?P<prefix>.+?)(?::(?P<lineno>\d+)|\+0x(?P<hexoff>[0-9a-fA-F]+))").unwrap();
}

pub(crate) fn prefilter(line: &str) -> bool {
    line.contains('#')
}

pub(crate) fn recognize(line: &str) -> Option<StackFrame> {
    let caps = FRAME_RE.captures(line)?;

    let mut frame = StackFrame::new(Mode::Sanitizer);
    frame.stack_line = caps["num"].parse().ok();

    let mut remainder = caps["line"].to_string();
    if caps.name("in").is_some() {
        frame.function = extract_function_name(&remainder);
    }

    if remainder.starts_with('(') {
        remainder = remainder.trim_matches(|c| c == '(' || c == ')').to_string();
    }

    match LOCATION_RE.captures(&remainder) {
        Some(loc) => {
            frame.location = Some(basename(&loc["prefix"]).to_string());
            frame.offset = loc
                .name("lineno")
                .map(|m| m.as_str().to_string())
                .or_else(|| loc.name("hexoff").map(|m| format!("0x{}", m.as_str())));
        }
        None => {
            frame.location = Some(remainder);
        }
    }

    Some(frame)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn symbolicated_frame_with_source_line() {
        let frame = recognize("    #0 0x4a1b in Foo::bar(int) /src/foo.cc:42").unwrap();
        assert_eq!(frame.mode, Mode::Sanitizer);
        assert_eq!(frame.stack_line, Some(0));
        assert_eq!(frame.function.as_deref(), Some("Foo::bar"));
        assert_eq!(frame.location.as_deref(), Some("foo.cc"));
        assert_eq!(frame.offset.as_deref(), Some("42"));
    }

    #[test]
    fn second_frame_of_s1() {
        let frame = recognize("    #1 0x4a2c in main /src/m.cc:10").unwrap();
        assert_eq!(frame.stack_line, Some(1));
        assert_eq!(frame.function.as_deref(), Some("main"));
        assert_eq!(frame.location.as_deref(), Some("m.cc"));
        assert_eq!(frame.offset.as_deref(), Some("10"));
    }

    #[test]
    fn unsymbolicated_module_offset_frame() {
        let frame = recognize("#3 0x1122 (/path/to/bin+0x123)").unwrap();
        assert_eq!(frame.function, None);
        assert_eq!(frame.location.as_deref(), Some("bin"));
        assert_eq!(frame.offset.as_deref(), Some("0x123"));
    }

    #[test]
    fn rejects_non_sanitizer_lines() {
        assert!(recognize("nothing to see here").is_none());
    }
}
