// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use crate::frame::{basename, extract_function_name};
use crate::{Mode, StackFrame};
use lazy_static::lazy_static;
use regex::Regex;

const NULL_SENTINEL: &str = "<null>";

lazy_static! {
    static ref FRAME_RE: Regex = Regex::new(
        r"^\s*#(?P<num>\d+)\s+(?P<line>.+)\s+\((?:(?P<module>[^+]+)\+)?0x(?P<off>[0-9a-fA-F]+)\)$"
    )
    .unwrap();
}

pub(crate) fn prefilter(line: &str) -> bool {
    line.contains('#')
}

pub(crate) fn recognize(line: &str) -> Option<StackFrame> {
    let caps = FRAME_RE.captures(line)?;
    let remainder = caps["line"].trim();

    let mut frame = StackFrame::new(Mode::Tsan);
    frame.stack_line = caps["num"].parse().ok();

    if let Some(last_token) = basename(remainder).split_whitespace().last() {
        // Only the first two `:`-delimited segments are ever kept (mirrors
        // two `pop(0)` calls on the original's `split(":")` list); anything
        // past the second colon is silently discarded.
        let mut segments = last_token.split(':');
        if let Some(loc) = segments.next() {
            if !loc.is_empty() && loc != NULL_SENTINEL {
                frame.location = Some(loc.to_string());
                if let Some(off) = segments.next() {
                    if off != NULL_SENTINEL {
                        frame.offset = Some(off.to_string());
                    }
                }
            }
        }
    }

    if frame.location.is_none() {
        frame.location = caps.name("module").map(|m| m.as_str().to_string());
    }
    if frame.offset.is_none() {
        frame.offset = Some(format!("0x{}", &caps["off"]));
    }

    if let Some(name) = extract_function_name(remainder) {
        if name != NULL_SENTINEL {
            frame.function = Some(name);
        }
    }

    Some(frame)
}
