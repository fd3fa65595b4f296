// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use crate::{Mode, StackFrame};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref FRAME_RE: Regex =
        Regex::new(r"rr\((?P<loc>.+)\+0x(?P<off>[0-9a-fA-F]+)\)\[0x[0-9a-fA-F]+\]").unwrap();
}

pub(crate) fn prefilter(line: &str) -> bool {
    line.contains("rr(")
}

pub(crate) fn recognize(line: &str) -> Option<StackFrame> {
    let caps = FRAME_RE.captures(line)?;

    let mut frame = StackFrame::new(Mode::Rr);
    frame.location = Some(caps["loc"].to_string());
    frame.offset = Some(format!("0x{}", &caps["off"]));
    Some(frame)
}
