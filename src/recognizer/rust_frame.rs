// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use crate::{Mode, StackFrame};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref FRAME_RE: Regex =
        Regex::new(r"^\s+(?P<num>\d+):\s+0x[0-9a-fA-F]+\s+-\s+(?P<line>.+)$").unwrap();
}

pub(crate) fn prefilter(_line: &str) -> bool {
    // No cheap substring prefilter discriminates Rust backtrace lines from
    // plain noise better than the regex itself; always attempt the match.
    true
}

pub(crate) fn recognize(line: &str) -> Option<StackFrame> {
    let caps = FRAME_RE.captures(line)?;

    let mut frame = StackFrame::new(Mode::Rust);
    frame.stack_line = caps["num"].parse().ok();
    frame.function = Some(strip_hash_suffix(caps["line"].trim()));
    Some(frame)
}

/// Strip a trailing Rust symbol-hash suffix (`::hDEADBEEF...`), matching on
/// the last occurrence of the literal `::h` marker regardless of what
/// follows it.
fn strip_hash_suffix(name: &str) -> String {
    match name.rfind("::h") {
        Some(idx) => name[..idx].to_string(),
        None => name.to_string(),
    }
}
