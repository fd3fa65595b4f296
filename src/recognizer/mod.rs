// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Frame recognition: from one line of text, produce at most one
//! [`StackFrame`], tagged with its source [`Mode`], or nothing.
//!
//! Dispatch is a table of `(mode, prefilter, parse)` entries consulted in
//! [`Mode::DISPATCH_ORDER`]. A hint just restricts the table to one entry;
//! it never changes what a given format accepts.

mod gdb;
mod minidump;
mod rr;
mod rust_frame;
mod sanitizer;
mod tsan;
mod valgrind;

use crate::{Mode, StackFrame};

type Prefilter = fn(&str) -> bool;
type Parse = fn(&str) -> Option<StackFrame>;

fn table_entry(mode: Mode) -> (Prefilter, Parse) {
    match mode {
        Mode::Gdb => (gdb::prefilter, gdb::recognize),
        Mode::Minidump => (minidump::prefilter, minidump::recognize),
        Mode::Rr => (rr::prefilter, rr::recognize),
        Mode::Rust => (rust_frame::prefilter, rust_frame::recognize),
        Mode::Sanitizer => (sanitizer::prefilter, sanitizer::recognize),
        Mode::Tsan => (tsan::prefilter, tsan::recognize),
        Mode::Valgrind => (valgrind::prefilter, valgrind::recognize),
    }
}

/// Recognize a single line, optionally restricted to one format.
///
/// Returning `None` means "not a frame in the searched format(s)" — this
/// function never fails.
pub fn recognize(line: &str, hint: Option<Mode>) -> Option<StackFrame> {
    debug_assert!(
        !line.contains('\n'),
        "recognizer input must not contain embedded newlines"
    );

    for mode in Mode::DISPATCH_ORDER {
        if let Some(wanted) = hint {
            if wanted != mode {
                continue;
            }
        }

        let (prefilter, parse) = table_entry(mode);
        let frame = if prefilter(line) {
            parse(line).filter(StackFrame::has_identity)
        } else {
            None
        };

        if frame.is_some() {
            return frame;
        }
        if hint.is_some() {
            // A hint restricts us to exactly one recognizer; don't fall
            // through to the others on failure.
            return None;
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn sanitizer_tried_before_gdb_on_ambiguous_prefix() {
        // Both sanitizer and gdb lines start with "#N"; a sanitizer line
        // carries a hex address right after the number, which is what
        // disambiguates it from a gdb line that happens to have none.
        let line = "#0 0x4a1b in Foo::bar(int) /src/foo.cc:42";
        let frame = recognize(line, None).unwrap();
        assert_eq!(frame.mode, Mode::Sanitizer);
    }

    #[test]
    fn hint_restricts_to_one_recognizer() {
        // This minidump-shaped line isn't a valid gdb frame at all, so a
        // gdb hint must fail even though unhinted dispatch would have
        // gone on to try (and succeed at) minidump.
        let line = "0|0|libfoo.so|do_thing|hg:repo:src/x.cc:abcd|123|0x5";
        assert!(recognize(line, Some(Mode::Gdb)).is_none());
        assert!(recognize(line, Some(Mode::Minidump)).is_some());
    }

    #[test]
    fn unrecognized_line_yields_nothing() {
        assert!(recognize("just some unrelated log noise", None).is_none());
    }
}
