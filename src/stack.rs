// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use crate::{assembler, fingerprint, Mode, StackFrame};
use once_cell::sync::OnceCell;

/// An ordered sequence of call frames plus the depth used when computing
/// the bucket-level fingerprint.
///
/// `Stack` is immutable once assembled: `frames` and `major_depth` never
/// change after construction, so instances are freely shareable across
/// threads. `minor`/`major` are computed lazily on first access and
/// memoized; a benign race recomputing the same bytes twice is harmless,
/// since both hashes are pure functions of the frame list.
pub struct Stack {
    frames: Vec<StackFrame>,
    major_depth: i64,
    minor: OnceCell<Option<String>>,
    major: OnceCell<Option<String>>,
}

impl Stack {
    pub(crate) fn new(frames: Vec<StackFrame>, major_depth: i64) -> Self {
        Stack {
            frames,
            major_depth,
            minor: OnceCell::new(),
            major: OnceCell::new(),
        }
    }

    /// Parse a stack trace out of a text blob, trying all seven formats in
    /// their fixed dispatch order and locking onto the first one matched.
    pub fn from_text(text: &str) -> Self {
        assembler::assemble(text, None, None)
    }

    /// Like [`Stack::from_text`], but lets the caller override the major
    /// hash's depth and/or restrict recognition to a single format.
    pub fn from_text_with(text: &str, major_depth: Option<i64>, hint: Option<Mode>) -> Self {
        assembler::assemble(text, major_depth, hint)
    }

    /// Frames in top-down order: index 0 is the topmost (innermost) call.
    pub fn frames(&self) -> &[StackFrame] {
        &self.frames
    }

    pub fn major_depth(&self) -> i64 {
        self.major_depth
    }

    /// Fine-grained identity hash, or `None` if there are no frames.
    pub fn minor(&self) -> Option<&str> {
        self.minor
            .get_or_init(|| fingerprint::minor(&self.frames))
            .as_deref()
    }

    /// Coarse bucket hash, or `None` if there are no frames or
    /// `major_depth() < 1`.
    pub fn major(&self) -> Option<&str> {
        self.major
            .get_or_init(|| fingerprint::major(&self.frames, self.major_depth))
            .as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_text_yields_empty_stack_and_no_hashes() {
        let stack = Stack::from_text("");
        assert!(stack.frames().is_empty());
        assert_eq!(stack.minor(), None);
        assert_eq!(stack.major(), None);
    }

    #[test]
    fn hashes_are_memoized_and_stable_across_calls() {
        let text = "#0 0x1 in a /x.cc:1\n#1 0x2 in b /x.cc:2\n";
        let stack = Stack::from_text(text);
        let first = stack.minor().map(str::to_string);
        let second = stack.minor().map(str::to_string);
        assert_eq!(first, second);
        assert!(first.is_some());
    }

    #[test]
    fn major_depth_zero_disables_major_but_not_minor() {
        let text = "#0 0x1 in a /x.cc:1\n";
        let stack = Stack::from_text_with(text, Some(0), None);
        assert_eq!(stack.major(), None);
        assert!(stack.minor().is_some());
    }
}
