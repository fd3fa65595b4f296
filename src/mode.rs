// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The producer whose textual format a line was recognized under.
///
/// This is a closed enumeration: consumers may branch on it, so it is part
/// of this crate's ABI. New formats require a new variant plus a new
/// recognizer module, never a change to an existing tag's meaning.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Gdb,
    Minidump,
    Rr,
    Rust,
    Sanitizer,
    Tsan,
    Valgrind,
}

impl Mode {
    /// The order recognizers are tried in when no hint narrows the search.
    ///
    /// `Sanitizer` must precede `Gdb`: both formats start with `#N`, but a
    /// sanitizer line always carries a hex address after the frame number,
    /// so trying sanitizer first keeps ambiguous lines from being
    /// misclassified as gdb.
    pub(crate) const DISPATCH_ORDER: [Mode; 7] = [
        Mode::Sanitizer,
        Mode::Gdb,
        Mode::Minidump,
        Mode::Rr,
        Mode::Rust,
        Mode::Tsan,
        Mode::Valgrind,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Gdb => "gdb",
            Mode::Minidump => "minidump",
            Mode::Rr => "rr",
            Mode::Rust => "rust",
            Mode::Sanitizer => "sanitizer",
            Mode::Tsan => "tsan",
            Mode::Valgrind => "valgrind",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
