// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use crate::{recognizer, Mode, Stack, StackFrame};

/// Frames include many runtime/panic entries at the top of a Rust
/// backtrace; a wider bucketing window produces more discriminating bug
/// buckets for that format.
pub(crate) const DEFAULT_MAJOR_DEPTH: i64 = 5;
pub(crate) const RUST_MAJOR_DEPTH: i64 = 10;

/// Assemble an ordered [`Stack`] from a text blob.
///
/// The blob is split on newlines and scanned bottom-up: many producers
/// emit a stack followed by unrelated trailing text, and starting from the
/// deepest frame lets assembly lock onto one stack and stop cleanly when
/// frame numbering resets, rather than needing to guess where a stack
/// begins.
pub fn assemble(text: &str, major_depth: Option<i64>, hint: Option<Mode>) -> Stack {
    let mut frames: Vec<StackFrame> = Vec::new();
    let mut parse_mode = hint;
    let mut prev_line: Option<u32> = None;

    for line in text.lines().rev() {
        if line.is_empty() {
            continue;
        }

        let Some(frame) = recognizer::recognize(line, hint) else {
            continue;
        };

        match parse_mode {
            None => parse_mode = Some(frame.mode),
            Some(locked) if locked != frame.mode => continue,
            Some(_) => {}
        }

        match frame.stack_line {
            Some(n) => {
                if let Some(prev) = prev_line {
                    if prev <= n {
                        // A new (higher, older) stack has begun above this one.
                        break;
                    }
                }
                frames.insert(0, frame);
                if n < 1 {
                    // Just consumed the topmost frame.
                    break;
                }
                prev_line = Some(n);
            }
            None => frames.insert(0, frame),
        }
    }

    warn_on_numbering_gaps(&frames);

    let mut depth = major_depth.unwrap_or(DEFAULT_MAJOR_DEPTH);
    if depth < RUST_MAJOR_DEPTH && frames.first().map(|f| f.mode) == Some(Mode::Rust) {
        depth = RUST_MAJOR_DEPTH;
    }

    Stack::new(frames, depth)
}

fn warn_on_numbering_gaps(frames: &[StackFrame]) {
    if frames.is_empty() || !frames.iter().any(|f| f.stack_line.is_some()) {
        return;
    }

    if frames[0].stack_line != Some(0) {
        log::warn!("first stack line {:?} is not 0", frames[0].stack_line);
    }
    let last = frames.len() - 1;
    if frames[last].stack_line != Some(last as u32) {
        log::warn!(
            "last stack line {:?} is not {}",
            frames[last].stack_line,
            last
        );
    }
}
