// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use crate::StackFrame;
use sha1::{Digest, Sha1};

/// Fine-grained identity hash: every frame, in order, contributes its
/// `location`, `function`, and `offset` (in that order, skipping any that
/// are unset). Two stacks hash identically only if they agree frame for
/// frame, offset included.
pub(crate) fn minor(frames: &[StackFrame]) -> Option<String> {
    if frames.is_empty() {
        return None;
    }

    let mut hasher = Sha1::new();
    for frame in frames {
        feed(&mut hasher, frame, true);
    }
    Some(hex::encode(hasher.finalize()))
}

/// Coarse bucket hash: the top `major_depth` frames, with every offset
/// past the first omitted — offsets move with every build and would
/// defeat bucketing, but the top frame's offset most strongly identifies
/// the crash site and is kept.
pub(crate) fn major(frames: &[StackFrame], major_depth: i64) -> Option<String> {
    if frames.is_empty() || major_depth < 1 {
        return None;
    }

    let mut hasher = Sha1::new();
    for (index, frame) in frames.iter().take(major_depth as usize).enumerate() {
        feed(&mut hasher, frame, index == 0);
    }
    Some(hex::encode(hasher.finalize()))
}

fn feed(hasher: &mut Sha1, frame: &StackFrame, include_offset: bool) {
    if let Some(location) = &frame.location {
        hasher.update(location.as_bytes());
    }
    if let Some(function) = &frame.function {
        hasher.update(function.as_bytes());
    }
    if include_offset {
        if let Some(offset) = &frame.offset {
            hasher.update(offset.as_bytes());
        }
    }
}
