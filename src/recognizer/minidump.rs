// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use crate::frame::basename;
use crate::{Mode, StackFrame};

pub(crate) fn prefilter(line: &str) -> bool {
    line.contains('|')
}

pub(crate) fn recognize(line: &str) -> Option<StackFrame> {
    let fields: Vec<&str> = line.split('|').collect();
    let [tid, stack_line, lib, func, file, line_no, offset]: [&str; 7] =
        fields.try_into().ok()?;

    if tid.trim().parse::<i64>().ok()? < 0 {
        return None;
    }
    let stack_line: i64 = stack_line.trim().parse().ok()?;
    if stack_line < 0 {
        return None;
    }

    let mut frame = StackFrame::new(Mode::Minidump);
    frame.stack_line = Some(stack_line as u32);

    let func = func.trim();
    if !func.is_empty() {
        frame.function = Some(func.to_string());
    }

    let file = file.trim();
    if !file.is_empty() {
        if file.matches(':').count() > 1 {
            // `file` encodes version-control info, e.g. `hg:repo:src/x.cc:rev`.
            let parts: Vec<&str> = file.split(':').collect();
            let vcs_field = parts[parts.len() - 2];
            frame.location = Some(basename(vcs_field).to_string());
        } else {
            frame.location = Some(file.to_string());
        }
    } else {
        let lib = lib.trim();
        if !lib.is_empty() {
            frame.location = Some(lib.to_string());
        }
    }

    let line_no = line_no.trim();
    let offset = offset.trim();
    if !line_no.is_empty() {
        frame.offset = Some(line_no.to_string());
    } else if !offset.is_empty() {
        frame.offset = Some(offset.to_string());
    }

    Some(frame)
}
