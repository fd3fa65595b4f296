// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Canonicalizes noisy debugger/sanitizer stack traces into an ordered
//! sequence of call frames and two stable fingerprints: a fine-grained
//! `minor` hash for exact deduplication and a coarse `major` hash for
//! bug-level bucketing.
//!
//! The pipeline is two stages: the [`recognizer`] module turns one line of
//! text into at most one [`StackFrame`], tagged with the [`Mode`] it was
//! recognized under; the [`assembler`] module turns a whole text blob into
//! an ordered [`Stack`] by scanning bottom-up and filtering noise. Hashes
//! are computed lazily off of the assembled `Stack` by the [`fingerprint`]
//! module.

mod assembler;
mod fingerprint;
mod frame;
mod mode;
mod recognizer;
mod stack;

pub use frame::StackFrame;
pub use mode::Mode;
pub use stack::Stack;
