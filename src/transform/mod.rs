//! Filename transformation pipeline
//!
//! This module implements the pure, total name transformer: given an
//! original filename and a `RuleSet`, it deterministically derives the new
//! filename. The transform never fails; rule tokens that do not compile as
//! patterns are skipped rather than propagated as errors.

mod case;
mod pipeline;

pub use pipeline::{Pipeline, RenameOutcome, rename, split_extension};
