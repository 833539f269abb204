//! Rewrite rule configuration
//!
//! This module defines the flat `RuleSet` value object that drives the
//! name-transformation pipeline, along with its builder and validation.

mod types;

pub use types::{CaseStyle, RuleSet, RuleSetBuilder};
