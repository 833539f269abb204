//! Rule data structures and types
//!
//! This module defines the core configuration for the rename pipeline:
//! - `RuleSet`: the flat record of rewrite rules
//! - `CaseStyle`: the mutually exclusive case-change options
//! - `RuleSetBuilder`: fluent construction of a `RuleSet`

use serde::{Deserialize, Serialize};

/// Case-change rule applied to the base name
///
/// The variants are mutually exclusive by construction: a `RuleSet` holds
/// exactly one `CaseStyle` at a time, so selecting title case after
/// sentence case replaces the earlier choice.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum CaseStyle {
    /// Leave the case untouched
    #[default]
    None,
    /// Lowercase the whole base name
    Lower,
    /// Uppercase the whole base name
    Upper,
    /// Uppercase the first character, lowercase the rest (whole base)
    Sentence,
    /// Uppercase the first character of each space-delimited word
    Title,
}

/// The full set of rewrite rules applied to a filename
///
/// A flat, copy-by-value record: every field defaults to a no-op, so
/// `RuleSet::default()` leaves any filename unchanged. The pipeline
/// applies the fields in a fixed order (see `transform::Pipeline`);
/// field order here mirrors that order for readability only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct RuleSet {
    /// Comma-separated substrings removed from the base, case-insensitively
    #[serde(default)]
    pub remove_words: String,

    /// Pattern replaced throughout the base (full regex semantics)
    #[serde(default)]
    pub find: String,

    /// Replacement text for `find` matches
    #[serde(default)]
    pub replace: String,

    /// Replace every underscore with a single space
    #[serde(default)]
    pub underscore_to_space: bool,

    /// Strip ASCII digits from the base
    #[serde(default)]
    pub remove_numbers: bool,

    /// Strip `(` and `)` from the base
    #[serde(default)]
    pub remove_parentheses: bool,

    /// Strip `-` from the base
    #[serde(default)]
    pub remove_dashes: bool,

    /// Strip all whitespace from the base
    #[serde(default)]
    pub remove_spaces: bool,

    /// Case change applied to the base
    #[serde(default)]
    pub case: CaseStyle,

    /// Text prepended verbatim to the base
    #[serde(default)]
    pub prefix: String,

    /// Text appended verbatim to the base
    #[serde(default)]
    pub suffix: String,

    /// Maximum base length in characters after affixes; 0 means unlimited
    #[serde(default)]
    pub max_length: usize,

    /// Replacement extension; empty keeps the original extension
    #[serde(default)]
    pub change_extension: String,
}

impl RuleSet {
    /// Create a new rule-set builder
    #[must_use]
    pub fn builder() -> RuleSetBuilder {
        RuleSetBuilder::default()
    }

    /// Create a no-op rule set (same as `RuleSet::default()`)
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether every rule is a no-op
    #[must_use]
    pub fn is_noop(&self) -> bool {
        *self == Self::default()
    }

    /// Validate the rule set
    ///
    /// Advisory only: the pipeline itself never fails on bad input, it
    /// skips the affected stage. This surfaces what would be skipped so
    /// a UI can warn the user.
    ///
    /// # Errors
    ///
    /// Returns an error message if `find` is non-empty and does not
    /// compile as a regular expression.
    pub fn validate(&self) -> Result<(), String> {
        if !self.find.is_empty() && regex::Regex::new(&self.find).is_err() {
            return Err(format!("Invalid find pattern: {}", self.find));
        }
        Ok(())
    }
}

/// Builder for `RuleSet`
#[derive(Debug, Clone, Default)]
pub struct RuleSetBuilder {
    rules: RuleSet,
}

impl RuleSetBuilder {
    /// Set the comma-separated words to remove
    #[must_use]
    pub fn remove_words(mut self, words: impl Into<String>) -> Self {
        self.rules.remove_words = words.into();
        self
    }

    /// Set the find/replace pair
    #[must_use]
    pub fn find_replace(mut self, find: impl Into<String>, replace: impl Into<String>) -> Self {
        self.rules.find = find.into();
        self.rules.replace = replace.into();
        self
    }

    /// Replace underscores with spaces
    #[must_use]
    pub const fn underscore_to_space(mut self, enabled: bool) -> Self {
        self.rules.underscore_to_space = enabled;
        self
    }

    /// Strip ASCII digits
    #[must_use]
    pub const fn remove_numbers(mut self, enabled: bool) -> Self {
        self.rules.remove_numbers = enabled;
        self
    }

    /// Strip parentheses
    #[must_use]
    pub const fn remove_parentheses(mut self, enabled: bool) -> Self {
        self.rules.remove_parentheses = enabled;
        self
    }

    /// Strip dashes
    #[must_use]
    pub const fn remove_dashes(mut self, enabled: bool) -> Self {
        self.rules.remove_dashes = enabled;
        self
    }

    /// Strip all whitespace
    #[must_use]
    pub const fn remove_spaces(mut self, enabled: bool) -> Self {
        self.rules.remove_spaces = enabled;
        self
    }

    /// Set the case change
    #[must_use]
    pub const fn case(mut self, style: CaseStyle) -> Self {
        self.rules.case = style;
        self
    }

    /// Set the prefix
    #[must_use]
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.rules.prefix = prefix.into();
        self
    }

    /// Set the suffix
    #[must_use]
    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.rules.suffix = suffix.into();
        self
    }

    /// Set the maximum base length (0 = unlimited)
    #[must_use]
    pub const fn max_length(mut self, max: usize) -> Self {
        self.rules.max_length = max;
        self
    }

    /// Set the replacement extension (empty keeps the original)
    #[must_use]
    pub fn change_extension(mut self, ext: impl Into<String>) -> Self {
        self.rules.change_extension = ext.into();
        self
    }

    /// Build the `RuleSet`
    #[must_use]
    pub fn build(self) -> RuleSet {
        self.rules
    }
}

impl std::fmt::Display for RuleSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_noop() {
            return writeln!(f, "Rules: (none)");
        }

        if !self.remove_words.is_empty() {
            writeln!(f, "Remove Words: {}", self.remove_words)?;
        }
        if !self.find.is_empty() {
            writeln!(f, "Find/Replace: '{}' -> '{}'", self.find, self.replace)?;
        }

        let mut strips = Vec::new();
        if self.underscore_to_space {
            strips.push("underscore->space");
        }
        if self.remove_numbers {
            strips.push("numbers");
        }
        if self.remove_parentheses {
            strips.push("parentheses");
        }
        if self.remove_dashes {
            strips.push("dashes");
        }
        if self.remove_spaces {
            strips.push("spaces");
        }
        if !strips.is_empty() {
            writeln!(f, "Strip: {}", strips.join(", "))?;
        }

        match self.case {
            CaseStyle::None => {}
            CaseStyle::Lower => writeln!(f, "Case: lowercase")?,
            CaseStyle::Upper => writeln!(f, "Case: uppercase")?,
            CaseStyle::Sentence => writeln!(f, "Case: sentence")?,
            CaseStyle::Title => writeln!(f, "Case: title")?,
        }

        if !self.prefix.is_empty() {
            writeln!(f, "Prefix: {}", self.prefix)?;
        }
        if !self.suffix.is_empty() {
            writeln!(f, "Suffix: {}", self.suffix)?;
        }
        if self.max_length > 0 {
            writeln!(f, "Max Length: {}", self.max_length)?;
        }
        if !self.change_extension.is_empty() {
            writeln!(f, "Extension: {}", self.change_extension)?;
        }

        Ok(())
    }
}
