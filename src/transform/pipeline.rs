//! The ordered rename pipeline
//!
//! Stage order is a contract, not an accident: word removal and
//! find/replace see the raw base name, character strips run before the
//! unconditional whitespace collapse, case conversion sees collapsed
//! single-space words, affixes are exempt from every text rule, and the
//! length cap runs last so affixes can be truncated too.

use regex::{Regex, RegexBuilder};
use serde::Serialize;

use super::case;
use crate::rules::{CaseStyle, RuleSet};

/// Result of transforming one filename
///
/// Ephemeral: recomputed whenever the filename set or the rules change.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RenameOutcome {
    /// The filename as supplied by the caller
    pub original_name: String,
    /// The derived filename, extension included
    pub new_name: String,
    /// The resolved extension of the derived filename (empty if none)
    pub extension: String,
}

/// Split a filename into base and extension at the last `.`
///
/// Returns `(name, "")` when there is no dot. A leading dot counts, so
/// `".gitignore"` splits into an empty base and the `gitignore` extension.
#[must_use]
pub fn split_extension(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(idx) => (&name[..idx], &name[idx + 1..]),
        None => (name, ""),
    }
}

/// A `RuleSet` with its patterns compiled, ready to rename many files
///
/// Compiling once and applying per file keeps the per-name cost down when
/// a whole file set is recomputed on every rule change. The pipeline is
/// immutable and `Send + Sync`, so independent names can be transformed
/// in parallel.
#[derive(Debug, Clone)]
pub struct Pipeline {
    rules: RuleSet,
    /// One escaped, case-insensitive matcher per remove-words token
    word_patterns: Vec<Regex>,
    /// Compiled find pattern; `None` when empty or invalid (stage skipped)
    find_pattern: Option<Regex>,
}

impl Pipeline {
    /// Compile the patterns of a `RuleSet`
    ///
    /// Tokens that fail to compile are dropped here, which is what makes
    /// the transform total: a malformed `find` pattern means that stage
    /// simply does not run.
    #[must_use]
    pub fn new(rules: &RuleSet) -> Self {
        let word_patterns = rules
            .remove_words
            .split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .filter_map(|token| {
                RegexBuilder::new(&regex::escape(token))
                    .case_insensitive(true)
                    .build()
                    .ok()
            })
            .collect();

        let find_pattern = if rules.find.is_empty() {
            None
        } else {
            Regex::new(&rules.find).ok()
        };

        Self {
            rules: rules.clone(),
            word_patterns,
            find_pattern,
        }
    }

    /// The rules this pipeline was compiled from
    #[must_use]
    pub const fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Transform one filename
    ///
    /// Pure and total: always returns a string, never panics.
    #[must_use]
    pub fn apply(&self, original: &str) -> String {
        let (base, original_ext) = split_extension(original);
        let mut base = base.to_string();

        for pattern in &self.word_patterns {
            base = pattern.replace_all(&base, "").into_owned();
        }

        if let Some(find) = &self.find_pattern {
            base = find
                .replace_all(&base, self.rules.replace.as_str())
                .into_owned();
        }

        if self.rules.underscore_to_space {
            base = base.replace('_', " ");
        }

        if self.rules.remove_numbers {
            base.retain(|c| !c.is_ascii_digit());
        }
        if self.rules.remove_parentheses {
            base.retain(|c| c != '(' && c != ')');
        }
        if self.rules.remove_dashes {
            base.retain(|c| c != '-');
        }
        if self.rules.remove_spaces {
            base.retain(|c| !c.is_whitespace());
        }

        base = normalize_whitespace(&base);

        base = match self.rules.case {
            CaseStyle::None => base,
            CaseStyle::Lower => base.to_lowercase(),
            CaseStyle::Upper => base.to_uppercase(),
            CaseStyle::Sentence => case::sentence(&base),
            CaseStyle::Title => case::title(&base),
        };

        if !self.rules.prefix.is_empty() {
            base.insert_str(0, &self.rules.prefix);
        }
        base.push_str(&self.rules.suffix);

        if self.rules.max_length > 0 && base.chars().count() > self.rules.max_length {
            base = base.chars().take(self.rules.max_length).collect();
        }

        let extension = self.resolve_extension(original_ext);
        if extension.is_empty() {
            base
        } else {
            format!("{base}.{extension}")
        }
    }

    /// Transform one filename, reporting the resolved extension too
    #[must_use]
    pub fn outcome(&self, original: &str) -> RenameOutcome {
        let (_, original_ext) = split_extension(original);
        RenameOutcome {
            original_name: original.to_string(),
            new_name: self.apply(original),
            extension: self.resolve_extension(original_ext).to_string(),
        }
    }

    /// The extension the output will carry, given the original one
    fn resolve_extension<'a>(&'a self, original_ext: &'a str) -> &'a str {
        if self.rules.change_extension.is_empty() {
            original_ext
        } else {
            self.rules.change_extension.trim_start_matches('.')
        }
    }
}

/// One-shot transform without keeping a compiled pipeline around
#[must_use]
pub fn rename(original: &str, rules: &RuleSet) -> String {
    Pipeline::new(rules).apply(original)
}

/// Collapse whitespace runs to single spaces and trim the ends
///
/// Idempotent by construction: the output contains no leading, trailing,
/// or consecutive whitespace.
fn normalize_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
