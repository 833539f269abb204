//! Display formatting for the embedding UI
//!
//! This module provides the per-file preview row handed to the host
//! application for rendering, and the human-readable byte-size formatter
//! it expects.

use serde::Serialize;

/// Units for [`format_size`], one per power of 1024
const SIZE_UNITS: [&str; 5] = ["Bytes", "KB", "MB", "GB", "TB"];

/// Format a byte count for display
///
/// Zero is the literal `"0 Bytes"`. Otherwise the unit is picked by
/// order of magnitude (powers of 1024, capped at TB) and the value is
/// rounded to two decimals with trailing zeros dropped, so 1536 renders
/// as `"1.5 KB"` and 1024 as `"1 KB"`.
#[must_use]
pub fn format_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let exponent = (((bytes as f64).ln() / 1024_f64.ln()).floor() as usize).min(SIZE_UNITS.len() - 1);
    let value = bytes as f64 / 1024_f64.powi(exponent as i32);

    let mut rendered = format!("{value:.2}");
    if rendered.contains('.') {
        rendered.truncate(rendered.trim_end_matches('0').trim_end_matches('.').len());
    }

    format!("{rendered} {}", SIZE_UNITS[exponent])
}

/// One display row: what a file is called now, and what it will become
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RenamePreview {
    /// The filename as supplied by the caller
    pub original_name: String,
    /// The derived filename under the current rules
    pub new_name: String,
    /// Human-readable content size (see [`format_size`])
    pub size: String,
    /// Extension of the derived filename (empty if none)
    pub extension: String,
}

impl std::fmt::Display for RenamePreview {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} -> {} ({})",
            self.original_name, self.new_name, self.size
        )
    }
}
