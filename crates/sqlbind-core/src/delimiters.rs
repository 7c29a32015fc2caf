//! Placeholder delimiters
//!
//! A placeholder is recognised as `left` + one or more word characters + `right`.
//! Both delimiters are spliced into a regular expression verbatim, so regex
//! metacharacters must be escaped by the caller (or use [`DelimiterPair::literal`]).
//!
//! Every parse takes a `DelimiterPair` explicitly. A process-wide default is kept
//! for callers that prefer to configure once; [`set_delimiters`] replaces it and
//! affects only templates parsed afterwards.

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Named capture group for the placeholder name, ASCII word characters only.
///
/// Named so that capturing groups inside the delimiters never shadow it.
pub const IDENTIFIER_PATTERN: &str = "(?P<name>[[:word:]]+)";

/// Capture group name holding the placeholder name.
pub(crate) const IDENTIFIER_GROUP: &str = "name";

pub const DEFAULT_LEFT_DELIMITER: &str = ":";
pub const DEFAULT_RIGHT_DELIMITER: &str = "";

static CURRENT_DELIMITERS: LazyLock<RwLock<DelimiterPair>> =
    LazyLock::new(|| RwLock::new(DelimiterPair::default()));

/// Left and right delimiters bounding a placeholder name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct DelimiterPair {
    pub left: String,
    pub right: String,
}

impl DelimiterPair {
    /// Delimiters used as regex fragments, e.g. `:\{` and `\}` for `:{name}`.
    pub fn new(left: impl Into<String>, right: impl Into<String>) -> Self {
        Self {
            left: left.into(),
            right: right.into(),
        }
    }

    /// Delimiters matched as plain text; regex metacharacters are escaped.
    pub fn literal(left: &str, right: &str) -> Self {
        Self::new(regex::escape(left), regex::escape(right))
    }

    /// Snapshot of the process-wide default delimiters.
    pub fn current() -> Self {
        CURRENT_DELIMITERS.read().clone()
    }

    /// The regular expression source used to find placeholders.
    pub fn pattern(&self) -> String {
        format!("{}{}{}", self.left, IDENTIFIER_PATTERN, self.right)
    }
}

impl Default for DelimiterPair {
    fn default() -> Self {
        Self::new(DEFAULT_LEFT_DELIMITER, DEFAULT_RIGHT_DELIMITER)
    }
}

/// Replaces the process-wide default delimiters.
///
/// No validation happens here; an unusable pair is reported by the next parse.
pub fn set_delimiters(left: impl Into<String>, right: impl Into<String>) {
    let pair = DelimiterPair::new(left, right);
    tracing::debug!(left = %pair.left, right = %pair.right, "default delimiters replaced");
    *CURRENT_DELIMITERS.write() = pair;
}

/// Restores the process-wide default to `:` / empty.
pub fn reset_delimiters() {
    *CURRENT_DELIMITERS.write() = DelimiterPair::default();
}
