//! Drop reasons and per-pass drop statistics.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Why a line was excluded from the result.
///
/// The serialized form and the [`Display`](fmt::Display) form are the same
/// snake_case tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DropReason {
    /// The line has no `" - "` separator.
    #[serde(rename = "no_hyphen")]
    NoHyphen,
    /// The line contains `(` but no well-formed trailing parenthetical.
    #[serde(rename = "regex_fail")]
    BadParenthetical,
    /// Splitting on `" - "` did not give exactly two non-empty parts.
    #[serde(rename = "not_two_items")]
    NotTwoItems,
    /// The key was already taken by an earlier line.
    #[serde(rename = "duplicate")]
    Duplicate,
}

impl DropReason {
    pub const ALL: [DropReason; 4] = [
        DropReason::NoHyphen,
        DropReason::BadParenthetical,
        DropReason::NotTwoItems,
        DropReason::Duplicate,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::NoHyphen => "no_hyphen",
            Self::BadParenthetical => "regex_fail",
            Self::NotTwoItems => "not_two_items",
            Self::Duplicate => "duplicate",
        }
    }

    /// Human-readable explanation used in log lines.
    pub fn describe(self) -> &'static str {
        match self {
            Self::NoHyphen => "it doesn't contain a hyphen",
            Self::BadParenthetical => "its trailing parenthesis could not be matched",
            Self::NotTwoItems => "it didn't split into exactly 2 items",
            Self::Duplicate => "it's a duplicate",
        }
    }
}

impl fmt::Display for DropReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Count of dropped lines per [`DropReason`] for one parse pass.
///
/// Reasons that never fired are absent from the map and report a count of 0.
///
/// # Examples
///
/// ```
/// use vocab_extract_core::{DropReason, DropStatistics};
///
/// let mut stats = DropStatistics::default();
/// stats.record(DropReason::Duplicate);
/// stats.record(DropReason::Duplicate);
/// assert_eq!(stats.count(DropReason::Duplicate), 2);
/// assert_eq!(stats.count(DropReason::NoHyphen), 0);
/// assert_eq!(stats.to_string(), "duplicate=2");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DropStatistics {
    counts: BTreeMap<DropReason, usize>,
}

impl DropStatistics {
    pub fn record(&mut self, reason: DropReason) {
        *self.counts.entry(reason).or_insert(0) += 1;
    }

    pub fn count(&self, reason: DropReason) -> usize {
        self.counts.get(&reason).copied().unwrap_or(0)
    }

    /// Total number of dropped lines across all reasons.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (DropReason, usize)> + '_ {
        self.counts.iter().map(|(reason, count)| (*reason, *count))
    }
}

impl fmt::Display for DropStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.counts.is_empty() {
            return f.write_str("none");
        }
        let parts: Vec<String> = self
            .iter()
            .map(|(reason, count)| format!("{reason}={count}"))
            .collect();
        f.write_str(&parts.join(", "))
    }
}
