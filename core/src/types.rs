//! Vocabulary entry types.
//!
//! An input line `cat - kot (zwierzę)` resolves to an [`Entry`] with key
//! `cat`, answer `kot` and extra `zwierzę`. The serialized output stores the
//! answer and extra under the key as an [`EntryValue`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Result mapping from key to its answer and extra, ordered by key.
///
/// Key order is byte-lexicographic, which for UTF-8 matches code point order.
pub type VocabularyMap = BTreeMap<String, EntryValue>;

/// A single resolved vocabulary record.
///
/// # Examples
///
/// ```
/// use vocab_extract_core::Entry;
///
/// let entry = Entry::new("dog", "pies", "");
/// assert_eq!(entry.key, "dog");
/// assert!(!entry.has_extra());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Question side of the line, used as the unique key.
    pub key: String,
    /// Answer side of the line.
    pub answer: String,
    /// Annotation from the trailing parentheses, empty when absent.
    pub extra: String,
}

impl Entry {
    pub fn new(
        key: impl Into<String>,
        answer: impl Into<String>,
        extra: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            answer: answer.into(),
            extra: extra.into(),
        }
    }

    pub fn has_extra(&self) -> bool {
        !self.extra.is_empty()
    }

    /// Splits the entry into its key and the value stored under it.
    pub fn into_pair(self) -> (String, EntryValue) {
        (
            self.key,
            EntryValue {
                answer: self.answer,
                extra: self.extra,
            },
        )
    }
}

/// Value stored under a key in the output mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryValue {
    pub answer: String,
    pub extra: String,
}
