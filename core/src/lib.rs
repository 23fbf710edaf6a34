//! Core vocabulary types shared by the extractor and its CLI.
//!
//! - [`Entry`] — one resolved `key - answer (extra)` record.
//! - [`EntryValue`] — the `{answer, extra}` object stored under a key.
//! - [`VocabularyMap`] — the key-ordered result mapping.
//! - [`DropReason`] / [`DropStatistics`] — why lines were excluded and how
//!   often.
//!
//! # Example
//!
//! ```
//! use vocab_extract_core::*;
//!
//! let mut map = VocabularyMap::new();
//! let (key, value) = Entry::new("cat", "kot", "zwierzę").into_pair();
//! map.insert(key, value);
//!
//! let mut stats = DropStatistics::default();
//! stats.record(DropReason::NoHyphen);
//!
//! assert_eq!(map["cat"].extra, "zwierzę");
//! assert_eq!(stats.total(), 1);
//! ```

mod stats;
mod types;

pub use stats::{DropReason, DropStatistics};
pub use types::*;
