//! Vocabulary list extraction.
//!
//! This crate turns a flat text file of `question - answer (extra)` lines
//! into a deduplicated, key-sorted JSON mapping, counting every line it had
//! to drop by [`DropReason`].
//!
//! # Main entry points
//!
//! - [`extract_text`] — parse text already in memory; no I/O, no logging.
//! - [`Extractor`] — read the configured input file, log line outcomes, and
//!   write the JSON output.
//! - [`output::format_vocabulary`] — the fixed JSON layout (sorted keys,
//!   4-space indent, non-ASCII kept literal).
//!
//! # Example
//!
//! ```
//! use vocab_extract::extract_text;
//! use vocab_extract_core::DropReason;
//!
//! let text = "\
//! cat - kot (zwierzę)
//! dog - pies
//! dog - pies
//! no separator
//! ";
//!
//! let extraction = extract_text(text);
//! assert_eq!(extraction.entries["cat"].extra, "zwierzę");
//! assert_eq!(extraction.entries["dog"].extra, "");
//! assert_eq!(extraction.statistics.count(DropReason::Duplicate), 1);
//! assert_eq!(extraction.statistics.count(DropReason::NoHyphen), 1);
//! ```
//!
//! [`DropReason`]: vocab_extract_core::DropReason

pub mod config;
pub mod error;
pub mod extractor;
pub mod output;
pub mod parser;
pub mod report;

pub use error::{ExtractError, Result};
pub use extractor::Extractor;
pub use parser::{Extraction, LineOutcome, LineParser, ParsedLine, SkippedLine};

/// Parses vocabulary text held in memory.
///
/// Equivalent to `LineParser::new(text).parse()`.
pub fn extract_text(text: &str) -> Extraction {
    LineParser::new(text).parse()
}
