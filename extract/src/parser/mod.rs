//! Line parser for `question - answer (extra)` vocabulary lists.
//!
//! Each physical line goes through the same steps:
//!
//! 1. **Normalize**: trim, fold en/em dashes into `-`, skip lines shorter
//!    than [`MIN_LINE_CHARS`].
//! 2. **Separator check**: lines without `" - "` drop as
//!    [`DropReason::NoHyphen`].
//! 3. **Extra**: a line containing `(` must end in a `(extra)` group,
//!    otherwise it drops as [`DropReason::BadParenthetical`].
//! 4. **Split**: the rest must split on `" - "` into exactly two non-empty
//!    parts, otherwise [`DropReason::NotTwoItems`].
//! 5. **Dedupe**: the first line for a key wins; later ones drop as
//!    [`DropReason::Duplicate`].
//!
//! Parsing is a pure function of the input text. Logging of the outcomes
//! lives in [`report`](crate::report).

mod normalize;
mod parenthetical;

pub use normalize::{MIN_LINE_CHARS, fold_line, is_too_short, normalize_line};

use vocab_extract_core::{DropReason, DropStatistics, Entry, VocabularyMap};

use normalize::to_indexed_lines;
use parenthetical::split_trailing_parenthetical;

/// Separator between the key and the answer.
pub const SEPARATOR: &str = " - ";

#[derive(Debug, Clone)]
pub(crate) struct IndexedLine<'a> {
    pub(crate) number: usize,
    pub(crate) text: &'a str,
}

/// What happened to one non-skipped line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    Accepted(Entry),
    Dropped(DropReason),
}

/// Structured outcome for one line, in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine {
    /// 1-based physical line number in the source text.
    pub number: usize,
    /// The line after normalization.
    pub text: String,
    pub outcome: LineOutcome,
}

/// A line skipped by normalization (blank or too short).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based physical line number in the source text.
    pub number: usize,
    /// The line after trimming and dash folding.
    pub text: String,
}

/// Result of one parse pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    /// Accepted entries, ordered by key.
    pub entries: VocabularyMap,
    pub statistics: DropStatistics,
    /// Every non-skipped line with its outcome, in source order.
    pub lines: Vec<ParsedLine>,
    /// Lines skipped by normalization, in source order.
    pub skipped_lines: Vec<SkippedLine>,
}

impl Extraction {
    /// Accepted entries in the order they appeared in the source.
    pub fn accepted(&self) -> impl Iterator<Item = &Entry> {
        self.lines.iter().filter_map(|line| match &line.outcome {
            LineOutcome::Accepted(entry) => Some(entry),
            LineOutcome::Dropped(_) => None,
        })
    }

    /// Dropped lines with their reasons, in source order.
    pub fn dropped(&self) -> impl Iterator<Item = (&ParsedLine, DropReason)> {
        self.lines.iter().filter_map(|line| match line.outcome {
            LineOutcome::Dropped(reason) => Some((line, reason)),
            LineOutcome::Accepted(_) => None,
        })
    }
}

/// Parses one normalized line, without duplicate detection.
///
/// # Examples
///
/// ```
/// use vocab_extract::parser::parse_line;
/// use vocab_extract_core::{DropReason, Entry};
///
/// assert_eq!(parse_line("cat - kot (zwierzę)"), Ok(Entry::new("cat", "kot", "zwierzę")));
/// assert_eq!(parse_line("no separator here"), Err(DropReason::NoHyphen));
/// ```
pub fn parse_line(line: &str) -> Result<Entry, DropReason> {
    if !line.contains(SEPARATOR) {
        return Err(DropReason::NoHyphen);
    }

    let (body, extra) = if line.contains('(') {
        split_trailing_parenthetical(line).ok_or(DropReason::BadParenthetical)?
    } else {
        (line, "")
    };

    let mut parts = body.split(SEPARATOR);
    let (Some(key), Some(answer), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(DropReason::NotTwoItems);
    };
    let (key, answer) = (key.trim(), answer.trim());
    if key.is_empty() || answer.is_empty() {
        return Err(DropReason::NotTwoItems);
    }

    Ok(Entry::new(key, answer, extra))
}

/// Parser for a whole vocabulary text.
pub struct LineParser {
    text: String,
}

impl LineParser {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
        }
    }

    /// Runs one pass over the text with fresh accumulators.
    ///
    /// Calling this repeatedly returns identical results.
    pub fn parse(&self) -> Extraction {
        let mut extraction = Extraction::default();

        for line in to_indexed_lines(&self.text) {
            let text = fold_line(line.text);
            if is_too_short(&text) {
                extraction.skipped_lines.push(SkippedLine {
                    number: line.number,
                    text,
                });
                continue;
            }

            let outcome = match parse_line(&text) {
                Ok(entry) if extraction.entries.contains_key(&entry.key) => {
                    LineOutcome::Dropped(DropReason::Duplicate)
                }
                Ok(entry) => {
                    let (key, value) = entry.clone().into_pair();
                    extraction.entries.insert(key, value);
                    LineOutcome::Accepted(entry)
                }
                Err(reason) => LineOutcome::Dropped(reason),
            };
            if let LineOutcome::Dropped(reason) = outcome {
                extraction.statistics.record(reason);
            }

            extraction.lines.push(ParsedLine {
                number: line.number,
                text,
                outcome,
            });
        }

        extraction
    }
}
