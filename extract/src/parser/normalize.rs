//! Line normalization.

use super::IndexedLine;

/// Lines shorter than this (in characters, after normalization) are skipped.
pub const MIN_LINE_CHARS: usize = 4;

/// Trims the line and folds en/em dashes into ASCII hyphens.
pub fn fold_line(raw: &str) -> String {
    raw.trim().replace(['\u{2013}', '\u{2014}'], "-")
}

/// Whether a folded line is too short to hold an entry.
pub fn is_too_short(line: &str) -> bool {
    line.chars().count() < MIN_LINE_CHARS
}

/// [`fold_line`], returning `None` for lines too short to hold an entry.
pub fn normalize_line(raw: &str) -> Option<String> {
    let line = fold_line(raw);
    if is_too_short(&line) {
        return None;
    }
    Some(line)
}

/// Splits source text into 1-based physical lines.
///
/// `\n`, `\r\n` and a lone `\r` all end a line. A leading byte order mark is
/// dropped so it cannot end up in the first key.
pub(crate) fn to_indexed_lines(text: &str) -> Vec<IndexedLine<'_>> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    physical_lines(text)
        .enumerate()
        .map(|(index, text)| IndexedLine {
            number: index + 1,
            text,
        })
        .collect()
}

fn physical_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let Some(end) = rest.find(['\n', '\r']) else {
            return Some(std::mem::take(&mut rest));
        };
        let line = &rest[..end];
        let break_len = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
        rest = &rest[end + break_len..];
        Some(line)
    })
}
