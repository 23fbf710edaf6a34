//! JSON output for vocabulary mappings.
//!
//! The layout is fixed: keys ascending, 4-space indentation, non-ASCII
//! characters written as-is, no trailing newline.

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use vocab_extract_core::VocabularyMap;

use crate::error::Result;

const INDENT: &[u8] = b"    ";

/// Formats a mapping as pretty-printed JSON.
///
/// # Examples
///
/// ```
/// use vocab_extract::output::format_vocabulary;
/// use vocab_extract_core::{Entry, VocabularyMap};
///
/// let mut map = VocabularyMap::new();
/// let (key, value) = Entry::new("dog", "pies", "").into_pair();
/// map.insert(key, value);
///
/// let json = format_vocabulary(&map).unwrap();
/// assert_eq!(
///     json,
///     "{\n    \"dog\": {\n        \"answer\": \"pies\",\n        \"extra\": \"\"\n    }\n}"
/// );
/// ```
pub fn format_vocabulary(map: &VocabularyMap) -> Result<String> {
    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    map.serialize(&mut serializer)?;
    Ok(String::from_utf8(buf)?)
}

/// Parses JSON produced by [`format_vocabulary`] back into a mapping.
pub fn parse_vocabulary(json: &str) -> Result<VocabularyMap> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExtractError;
    use crate::parser::LineParser;

    #[test]
    fn test_non_ascii_is_not_escaped() {
        let map = LineParser::new("cat - kot (zwierzę)\nżaba - frog").parse().entries;
        let json = format_vocabulary(&map).unwrap();

        assert!(json.contains("\"zwierzę\""));
        assert!(json.contains("\"żaba\""));
        assert!(!json.contains("\\u"));
    }

    #[test]
    fn test_keys_sorted_with_four_space_indent() {
        let map = LineParser::new("zebra - zebra\napple - jabłko").parse().entries;
        let json = format_vocabulary(&map).unwrap();

        let expected = "{\n    \"apple\": {\n        \"answer\": \"jabłko\",\n        \"extra\": \"\"\n    },\n    \"zebra\": {\n        \"answer\": \"zebra\",\n        \"extra\": \"\"\n    }\n}";
        assert_eq!(json, expected);
    }

    #[test]
    fn test_empty_mapping() {
        assert_eq!(format_vocabulary(&VocabularyMap::new()).unwrap(), "{}");
    }

    #[test]
    fn test_roundtrip_preserves_mapping() {
        let text = "cat - kot (zwierzę)\ndog - pies\nquote - \"cudzysłów\" (with \\ slash)\nżółw - turtle (gad)";
        let map = LineParser::new(text).parse().entries;
        assert_eq!(map.len(), 4);

        let json = format_vocabulary(&map).unwrap();
        let back = parse_vocabulary(&json).unwrap();
        assert_eq!(back, map);
    }

    #[test]
    fn test_control_and_non_ascii_characters_format_without_error() {
        let text = "tab\u{7} - bell (\u{1b}[0m)\nemoji - 🐱 (kot)";
        let map = LineParser::new(text).parse().entries;
        assert_eq!(map.len(), 2);

        let json = format_vocabulary(&map).unwrap();
        assert!(json.contains("\\u0007"));
        assert!(json.contains("🐱"));
        assert_eq!(parse_vocabulary(&json).unwrap(), map);
    }

    #[test]
    fn test_parse_error_is_json_variant() {
        let err = parse_vocabulary("{not json").unwrap_err();
        assert!(matches!(err, ExtractError::Json(_)));
        assert!(err.to_string().starts_with("JSON error:"));
    }

    #[test]
    fn test_parse_rejects_wrong_shape() {
        assert!(parse_vocabulary(r#"{"cat": "kot"}"#).is_err());
        assert!(parse_vocabulary(r#"{"cat": {"answer": "kot"}}"#).is_err());
    }
}
