//! Trailing `(extra)` extraction.

/// Splits `<prefix> (<extra>)` into the prefix and the trimmed extra.
///
/// The line must end with `)`. Its matching `(` is found by scanning
/// backwards with nesting, so the last top-level group wins and inner
/// parentheses stay part of the extra. The `(` must follow whitespace, which
/// is not part of the prefix. Returns `None` when any of this fails.
pub(super) fn split_trailing_parenthetical(line: &str) -> Option<(&str, &str)> {
    let body = line.strip_suffix(')')?;

    let mut depth = 0usize;
    let mut open = None;
    for (idx, ch) in body.char_indices().rev() {
        match ch {
            ')' => depth += 1,
            '(' if depth == 0 => {
                open = Some(idx);
                break;
            }
            '(' => depth -= 1,
            _ => {}
        }
    }
    let open = open?;

    let before = &body[..open];
    let gap = before.chars().next_back().filter(|ch| ch.is_whitespace())?;
    let prefix = &before[..before.len() - gap.len_utf8()];
    let extra = body[open + 1..].trim();

    Some((prefix, extra))
}

#[cfg(test)]
mod tests {
    use super::split_trailing_parenthetical;

    #[test]
    fn test_simple_group() {
        assert_eq!(
            split_trailing_parenthetical("cat - kot (zwierzę)"),
            Some(("cat - kot", "zwierzę"))
        );
    }

    #[test]
    fn test_extra_is_trimmed_and_may_be_empty() {
        assert_eq!(
            split_trailing_parenthetical("a - b (  note  )"),
            Some(("a - b", "note"))
        );
        assert_eq!(split_trailing_parenthetical("a - b ()"), Some(("a - b", "")));
    }

    #[test]
    fn test_last_group_wins() {
        assert_eq!(
            split_trailing_parenthetical("a - b (c) (d)"),
            Some(("a - b (c)", "d"))
        );
    }

    #[test]
    fn test_nested_group_is_kept_whole() {
        assert_eq!(
            split_trailing_parenthetical("run - biegać (verb (irregular))"),
            Some(("run - biegać", "verb (irregular)"))
        );
    }

    #[test]
    fn test_tab_before_group_counts_as_gap() {
        assert_eq!(
            split_trailing_parenthetical("a - b\t(c)"),
            Some(("a - b", "c"))
        );
    }

    #[test]
    fn test_rejects_malformed_groups() {
        // no closing parenthesis
        assert_eq!(split_trailing_parenthetical("a - b (c"), None);
        // text after the group
        assert_eq!(split_trailing_parenthetical("a - b (c) d"), None);
        // no whitespace before the group
        assert_eq!(split_trailing_parenthetical("a - f(x)"), None);
        // unbalanced closing parenthesis
        assert_eq!(split_trailing_parenthetical("a - b c)"), None);
        assert_eq!(split_trailing_parenthetical("a - b (c))"), None);
    }
}
