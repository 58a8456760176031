//! Bracket nesting guard for lenient sources.
//!
//! `jsonc-parser` and the node builder both recurse once per nesting level,
//! so a lenient document is scanned for its bracket depth before either runs.

use crate::ParseError;

/// Deepest bracket nesting accepted in a source, matching `serde_json`'s
/// recursion limit. A node with children costs two levels (object + array).
pub const MAX_NESTING: usize = 128;

/// Rejects `source` if its brackets nest deeper than [`MAX_NESTING`].
///
/// Brackets inside strings and comments are ignored. Unbalanced brackets
/// are left for the parser to report.
pub(crate) fn check_nesting(source: &str) -> Result<(), ParseError> {
    let bytes = source.as_bytes();
    let mut depth = 0usize;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'"' | b'\'' => i = skip_string(bytes, i),
            b'/' if bytes.get(i + 1) == Some(&b'/') => {
                i = bytes[i..]
                    .iter()
                    .position(|&b| b == b'\n')
                    .map_or(bytes.len(), |end| i + end);
            }
            b'/' if bytes.get(i + 1) == Some(&b'*') => {
                i = bytes[i + 2..]
                    .windows(2)
                    .position(|w| w == b"*/")
                    .map_or(bytes.len(), |end| i + 2 + end + 2);
            }
            b'{' | b'[' => {
                depth += 1;
                if depth > MAX_NESTING {
                    return Err(ParseError::invalid_source(format!(
                        "nesting deeper than {} levels at byte {}",
                        MAX_NESTING, i
                    )));
                }
                i += 1;
            }
            b'}' | b']' => {
                depth = depth.saturating_sub(1);
                i += 1;
            }
            _ => i += 1,
        }
    }

    Ok(())
}

/// Returns the index just past the string opened at `start`.
fn skip_string(bytes: &[u8], start: usize) -> usize {
    let quote = bytes[start];
    let mut i = start + 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b if b == quote => return i + 1,
            _ => i += 1,
        }
    }
    bytes.len()
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn nested(levels: usize) -> String {
        format!("{}{}", "[".repeat(levels), "]".repeat(levels))
    }

    #[test]
    fn test_accepts_limit() {
        assert!(check_nesting(&nested(MAX_NESTING)).is_ok());
    }

    #[test]
    fn test_rejects_beyond_limit() {
        let err = check_nesting(&nested(MAX_NESTING + 1)).unwrap_err();

        assert_eq!(
            err.to_string(),
            "Invalid source: nesting deeper than 128 levels at byte 128"
        );
    }

    #[test]
    fn test_rejects_very_deep_source() {
        assert!(matches!(
            check_nesting(&nested(100_000)),
            Err(ParseError::InvalidSource(_))
        ));
    }

    #[rstest]
    #[case::double_quoted(r#"{ "text": "[[[[" }"#)]
    #[case::single_quoted(r#"{ 'text': '{{{{' }"#)]
    #[case::escaped_quote(r#"{ "text": "\"[[[[" }"#)]
    #[case::line_comment("// [[[[\n{}")]
    #[case::block_comment("/* {{{{ */ {}")]
    fn test_ignores_brackets_in_strings_and_comments(#[case] source: &str) {
        let deep = source.replace("[[[[", &"[".repeat(200)).replace("{{{{", &"{".repeat(200));

        assert!(check_nesting(&deep).is_ok());
    }
}
