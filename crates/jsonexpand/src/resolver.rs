//! Maximal-match resolution: how many bytes of a candidate window belong to
//! one JSON value.
//!
//! The resolver runs in two stages. A structural scan balances braces,
//! brackets, strings, and escapes to find the byte where the outermost
//! structure closes; it validates nothing else. Exactly that substring is
//! then handed to `serde_json` for strict parsing, so number grammar, escape
//! sequences, and duplicate-key policy all belong to the library. A window
//! whose structural end is rejected by the strict parse is abandoned — no
//! shorter substring is retried.

use serde_json::Value;

/// Outcome of one candidate attempt.
#[derive(Debug)]
pub enum Resolution {
    /// The window starts with a complete JSON value occupying `len` bytes.
    /// `len` is never zero.
    Matched {
        /// Number of window bytes consumed by the value.
        len: usize,
        /// The parsed value tree, owned by the caller until emission.
        value: Value,
    },
    /// No balanced close exists in the window; nothing to report.
    NoMatch,
    /// The structural scan found an end, but the substring is not valid
    /// JSON.
    Malformed {
        /// The strict parser's rejection.
        error: serde_json::Error,
    },
}

/// Finds the longest prefix of `window` that is one complete JSON value.
///
/// `window` must start at a candidate trigger (`{` or `[`). Trailing bytes
/// after the value's own top-level close are never part of the match, even
/// if they would continue a larger structure.
#[must_use]
pub fn resolve(window: &[u8]) -> Resolution {
    debug_assert!(matches!(window.first(), Some(b'{' | b'[')));
    let Some(len) = structural_end(window) else {
        return Resolution::NoMatch;
    };
    match serde_json::from_slice(&window[..len]) {
        Ok(value) => Resolution::Matched { len, value },
        Err(error) => Resolution::Malformed { error },
    }
}

/// Byte offset one past the close of the outermost structure, or `None` if
/// the window ends before it closes.
///
/// Structural only: tracks nesting depth and string/escape state but does
/// not pair `{` with `}` specifically, so a window like `{"a":1]` gets an
/// end offset here and is rejected by the strict parse afterwards.
fn structural_end(window: &[u8]) -> Option<usize> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;
    for (i, &byte) in window.iter().enumerate() {
        if in_string {
            if escaped {
                escaped = false;
            } else if byte == b'\\' {
                escaped = true;
            } else if byte == b'"' {
                in_string = false;
            }
            continue;
        }
        match byte {
            b'"' => in_string = true,
            b'{' | b'[' => depth += 1,
            b'}' | b']' => {
                // A close below depth zero means the window never opened;
                // normalize to no match instead of faulting.
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(i + 1);
                }
            }
            _ => {}
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::json;

    use super::{Resolution, resolve, structural_end};

    #[rstest]
    #[case(&b"{}"[..], Some(2))]
    #[case(&b"[]"[..], Some(2))]
    #[case(&br#"{"a":1}"#[..], Some(7))]
    #[case(&br#"{"a":{"b":[1,2]}}"#[..], Some(17))]
    // Delimiters inside strings do not count toward depth.
    #[case(&br#"{"a":"}"}"#[..], Some(9))]
    #[case(&br#"{"a":"\"}"}"#[..], Some(11))]
    #[case(&br#"["[","]"]"#[..], Some(9))]
    // The value ends at its own top-level close, not at a later one.
    #[case(&br#"{"a":1}}"#[..], Some(7))]
    #[case(&b"[1,2]],["[..], Some(5))]
    // No close in the window at all.
    #[case(&b"{"[..], None)]
    #[case(&br#"{"a":1"#[..], None)]
    #[case(&br#"{"unterminated string}"#[..], None)]
    fn structural_end_stops_at_outermost_close(
        #[case] window: &[u8],
        #[case] expected: Option<usize>,
    ) {
        assert_eq!(structural_end(window), expected);
    }

    #[test]
    fn matched_value_ignores_trailing_bytes() {
        let Resolution::Matched { len, value } = resolve(br#"{"x":1}trailing"#) else {
            panic!("expected a match");
        };
        assert_eq!(len, 7);
        assert_eq!(value, json!({"x": 1}));
    }

    #[test]
    fn matched_array() {
        let Resolution::Matched { len, value } = resolve(b"[1,[2,3]] etc") else {
            panic!("expected a match");
        };
        assert_eq!(len, 9);
        assert_eq!(value, json!([1, [2, 3]]));
    }

    #[test]
    fn unclosed_window_is_no_match() {
        assert!(matches!(resolve(br#"{"a": 1"#), Resolution::NoMatch));
        assert!(matches!(resolve(b"["), Resolution::NoMatch));
    }

    #[rstest]
    // Structurally balanced, semantically empty value slot.
    #[case(&br#"{"x":}"#[..])]
    // Mismatched delimiter pairs pass the structural scan only.
    #[case(&b"{]"[..])]
    #[case(&br#"[1,2}"#[..])]
    #[case(&br#"{"a" 1}"#[..])]
    fn structurally_plausible_but_invalid_is_malformed(#[case] window: &[u8]) {
        assert!(matches!(resolve(window), Resolution::Malformed { .. }));
    }
}
