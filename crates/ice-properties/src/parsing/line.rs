//! Property line parser.
//!
//! Grammar of a single line:
//! ```text
//! line    := comment | blank | key [ws]* '=' [value] [comment]
//! comment := '#' <anything to end of line>
//! key     := <run of characters up to the first space, tab, CR, LF or '='>
//! ```
//! There is no quoting, escaping or line continuation. A `#` anywhere in the
//! line starts a comment, including inside what would otherwise be the value.

/// Strips leading and trailing ASCII control characters and spaces.
///
/// Other whitespace, such as U+00A0, is part of the key or value.
fn trim_controls(text: &str) -> &str {
    text.trim_matches(|c: char| c <= ' ')
}

/// Returns `true` for the characters that end a key.
fn is_key_terminator(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n' | '=')
}

/// Parses one line of property text into a `(key, value)` pair.
///
/// Returns `None` for comment lines, blank lines, lines without a key, and
/// keys that are never assigned with `=`. The returned slices borrow from
/// `line`; the value has surrounding whitespace trimmed and may be empty.
///
/// A line with an empty key, such as `=value`, yields `None` rather than
/// `("", "value")`, so parsed keys are never empty.
///
/// # Examples
///
/// ```rust
/// use ice_properties::parse_line;
///
/// assert_eq!(parse_line("  foo = bar # trailing"), Some(("foo", "bar")));
/// assert_eq!(parse_line("foo="), Some(("foo", "")));
/// assert_eq!(parse_line("# comment"), None);
/// assert_eq!(parse_line("foo"), None);
/// ```
pub fn parse_line(line: &str) -> Option<(&str, &str)> {
    if line.starts_with('#') {
        return None;
    }

    let uncommented = match line.find('#') {
        Some(hash) => &line[..hash],
        None => line,
    };
    let text = trim_controls(uncommented);

    let key_end = text.find(is_key_terminator)?;
    let key = &text[..key_end];
    if key.is_empty() {
        return None;
    }

    // The '=' may follow whitespace after the key, so search from key_end.
    let assign = key_end + text[key_end..].find('=')?;
    let value = trim_controls(&text[assign + 1..]);

    Some((key, value))
}

// ── Tests ─────────────────────────────────────────────────────────────────────
