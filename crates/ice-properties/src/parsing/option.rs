//! Command-line option parser.
//!
//! Options use the same `key=value` syntax as property files, prefixed with
//! `--`. A bare flag such as `--Ice.Trace.Network` is shorthand for
//! `--Ice.Trace.Network=1`. Unlike a property file line, a key without `=` is
//! therefore never dropped for lack of a value.

use std::borrow::Cow;

use super::line::parse_line;

/// Value assigned to a bare `--key` flag.
pub const FLAG_DEFAULT_VALUE: &str = "1";

/// Outcome of running one argument token through [`parse_option`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionToken<'a> {
    /// The token belongs to the prefix and parsed into a property.
    Property { key: String, value: String },
    /// The token belongs to the prefix but has no usable key.
    ///
    /// Such tokens are consumed: they are neither committed nor handed back
    /// to the caller.
    Malformed,
    /// The token does not belong to the prefix and is returned untouched.
    Passthrough(&'a str),
}

/// Returns `true` if `token` has the form `--{prefix}.…`.
pub fn is_option_for(prefix: &str, token: &str) -> bool {
    token
        .strip_prefix("--")
        .and_then(|rest| rest.strip_prefix(prefix))
        .map_or(false, |rest| rest.starts_with('.'))
}

/// Parses a `--key[=value]` token into an owned `(key, value)` pair.
///
/// The `--` is stripped, `=1` is appended when the token has no `=`, and the
/// result goes through [`parse_line`], so comments and whitespace follow the
/// property file rules. Returns `None` if `token` does not start with `--` or
/// yields no key.
///
/// # Examples
///
/// ```rust
/// use ice_properties::parse_flag;
///
/// assert_eq!(parse_flag("--Ice.Config=app.cfg"), Some(("Ice.Config".into(), "app.cfg".into())));
/// assert_eq!(parse_flag("--Ice.Config"), Some(("Ice.Config".into(), "1".into())));
/// ```
pub fn parse_flag(token: &str) -> Option<(String, String)> {
    let body = token.strip_prefix("--")?;
    let line: Cow<'_, str> = if body.contains('=') {
        Cow::Borrowed(body)
    } else {
        Cow::Owned(format!("{body}={FLAG_DEFAULT_VALUE}"))
    };

    parse_line(&line).map(|(key, value)| (key.to_owned(), value.to_owned()))
}

/// Classifies one argument token against `prefix`.
///
/// Tokens of the form `--{prefix}.…` are parsed with [`parse_flag`]; every
/// other token passes through.
pub fn parse_option<'a>(prefix: &str, token: &'a str) -> OptionToken<'a> {
    if !is_option_for(prefix, token) {
        return OptionToken::Passthrough(token);
    }

    match parse_flag(token) {
        Some((key, value)) => OptionToken::Property { key, value },
        None => OptionToken::Malformed,
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn property(key: &str, value: &str) -> OptionToken<'static> {
        OptionToken::Property {
            key: key.to_string(),
            value: value.to_string(),
        }
    }

    #[test]
    fn test_option_with_value_parses_into_property() {
        assert_eq!(
            parse_option("Ice", "--Ice.Trace=1"),
            property("Ice.Trace", "1")
        );
    }

    #[test]
    fn test_bare_flag_defaults_to_one() {
        assert_eq!(parse_option("Ice", "--Ice.Flag"), property("Ice.Flag", "1"));
    }

    #[test]
    fn test_other_prefix_passes_through() {
        assert_eq!(
            parse_option("Ice", "--IceBox.Name=x"),
            OptionToken::Passthrough("--IceBox.Name=x")
        );
        assert_eq!(parse_option("Ice", "--other"), OptionToken::Passthrough("--other"));
        assert_eq!(parse_option("Ice", "Ice.Trace=1"), OptionToken::Passthrough("Ice.Trace=1"));
    }

    #[test]
    fn test_prefix_without_dot_passes_through() {
        // "--Ice=1" names the prefix itself, not a sub-option.
        assert_eq!(parse_option("Ice", "--Ice=1"), OptionToken::Passthrough("--Ice=1"));
    }

    #[test]
    fn test_matching_token_without_key_is_malformed() {
        // The '#' truncates the line before any key terminator.
        assert_eq!(parse_option("Ice", "--Ice.Foo#bar"), OptionToken::Malformed);
    }

    #[test]
    fn test_value_is_trimmed_like_a_property_line() {
        assert_eq!(
            parse_option("Ice", "--Ice.Default.Host=  localhost "),
            property("Ice.Default.Host", "localhost")
        );
    }

    #[test]
    fn test_flag_with_trailing_words_still_defaults_to_one() {
        // "--Ice.Foo bar" becomes "Ice.Foo bar=1": key "Ice.Foo", value "1".
        assert_eq!(parse_option("Ice", "--Ice.Foo bar"), property("Ice.Foo", "1"));
    }

    #[test]
    fn test_parse_flag_requires_double_dash() {
        assert_eq!(parse_flag("Ice.Config=x"), None);
        assert_eq!(parse_flag("-Ice.Config=x"), None);
    }

    #[test]
    fn test_is_option_for_matches_only_dotted_prefix() {
        assert!(is_option_for("Ice", "--Ice.Trace"));
        assert!(is_option_for("IceSSL", "--IceSSL.Trace.Security=1"));
        assert!(!is_option_for("Ice", "--IceSSL.Trace.Security=1"));
        assert!(!is_option_for("Ice", "-Ice.Trace"));
    }
}
