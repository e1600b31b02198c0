//! Scheme and host detection on decoded redirect candidates.

use std::borrow::Cow;

use percent_encoding::percent_decode_str;

use super::Rejection;

/// Schemes that make a browser execute or inline content.
const SCRIPT_SCHEMES: &[&str] = &["javascript", "vbscript", "data"];

/// Schemes that carry a network host.
const NETWORK_SCHEMES: &[&str] = &["http", "https", "ftp", "ws", "wss"];

/// Checks an already-decoded candidate and each further percent-decoding of it.
///
/// At most `max_decode_rounds` extra decodings are tried; decoding stops early
/// once a round no longer changes the string.
pub(crate) fn check_candidate(candidate: &str, max_decode_rounds: usize) -> Result<(), Rejection> {
    let first = normalize(candidate);
    if first.is_empty() {
        return Err(Rejection::Empty);
    }
    check_normalized(&first)?;

    let mut current = Cow::Borrowed(candidate);
    for _ in 0..max_decode_rounds {
        let decoded = percent_decode_str(&current).decode_utf8_lossy().into_owned();
        if decoded == current {
            break;
        }
        check_normalized(&normalize(&decoded))?;
        current = Cow::Owned(decoded);
    }

    Ok(())
}

/// Drops control characters anywhere in the string, trims leading whitespace
/// and lowercases ASCII.
///
/// Browsers strip tab, LF and CR from URLs before parsing, so `java\tscript:`
/// runs as script; other controls are removed as well to stay on the strict side.
fn normalize(candidate: &str) -> String {
    let stripped: String = candidate.chars().filter(|c| !c.is_control()).collect();
    stripped
        .trim_start_matches(|c: char| c.is_whitespace() || c <= ' ')
        .to_ascii_lowercase()
}

fn check_normalized(value: &str) -> Result<(), Rejection> {
    let mut chars = value.chars();
    if let (Some(a), Some(b)) = (chars.next(), chars.next()) {
        if is_slash(a) && is_slash(b) {
            return Err(Rejection::SchemeRelative);
        }
    }

    if let Some(scheme) = leading_scheme(value) {
        if SCRIPT_SCHEMES.contains(&scheme) {
            return Err(Rejection::ScriptScheme(scheme.to_string()));
        }
        if NETWORK_SCHEMES.contains(&scheme) {
            return Err(Rejection::ForeignOrigin(scheme.to_string()));
        }
        return Err(Rejection::UnknownScheme(scheme.to_string()));
    }

    Ok(())
}

/// `\` is treated as `/` by browsers for special schemes.
fn is_slash(c: char) -> bool {
    c == '/' || c == '\\'
}

/// Returns the scheme if `value` starts with `ALPHA *( ALPHA / DIGIT / "+" / "-" / "." ) ":"`.
fn leading_scheme(value: &str) -> Option<&str> {
    let colon = value.find(':')?;
    let scheme = &value[..colon];
    let mut chars = scheme.chars();
    let first = chars.next()?;
    if !first.is_ascii_alphabetic() {
        return None;
    }
    if chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.')) {
        Some(scheme)
    } else {
        None
    }
}
