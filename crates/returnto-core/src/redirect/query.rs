//! Query-string parameter lookup.

use percent_encoding::percent_decode_str;
use url::form_urlencoded;

/// Returns the decoded value of the first parameter called `name`.
///
/// `search` may carry a leading `?`. Values are decoded the way a browser's
/// `URLSearchParams` does it: percent escapes are reversed and `+` becomes a
/// space. Only `&` separates pairs, so a value like `/custom?foo=bar` survives
/// intact.
pub fn query_param(search: &str, name: &str) -> Option<String> {
    let query = search.strip_prefix('?').unwrap_or(search);
    form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
}

/// Decodes one raw parameter value with the same rules as [`query_param`]:
/// `+` becomes a space and percent escapes are reversed.
///
/// The input is a single value, not a query string, so a literal `&` or `=`
/// stays in the result instead of starting a new pair. That is why this does
/// not go through `form_urlencoded::parse`.
pub fn decode_value(raw: &str) -> String {
    let plus_as_space = raw.replace('+', " ");
    percent_decode_str(&plus_as_space)
        .decode_utf8_lossy()
        .into_owned()
}
