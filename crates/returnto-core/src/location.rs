//! The navigation context a redirect is resolved against.

use thiserror::Error;
use url::Url;

/// Base used to parse bare `/path?query` references.
const RELATIVE_BASE: &str = "http://localhost/";

/// Read-only view of the current location's query string.
///
/// `search` has the shape of a browser's `location.search`: `?key=value&...`,
/// or an empty string. The leading `?` is optional.
pub trait Location {
    fn search(&self) -> &str;
}

/// `str` is unsized and cannot be a `dyn Location`; the reference stands in for it.
impl Location for &str {
    fn search(&self) -> &str {
        self
    }
}

impl Location for String {
    fn search(&self) -> &str {
        self
    }
}

impl Location for Url {
    fn search(&self) -> &str {
        self.query().unwrap_or("")
    }
}

#[derive(Debug, Error)]
pub enum LocationError {
    #[error("invalid location {input:?}: {source}")]
    InvalidUrl {
        input: String,
        #[source]
        source: url::ParseError,
    },
}

/// A location captured as a plain value, for login hooks and tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticLocation {
    search: String,
}

impl StaticLocation {
    pub fn from_search(search: impl Into<String>) -> Self {
        Self {
            search: search.into(),
        }
    }

    /// Takes the query of an absolute URL or of a `/path?query` reference.
    pub fn parse_url(input: &str) -> Result<Self, LocationError> {
        let invalid = |source: url::ParseError| LocationError::InvalidUrl {
            input: input.to_string(),
            source,
        };
        let url = match Url::parse(input) {
            Ok(url) => url,
            Err(url::ParseError::RelativeUrlWithoutBase) => Url::parse(RELATIVE_BASE)
                .and_then(|base| base.join(input))
                .map_err(invalid)?,
            Err(e) => return Err(invalid(e)),
        };
        let search = url.query().map(|q| format!("?{q}")).unwrap_or_default();
        Ok(Self { search })
    }
}

impl Location for StaticLocation {
    fn search(&self) -> &str {
        &self.search
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_search_keeps_text() {
        let loc = StaticLocation::from_search("?returnTo=/custom");
        assert_eq!(loc.search(), "?returnTo=/custom");
    }

    #[test]
    fn parse_absolute_url() {
        let loc = StaticLocation::parse_url("https://app.example/sign-in?returnTo=/custom#x")
            .unwrap();
        assert_eq!(loc.search(), "?returnTo=/custom");
    }

    #[test]
    fn parse_relative_reference() {
        let loc = StaticLocation::parse_url("/sign-in?returnTo=/a&b=c").unwrap();
        assert_eq!(loc.search(), "?returnTo=/a&b=c");
    }

    #[test]
    fn parse_without_query() {
        let loc = StaticLocation::parse_url("https://app.example/sign-in").unwrap();
        assert_eq!(loc.search(), "");
    }

    #[test]
    fn parse_invalid_url() {
        let err = StaticLocation::parse_url("https://exa mple.com/").unwrap_err();
        assert!(matches!(err, LocationError::InvalidUrl { .. }));
    }

    #[test]
    fn url_location_has_no_question_mark() {
        let url = Url::parse("https://app.example/?returnTo=/x").unwrap();
        assert_eq!(url.search(), "returnTo=/x");
    }
}
