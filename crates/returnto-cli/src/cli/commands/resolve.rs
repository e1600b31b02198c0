//! Resolve command: print the post-login destination for a location.

use anyhow::Result;
use returnto_core::location::{Location, StaticLocation};
use returnto_core::redirect::ReturnToResolver;

/// Where the location comes from. Both `None` means no location.
#[derive(Debug, Default)]
pub struct LocationArgs {
    pub url: Option<String>,
    pub search: Option<String>,
}

impl LocationArgs {
    pub fn to_location(&self) -> Result<Option<StaticLocation>> {
        if let Some(url) = &self.url {
            return Ok(Some(StaticLocation::parse_url(url)?));
        }
        Ok(self.search.as_deref().map(StaticLocation::from_search))
    }
}

/// Print the resolved path. Rejections are logged, never reported as errors.
pub fn run_resolve(
    resolver: &ReturnToResolver,
    location: &LocationArgs,
    fallback: Option<&str>,
) -> Result<()> {
    println!("{}", resolve_path(resolver, location, fallback)?);
    Ok(())
}

pub(crate) fn resolve_path(
    resolver: &ReturnToResolver,
    location: &LocationArgs,
    fallback: Option<&str>,
) -> Result<String> {
    let location = location.to_location()?;
    let location = location.as_ref().map(|l| l as &dyn Location);
    if let Err(reason) = resolver.evaluate(location) {
        tracing::debug!(reason = reason.code(), "using fallback: {}", reason);
    }
    Ok(resolver.resolve(location, fallback))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(url: Option<&str>, search: Option<&str>) -> LocationArgs {
        LocationArgs {
            url: url.map(str::to_string),
            search: search.map(str::to_string),
        }
    }

    #[test]
    fn resolves_from_url() {
        let r = ReturnToResolver::default();
        let path = resolve_path(
            &r,
            &args(Some("https://app.example/sign-in?returnTo=/org/acme"), None),
            None,
        )
        .unwrap();
        assert_eq!(path, "/org/acme");
    }

    #[test]
    fn resolves_from_search() {
        let r = ReturnToResolver::default();
        let path = resolve_path(&r, &args(None, Some("?returnTo=//evil.example")), None).unwrap();
        assert_eq!(path, "/projects");
    }

    #[test]
    fn no_location_uses_explicit_fallback() {
        let r = ReturnToResolver::default();
        let path = resolve_path(&r, &LocationArgs::default(), Some("/custom")).unwrap();
        assert_eq!(path, "/custom");
    }

    #[test]
    fn malformed_url_is_an_error() {
        let r = ReturnToResolver::default();
        assert!(resolve_path(&r, &args(Some("https://exa mple.com/"), None), None).is_err());
    }
}
