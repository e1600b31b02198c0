//! Reasons a `returnTo` candidate is refused.

use thiserror::Error;

/// Why no redirect target could be derived from a location.
///
/// Every variant is handled the same way by
/// [`ReturnToResolver::resolve`](super::ReturnToResolver::resolve): the
/// fallback path is used instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("no location available")]
    NoLocation,

    #[error("parameter `{0}` is missing")]
    Missing(String),

    #[error("redirect target is empty")]
    Empty,

    /// `javascript:`, `vbscript:` or `data:` in any spelling.
    #[error("script scheme `{0}:` is not allowed")]
    ScriptScheme(String),

    /// `http:` / `https:` or another scheme that names a network host.
    #[error("absolute URL with scheme `{0}:` points to a foreign origin")]
    ForeignOrigin(String),

    /// `//host`, `/\host`, `\\host`.
    #[error("network-path reference points to a foreign host")]
    SchemeRelative,

    #[error("unrecognized scheme `{0}:` is not a relative path")]
    UnknownScheme(String),
}

impl Rejection {
    /// Stable machine-readable name of the rejection kind.
    pub fn code(&self) -> &'static str {
        match self {
            Rejection::NoLocation => "no_location",
            Rejection::Missing(_) => "missing",
            Rejection::Empty => "empty",
            Rejection::ScriptScheme(_) => "script_scheme",
            Rejection::ForeignOrigin(_) => "foreign_origin",
            Rejection::SchemeRelative => "scheme_relative",
            Rejection::UnknownScheme(_) => "unknown_scheme",
        }
    }
}
