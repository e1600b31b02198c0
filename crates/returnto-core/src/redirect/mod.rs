//! Post-login redirect resolution.
//!
//! Reads the `returnTo` parameter from a [`Location`] and hands back a path
//! that is safe to navigate to: either the parameter's decoded value or a
//! fallback. Every refused value (missing, empty, script scheme, absolute or
//! network-path URL) collapses to the fallback; nothing is partially cleaned.

mod classify;
mod error;
mod query;

use anyhow::{bail, ensure, Result};

use crate::config::ResolverConfig;
use crate::location::Location;

pub use error::Rejection;
pub use query::{decode_value, query_param};

/// Destination used when no valid `returnTo` can be derived.
pub const DEFAULT_FALLBACK_PATH: &str = "/projects";

/// Query parameter read by default.
pub const DEFAULT_PARAM_NAME: &str = "returnTo";

/// Extra percent-decoding passes applied when looking for hidden schemes.
pub const DEFAULT_MAX_DECODE_ROUNDS: usize = 3;

/// Resolves redirect targets from a location's query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReturnToResolver {
    fallback: String,
    param_name: String,
    max_decode_rounds: usize,
}

impl Default for ReturnToResolver {
    fn default() -> Self {
        Self {
            fallback: DEFAULT_FALLBACK_PATH.to_string(),
            param_name: DEFAULT_PARAM_NAME.to_string(),
            max_decode_rounds: DEFAULT_MAX_DECODE_ROUNDS,
        }
    }
}

impl ReturnToResolver {
    /// Builds a resolver from config, refusing a fallback that would itself
    /// fail the safety check.
    pub fn from_config(cfg: &ResolverConfig) -> Result<Self> {
        ensure!(!cfg.param_name.is_empty(), "param_name must not be empty");
        let resolver = Self {
            fallback: cfg.fallback_path.clone(),
            param_name: cfg.param_name.clone(),
            max_decode_rounds: cfg.max_decode_rounds,
        };
        if let Err(reason) = resolver.classify(&cfg.fallback_path) {
            bail!(
                "fallback_path {:?} is not a safe path: {}",
                cfg.fallback_path,
                reason
            );
        }
        Ok(resolver)
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    pub fn param_name(&self) -> &str {
        &self.param_name
    }

    /// Returns where to send the user next.
    ///
    /// `location` is `None` when there is no navigation context at all.
    /// `explicit_fallback` overrides the configured fallback when it is not
    /// blank. Never fails: every rejected candidate yields the fallback.
    pub fn resolve(
        &self,
        location: Option<&dyn Location>,
        explicit_fallback: Option<&str>,
    ) -> String {
        match self.evaluate(location) {
            Ok(path) => path,
            Err(_) => self.fallback_for(explicit_fallback),
        }
    }

    /// Same pipeline as [`resolve`](Self::resolve), but reports why a
    /// candidate was refused instead of substituting the fallback.
    pub fn evaluate(&self, location: Option<&dyn Location>) -> Result<String, Rejection> {
        let location = location.ok_or(Rejection::NoLocation)?;
        let candidate = query_param(location.search(), &self.param_name)
            .ok_or_else(|| Rejection::Missing(self.param_name.clone()))?;
        self.classify(&candidate)?;
        Ok(candidate)
    }

    /// Decodes a raw (still percent-encoded) parameter value and checks it.
    pub fn check_raw(&self, raw: &str) -> Result<String, Rejection> {
        let candidate = decode_value(raw);
        self.classify(&candidate)?;
        Ok(candidate)
    }

    /// Safety check on a candidate that has already been decoded once.
    pub fn classify(&self, candidate: &str) -> Result<(), Rejection> {
        classify::check_candidate(candidate, self.max_decode_rounds)
    }

    fn fallback_for(&self, explicit_fallback: Option<&str>) -> String {
        explicit_fallback
            .filter(|f| !f.trim().is_empty())
            .unwrap_or(self.fallback.as_str())
            .to_string()
    }
}

/// Resolves with the default resolver (`returnTo`, fallback `/projects`).
pub fn get_return_to_path(
    location: Option<&dyn Location>,
    explicit_fallback: Option<&str>,
) -> String {
    ReturnToResolver::default().resolve(location, explicit_fallback)
}
