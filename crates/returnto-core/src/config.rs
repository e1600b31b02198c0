use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::redirect::{DEFAULT_FALLBACK_PATH, DEFAULT_MAX_DECODE_ROUNDS, DEFAULT_PARAM_NAME};

/// Resolver settings loaded from `~/.config/returnto/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Path used when no safe `returnTo` value is available.
    pub fallback_path: String,
    /// Name of the query parameter that carries the redirect target.
    pub param_name: String,
    /// Extra percent-decoding passes used to uncover double-encoded schemes.
    pub max_decode_rounds: usize,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            fallback_path: DEFAULT_FALLBACK_PATH.to_string(),
            param_name: DEFAULT_PARAM_NAME.to_string(),
            max_decode_rounds: DEFAULT_MAX_DECODE_ROUNDS,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("returnto")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<ResolverConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = ResolverConfig::default();
        write_to(&path, &default_cfg)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    load_from(&path)
}

/// Load configuration from an explicit path. Missing keys take defaults.
pub fn load_from(path: &Path) -> Result<ResolverConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let cfg: ResolverConfig =
        toml::from_str(&data).with_context(|| format!("parsing config {}", path.display()))?;
    Ok(cfg)
}

pub fn write_to(path: &Path, cfg: &ResolverConfig) -> Result<()> {
    let toml = toml::to_string_pretty(cfg)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, toml)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = ResolverConfig::default();
        assert_eq!(cfg.fallback_path, "/projects");
        assert_eq!(cfg.param_name, "returnTo");
        assert_eq!(cfg.max_decode_rounds, 3);
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = ResolverConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: ResolverConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn config_toml_partial_values() {
        let toml = r#"
            fallback_path = "/dashboard"
        "#;
        let cfg: ResolverConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.fallback_path, "/dashboard");
        assert_eq!(cfg.param_name, "returnTo");
        assert_eq!(cfg.max_decode_rounds, 3);
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            fallback_path = "/org"
            param_name = "next"
            max_decode_rounds = 5
        "#;
        let cfg: ResolverConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.fallback_path, "/org");
        assert_eq!(cfg.param_name, "next");
        assert_eq!(cfg.max_decode_rounds, 5);
    }

    #[test]
    fn write_then_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let cfg = ResolverConfig {
            fallback_path: "/home".into(),
            ..ResolverConfig::default()
        };
        write_to(&path, &cfg).unwrap();
        assert_eq!(load_from(&path).unwrap(), cfg);
    }

    #[test]
    fn load_from_reports_bad_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "max_decode_rounds = \"lots\"").unwrap();
        let err = load_from(&path).unwrap_err();
        assert!(format!("{err:#}").contains("parsing config"));
    }
}
