//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Config file: explicit `--config` path, else `$XDG_CONFIG_HOME/rsmorse/rsmorse.toml`
//! 3. Environment variables: `RSMORSE_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::services::MissPolicy;
use crate::application::ApplicationError;

/// Unified configuration for rsmorse.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Handling of code tokens without a letter (default: skip)
    pub on_miss: MissPolicy,
}

/// Raw settings for intermediate parsing (`None` → not specified, keep base).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub on_miss: Option<MissPolicy>,
}

/// Get the XDG config directory for rsmorse.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "rsmorse").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("rsmorse.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Overlay wins where it specifies a value.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            on_miss: overlay.on_miss.unwrap_or(self.on_miss),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// An explicit `config_file` must exist; the global file is optional.
    pub fn load(config_file: Option<&Path>) -> Result<Self, ApplicationError> {
        let mut current = match config_file {
            Some(path) => Self::from_file(path)?,
            None => match global_config_path() {
                Some(global_path) if global_path.exists() => Self::from_file(&global_path)?,
                _ => Self::default(),
            },
        };

        current = Self::apply_env_overrides(current)?;
        Ok(current)
    }

    /// Compiled defaults overlaid with a single config file (no env vars).
    pub fn from_file(path: &Path) -> Result<Self, ApplicationError> {
        debug!("loading config: {}", path.display());
        let raw = load_raw_settings(path)?;
        Ok(Self::default().merge_with(&raw))
    }

    /// Apply RSMORSE_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(Environment::with_prefix("RSMORSE").prefix_separator("_"))
            .build()
            .map_err(config_err)?;

        match config.get_string("on_miss") {
            Ok(val) => {
                settings.on_miss = val
                    .parse()
                    .map_err(|message| ApplicationError::Config { message })?;
            }
            Err(ConfigError::NotFound(_)) => {}
            Err(e) => return Err(config_err(e)),
        }

        Ok(settings)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# rsmorse configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/rsmorse/rsmorse.toml  (or --config <path>)
#   Env:    RSMORSE_* environment variables (explicit overrides)

# What to do with a code that has no letter:
#   "skip" - drop that letter and keep translating
#   "fail" - abort the translation with an error
# on_miss = "skip"
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_default_settings_when_created_then_skips_misses() {
        assert_eq!(Settings::default().on_miss, MissPolicy::Skip);
    }

    #[test]
    fn given_empty_overlay_when_merging_then_keeps_base() {
        let base = Settings {
            on_miss: MissPolicy::Fail,
        };
        assert_eq!(base.merge_with(&RawSettings::default()), base);
    }

    #[test]
    fn given_overlay_when_merging_then_overlay_wins() {
        let raw = RawSettings {
            on_miss: Some(MissPolicy::Fail),
        };
        assert_eq!(Settings::default().merge_with(&raw).on_miss, MissPolicy::Fail);
    }

    #[test]
    fn given_template_when_parsed_then_yields_defaults() {
        let raw: RawSettings = toml::from_str(&Settings::template()).unwrap();
        assert_eq!(Settings::default().merge_with(&raw), Settings::default());
    }

    #[test]
    fn given_settings_when_serialized_then_contains_policy() {
        let toml = Settings::default().to_toml().unwrap();
        assert!(toml.contains(r#"on_miss = "skip""#));
    }
}
