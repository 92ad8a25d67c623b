//! Configuration system: TOML file + env var overrides + defaults.
//!
//! The copy tables themselves are static; configuration covers the merge
//! separators (the body separator is an opaque string, never interpreted),
//! lint strictness, and CLI output preferences.

#![allow(missing_docs)]

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::errors::{CopyError, Result};

/// Full icopy configuration model.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Config {
    pub resolver: ResolverConfig,
    pub lint: LintConfig,
    pub output: OutputConfig,
    #[serde(skip)]
    pub config_file: Option<PathBuf>,
}

/// Merge-rule knobs for the copy resolver.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ResolverConfig {
    /// Paragraph separator inserted between accumulated body levels.
    /// Treated as an opaque string; the default carries a visible break
    /// marker that markdown renderers keep between paragraphs.
    pub body_separator: String,
    /// Joiner between category and sub-reason titles.
    pub title_joiner: String,
}

/// Strictness switches for the static-data lint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LintConfig {
    /// Promote lint notes (e.g. childless categories) to hard errors.
    pub fail_on_notes: bool,
}

/// CLI output preferences.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct OutputConfig {
    pub color: bool,
    pub json: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            body_separator: "\n\n&nbsp;\n\n".to_string(),
            title_joiner: " - ".to_string(),
        }
    }
}

impl Default for LintConfig {
    fn default() -> Self {
        Self {
            fail_on_notes: false,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: true,
            json: false,
        }
    }
}

impl Config {
    /// Default configuration path (`~/.config/icopy/config.toml`).
    #[must_use]
    pub fn default_path() -> PathBuf {
        let home_dir = env::var_os("HOME").map_or_else(|| PathBuf::from("/tmp"), PathBuf::from);
        home_dir.join(".config").join("icopy").join("config.toml")
    }

    /// Load config from default or explicit path, then apply env overrides.
    ///
    /// Missing config file is not an error when loading from the default
    /// path; defaults are used.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path_buf = path.map_or_else(Self::default_path, Path::to_path_buf);
        let is_explicit_path = path.is_some();

        let mut cfg = if path_buf.exists() {
            let raw = fs::read_to_string(&path_buf).map_err(|source| CopyError::Io {
                path: path_buf.clone(),
                source,
            })?;
            let parsed: Self = toml::from_str(&raw)?;
            parsed
        } else if is_explicit_path {
            return Err(CopyError::MissingConfig { path: path_buf });
        } else {
            Self::default()
        };

        cfg.config_file = Some(path_buf);
        cfg.apply_env_overrides()?;
        cfg.validate()?;
        Ok(cfg)
    }

    fn apply_env_overrides(&mut self) -> Result<()> {
        set_env_string(
            "ICOPY_RESOLVER_BODY_SEPARATOR",
            &mut self.resolver.body_separator,
        );
        set_env_string(
            "ICOPY_RESOLVER_TITLE_JOINER",
            &mut self.resolver.title_joiner,
        );
        set_env_bool("ICOPY_LINT_FAIL_ON_NOTES", &mut self.lint.fail_on_notes)?;
        set_env_bool("ICOPY_OUTPUT_COLOR", &mut self.output.color)?;
        set_env_bool("ICOPY_OUTPUT_JSON", &mut self.output.json)?;
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.resolver.body_separator.is_empty() {
            return Err(CopyError::InvalidConfig {
                details: "resolver.body_separator must be non-empty".to_string(),
            });
        }
        if self.resolver.title_joiner.is_empty() {
            return Err(CopyError::InvalidConfig {
                details: "resolver.title_joiner must be non-empty".to_string(),
            });
        }
        Ok(())
    }

    /// Effective config rendered as TOML (for `icopy config`).
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| CopyError::Serialization {
            context: "toml",
            details: e.to_string(),
        })
    }
}

fn set_env_string(name: &str, target: &mut String) {
    if let Ok(value) = env::var(name) {
        *target = value;
    }
}

fn set_env_bool(name: &str, target: &mut bool) -> Result<()> {
    if let Ok(value) = env::var(name) {
        *target = match value.as_str() {
            "1" | "true" | "yes" | "on" => true,
            "0" | "false" | "no" | "off" => false,
            other => {
                return Err(CopyError::InvalidConfig {
                    details: format!("{name} must be a boolean, got {other:?}"),
                });
            }
        };
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn defaults_are_valid() {
        let cfg = Config::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.resolver.body_separator, "\n\n&nbsp;\n\n");
        assert_eq!(cfg.resolver.title_joiner, " - ");
        assert!(cfg.output.color);
        assert!(!cfg.output.json);
    }

    #[test]
    fn load_returns_error_for_explicit_missing_path() {
        let result = Config::load(Some(Path::new("/nonexistent/icopy/config.toml")));
        assert!(matches!(result, Err(CopyError::MissingConfig { .. })));
    }

    #[test]
    fn load_parses_partial_toml() {
        let mut file = tempfile::NamedTempFile::new().expect("temp config");
        writeln!(file, "[resolver]\ntitle_joiner = \" / \"").expect("write config");

        let cfg = Config::load(Some(file.path())).expect("load config");
        assert_eq!(cfg.resolver.title_joiner, " / ");
        // untouched sections keep defaults
        assert_eq!(cfg.resolver.body_separator, "\n\n&nbsp;\n\n");
        assert!(!cfg.lint.fail_on_notes);
    }

    #[test]
    fn empty_separator_rejected() {
        let mut cfg = Config::default();
        cfg.resolver.body_separator = String::new();
        assert!(matches!(
            cfg.validate(),
            Err(CopyError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn to_toml_round_trips() {
        let cfg = Config::default();
        let rendered = cfg.to_toml().expect("render toml");
        let parsed: Config = toml::from_str(&rendered).expect("parse rendered toml");
        assert_eq!(parsed, cfg);
    }
}
