//! ICOPY-prefixed error types with structured error codes.
//!
//! The resolver itself is total over the code enums and never fails; errors
//! exist at the crate boundary — parsing codes from text, loading config,
//! and data lint.

#![allow(missing_docs)]

use std::path::PathBuf;

use thiserror::Error;

/// Shared `Result` alias for the project.
pub type Result<T> = std::result::Result<T, CopyError>;

/// Top-level error type for infraction_copy.
#[derive(Debug, Error)]
pub enum CopyError {
    #[error("[ICOPY-1001] invalid configuration: {details}")]
    InvalidConfig { details: String },

    #[error("[ICOPY-1002] missing configuration file: {path}")]
    MissingConfig { path: PathBuf },

    #[error("[ICOPY-1003] configuration parse failure in {context}: {details}")]
    ConfigParse {
        context: &'static str,
        details: String,
    },

    #[error("[ICOPY-2001] unknown infraction reason code: {code}")]
    UnknownReason { code: String },

    #[error("[ICOPY-2002] unknown inappropriate-reason category code: {code}")]
    UnknownCategory { code: String },

    #[error("[ICOPY-2003] unknown tagging sub-reason code: {code}")]
    UnknownSubreason { code: String },

    #[error("[ICOPY-2101] serialization failure in {context}: {details}")]
    Serialization {
        context: &'static str,
        details: String,
    },

    #[error("[ICOPY-3001] IO failure at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("[ICOPY-4001] copy-table lint failed with {errors} error(s)")]
    LintFailed { errors: usize },
}

impl CopyError {
    /// Stable machine-parseable error code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidConfig { .. } => "ICOPY-1001",
            Self::MissingConfig { .. } => "ICOPY-1002",
            Self::ConfigParse { .. } => "ICOPY-1003",
            Self::UnknownReason { .. } => "ICOPY-2001",
            Self::UnknownCategory { .. } => "ICOPY-2002",
            Self::UnknownSubreason { .. } => "ICOPY-2003",
            Self::Serialization { .. } => "ICOPY-2101",
            Self::Io { .. } => "ICOPY-3001",
            Self::LintFailed { .. } => "ICOPY-4001",
        }
    }

    /// Whether the failure stems from caller-supplied input (as opposed to
    /// broken installation state or broken static data).
    #[must_use]
    pub const fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::UnknownReason { .. } | Self::UnknownCategory { .. } | Self::UnknownSubreason { .. }
        )
    }
}

impl From<serde_json::Error> for CopyError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialization {
            context: "serde_json",
            details: value.to_string(),
        }
    }
}

impl From<toml::de::Error> for CopyError {
    fn from(value: toml::de::Error) -> Self {
        Self::ConfigParse {
            context: "toml",
            details: value.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_errors() -> Vec<CopyError> {
        vec![
            CopyError::InvalidConfig {
                details: String::new(),
            },
            CopyError::MissingConfig {
                path: PathBuf::new(),
            },
            CopyError::ConfigParse {
                context: "",
                details: String::new(),
            },
            CopyError::UnknownReason {
                code: String::new(),
            },
            CopyError::UnknownCategory {
                code: String::new(),
            },
            CopyError::UnknownSubreason {
                code: String::new(),
            },
            CopyError::Serialization {
                context: "",
                details: String::new(),
            },
            CopyError::Io {
                path: PathBuf::new(),
                source: std::io::Error::new(std::io::ErrorKind::Other, "test"),
            },
            CopyError::LintFailed { errors: 1 },
        ]
    }

    #[test]
    fn error_codes_are_unique() {
        let errors = sample_errors();
        let codes: Vec<&str> = errors.iter().map(CopyError::code).collect();
        let unique: std::collections::HashSet<&&str> = codes.iter().collect();
        assert_eq!(
            codes.len(),
            unique.len(),
            "error codes must be unique: {codes:?}"
        );
    }

    #[test]
    fn error_codes_have_icopy_prefix() {
        for err in &sample_errors() {
            assert!(
                err.code().starts_with("ICOPY-"),
                "code {} must start with ICOPY-",
                err.code()
            );
        }
    }

    #[test]
    fn error_display_includes_code() {
        let err = CopyError::UnknownReason {
            code: "NOT_A_REASON".to_string(),
        };
        let msg = err.to_string();
        assert!(
            msg.contains("ICOPY-2001"),
            "display should contain error code: {msg}"
        );
        assert!(
            msg.contains("NOT_A_REASON"),
            "display should contain the offending code: {msg}"
        );
    }

    #[test]
    fn input_error_classification() {
        assert!(
            CopyError::UnknownSubreason {
                code: String::new()
            }
            .is_input_error()
        );
        assert!(
            !CopyError::LintFailed { errors: 3 }.is_input_error(),
            "lint failures indicate broken static data, not bad input"
        );
        assert!(
            !CopyError::InvalidConfig {
                details: String::new()
            }
            .is_input_error()
        );
    }

    #[test]
    fn from_serde_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err: CopyError = json_err.into();
        assert_eq!(err.code(), "ICOPY-2101");
    }

    #[test]
    fn from_toml_error() {
        let toml_err = toml::from_str::<toml::Value>("= invalid").unwrap_err();
        let err: CopyError = toml_err.into();
        assert_eq!(err.code(), "ICOPY-1003");
    }
}
