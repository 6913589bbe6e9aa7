use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportGuardError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read file: {path}")]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read config file: {path}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid block pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

impl ReportGuardError {
    /// Short category name shown in the error header.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) => "Config",
            Self::FileAccess { .. } => "FileAccess",
            Self::ConfigRead { .. } => "ConfigRead",
            Self::InvalidPattern { .. } => "InvalidPattern",
            Self::TomlParse(_) => "TomlParse",
        }
    }

    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Config(msg) => msg.clone(),
            Self::FileAccess { path, .. } => format!("cannot read '{}'", path.display()),
            Self::ConfigRead { path, .. } => {
                format!("cannot read config file '{}'", path.display())
            }
            Self::InvalidPattern { pattern, .. } => format!("cannot compile '{pattern}'"),
            Self::TomlParse(_) => "malformed configuration file".to_string(),
        }
    }

    /// Underlying cause, if any.
    #[must_use]
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::Config(_) => None,
            Self::FileAccess { source, .. } | Self::ConfigRead { source, .. } => {
                Some(source.to_string())
            }
            Self::InvalidPattern { source, .. } => Some(source.to_string()),
            Self::TomlParse(e) => Some(e.to_string()),
        }
    }

    #[must_use]
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::FileAccess { source, .. } => match source.kind() {
                std::io::ErrorKind::NotFound => {
                    Some("Check the path, or generate the report before verifying it")
                }
                std::io::ErrorKind::PermissionDenied => {
                    Some("Check the file permissions of the report")
                }
                std::io::ErrorKind::InvalidData => Some("The report must be UTF-8 encoded text"),
                _ => None,
            },
            Self::ConfigRead { source, .. } => match source.kind() {
                std::io::ErrorKind::NotFound => {
                    Some("Check the --config path, or omit --config to use the built-in defaults")
                }
                std::io::ErrorKind::PermissionDenied => {
                    Some("Check the file permissions of the config file")
                }
                std::io::ErrorKind::InvalidData => Some("The config file must be UTF-8 encoded TOML"),
                _ => None,
            },
            Self::Config(_) | Self::TomlParse(_) => {
                Some("Fix the configuration file or run without --config")
            }
            Self::InvalidPattern { .. } => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ReportGuardError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
