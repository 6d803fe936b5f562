use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SignatureError {
    #[error("failed to read signatures file '{path}': {message}")]
    RulesFileReadError { path: PathBuf, message: String },

    #[error("failed to parse signatures file '{path}': {message}")]
    RulesParseError { path: PathBuf, message: String },

    #[error("unsupported signatures format: {format} (expected json or yaml)")]
    UnsupportedFormat { format: String },

    #[error("invalid signature '{label}': {message}")]
    InvalidRule { label: String, message: String },
}

impl SignatureError {
    pub fn rules_file_read_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::RulesFileReadError {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn rules_parse_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::RulesParseError {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn unsupported_format(format: impl Into<String>) -> Self {
        Self::UnsupportedFormat {
            format: format.into(),
        }
    }

    pub fn invalid_rule(label: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidRule {
            label: label.into(),
            message: message.into(),
        }
    }
}
