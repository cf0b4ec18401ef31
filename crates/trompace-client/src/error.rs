//! Error types for configuration loading and CE authentication.

use thiserror::Error;

/// Errors raised by the client layer.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The configuration file is missing or incomplete.
    #[error("configuration error: {0}")]
    Config(String),

    /// The configuration sources could not be read or deserialized.
    #[error("config source error: {0}")]
    ConfigSource(#[from] config::ConfigError),

    /// The CE refused to issue a token.
    #[error("authentication failed: {0}")]
    Authentication(String),

    /// The token request could not be sent or its response read.
    #[error("token request error: {0}")]
    Request(#[from] reqwest::Error),

    /// A token could not be decoded.
    #[error("token decode error: {0}")]
    Decode(#[from] jsonwebtoken::errors::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Validation(#[from] trompace_core::ValidationError),
}

impl ClientError {
    /// Returns `true` when obtaining a token failed, either because the CE
    /// reported failure or because the request never completed.
    pub fn is_authentication(&self) -> bool {
        matches!(self, Self::Authentication(_) | Self::Request(_))
    }
}

/// Convenience alias for client results.
pub type ClientResult<T> = std::result::Result<T, ClientError>;
