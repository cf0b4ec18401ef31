use thiserror::Error;

/// Errors raised while validating mutation arguments.
///
/// Every variant is a deterministic function of the builder input: fixing
/// the input and calling the builder again is the only recovery.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("unsupported language: {0} (supported: en, es, ca, nl, de, fr)")]
    UnsupportedLanguage(String),

    #[error("not a mime type: {0}")]
    NotAMimeType(String),

    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("invalid date: {0}")]
    InvalidDate(String),

    #[error("not a finite number: {0}")]
    NonFiniteNumber(String),
}

pub type Result<T> = std::result::Result<T, ValidationError>;
