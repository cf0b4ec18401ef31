//! Configuration and authentication for talking to the TROMPA Contributor
//! Environment (CE).
//!
//! [`Config`] is loaded once from an ini file and passed by reference to
//! whatever needs host or credential values. [`CredentialManager`] hands out
//! a bearer token, requesting a new one from the CE when none is cached or
//! the cached one has expired.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod config;
pub mod credentials;
pub mod error;

pub use config::{AuthConfig, Config, LoggingConfig, ServerConfig};
pub use credentials::{CredentialManager, TokenClaims};
pub use error::{ClientError, ClientResult};
