use std::path::{Path, PathBuf};

use config::{Environment, File, FileFormat};
use serde::{Deserialize, Deserializer};

use crate::error::{ClientError, ClientResult};

/// Environment variable naming the config file when no path is given.
pub const CONFIG_ENV_VAR: &str = "TROMPACE_CLIENT_CONFIG";

/// Name used for the token cache file and the platform config directory.
const CLIENT_NAME: &str = "trompace-client";

/// Configuration for the trompace client.
///
/// Configuration is loaded from multiple sources with the following priority:
/// 1. Environment variables (`TROMPACE_<SECTION>__<KEY>`, e.g. `TROMPACE_AUTH__KEY`)
/// 2. The ini config file
///
/// The file is located by, in order: an explicit path, the
/// `TROMPACE_CLIENT_CONFIG` environment variable, then
/// `<config dir>/trompace/client.ini`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
    pub server: ServerConfig,
    pub auth: AuthConfig,
}

/// `[logging]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log filter directive, e.g. `debug` or `trompace_client=debug,info`.
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

fn default_level() -> String {
    "info".to_string()
}

/// `[server]` section: the CE host and whether to use TLS.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerConfig {
    /// Host name, optionally with port and path, without a scheme.
    pub host: String,
    pub secure: bool,
}

impl ServerConfig {
    #[must_use]
    pub fn new(host: impl Into<String>, secure: bool) -> Self {
        Self {
            host: host.into(),
            secure,
        }
    }

    /// `http(s)://host`
    #[must_use]
    pub fn http_url(&self) -> String {
        let scheme = if self.secure { "https" } else { "http" };
        format!("{}://{}", scheme, self.host)
    }

    /// `ws(s)://host/graphql`
    #[must_use]
    pub fn websocket_url(&self) -> String {
        let scheme = if self.secure { "wss" } else { "ws" };
        format!("{}://{}/graphql", scheme, self.host)
    }
}

/// `[auth]` section: credentials for the CE `/jwt` endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    pub id: String,
    pub key: String,
    #[serde(deserialize_with = "comma_separated")]
    pub scopes: Vec<String>,
    /// Directory for the token cache file. Defaults to the current directory.
    #[serde(default)]
    pub token_cache_dir: Option<PathBuf>,
}

fn comma_separated<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(raw
        .split(',')
        .map(str::trim)
        .filter(|scope| !scope.is_empty())
        .map(String::from)
        .collect())
}

impl Config {
    /// Load configuration from the ini file and environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if no config file can be found, or if it cannot be
    /// parsed or lacks a required option.
    pub fn load(path: Option<&Path>) -> ClientResult<Self> {
        let path = resolve_config_path(path)?;
        log::debug!("Loading configuration from {}", path.display());

        let settings = config::Config::builder()
            .add_source(File::from(path.as_path()).format(FileFormat::Ini))
            .add_source(
                Environment::with_prefix("TROMPACE")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        Self::from_settings(settings)
    }

    /// Parse configuration from ini text, without environment overrides.
    pub fn from_ini_str(contents: &str) -> ClientResult<Self> {
        let settings = config::Config::builder()
            .add_source(File::from_str(contents, FileFormat::Ini))
            .build()?;

        Self::from_settings(settings)
    }

    fn from_settings(settings: config::Config) -> ClientResult<Self> {
        let config: Self = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> ClientResult<()> {
        if self.server.host.is_empty() {
            return Err(ClientError::Config(
                "Cannot find 'server.host' option".to_string(),
            ));
        }
        if self.auth.id.is_empty() || self.auth.key.is_empty() {
            return Err(ClientError::Config(
                "Cannot find 'auth.id' or 'auth.key' option".to_string(),
            ));
        }
        if self.auth.scopes.is_empty() {
            return Err(ClientError::Config(
                "Cannot find 'auth.scopes' option".to_string(),
            ));
        }
        Ok(())
    }

    /// Directory holding the token cache file.
    pub fn token_cache_dir(&self) -> ClientResult<PathBuf> {
        match &self.auth.token_cache_dir {
            Some(dir) => Ok(dir.clone()),
            None => {
                let cwd = std::env::current_dir()?;
                log::debug!(
                    "No cache directory set for storing jwt token, using current directory ({})",
                    cwd.display()
                );
                Ok(cwd)
            }
        }
    }

    /// Full path of the token cache file for this server.
    ///
    /// The host is part of the file name so that tokens for different CE
    /// instances never share a cache file.
    pub fn token_cache_path(&self) -> ClientResult<PathBuf> {
        Ok(self.token_cache_dir()?.join(token_cache_file_name(&self.server.host)))
    }
}

/// `.trompace-client-jwt-token-cache-<host>` with `/` in the host replaced by `-`.
#[must_use]
pub fn token_cache_file_name(host: &str) -> String {
    format!(".{}-jwt-token-cache-{}", CLIENT_NAME, host.replace('/', "-"))
}

fn resolve_config_path(path: Option<&Path>) -> ClientResult<PathBuf> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => match std::env::var_os(CONFIG_ENV_VAR) {
            Some(value) if !value.is_empty() => PathBuf::from(value),
            _ => config_file_path(),
        },
    };

    if !path.exists() {
        return Err(ClientError::Config(format!(
            "No such config file '{}' (pass a path or set {})",
            path.display(),
            CONFIG_ENV_VAR
        )));
    }
    Ok(path)
}

/// Get the default config file path.
///
/// Returns:
/// - Linux: ~/.config/trompace/client.ini
/// - macOS: ~/Library/Application Support/trompace/client.ini
/// - Windows: %APPDATA%\trompace\client.ini
pub fn config_file_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("trompace")
        .join("client.ini")
}

/// Get the example config file content.
pub fn example_config() -> &'static str {
    r#"; trompace client configuration
;
; Any option can be overridden from the environment as
; TROMPACE_<SECTION>__<OPTION>, e.g. TROMPACE_AUTH__KEY.

[logging]
; Log filter: error, warn, info, debug or trace
level = info

[server]
; CE host without scheme
host = api.trompamusic.eu
; Use https/wss when true, http/ws otherwise
secure = true

[auth]
; Credentials issued by the CE administrators
id = your-client-id
key = your-api-key
; Comma-separated list of CE scopes
scopes = default
; Where to keep the cached token (default: current directory)
;token_cache_dir = /var/cache/trompace
"#
}

/// Create the default config file if it doesn't exist.
///
/// Returns true if a new file was created, false if it already existed.
pub fn ensure_config_file() -> ClientResult<bool> {
    let config_path = config_file_path();

    if config_path.exists() {
        return Ok(false);
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&config_path, example_config())?;

    Ok(true)
}
