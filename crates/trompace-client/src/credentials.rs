//! CE bearer token lifecycle.
//!
//! A [`CredentialManager`] moves between three states: no token, a valid
//! token, and an expired token. Asking for the token in the first or last
//! state requests a new one from the CE `/jwt` endpoint and writes it to the
//! cache file; asking in the valid state returns the held token without any
//! I/O.
//!
//! The client cannot check the issuer's signature, so tokens are decoded
//! only to read their claims (`exp` in particular).

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::{DateTime, Utc};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use reqwest::Client;
use serde::{de, Deserialize, Deserializer, Serialize};

use crate::config::Config;
use crate::error::{ClientError, ClientResult};

/// Claims read from a CE token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Expiry as a Unix timestamp. A token without one is always expired.
    /// Fractional seconds are truncated.
    #[serde(default, deserialize_with = "numeric_date")]
    pub exp: Option<i64>,

    /// Every other claim, as issued.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[allow(clippy::cast_possible_truncation)]
fn numeric_date<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(number) = Option::<serde_json::Number>::deserialize(deserializer)? else {
        return Ok(None);
    };
    if let Some(seconds) = number.as_i64() {
        return Ok(Some(seconds));
    }
    match number.as_f64() {
        Some(seconds) if seconds.is_finite() => Ok(Some(seconds.trunc() as i64)),
        _ => Err(de::Error::custom(format!("exp out of range: {}", number))),
    }
}

impl TokenClaims {
    #[must_use]
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.exp.and_then(|exp| DateTime::from_timestamp(exp, 0))
    }

    /// A token is expired from its `exp` second onwards.
    #[must_use]
    pub fn is_expired_at(&self, now: i64) -> bool {
        now >= self.exp.unwrap_or(0)
    }
}

/// Decode a token's claims without verifying its signature or expiry.
pub fn decode_token(token: &str) -> ClientResult<TokenClaims> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.insecure_disable_signature_validation();
    validation.validate_exp = false;
    validation.validate_aud = false;
    validation.required_spec_claims.clear();

    let data = decode::<TokenClaims>(token.trim(), &DecodingKey::from_secret(&[]), &validation)?;
    Ok(data.claims)
}

#[derive(Debug, Serialize)]
struct TokenRequest<'a> {
    id: &'a str,
    #[serde(rename = "apiKey")]
    api_key: &'a str,
    scopes: &'a [String],
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    success: bool,
    #[serde(default)]
    jwt: Option<String>,
}

#[derive(Debug, Clone)]
struct HeldToken {
    encoded: String,
    claims: TokenClaims,
}

/// Supplies a valid CE bearer token, refreshing it when needed.
///
/// Access goes through `&mut self`; share a manager between tasks by
/// wrapping it in a mutex so that only one refresh runs at a time.
pub struct CredentialManager {
    http: Client,
    issuer_url: String,
    id: String,
    key: String,
    scopes: Vec<String>,
    cache_path: PathBuf,
    token: Option<HeldToken>,
}

impl fmt::Debug for CredentialManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialManager")
            .field("issuer_url", &self.issuer_url)
            .field("id", &self.id)
            .field("key", &"<redacted>")
            .field("scopes", &self.scopes)
            .field("cache_path", &self.cache_path)
            .field("has_token", &self.token.is_some())
            .finish()
    }
}

impl CredentialManager {
    /// Create a manager for the configured CE, picking up a cached token if
    /// one exists.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created or the cache
    /// directory cannot be determined. A cached token that cannot be read or
    /// decoded is ignored.
    pub fn new(config: &Config) -> ClientResult<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(concat!("trompace-client/", env!("CARGO_PKG_VERSION")))
            .build()?;

        let cache_path = config.token_cache_path()?;
        let token = read_cached_token(&cache_path);

        Ok(Self {
            http,
            issuer_url: format!("{}/jwt", config.server.http_url().trim_end_matches('/')),
            id: config.auth.id.clone(),
            key: config.auth.key.clone(),
            scopes: config.auth.scopes.clone(),
            cache_path,
            token,
        })
    }

    /// Path of the token cache file.
    pub fn cache_path(&self) -> &Path {
        &self.cache_path
    }

    /// Claims of the held token, if any.
    pub fn claims(&self) -> Option<&TokenClaims> {
        self.token.as_ref().map(|held| &held.claims)
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.claims().and_then(TokenClaims::expires_at)
    }

    /// Returns `true` if a token is held and has not expired.
    pub fn has_valid_token(&self) -> bool {
        self.claims()
            .is_some_and(|claims| !claims.is_expired_at(Utc::now().timestamp()))
    }

    /// Get the token needed to authenticate to the CE.
    ///
    /// If no token is held, or the held one has expired, a new one is
    /// requested with the configured id, key and scopes and written to the
    /// cache file.
    ///
    /// # Errors
    /// [`ClientError::Authentication`] or [`ClientError::Request`] when the
    /// CE does not issue a token; nothing is cached in that case and the next
    /// call tries again. [`ClientError::Decode`] when the issued token cannot
    /// be decoded; it is neither held nor cached. [`ClientError::Io`] if the
    /// cache file cannot be written.
    pub async fn token(&mut self) -> ClientResult<String> {
        let now = Utc::now().timestamp();
        match &self.token {
            Some(held) if !held.claims.is_expired_at(now) => return Ok(held.encoded.clone()),
            Some(_) => log::debug!("Token is expiring, renewing"),
            None => log::debug!("No token, getting one"),
        }
        self.refresh().await
    }

    /// `Bearer <token>`, ready for an `Authorization` header.
    pub async fn authorization_header(&mut self) -> ClientResult<String> {
        Ok(format!("Bearer {}", self.token().await?))
    }

    /// Forget the held token and delete the cache file.
    pub async fn clear_cache(&mut self) -> ClientResult<()> {
        self.token = None;
        match tokio::fs::remove_file(&self.cache_path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    async fn refresh(&mut self) -> ClientResult<String> {
        let encoded = self.request_token().await?;

        let claims = decode_token(&encoded).map_err(|e| {
            log::warn!("Could not decode issued jwt token, not keeping it: {}", e);
            self.token = None;
            e
        })?;

        self.token = Some(HeldToken {
            encoded: encoded.clone(),
            claims,
        });
        self.save(&encoded).await?;

        Ok(encoded)
    }

    async fn request_token(&self) -> ClientResult<String> {
        log::debug!("Requesting jwt token from {}", self.issuer_url);

        let body = TokenRequest {
            id: &self.id,
            api_key: &self.key,
            scopes: &self.scopes,
        };
        let response = self.http.post(&self.issuer_url).json(&body).send().await?;
        let status = response.status();

        let reply: TokenResponse = response.json().await.map_err(|e| {
            ClientError::Authentication(format!(
                "invalid response from {} (HTTP {}): {}",
                self.issuer_url, status, e
            ))
        })?;

        match reply.jwt {
            Some(jwt) if reply.success && !jwt.is_empty() => Ok(jwt),
            _ => Err(ClientError::Authentication(format!(
                "{} did not issue a token (HTTP {})",
                self.issuer_url, status
            ))),
        }
    }

    async fn save(&self, token: &str) -> ClientResult<()> {
        if let Some(parent) = self.cache_path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&self.cache_path, token).await?;
        log::debug!("Saved jwt token to {}", self.cache_path.display());
        Ok(())
    }
}

fn read_cached_token(path: &Path) -> Option<HeldToken> {
    if !path.exists() {
        return None;
    }
    log::debug!("Found a cached token, reading from file {}", path.display());

    let encoded = match std::fs::read_to_string(path) {
        Ok(contents) => contents.trim().to_string(),
        Err(e) => {
            log::warn!("Could not read cached jwt token {}: {}", path.display(), e);
            return None;
        }
    };

    match decode_token(&encoded) {
        Ok(claims) => Some(HeldToken { encoded, claims }),
        Err(e) => {
            log::warn!("Could not decode cached jwt token, ignoring: {}", e);
            None
        }
    }
}
