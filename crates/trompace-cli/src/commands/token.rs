use anyhow::{Context, Result};
use trompace_client::{Config, CredentialManager};

/// Print a CE token, fetching a new one when the cached token is missing or expired.
pub async fn print_token(config: &Config, refresh: bool, header: bool) -> Result<()> {
    let mut manager = CredentialManager::new(config)?;

    if refresh {
        manager
            .clear_cache()
            .await
            .context("Failed to clear the token cache")?;
    }

    let value = if header {
        manager.authorization_header().await
    } else {
        manager.token().await
    }
    .with_context(|| format!("Failed to get a token from {}", config.server.http_url()))?;

    match manager.expires_at() {
        Some(expires_at) => log::info!("Token expires at {}", expires_at),
        None => log::info!("Token expiry unknown; it will be requested again next time"),
    }
    log::debug!("Token cache: {}", manager.cache_path().display());

    println!("{}", value);
    Ok(())
}
