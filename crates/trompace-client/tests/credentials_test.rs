//! Credential manager against a mock CE `/jwt` endpoint.

use std::path::Path;

use jsonwebtoken::{encode, EncodingKey, Header};
use tempfile::TempDir;
use trompace_client::{ClientError, Config, CredentialManager};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn jwt_expiring_at(exp: i64) -> String {
    encode(
        &Header::default(),
        &serde_json::json!({"id": "test-client", "scopes": ["default"], "exp": exp}),
        &EncodingKey::from_secret(b"ce-signing-secret"),
    )
    .unwrap()
}

fn valid_jwt() -> String {
    jwt_expiring_at(chrono::Utc::now().timestamp() + 3600)
}

fn expired_jwt() -> String {
    jwt_expiring_at(chrono::Utc::now().timestamp() - 60)
}

fn config_for(server: &MockServer, cache_dir: &Path) -> Config {
    let host = server.uri().trim_start_matches("http://").to_string();
    Config::from_ini_str(&format!(
        "[server]\nhost = {}\nsecure = false\n\n[auth]\nid = test-client\nkey = test-key\nscopes = default\ntoken_cache_dir = {}\n",
        host,
        cache_dir.display()
    ))
    .unwrap()
}

fn issued(token: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(serde_json::json!({"success": true, "jwt": token}))
}

#[tokio::test]
async fn test_first_access_requests_and_caches_token() {
    let server = MockServer::start().await;
    let token = valid_jwt();
    Mock::given(method("POST"))
        .and(path("/jwt"))
        .and(body_json(serde_json::json!({
            "id": "test-client",
            "apiKey": "test-key",
            "scopes": ["default"],
        })))
        .respond_with(issued(&token))
        .expect(1)
        .mount(&server)
        .await;

    let cache = TempDir::new().unwrap();
    let mut manager = CredentialManager::new(&config_for(&server, cache.path())).unwrap();
    assert!(manager.claims().is_none());

    assert_eq!(manager.token().await.unwrap(), token);
    assert_eq!(std::fs::read_to_string(manager.cache_path()).unwrap(), token);
    assert!(manager.has_valid_token());

    // held token is reused without another request
    assert_eq!(manager.token().await.unwrap(), token);
    assert_eq!(
        manager.authorization_header().await.unwrap(),
        format!("Bearer {}", token)
    );
}

#[tokio::test]
async fn test_cache_file_is_named_after_host() {
    let server = MockServer::start().await;
    let cache = TempDir::new().unwrap();
    let config = config_for(&server, cache.path());
    let manager = CredentialManager::new(&config).unwrap();

    let file_name = manager.cache_path().file_name().unwrap().to_string_lossy().to_string();
    assert_eq!(
        file_name,
        format!(".trompace-client-jwt-token-cache-{}", config.server.host)
    );
}

#[tokio::test]
async fn test_cached_token_is_reused_by_new_manager() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/jwt"))
        .respond_with(issued(&valid_jwt()))
        .expect(0)
        .mount(&server)
        .await;

    let cache = TempDir::new().unwrap();
    let config = config_for(&server, cache.path());
    let token = valid_jwt();
    std::fs::write(config.token_cache_path().unwrap(), &token).unwrap();

    let mut manager = CredentialManager::new(&config).unwrap();
    assert!(manager.expires_at().is_some());
    assert_eq!(manager.token().await.unwrap(), token);
}

#[tokio::test]
async fn test_expired_token_is_refreshed() {
    let server = MockServer::start().await;
    let fresh = valid_jwt();
    Mock::given(method("POST"))
        .and(path("/jwt"))
        .respond_with(issued(&fresh))
        .expect(1)
        .mount(&server)
        .await;

    let cache = TempDir::new().unwrap();
    let config = config_for(&server, cache.path());
    std::fs::write(config.token_cache_path().unwrap(), expired_jwt()).unwrap();

    let mut manager = CredentialManager::new(&config).unwrap();
    assert!(!manager.has_valid_token());

    assert_eq!(manager.token().await.unwrap(), fresh);
    assert_eq!(std::fs::read_to_string(manager.cache_path()).unwrap(), fresh);
}

#[tokio::test]
async fn test_undecodable_cache_is_discarded() {
    let server = MockServer::start().await;
    let fresh = valid_jwt();
    Mock::given(method("POST"))
        .and(path("/jwt"))
        .respond_with(issued(&fresh))
        .expect(1)
        .mount(&server)
        .await;

    let cache = TempDir::new().unwrap();
    let config = config_for(&server, cache.path());
    std::fs::write(config.token_cache_path().unwrap(), "this is not a jwt").unwrap();

    let mut manager = CredentialManager::new(&config).unwrap();
    assert!(manager.claims().is_none());
    assert_eq!(manager.token().await.unwrap(), fresh);
}

#[tokio::test]
async fn test_refused_request_is_authentication_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/jwt"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({"success": false})))
        .expect(2)
        .mount(&server)
        .await;

    let cache = TempDir::new().unwrap();
    let mut manager = CredentialManager::new(&config_for(&server, cache.path())).unwrap();

    let err = manager.token().await.unwrap_err();
    assert!(err.is_authentication(), "{}", err);
    assert!(!manager.cache_path().exists());

    // nothing held, so the next call asks again
    assert!(manager.token().await.is_err());
}

#[tokio::test]
async fn test_unreachable_server_is_authentication_error() {
    let server = MockServer::start().await;
    let cache = TempDir::new().unwrap();
    let config = config_for(&server, cache.path());
    drop(server);

    let mut manager = CredentialManager::new(&config).unwrap();
    let err = manager.token().await.unwrap_err();
    assert!(err.is_authentication(), "{}", err);
    assert!(!manager.cache_path().exists());
}

#[tokio::test]
async fn test_undecodable_issued_token_is_not_kept() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/jwt"))
        .respond_with(issued("opaque-token"))
        .expect(2)
        .mount(&server)
        .await;

    let cache = TempDir::new().unwrap();
    let mut manager = CredentialManager::new(&config_for(&server, cache.path())).unwrap();

    let err = manager.token().await.unwrap_err();
    assert!(matches!(err, ClientError::Decode(_)), "{}", err);
    assert!(manager.claims().is_none());
    assert!(!manager.cache_path().exists());

    // treated as absent, so the next call asks again
    assert!(manager.token().await.is_err());
}

#[tokio::test]
async fn test_fractional_exp_token_is_held_and_cached() {
    let server = MockServer::start().await;
    #[allow(clippy::cast_precision_loss)]
    let exp = (chrono::Utc::now().timestamp() + 3600) as f64 + 0.5;
    let token = encode(
        &Header::default(),
        &serde_json::json!({"id": "test-client", "exp": exp}),
        &EncodingKey::from_secret(b"ce-signing-secret"),
    )
    .unwrap();
    Mock::given(method("POST"))
        .and(path("/jwt"))
        .respond_with(issued(&token))
        .expect(1)
        .mount(&server)
        .await;

    let cache = TempDir::new().unwrap();
    let mut manager = CredentialManager::new(&config_for(&server, cache.path())).unwrap();

    assert_eq!(manager.token().await.unwrap(), token);
    assert_eq!(manager.token().await.unwrap(), token);
    assert!(manager.has_valid_token());
    assert_eq!(std::fs::read_to_string(manager.cache_path()).unwrap(), token);
}

#[tokio::test]
async fn test_clear_cache_forgets_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/jwt"))
        .respond_with(issued(&valid_jwt()))
        .expect(2)
        .mount(&server)
        .await;

    let cache = TempDir::new().unwrap();
    let mut manager = CredentialManager::new(&config_for(&server, cache.path())).unwrap();

    manager.token().await.unwrap();
    manager.clear_cache().await.unwrap();
    assert!(manager.claims().is_none());
    assert!(!manager.cache_path().exists());

    manager.token().await.unwrap();
    // clearing twice is fine
    manager.clear_cache().await.unwrap();
    manager.clear_cache().await.unwrap();
}
