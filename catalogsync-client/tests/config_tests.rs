use catalogsync_client::{
    CatalogClientFactory, CatalogError, ClientConfig, ENV_AUTH_TOKEN, ENV_ENDPOINT,
    ENV_TIMEOUT_SECS, HttpClientFactory,
};
use serial_test::serial;

fn set(key: &str, value: &str) {
    // SAFETY: every test touching the environment runs under #[serial].
    unsafe { std::env::set_var(key, value) }
}

fn clear() {
    for key in [ENV_ENDPOINT, ENV_TIMEOUT_SECS, ENV_AUTH_TOKEN] {
        // SAFETY: see `set`.
        unsafe { std::env::remove_var(key) }
    }
}

#[test]
#[serial]
fn from_env_reads_all_fields() {
    clear();
    set(ENV_ENDPOINT, "https://catalog.example.com");
    set(ENV_TIMEOUT_SECS, "12");
    set(ENV_AUTH_TOKEN, "tok");

    let config = ClientConfig::from_env().unwrap();
    assert_eq!(config.endpoint, "https://catalog.example.com");
    assert_eq!(config.timeout_secs, 12);
    assert_eq!(config.auth_token.as_deref(), Some("tok"));
    clear();
}

#[test]
#[serial]
fn from_env_defaults_optional_fields() {
    clear();
    set(ENV_ENDPOINT, "http://localhost:9000");

    let config = ClientConfig::from_env().unwrap();
    assert_eq!(config.timeout_secs, 30);
    assert!(config.auth_token.is_none());
    assert!(config.user_agent.starts_with("catalogsync/"));
    clear();
}

#[test]
#[serial]
fn from_env_trims_endpoint() {
    clear();
    set(ENV_ENDPOINT, " https://catalog.example.com\n");

    let config = ClientConfig::from_env().unwrap();
    assert_eq!(config.endpoint, "https://catalog.example.com");
    clear();
}

#[test]
#[serial]
fn from_env_requires_endpoint() {
    clear();
    assert!(matches!(ClientConfig::from_env(), Err(CatalogError::Config(_))));

    set(ENV_ENDPOINT, "   ");
    assert!(matches!(ClientConfig::from_env(), Err(CatalogError::Config(_))));
    clear();
}

#[test]
#[serial]
fn from_env_rejects_bad_timeout() {
    clear();
    set(ENV_ENDPOINT, "https://catalog.example.com");
    set(ENV_TIMEOUT_SECS, "soon");
    assert!(matches!(ClientConfig::from_env(), Err(CatalogError::Config(_))));

    set(ENV_TIMEOUT_SECS, "0");
    assert!(matches!(ClientConfig::from_env(), Err(CatalogError::Config(_))));
    clear();
}

#[test]
#[serial]
fn factory_from_env_creates_client() {
    clear();
    set(ENV_ENDPOINT, "https://catalog.example.com");

    let factory = HttpClientFactory::from_env().unwrap();
    assert!(factory.create().is_ok());
    clear();
}

#[test]
fn factory_rejects_invalid_config() {
    let factory = HttpClientFactory::new(ClientConfig::new("not a url"));
    assert!(matches!(factory.create(), Err(CatalogError::Config(_))));
}

#[test]
fn config_deserializes_with_defaults() {
    let config: ClientConfig =
        serde_json::from_str(r#"{"endpoint": "https://catalog.example.com"}"#).unwrap();
    assert_eq!(config.timeout_secs, 30);
    assert!(config.auth_token.is_none());
    assert!(config.validate().is_ok());
}

#[test]
fn new_trims_endpoint() {
    let config = ClientConfig::new("  https://catalog.example.com ");
    assert_eq!(config.endpoint, "https://catalog.example.com");
    assert!(config.validate().is_ok());
}

#[test]
fn validate_rejects_padded_endpoint() {
    let config: ClientConfig =
        serde_json::from_str(r#"{"endpoint": " https://catalog.example.com"}"#).unwrap();
    assert!(matches!(config.validate(), Err(CatalogError::Config(_))));
}
