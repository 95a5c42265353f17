use leavedesk_client::{ApiRequest, BaseScope, ClientConfig, HttpTransport};
use pretty_assertions::assert_eq;

#[test]
fn defaults_point_at_module_and_admin_prefixes() {
    let cfg = ClientConfig::default();
    assert_eq!(cfg.module_base_path, "/admin/v1/modules/hr/v1");
    assert_eq!(cfg.admin_base_path, "/admin/admin/v1");
    assert_eq!(cfg.timeout_secs, 30);
    assert!(cfg.token.is_none());
}

#[test]
fn base_url_joins_without_duplicate_slashes() {
    let cfg = ClientConfig::with_base_url("https://shell.example.com/");
    assert_eq!(
        cfg.base_url(BaseScope::Module),
        "https://shell.example.com/admin/v1/modules/hr/v1"
    );
    assert_eq!(cfg.base_url(BaseScope::Admin), "https://shell.example.com/admin/admin/v1");
}

#[test]
fn partial_toml_keeps_defaults() {
    let cfg = ClientConfig::from_toml_str(
        r#"
        api_base_url = "https://hr.example.com"
        timeout_secs = 5
        "#,
    )
    .unwrap();
    assert_eq!(cfg.api_base_url, "https://hr.example.com");
    assert_eq!(cfg.timeout_secs, 5);
    assert_eq!(cfg.admin_base_path, "/admin/admin/v1");
}

#[test]
fn invalid_values_are_rejected() {
    assert!(ClientConfig::from_toml_str(r#"api_base_url = "ftp://x""#).is_err());
    assert!(ClientConfig::from_toml_str(r#"module_base_path = "no-slash""#).is_err());
    assert!(ClientConfig::from_toml_str("timeout_secs = 0").is_err());
}

#[test]
fn token_and_base_url_read_from_toml() {
    let cfg = ClientConfig::from_toml_str(
        r#"
        api_base_url = "https://tenant.example.com"
        token = "abc"
        "#,
    )
    .unwrap();
    assert_eq!(cfg.api_base_url, "https://tenant.example.com");
    assert_eq!(cfg.token.as_deref(), Some("abc"));
}

#[test]
fn unparseable_toml_is_a_config_error() {
    let err = ClientConfig::from_toml_str("this is = = not toml").unwrap_err();
    assert!(matches!(err, leavedesk_client::ClientError::Config(_)));
}

#[test]
fn transport_resolves_urls_per_scope() {
    let transport =
        HttpTransport::from_config(ClientConfig::with_base_url("http://127.0.0.1:9")).unwrap();
    assert_eq!(
        transport.url_for(&ApiRequest::get("/stats")),
        "http://127.0.0.1:9/admin/v1/modules/hr/v1/stats"
    );
    assert_eq!(
        transport.url_for(&ApiRequest::get("/users").admin()),
        "http://127.0.0.1:9/admin/admin/v1/users"
    );
}

#[test]
fn request_helpers_render_query() {
    let req = ApiRequest::get("/x")
        .with_query(&serde_json::json!({"q": "a b", "tag": ["x", "y"]}))
        .unwrap();
    assert_eq!(req.query_string(), "q=a%20b&tag=x&tag=y");
    assert_eq!(req.query_values("tag"), vec!["x", "y"]);
    assert_eq!(ApiRequest::segment("a/b"), "a%2Fb");
}
