//! Integration tests for the MRPeasy API client.
//!
//! These tests verify end-to-end functionality of the configuration system
//! and the requests it produces.

use std::time::Duration;

use mrpeasy::clients::{basic_auth_value, CONTENT_TYPE_JSON};
use mrpeasy::{
    ApiKey, ApiSecret, BaseUrl, ConfigError, HttpClient, HttpMethod, MrpEasyConfig,
    RequestOption,
};

#[test]
fn test_full_workflow_create_newtypes_build_config_access_fields() {
    let config = MrpEasyConfig::builder()
        .api_key(ApiKey::new("test-key").unwrap())
        .api_secret(ApiSecret::new("test-secret").unwrap())
        .base_url(BaseUrl::new("https://mrpeasy.example.com/rest/v1").unwrap())
        .timeout(Duration::from_secs(30))
        .user_agent_prefix("TestApp/1.0")
        .build()
        .unwrap();

    assert_eq!(config.api_key().as_ref(), "test-key");
    assert_eq!(config.api_secret().as_ref(), "test-secret");
    assert_eq!(
        config.base_url().as_ref(),
        "https://mrpeasy.example.com/rest/v1/"
    );
    assert_eq!(config.timeout(), Duration::from_secs(30));
    assert_eq!(config.user_agent_prefix(), Some("TestApp/1.0"));
}

#[test]
fn test_multi_tenant_scenario_multiple_independent_configs() {
    let config_a = MrpEasyConfig::builder()
        .api_key(ApiKey::new("tenant-a-key").unwrap())
        .api_secret(ApiSecret::new("tenant-a-secret").unwrap())
        .build()
        .unwrap();

    let config_b = MrpEasyConfig::builder()
        .api_key(ApiKey::new("tenant-b-key").unwrap())
        .api_secret(ApiSecret::new("tenant-b-secret").unwrap())
        .base_url(BaseUrl::new("https://eu.mrpeasy.example.com/rest/v1/").unwrap())
        .build()
        .unwrap();

    let request_a = HttpClient::new(&config_a)
        .unwrap()
        .request(HttpMethod::Get, "customers")
        .build()
        .unwrap();
    let request_b = HttpClient::new(&config_b)
        .unwrap()
        .request(HttpMethod::Get, "customers")
        .build()
        .unwrap();

    assert_eq!(
        request_a.url.as_str(),
        "https://api.mrpeasy.com/rest/v1/customers"
    );
    assert_eq!(
        request_b.url.as_str(),
        "https://eu.mrpeasy.example.com/rest/v1/customers"
    );
    assert_ne!(
        request_a.header("authorization"),
        request_b.header("authorization")
    );
}

#[test]
fn test_error_handling_invalid_inputs_produce_correct_errors() {
    assert!(matches!(ApiKey::new(""), Err(ConfigError::EmptyApiKey)));
    assert!(matches!(ApiSecret::new(""), Err(ConfigError::EmptyApiSecret)));
    assert!(matches!(
        BaseUrl::new("api.mrpeasy.com/rest/v1"),
        Err(ConfigError::InvalidBaseUrl { .. })
    ));

    let result = MrpEasyConfig::builder()
        .api_key(ApiKey::new("key").unwrap())
        .build();
    assert!(matches!(
        result,
        Err(ConfigError::MissingRequiredField {
            field: "api_secret"
        })
    ));
}

#[test]
fn test_secret_is_masked_in_debug_output() {
    let config = MrpEasyConfig::builder()
        .api_key(ApiKey::new("key").unwrap())
        .api_secret(ApiSecret::new("super-secret-value").unwrap())
        .build()
        .unwrap();

    let debug = format!("{config:?}");
    assert!(!debug.contains("super-secret-value"));
}

#[test]
fn test_built_request_carries_auth_and_options() {
    let api_key = ApiKey::new("test-key").unwrap();
    let api_secret = ApiSecret::new("test-secret").unwrap();
    let config = MrpEasyConfig::builder()
        .api_key(api_key.clone())
        .api_secret(api_secret.clone())
        .build()
        .unwrap();
    let client = HttpClient::new(&config).unwrap();

    let request = client
        .request(HttpMethod::Put, "customer-orders/7")
        .body(&serde_json::json!({"status": "30"}))
        .options([
            RequestOption::range_from(0),
            RequestOption::header("X-Trace", "abc"),
        ])
        .build()
        .unwrap();

    assert_eq!(
        request.header("authorization"),
        Some(basic_auth_value(&api_key, &api_secret).as_str())
    );
    assert_eq!(request.header("content-type"), Some(CONTENT_TYPE_JSON));
    assert_eq!(request.header("range"), Some("items=0"));
    assert_eq!(request.header("x-trace"), Some("abc"));
    assert_eq!(request.body.as_deref(), Some(br#"{"status":"30"}"#.as_slice()));
}
