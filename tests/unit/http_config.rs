//! Tests for HttpClientConfig.

use std::net::{IpAddr, Ipv4Addr};
use std::time::Duration;

use petfriends::{AuthKey, Client, Error, HttpClientConfig, PetFilter};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[test]
fn test_default_config_sets_nothing() {
    let config = HttpClientConfig::default();
    assert_eq!(config.timeout, None);
    assert_eq!(config.local_address, None);
    assert!(Client::with_config("http://localhost", config).is_ok());
}

#[test]
fn test_combined_config_options() {
    let config = HttpClientConfig::new()
        .local_address(IpAddr::V4(Ipv4Addr::LOCALHOST))
        .timeout(Duration::from_secs(30));

    assert_eq!(config.local_address, Some(IpAddr::V4(Ipv4Addr::LOCALHOST)));
    assert_eq!(config.timeout, Some(Duration::from_secs(30)));
    assert!(Client::with_config("http://localhost", config).is_ok());
}

#[tokio::test]
async fn test_local_address_binding_to_localhost_works() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/pets"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"pets": []})))
        .expect(1)
        .mount(&server)
        .await;

    let config = HttpClientConfig::new().local_address(IpAddr::V4(Ipv4Addr::LOCALHOST));
    let client = Client::with_config(&server.uri(), config).expect("Failed to create client");

    let response = client
        .get_list_of_pets(&AuthKey::new("k"), PetFilter::All)
        .await
        .expect("Request failed");
    assert_eq!(response.status, 200);
}

#[tokio::test]
async fn test_timeout_is_enforced() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/key"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
        .mount(&server)
        .await;

    let config = HttpClientConfig::new().timeout(Duration::from_millis(200));
    let client = Client::with_config(&server.uri(), config).expect("Failed to create client");

    match client.get_api_key("a@b.c", "pw").await {
        Err(Error::Request(err)) => assert!(err.is_timeout()),
        other => panic!("expected timeout, got {:?}", other),
    }
}
