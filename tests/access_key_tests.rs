//! Integration tests for access-key authentication.
//!
//! Minted tokens are checked with an independent JWT implementation so the
//! signature, header and claims are verified end to end.

use doordash_drive::auth::{AccessKey, Credentials, DriveClaims};
use doordash_drive::{DriveConfig, HttpClient, HttpMethod};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, decode_header, Algorithm, DecodingKey, Validation};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SIGNING_SECRET: &str = "ZHJpdmUtdGVzdC1zaWduaW5nLXNlY3JldC0wMTIzNDU2Nzg5";
const RAW_SECRET: &[u8] = b"drive-test-signing-secret-0123456789";

fn access_key() -> AccessKey {
    AccessKey::new("developer-1", "key-1", SIGNING_SECRET).unwrap()
}

fn validation() -> Validation {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.set_audience(&["doordash"]);
    validation.set_issuer(&["developer-1"]);
    validation
}

fn bearer_from(client: &HttpClient) -> String {
    let request = client
        .new_request(HttpMethod::Get, "drive/v2/deliveries/D-12345", None::<&()>)
        .unwrap();
    request
        .headers
        .get("Authorization")
        .unwrap()
        .trim_start_matches("Bearer ")
        .to_string()
}

#[test]
fn test_minted_token_verifies_with_raw_secret() {
    let token = access_key().mint_token().unwrap();

    let decoded = decode::<DriveClaims>(
        &token,
        &DecodingKey::from_secret(RAW_SECRET),
        &validation(),
    )
    .unwrap();

    assert_eq!(decoded.claims.aud, "doordash");
    assert_eq!(decoded.claims.iss, "developer-1");
    assert_eq!(decoded.claims.kid, "key-1");
    assert_eq!(decoded.claims.exp - decoded.claims.iat, 300);
}

#[test]
fn test_minted_token_header() {
    let token = access_key().mint_token().unwrap();
    let header = decode_header(&token).unwrap();
    assert_eq!(header.alg, Algorithm::HS256);
    assert_eq!(header.typ.as_deref(), Some("JWT"));
}

#[test]
fn test_wrong_secret_fails_verification() {
    let token = access_key().mint_token().unwrap();
    let result = decode::<DriveClaims>(
        &token,
        &DecodingKey::from_secret(b"some-other-secret"),
        &validation(),
    );
    assert!(matches!(
        result.unwrap_err().kind(),
        ErrorKind::InvalidSignature
    ));
}

#[test]
fn test_token_minted_long_ago_is_expired() {
    let token = access_key().mint_token_at(1_600_000_000).unwrap();
    let result = decode::<DriveClaims>(
        &token,
        &DecodingKey::from_secret(RAW_SECRET),
        &validation(),
    );
    assert!(matches!(
        result.unwrap_err().kind(),
        ErrorKind::ExpiredSignature
    ));
}

#[test]
fn test_client_attaches_verifiable_jwt() {
    let config = DriveConfig::builder()
        .credentials(Credentials::AccessKey(access_key()))
        .build()
        .unwrap();
    let client = HttpClient::new(&config).unwrap();

    let token = bearer_from(&client);
    let decoded = decode::<DriveClaims>(
        &token,
        &DecodingKey::from_secret(RAW_SECRET),
        &validation(),
    )
    .unwrap();
    assert_eq!(decoded.claims.kid, "key-1");
}

#[test]
fn test_access_key_from_portal_json() {
    let key = AccessKey::from_json(&format!(
        r#"{{"developer_id":"developer-1","key_id":"key-1","signing_secret":"{SIGNING_SECRET}"}}"#
    ))
    .unwrap();
    assert_eq!(key, access_key());
}

#[tokio::test]
async fn test_access_key_client_round_trip() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/drive/v2/deliveries/D-12345"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"{"external_delivery_id":"D-12345","delivery_status":"created"}"#),
        )
        .expect(1)
        .mount(&server)
        .await;

    let config = DriveConfig::builder()
        .credentials(access_key())
        .base_url(doordash_drive::BaseUrl::new(format!("{}/", server.uri())).unwrap())
        .build()
        .unwrap();
    let client = HttpClient::new(&config).unwrap();

    let delivery = client.get_delivery_status("D-12345").await.unwrap();
    assert_eq!(delivery.delivery_status.as_deref(), Some("created"));
}
