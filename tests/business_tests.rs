//! Integration tests for the business operations.

use doordash_drive::{
    ApiToken, BaseUrl, BusinessInfo, BusinessInfoList, BusinessUpdate, DriveConfig, HttpClient,
    NewBusiness,
};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const BUSINESS_RESPONSE: &str = r#"{
    "name": "Neighborhood Deli",
    "description": "A neighborhood deli serving many tasty sandwiches and soups.",
    "external_business_id": "a0720d55-7cbe-41ce-8185-58285b7985cd",
    "activation_status": "active",
    "created_at": "2022-04-25T17:21:43Z",
    "last_updated_at": "2022-04-25T17:21:43Z",
    "is_test": false,
    "external_metadata": {
        "number_of_stores": 10,
        "client_email": "merchant@doordash.com",
        "client_phone_number": "+12065551212"
    }
}"#;

const BUSINESS_LIST_RESPONSE: &str = r#"{
    "result": [
        {
            "name": "Neighborhood Deli",
            "description": "A neighborhood deli serving many tasty sandwiches and soups.",
            "external_business_id": "a0720d55-7cbe-41ce-8185-58285b7985cd",
            "activation_status": "active",
            "created_at": "2022-04-25T17:21:43Z",
            "last_updated_at": "2022-04-25T17:21:43Z",
            "is_test": false,
            "external_metadata": {
                "number_of_stores": 10,
                "client_email": "merchant@doordash.com",
                "client_phone_number": "+12065551212"
            }
        }
    ],
    "continuation_token": "string",
    "result_count": 0
}"#;

fn client_for(server: &MockServer) -> HttpClient {
    let config = DriveConfig::builder()
        .credentials(ApiToken::new("token").unwrap())
        .base_url(BaseUrl::new(format!("{}/", server.uri())).unwrap())
        .build()
        .unwrap();
    HttpClient::new(&config).unwrap()
}

fn expected_business() -> BusinessInfo {
    serde_json::from_str(BUSINESS_RESPONSE).unwrap()
}

#[tokio::test]
async fn test_create_business() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/developer/v1/businesses"))
        .and(header("Authorization", "Bearer token"))
        .and(body_json(serde_json::json!({
            "external_business_id": "B-12345",
            "name": "Neighborhood Deli",
            "description": "A neighborhood deli serving many tasty sandwiches and soups.",
            "activation_status": "active"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_string(BUSINESS_RESPONSE))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let payload = NewBusiness {
        external_business_id: Some("B-12345".to_string()),
        name: Some("Neighborhood Deli".to_string()),
        description: Some(
            "A neighborhood deli serving many tasty sandwiches and soups.".to_string(),
        ),
        activation_status: Some("active".to_string()),
    };

    let got = client.create_business(&payload).await.unwrap();
    assert_eq!(got, expected_business());
    assert_eq!(
        got.external_business_id.as_deref(),
        Some("a0720d55-7cbe-41ce-8185-58285b7985cd")
    );
}

#[tokio::test]
async fn test_list_businesses_sends_query_params() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/developer/v1/businesses"))
        .and(query_param("activation_status", "active"))
        .and(query_param("pagination_token", "token"))
        .respond_with(ResponseTemplate::new(200).set_body_string(BUSINESS_LIST_RESPONSE))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let got = client
        .list_businesses(Some("active"), Some("token"))
        .await
        .unwrap();

    let want: BusinessInfoList = serde_json::from_str(BUSINESS_LIST_RESPONSE).unwrap();
    assert_eq!(got, want);
    assert_eq!(got.result.len(), 1);
    assert_eq!(got.continuation_token.as_deref(), Some("string"));
    assert_eq!(got.result_count, Some(0));
}

#[tokio::test]
async fn test_list_businesses_without_params_has_no_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/developer/v1/businesses"))
        .respond_with(ResponseTemplate::new(200).set_body_string(BUSINESS_LIST_RESPONSE))
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.list_businesses(None, None).await.unwrap();

    let received = server.received_requests().await.unwrap();
    assert_eq!(received[0].url.query(), None);
}

#[tokio::test]
async fn test_get_business() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/developer/v1/businesses/B-12345"))
        .respond_with(ResponseTemplate::new(200).set_body_string(BUSINESS_RESPONSE))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let got = client.get_business("B-12345").await.unwrap();
    assert_eq!(got, expected_business());
}

#[tokio::test]
async fn test_update_business() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/developer/v1/businesses/B-12345"))
        .and(body_json(serde_json::json!({
            "name": "Neighborhood Deli",
            "description": "A neighborhood deli serving many tasty sandwiches and soups.",
            "activation_status": "active"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_string(BUSINESS_RESPONSE))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let payload = BusinessUpdate {
        name: Some("Neighborhood Deli".to_string()),
        description: Some(
            "A neighborhood deli serving many tasty sandwiches and soups.".to_string(),
        ),
        activation_status: Some("active".to_string()),
    };

    let got = client.update_business("B-12345", &payload).await.unwrap();
    assert_eq!(got, expected_business());
}
