//! Integration tests for the reqwest-backed client using a local mock VIES server.

#![cfg(feature = "rest")]

use std::net::SocketAddr;
use std::time::Duration;

use axum::{
    Router,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::post,
};
use serde_json::{Value, json};
use vies_rest::vies::{ViesClient, ViesClientBuilder};
use vies_rest::{ValidationResult, VatNumber, ViesError};

// Mock endpoint mirroring the VIES behaviour for a few well-known inputs.
async fn handle_check(Json(request): Json<Value>) -> Response {
    let country = request["countryCode"].as_str().unwrap_or_default();
    let number = request["vatNumber"].as_str().unwrap_or_default();

    match (country, number) {
        ("DE", "12312312") => Json(json!({
            "countryCode": "DE",
            "vatNumber": "12312312",
            "requestDate": "2023-11-11 23:23:23",
            "valid": true,
            "name": "foo",
            "address": "bar"
        }))
        .into_response(),
        ("DE", "000") => Json(json!({
            "errorWrappers": [{ "error": "INVALID_INPUT", "message": "bad number" }]
        }))
        .into_response(),
        ("FR", _) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "errorWrappers": [{ "error": "ms_unavailable", "message": "FR down" }]
            })),
        )
            .into_response(),
        ("IT", _) => (
            StatusCode::TOO_MANY_REQUESTS,
            Json(json!({
                "errorWrappers": [{ "error": "MS_MAX_CONCURRENT_REQ" }]
            })),
        )
            .into_response(),
        ("PL", _) => (StatusCode::INTERNAL_SERVER_ERROR, "upstream exploded").into_response(),
        ("NL", _) => "\"200\"".into_response(),
        _ => (StatusCode::BAD_REQUEST, Json(json!({ "errorWrappers": [] }))).into_response(),
    }
}

async fn handle_slow() -> impl IntoResponse {
    tokio::time::sleep(Duration::from_secs(5)).await;
    Json(json!({}))
}

async fn start_mock_vies() -> SocketAddr {
    // Bind to port 0 to let the OS assign an available port
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let router = Router::new()
        .route("/check-vat-number", post(handle_check))
        .route("/slow", post(handle_slow));

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    addr
}

async fn mock_client() -> ViesClient<vies_rest::vies::ReqwestTransport> {
    let addr = start_mock_vies().await;
    ViesClientBuilder::new()
        .url(format!("http://{addr}/check-vat-number"))
        .build()
        .unwrap()
}

#[tokio::test]
async fn success_over_http() {
    let client = mock_client().await;
    let result = client.validate_vat(&VatNumber::new("DE", "12312312")).await.unwrap();
    assert_eq!(
        result,
        ValidationResult {
            vat_number: VatNumber::new("DE", "12312312"),
            request_date: "2023-11-11 23:23:23".into(),
            is_valid: true,
            name: Some("foo".into()),
            address: Some("bar".into()),
        }
    );
}

#[tokio::test]
async fn fault_in_200_body() {
    let client = mock_client().await;
    let err = client.validate("DE", "000").await.unwrap_err();
    match err {
        ViesError::InvalidInput { message } => assert_eq!(message, "bad number"),
        other => panic!("unexpected {other:?}"),
    }
}

#[tokio::test]
async fn fault_in_503_body() {
    let client = mock_client().await;
    let err = client.validate("FR", "12345678901").await.unwrap_err();
    match err {
        ViesError::MsUnavailable { message } => assert_eq!(message, "FR down"),
        other => panic!("unexpected {other:?}"),
    }
}

#[tokio::test]
async fn fault_in_429_body_without_message() {
    let client = mock_client().await;
    let err = client.validate("IT", "12345678901").await.unwrap_err();
    match err {
        ViesError::MsMaxConcurrentReq { message } => assert!(message.is_empty()),
        other => panic!("unexpected {other:?}"),
    }
}

#[tokio::test]
async fn plain_text_500_is_unknown_fault() {
    let client = mock_client().await;
    let err = client.validate("PL", "1234567890").await.unwrap_err();
    match err {
        ViesError::UnknownService { code, message } => {
            assert!(code.is_empty());
            assert!(message.is_empty());
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[tokio::test]
async fn empty_wrappers_in_400_body() {
    let client = mock_client().await;
    let err = client.validate("XX", "1").await.unwrap_err();
    assert!(matches!(err, ViesError::UnknownService { ref code, .. } if code.is_empty()));
}

#[tokio::test]
async fn scalar_body_reports_missing_attribute() {
    let client = mock_client().await;
    let err = client.validate("NL", "123456789B01").await.unwrap_err();
    assert!(matches!(err, ViesError::AttributeNotFound { field: "countryCode" }));
}

#[tokio::test]
async fn connection_refused_is_service_request_error() {
    // Bind and drop to get a port nothing listens on
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = ViesClientBuilder::new()
        .url(format!("http://{addr}/check-vat-number"))
        .build()
        .unwrap();
    let err = client.validate("DE", "12312312").await.unwrap_err();
    assert!(matches!(err, ViesError::ServiceRequest(_)), "{err:?}");
}

#[tokio::test]
async fn timeout_is_service_request_error() {
    let addr = start_mock_vies().await;
    let client = ViesClientBuilder::new()
        .url(format!("http://{addr}/slow"))
        .timeout(Duration::from_millis(200))
        .build()
        .unwrap();
    let err = client.validate("DE", "12312312").await.unwrap_err();
    assert!(matches!(err, ViesError::ServiceRequest(_)), "{err:?}");
}
