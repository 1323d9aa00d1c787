use axum::http::{header, Method, StatusCode};
use axum_test::TestServer;
use chrono::{TimeZone, Utc};
use pay_api::{create_router, AppConfig, AppState};
use pay_core::{MemorySessionStore, PaymentResponse, PaymentStatus, Session};
use serde_json::{json, Value};
use std::sync::Arc;

const PAYMENT_PATH: &str = "/process-payment";

fn server_with(store: Arc<MemorySessionStore>) -> TestServer {
    let state = AppState::new(AppConfig::default(), store);
    TestServer::new(create_router(state)).unwrap()
}

fn seeded_store() -> Arc<MemorySessionStore> {
    let store = Arc::new(MemorySessionStore::new());
    let session = Session {
        id: "sess_live".to_string(),
        created_at: Utc.with_ymd_and_hms(2025, 8, 16, 2, 0, 0).unwrap(),
        cart_data: Default::default(),
    }
    .with_cart_item("sku-1", json!({"qty": 1, "price": 19.99}));
    store.insert(&session).unwrap();
    store
}

fn payment_body(session_id: &str) -> Value {
    json!({
        "session_id": session_id,
        "merchant_id": "merchant_42",
        "transaction_id": "tx_0001",
        "amount": 19.99,
        "currency": "USD",
        "card_token": "tok_4242"
    })
}

#[tokio::test]
async fn approves_payment_for_existing_session() {
    let server = server_with(seeded_store());

    let response = server.post(PAYMENT_PATH).json(&payment_body("sess_live")).await;

    response.assert_status(StatusCode::OK);
    assert_eq!(
        response.header(header::CONTENT_TYPE),
        "application/json"
    );
    let body: PaymentResponse = response.json();
    assert_eq!(body.transaction_id, "tx_0001");
    assert_eq!(body.status, PaymentStatus::Success);
    assert_eq!(body.message, "Transaction approved");
}

#[tokio::test]
async fn other_methods_are_rejected_regardless_of_body() {
    let server = server_with(seeded_store());

    for method in [Method::GET, Method::PUT, Method::DELETE, Method::PATCH] {
        let response = server
            .method(method.clone(), PAYMENT_PATH)
            .json(&payment_body("sess_live"))
            .await;
        response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(response.text(), "Invalid request method", "{method}");
    }
}

#[tokio::test]
async fn malformed_bodies_are_bad_requests() {
    let server = server_with(seeded_store());

    let mut missing_field = payment_body("sess_live");
    missing_field.as_object_mut().unwrap().remove("currency");

    let mut wrong_type = payment_body("sess_live");
    wrong_type["amount"] = json!(true);

    let mut string_amount = payment_body("sess_live");
    string_amount["amount"] = json!("19.99");

    for body in [
        missing_field,
        wrong_type,
        string_amount,
        json!([]),
        json!("sess_live"),
    ] {
        server
            .post(PAYMENT_PATH)
            .json(&body)
            .await
            .assert_status(StatusCode::BAD_REQUEST);
    }

    let response = server.post(PAYMENT_PATH).text("{not json").await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.text(), "Invalid request body");
}

#[tokio::test]
async fn accepts_amounts_across_the_number_range() {
    let server = server_with(seeded_store());

    for amount in [json!(0), json!(250), json!(1e30), json!(-5.5)] {
        let mut body = payment_body("sess_live");
        body["amount"] = amount;
        server
            .post(PAYMENT_PATH)
            .json(&body)
            .await
            .assert_status(StatusCode::OK);
    }
}

#[tokio::test]
async fn session_record_with_missing_fields_is_accepted() {
    let store = seeded_store();
    store.insert_raw("sess_sparse", r#"{"id":"sess_sparse","cart_data":{}}"#);
    let server = server_with(store);

    let response = server.post(PAYMENT_PATH).json(&payment_body("sess_sparse")).await;
    response.assert_status(StatusCode::OK);
    assert_eq!(response.json::<PaymentResponse>().status, PaymentStatus::Success);
}

#[tokio::test]
async fn body_is_decoded_without_json_content_type() {
    let server = server_with(seeded_store());

    server
        .post(PAYMENT_PATH)
        .text(payment_body("sess_live").to_string())
        .await
        .assert_status(StatusCode::OK);
}

#[tokio::test]
async fn unknown_session_is_unauthorized() {
    let server = server_with(seeded_store());

    let response = server.post(PAYMENT_PATH).json(&payment_body("sess_gone")).await;
    response.assert_status(StatusCode::UNAUTHORIZED);
    assert_eq!(response.text(), "Invalid or expired session ID");

    server
        .post(PAYMENT_PATH)
        .json(&payment_body(""))
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn store_failure_is_internal_error() {
    let store = seeded_store();
    store.fail_with("dial tcp 127.0.0.1:6379: connection refused");
    let server = server_with(store);

    let response = server.post(PAYMENT_PATH).json(&payment_body("sess_live")).await;
    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.text(), "Error retrieving session");
}

#[tokio::test]
async fn malformed_session_record_is_internal_error() {
    let store = seeded_store();
    store.insert_raw("sess_corrupt", "this is not json");
    let server = server_with(store);

    server
        .post(PAYMENT_PATH)
        .json(&payment_body("sess_corrupt"))
        .await
        .assert_status(StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn repeated_request_yields_identical_responses() {
    let store = seeded_store();
    let server = server_with(store.clone());
    let body = payment_body("sess_live");

    let first = server.post(PAYMENT_PATH).json(&body).await;
    let second = server.post(PAYMENT_PATH).json(&body).await;

    first.assert_status(StatusCode::OK);
    second.assert_status(StatusCode::OK);
    assert_eq!(first.json::<PaymentResponse>(), second.json::<PaymentResponse>());
    assert_eq!(store.len(), 1);
}

#[tokio::test]
async fn health_reports_store_status() {
    let store = seeded_store();
    let server = server_with(store.clone());

    let response = server.get("/health").await;
    response.assert_status(StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["environment"], "development");
    assert_eq!(body["store"]["backend"], "memory");

    store.fail_with("timeout");
    let response = server.get("/health").await;
    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(response.json::<Value>()["store"]["status"], "down");
}
