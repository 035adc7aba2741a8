//! Integration tests for `HttpTransport` against a local axum server.

use axum::{
    extract::Path,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Json, Router,
};
use marketplace_client::{ClientConfig, HttpTransport, Transport, TransportError, WriteMethod};
use serde_json::{json, Value};
use std::time::Duration;
use tokio::net::TcpListener;

/// Echo the payload back as the confirmation body
async fn echo(Json(payload): Json<Value>) -> Json<Value> {
    Json(payload)
}

/// Accept without a body
async fn accept_empty() -> StatusCode {
    StatusCode::OK
}

async fn install(Path((listing, version)): Path<(String, String)>) -> Json<Value> {
    Json(json!({ "listing_id": listing, "version": version }))
}

async fn listings() -> Json<Value> {
    Json(json!([{ "id": "a" }, { "id": "b" }]))
}

async fn user_agent(headers: HeaderMap) -> Json<Value> {
    let agent = headers
        .get("user-agent")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    Json(json!([{ "id": agent }]))
}

async fn not_an_array() -> Json<Value> {
    Json(json!({ "id": "x" }))
}

async fn broken() -> Response {
    (StatusCode::INTERNAL_SERVER_ERROR, "boom").into_response()
}

async fn slow() -> Json<Value> {
    tokio::time::sleep(Duration::from_millis(500)).await;
    Json(json!([]))
}

/// Start a test HTTP server on an ephemeral port
async fn start_test_server() -> anyhow::Result<(String, tokio::task::JoinHandle<()>)> {
    let app = Router::new()
        .route("/listings/", put(echo))
        .route("/categories/", put(accept_empty))
        .route("/installs/:listing/:version", post(install))
        .route("/listings", get(listings))
        .route("/agent", get(user_agent))
        .route("/object", get(not_an_array))
        .route("/broken", get(broken).put(broken))
        .route("/slow", get(slow));

    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let base_url = format!("http://{addr}");

    let server_handle = tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    Ok((base_url, server_handle))
}

fn transport(base_url: &str) -> HttpTransport {
    HttpTransport::new(&ClientConfig::new(base_url)).unwrap()
}

#[tokio::test]
async fn test_create_returns_confirmation_body() {
    let (base_url, server) = start_test_server().await.unwrap();
    let transport = transport(&base_url);

    let payload = json!({ "id": "l1", "title": "Sample" });
    let confirmed = transport
        .create(WriteMethod::Put, "/listings/", &payload)
        .await
        .unwrap();

    assert_eq!(confirmed, payload);
    server.abort();
}

#[tokio::test]
async fn test_create_without_body_yields_null() {
    let (base_url, server) = start_test_server().await.unwrap();
    let transport = transport(&base_url);

    let confirmed = transport
        .create(WriteMethod::Put, "/categories/", &json!({ "id": "c1" }))
        .await
        .unwrap();

    assert_eq!(confirmed, Value::Null);
    server.abort();
}

#[tokio::test]
async fn test_create_with_post() {
    let (base_url, server) = start_test_server().await.unwrap();
    let transport = transport(&base_url);

    let confirmed = transport
        .create(WriteMethod::Post, "/installs/l1/0", &json!({}))
        .await
        .unwrap();

    assert_eq!(confirmed["listing_id"], "l1");
    assert_eq!(confirmed["version"], "0");
    server.abort();
}

#[tokio::test]
async fn test_non_success_status_is_error() {
    let (base_url, server) = start_test_server().await.unwrap();
    let transport = transport(&base_url);

    let err = transport
        .create(WriteMethod::Put, "/broken", &json!({}))
        .await
        .unwrap_err();
    assert!(matches!(err, TransportError::Status { status: 500, .. }));
    assert_eq!(err.path(), Some("/broken"));

    let err = transport.read("/broken").await.unwrap_err();
    assert!(matches!(err, TransportError::Status { status: 500, .. }));
    server.abort();
}

#[tokio::test]
async fn test_read_list() {
    let (base_url, server) = start_test_server().await.unwrap();
    let transport = transport(&base_url);

    let items = transport.read("/listings").await.unwrap();
    let ids: Vec<_> = items.iter().map(|v| v["id"].as_str().unwrap()).collect();
    assert_eq!(ids, vec!["a", "b"]);
    server.abort();
}

#[tokio::test]
async fn test_read_rejects_non_array() {
    let (base_url, server) = start_test_server().await.unwrap();
    let transport = transport(&base_url);

    let err = transport.read("/object").await.unwrap_err();
    assert!(matches!(err, TransportError::Decode { .. }));
    server.abort();
}

#[tokio::test]
async fn test_user_agent_header() {
    let (base_url, server) = start_test_server().await.unwrap();
    let transport = transport(&base_url);

    let items = transport.read("/agent").await.unwrap();
    assert_eq!(items[0]["id"], marketplace_client::USER_AGENT);
    server.abort();
}

#[tokio::test]
async fn test_timeout_fails_request() {
    let (base_url, server) = start_test_server().await.unwrap();
    let transport = HttpTransport::new(
        &ClientConfig::new(&base_url).with_timeout(Duration::from_millis(50)),
    )
    .unwrap();

    let err = transport.read("/slow").await.unwrap_err();
    assert!(matches!(err, TransportError::Request { .. }));
    server.abort();
}

#[tokio::test]
async fn test_connection_refused() {
    // Bind then drop to get a port nothing listens on
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let transport = transport(&format!("http://{addr}"));
    let err = transport.read("/listings").await.unwrap_err();
    assert!(matches!(err, TransportError::Request { .. }));
}
