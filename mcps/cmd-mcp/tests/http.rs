//! HTTP transport tests against a server bound to an ephemeral port

use std::net::SocketAddr;
use std::sync::Arc;

use cmd_mcp::http::{router, ErrorResponse};
use cmd_mcp::types::ErrorKind;
use cmd_mcp::{CommandEngine, CommandResult, Config};
use serde_json::json;
use tokio::sync::RwLock;

async fn spawn_server() -> SocketAddr {
    let engine = CommandEngine::new(&Config::default()).unwrap();
    let app = router(Arc::new(RwLock::new(engine)));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

fn url(addr: SocketAddr) -> String {
    format!("http://{}/", addr)
}

#[tokio::test]
async fn execute_request() {
    let addr = spawn_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(url(addr))
        .json(&json!({ "type": "execute", "command": "echo Hello from HTTP" }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 200);
    let body: CommandResult = resp.json().await.unwrap();
    assert!(body.stdout.contains("Hello from HTTP"));
    assert_eq!(body.status, 0);
}

#[tokio::test]
async fn cd_request_changes_directory() {
    let addr = spawn_server().await;
    let client = reqwest::Client::new();
    let parent = std::env::current_dir()
        .unwrap()
        .parent()
        .unwrap()
        .display()
        .to_string();

    let resp = client
        .post(url(addr))
        .json(&json!({ "type": "cd", "command": ".." }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 200);
    let body: CommandResult = resp.json().await.unwrap();
    assert_eq!(body.stdout, format!("Changed directory to {}", parent));
    assert_eq!(body.stderr, "");
}

#[tokio::test]
async fn validation_error_is_bad_request() {
    let addr = spawn_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(url(addr))
        .json(&json!({ "type": "execute", "command": "del something.txt" }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 400);
    let body: ErrorResponse = resp.json().await.unwrap();
    assert_eq!(body.kind, ErrorKind::Validation);
    assert!(body.error.contains("restricted"));
}

#[tokio::test]
async fn execution_error_is_server_error() {
    let addr = spawn_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(url(addr))
        .json(&json!({ "type": "execute", "command": "invalid_command_xyz_123" }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 500);
    let body: ErrorResponse = resp.json().await.unwrap();
    assert_eq!(body.kind, ErrorKind::Execution);
}

#[tokio::test]
async fn unknown_type_rejected() {
    let addr = spawn_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(url(addr))
        .json(&json!({ "type": "reboot", "command": "now" }))
        .send()
        .await
        .unwrap();

    assert!(resp.status().is_client_error());
}

#[tokio::test]
async fn get_not_allowed() {
    let addr = spawn_server().await;

    let resp = reqwest::get(url(addr)).await.unwrap();
    assert_eq!(resp.status(), 405);
}

#[tokio::test]
async fn preflight_allows_any_origin() {
    let addr = spawn_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .request(reqwest::Method::OPTIONS, url(addr))
        .header("Origin", "http://example.com")
        .header("Access-Control-Request-Method", "POST")
        .header("Access-Control-Request-Headers", "content-type")
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers()
            .get("access-control-allow-origin")
            .unwrap()
            .to_str()
            .unwrap(),
        "*"
    );
}
