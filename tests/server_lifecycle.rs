//! End-to-end tests over a real socket.

use std::time::Duration;

use serde_json::{json, Value};
use uppercase_service::config::ServiceConfig;

mod common;

#[tokio::test]
async fn test_serves_requests_over_tcp() {
    let server = common::spawn_server(ServiceConfig::default()).await;
    let client = reqwest::Client::builder().no_proxy().build().unwrap();

    let res = client.get(server.url("/health")).send().await.expect("Server unreachable");
    assert_eq!(res.status(), 200);
    assert_eq!(
        res.headers()["content-type"].to_str().unwrap(),
        "application/json"
    );

    let res = client
        .post(server.url("/api/uppercase"))
        .json(&json!({"text": "over the wire"}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["result"], "OVER THE WIRE");

    let part = reqwest::multipart::Part::bytes(b"line one\nline two".to_vec())
        .file_name("lines.txt")
        .mime_str("text/plain")
        .unwrap();
    let res = client
        .post(server.url("/api/uppercase-file"))
        .multipart(reqwest::multipart::Form::new().part("file", part))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["result"], "LINE ONE\nLINE TWO");
    assert_eq!(body["fileName"], "lines.txt");

    server.shutdown.trigger();
}

#[tokio::test]
async fn test_graceful_shutdown() {
    let server = common::spawn_server(ServiceConfig::default()).await;
    let client = reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap();

    let res = client.get(server.url("/health")).send().await.unwrap();
    assert_eq!(res.status(), 200);

    server.shutdown.trigger();

    let result = tokio::time::timeout(Duration::from_secs(5), server.handle)
        .await
        .expect("Server did not stop in time")
        .expect("Server task panicked");
    assert!(result.is_ok());

    let after = client.get(format!("http://{}/health", server.addr)).send().await;
    assert!(after.is_err(), "Server should refuse connections after shutdown");
}
