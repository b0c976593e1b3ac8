//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::time::Duration;

use axum_test::TestServer;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use uppercase_service::config::ServiceConfig;
use uppercase_service::{HttpServer, Shutdown};

/// In-process test server over the full router and middleware stack.
#[allow(dead_code)]
pub fn test_server(config: ServiceConfig) -> TestServer {
    let router = HttpServer::new(config).router();
    TestServer::new(router).expect("Failed to create test server")
}

/// A server listening on a real socket.
#[allow(dead_code)]
pub struct RunningServer {
    pub addr: SocketAddr,
    pub shutdown: Shutdown,
    pub handle: JoinHandle<Result<(), std::io::Error>>,
}

#[allow(dead_code)]
impl RunningServer {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

/// Bind an ephemeral port and run the server on it in the background.
#[allow(dead_code)]
pub async fn spawn_server(mut config: ServiceConfig) -> RunningServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    config.listener.bind_address = addr.to_string();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let server = HttpServer::new(config);

    let handle = tokio::spawn(async move { server.run(listener, server_shutdown).await });

    // Give the accept loop a moment to start.
    tokio::time::sleep(Duration::from_millis(50)).await;

    RunningServer { addr, shutdown, handle }
}
