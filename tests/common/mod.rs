//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use host_redirect::config::{RefreshPolicy, ServiceConfig};
use host_redirect::lifecycle::Shutdown;
use host_redirect::{RedirectServer, TableSource};

/// A scratch redirect store path, unique per test tag. The file is not created.
#[allow(dead_code)]
pub fn scratch_store(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "host-redirect-it-{}-{}",
        std::process::id(),
        tag
    ));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("redirects.json");
    let _ = std::fs::remove_file(&path);
    path
}

/// Start the redirect server on `addr` and wait until it accepts connections.
#[allow(dead_code)]
pub async fn start_redirect_server(
    addr: SocketAddr,
    store: PathBuf,
    refresh: RefreshPolicy,
) -> (Shutdown, tokio::task::JoinHandle<()>) {
    let mut config = ServiceConfig::default();
    config.listener.bind_address = addr.to_string();
    config.table.path = store.clone();
    config.table.refresh = refresh;

    let source = TableSource::new(store, refresh);
    let server = RedirectServer::new(&config, source);
    let listener = TcpListener::bind(addr).await.unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let handle = tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    tokio::time::sleep(Duration::from_millis(100)).await;
    (shutdown, handle)
}

/// An HTTP client that reports redirects instead of following them.
#[allow(dead_code)]
pub fn no_redirect_client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}

/// Start a backend that answers every request with `status` after `delay`.
#[allow(dead_code)]
pub async fn start_status_backend(addr: SocketAddr, status: u16, delay: Duration) {
    let listener = TcpListener::bind(addr).await.unwrap();

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    tokio::spawn(async move {
                        let mut buf = [0u8; 1024];
                        let _ = socket.read(&mut buf).await;
                        tokio::time::sleep(delay).await;

                        let status_text = match status {
                            200 => "200 OK",
                            404 => "404 Not Found",
                            503 => "503 Service Unavailable",
                            _ => "500 Internal Server Error",
                        };
                        let response_str = format!(
                            "HTTP/1.1 {}\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
                            status_text
                        );
                        let _ = socket.write_all(response_str.as_bytes()).await;
                        let _ = socket.shutdown().await;
                    });
                }
                Err(_) => break,
            }
        }
    });
}
