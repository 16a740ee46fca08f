#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use filegate::config::Config;
use filegate::http::connection::Connection;
use tempfile::TempDir;
use tokio::io::{AsyncReadExt, AsyncWriteExt, DuplexStream};

pub const TEST_TIMEOUT: Duration = Duration::from_millis(200);

pub fn test_config(root: &TempDir) -> Config {
    Config {
        document_root: root.path().to_path_buf(),
        body_timeout: TEST_TIMEOUT,
        server_name: "filegate-test".to_string(),
        ..Config::default()
    }
}

/// A parsed raw response: status line, header lines, body bytes.
pub struct RawResponse {
    pub status_line: String,
    pub headers: Vec<String>,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn parse(raw: &[u8]) -> Self {
        let split = raw
            .windows(4)
            .position(|w| w == b"\r\n\r\n")
            .expect("no header terminator in response");
        let head = std::str::from_utf8(&raw[..split]).unwrap();
        let mut lines = head.split("\r\n");

        Self {
            status_line: lines.next().unwrap().to_string(),
            headers: lines.map(|l| l.to_string()).collect(),
            body: raw[split + 4..].to_vec(),
        }
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.iter().find_map(|line| {
            let (k, v) = line.split_once(": ")?;
            k.eq_ignore_ascii_case(name).then_some(v)
        })
    }
}

fn spawn_connection(cfg: Config) -> (DuplexStream, tokio::task::JoinHandle<anyhow::Result<()>>) {
    let (client, server) = tokio::io::duplex(1 << 16);
    let task = tokio::spawn(Connection::new(server, Arc::new(cfg)).run());
    (client, task)
}

/// Sends `request`, closes the client's write side and collects everything the server sent.
pub async fn exchange(cfg: Config, request: &[u8]) -> Vec<u8> {
    let (mut client, task) = spawn_connection(cfg);

    client.write_all(request).await.unwrap();
    client.shutdown().await.unwrap();

    let mut out = Vec::new();
    client.read_to_end(&mut out).await.unwrap();
    task.await.unwrap().unwrap();
    out
}

/// Like [`exchange`] but keeps the client's write side open, so the server
/// has to rely on the idle timeout to finish reading a body.
pub async fn exchange_idle(cfg: Config, request: &[u8]) -> Vec<u8> {
    let (mut client, task) = spawn_connection(cfg);

    client.write_all(request).await.unwrap();

    let mut out = Vec::new();
    client.read_to_end(&mut out).await.unwrap();
    task.await.unwrap().unwrap();
    out
}

/// Runs a connection whose handling is expected to fail without a response.
pub async fn exchange_dropped(cfg: Config, request: &[u8]) -> (Vec<u8>, anyhow::Result<()>) {
    let (mut client, task) = spawn_connection(cfg);

    client.write_all(request).await.unwrap();
    client.shutdown().await.unwrap();

    let result = task.await.unwrap();
    let mut out = Vec::new();
    client.read_to_end(&mut out).await.unwrap();
    (out, result)
}

pub async fn request(cfg: Config, request: &str) -> RawResponse {
    RawResponse::parse(&exchange(cfg, request.as_bytes()).await)
}
