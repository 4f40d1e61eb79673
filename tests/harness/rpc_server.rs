//! One-shot JSON-RPC node stand-in on a local port.

use std::sync::Arc;

use parking_lot::Mutex;
use serde_json::Value;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

/// Answers every request with a fixed status and JSON body and remembers
/// the path and method of each request.
pub struct RpcServer {
    pub url: String,
    requests: Arc<Mutex<Vec<(String, String)>>>,
}

impl RpcServer {
    pub async fn start(status: u16, body: Value) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}", listener.local_addr().unwrap());
        let requests = Arc::new(Mutex::new(Vec::new()));
        let seen = Arc::clone(&requests);
        let body = body.to_string();

        tokio::spawn(async move {
            loop {
                let Ok((socket, _)) = listener.accept().await else {
                    return;
                };
                let seen = Arc::clone(&seen);
                let body = body.clone();
                tokio::spawn(async move { serve(socket, status, &body, &seen).await });
            }
        });

        Self { url, requests }
    }

    /// `(path, rpc method)` of every request received so far.
    pub fn requests(&self) -> Vec<(String, String)> {
        self.requests.lock().clone()
    }
}

async fn serve(
    mut socket: TcpStream,
    status: u16,
    body: &str,
    seen: &Mutex<Vec<(String, String)>>,
) {
    let mut raw = Vec::new();
    let mut buf = [0u8; 1024];
    let header_end = loop {
        let n = socket.read(&mut buf).await.unwrap();
        if n == 0 {
            return;
        }
        raw.extend_from_slice(&buf[..n]);
        if let Some(pos) = raw.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let head = String::from_utf8_lossy(&raw[..header_end]).to_string();
    let content_length = head
        .lines()
        .find_map(|line| {
            let (name, value) = line.split_once(':')?;
            name.eq_ignore_ascii_case("content-length")
                .then(|| value.trim().parse::<usize>().ok())
                .flatten()
        })
        .unwrap_or(0);
    while raw.len() < header_end + content_length {
        let n = socket.read(&mut buf).await.unwrap();
        if n == 0 {
            break;
        }
        raw.extend_from_slice(&buf[..n]);
    }

    let path = head
        .split_whitespace()
        .nth(1)
        .unwrap_or_default()
        .to_string();
    let request: Value = serde_json::from_slice(&raw[header_end..]).unwrap_or(Value::Null);
    let method = request["method"].as_str().unwrap_or_default().to_string();
    seen.lock().push((path, method));

    let response = format!(
        "HTTP/1.1 {status} Status\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );
    socket.write_all(response.as_bytes()).await.unwrap();
    socket.shutdown().await.ok();
}
