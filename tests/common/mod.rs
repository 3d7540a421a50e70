#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use salon::api::SalonClient;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

/// Canned HTTP/1.1 responder for the public salon endpoints.
pub struct StubApi {
    pub base_url: String,
    hits: Arc<Mutex<Vec<String>>>,
}

impl StubApi {
    pub async fn start(routes: &[(&str, u16, &str)]) -> Self {
        let listener = TcpListener::bind(("127.0.0.1", 0))
            .await
            .expect("bind stub listener");
        let addr = listener.local_addr().expect("stub address");

        let routes = routes
            .iter()
            .map(|(path, status, body)| (path.to_string(), (*status, body.to_string())))
            .collect::<HashMap<_, _>>();
        let routes = Arc::new(routes);
        let hits = Arc::new(Mutex::new(Vec::new()));

        let server_hits = Arc::clone(&hits);
        tokio::spawn(async move {
            while let Ok((stream, _)) = listener.accept().await {
                let routes = Arc::clone(&routes);
                let hits = Arc::clone(&server_hits);
                tokio::spawn(async move {
                    let _ = respond(stream, &routes, &hits).await;
                });
            }
        });

        Self {
            base_url: format!("http://{addr}"),
            hits,
        }
    }

    pub fn hits(&self) -> Vec<String> {
        self.hits.lock().expect("hits lock").clone()
    }
}

/// Talks to the stub directly, whatever proxy the environment sets.
pub fn client(base_url: &str) -> SalonClient {
    let http = reqwest::Client::builder()
        .no_proxy()
        .build()
        .expect("http client");
    SalonClient::with_http(http, base_url).expect("salon client")
}

/// A base url nothing listens on.
pub async fn closed_base_url() -> String {
    let listener = TcpListener::bind(("127.0.0.1", 0))
        .await
        .expect("bind probe listener");
    let addr = listener.local_addr().expect("probe address");
    drop(listener);
    format!("http://{addr}")
}

async fn respond(
    mut stream: TcpStream,
    routes: &HashMap<String, (u16, String)>,
    hits: &Mutex<Vec<String>>,
) -> std::io::Result<()> {
    let mut buf = vec![0_u8; 8192];
    let size = stream.read(&mut buf).await?;
    let request = String::from_utf8_lossy(&buf[..size]);
    let target = request
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .unwrap_or("/")
        .to_string();

    hits.lock().expect("hits lock").push(target.clone());

    let (status, body) = routes
        .get(&target)
        .cloned()
        .unwrap_or_else(|| (404, r#"{"ok":false,"error":"not found"}"#.to_string()));

    let response = format!(
        "HTTP/1.1 {status} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        reason(status),
        body.len()
    );

    stream.write_all(response.as_bytes()).await?;
    stream.shutdown().await?;
    Ok(())
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        404 => "Not Found",
        500 => "Internal Server Error",
        503 => "Service Unavailable",
        _ => "Status",
    }
}
