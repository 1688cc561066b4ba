//! Shared integration test fixtures: a real server plus WebSocket helpers.

// Each test binary uses its own subset of these helpers.
#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use futures_util::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async};

use banter::ServerConfig;
use banter::domain::{JokeError, JokeFetcher};
use banter::ui::state::AppState;

/// Joke text the test fetcher always returns.
pub const CANNED_JOKE: &str = "What do you call a fish with no eyes? A fsh.";

const RECV_TIMEOUT: Duration = Duration::from_secs(5);

/// Deterministic joke fetcher so tests never touch the network.
pub struct CannedJokeFetcher;

#[async_trait]
impl JokeFetcher for CannedJokeFetcher {
    async fn fetch_joke(&self) -> Result<String, JokeError> {
        Ok(CANNED_JOKE.to_string())
    }
}

/// A relay server running in-process on a fixed port.
pub struct TestServer {
    port: u16,
}

impl TestServer {
    pub async fn start(port: u16) -> Self {
        let state = Arc::new(AppState::new(Arc::new(CannedJokeFetcher)));
        let config = ServerConfig {
            host: "127.0.0.1".to_string(),
            port,
            log_level: "debug".to_string(),
        };
        tokio::spawn(async move {
            if let Err(e) = banter::ui::run_with_state(&config, state).await {
                panic!("test server failed to run: {e}");
            }
        });
        wait_until_ready(port).await;
        Self { port }
    }

    pub fn base_url(&self) -> String {
        format!("http://127.0.0.1:{}", self.port)
    }

    pub fn ws_url(&self, room: &str) -> String {
        format!("ws://127.0.0.1:{}/chat/{}", self.port, room)
    }
}

async fn wait_until_ready(port: u16) {
    for _ in 0..50 {
        if TcpStream::connect(("127.0.0.1", port)).await.is_ok() {
            return;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    panic!("test server on port {port} never became ready");
}

pub type WsClient = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// Open a WebSocket into the given room.
pub async fn connect(server: &TestServer, room: &str) -> WsClient {
    let (ws, _) = connect_async(server.ws_url(room))
        .await
        .expect("websocket connect failed");
    ws
}

/// Connect and join in one step, consuming the sender's own join note.
pub async fn join(server: &TestServer, room: &str, name: &str) -> WsClient {
    let mut ws = connect(server, room).await;
    send_text(&mut ws, &format!(r#"{{"type": "join", "name": "{name}"}}"#)).await;
    recv_json(&mut ws).await;
    ws
}

pub async fn send_text(ws: &mut WsClient, payload: &str) {
    ws.send(Message::text(payload))
        .await
        .expect("websocket send failed");
}

/// Receive the next text frame as JSON, skipping control frames.
pub async fn recv_json(ws: &mut WsClient) -> serde_json::Value {
    loop {
        let msg = tokio::time::timeout(RECV_TIMEOUT, ws.next())
            .await
            .expect("no websocket message within timeout")
            .expect("websocket stream ended")
            .expect("websocket read failed");
        if let Message::Text(text) = msg {
            return serde_json::from_str(&text).expect("server sent invalid JSON");
        }
    }
}
