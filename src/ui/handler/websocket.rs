//! WebSocket connection handler: the transport boundary of the relay.
//!
//! Owns the per-connection channel pair and the session lifecycle. The chat
//! core only ever sees raw inbound text and an [`Outbox`]; everything
//! socket-shaped stays in this module.

use std::sync::Arc;

use axum::{
    extract::{
        Path, State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    http::StatusCode,
    response::IntoResponse,
};
use futures_util::{sink::SinkExt, stream::StreamExt};
use tokio::sync::mpsc;

use crate::{
    domain::{Outbox, RoomName},
    ui::state::AppState,
    usecase::ChatSession,
};

/// Upgrade `GET /chat/{room}` to a WebSocket bound to that room.
pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
    Path(room): Path<String>,
) -> Result<impl IntoResponse, StatusCode> {
    let room_name = match RoomName::try_from(room) {
        Ok(name) => name,
        Err(err) => {
            tracing::warn!("rejecting connection, invalid room name: {err}");
            return Err(StatusCode::BAD_REQUEST);
        }
    };
    Ok(ws.on_upgrade(move |socket| handle_socket(socket, state, room_name)))
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>, room_name: RoomName) {
    let (mut sender, mut receiver) = socket.split();
    let (tx, mut rx) = mpsc::unbounded_channel::<String>();

    let room = state.registry.get(&room_name).await;
    let mut session = ChatSession::new(room, Outbox::new(tx), state.jokes.clone());
    tracing::info!("connection opened in room '{room_name}'");

    // Forward queued outbound payloads into the socket.
    let send_task = tokio::spawn(async move {
        while let Some(payload) = rx.recv().await {
            if sender.send(Message::Text(payload.into())).await.is_err() {
                break;
            }
        }
    });

    // Inbound messages from one connection are dispatched in order, one at a
    // time, until the client closes or the socket dies.
    while let Some(msg) = receiver.next().await {
        let msg = match msg {
            Ok(msg) => msg,
            Err(err) => {
                tracing::debug!("websocket error in room '{room_name}': {err}");
                break;
            }
        };

        match msg {
            Message::Text(text) => {
                if let Err(err) = session.handle_message(&text).await {
                    // The connection stays open; a bad message costs the
                    // sender nothing but a log line.
                    tracing::warn!("dispatch error in room '{room_name}': {err}");
                }
            }
            Message::Close(_) => {
                tracing::info!("client requested close in room '{room_name}'");
                break;
            }
            // Ping/pong is handled by the protocol layer.
            _ => {}
        }
    }

    // Runs exactly once, whether the client said goodbye or just vanished.
    session.handle_close().await;
    send_task.abort();
    tracing::info!("connection closed in room '{room_name}'");
}
